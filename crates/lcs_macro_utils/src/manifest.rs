use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// Locate the [`syn::Path`] of an `lcs` crate as seen from the
/// Cargo.toml of the crate invoking a derive.
///
/// ```rust
/// # use lcs_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("lcs_reflect"));
/// ```
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If the requested crate name begins with `lcs_` and the caller depends
///    on the facade crate `lcs`, return `::lcs::short_name`
///    (e.g. `lcs_reflect` -> `::lcs::reflect`).
/// 3. Repeat steps 1-2 in `dev-dependencies`.
/// 4. Otherwise fall back to `::crate_name`.
///
/// A crate that derives on its own types (like `lcs_reflect` in its unit
/// tests) resolves through rule 4 and needs `extern crate self as lcs_reflect;`.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const FACADE_NAME: &str = "lcs";
const CRATE_PREFIX: &str = "lcs_";

impl Manifest {
    #[inline(never)]
    fn get_manifest_path() -> PathBuf {
        env::var_os("CARGO_MANIFEST_DIR")
            .map(|path| {
                let mut path = PathBuf::from(path);
                path.push("Cargo.toml");
                assert!(
                    path.exists(),
                    "Cargo manifest does not exist at path {}",
                    path.display(),
                );
                path
            })
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.")
    }

    #[inline(never)]
    fn get_manifest_modified_time(
        cargo_manifest_path: &Path,
    ) -> Result<SystemTime, std::io::Error> {
        std::fs::metadata(cargo_manifest_path).and_then(|metadata| metadata.modified())
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Document<Box<str>> {
        let manifest = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()))
            .into_boxed_str();
        Document::parse(manifest)
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    #[inline]
    fn parse_str<T: syn::parse::Parse>(path: &str) -> T {
        syn::parse_str(path).unwrap()
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::parse_str(&format!("::{name}")));
        }
        let module = name.strip_prefix(CRATE_PREFIX)?;
        if deps.contains_key(FACADE_NAME) {
            let mut path = Self::parse_str::<syn::Path>(&format!("::{FACADE_NAME}"));
            path.segments.push(Self::parse_str(module));
            return Some(path);
        }
        None
    }

    /// Return the [`syn::Path`] of the package `name`, following the
    /// resolution rules above.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        for table in ["dependencies", "dev-dependencies"] {
            if let Some(Item::Table(deps)) = self.manifest.get(table)
                && let Some(val) = Self::find_in_deps(deps, name)
            {
                return val;
            }
        }

        Self::parse_str(&format!("::{name}"))
    }

    /// Run `func` against the caller's parsed `Cargo.toml`.
    ///
    /// Manifests are cached per path and re-read when the file's
    /// modification time changes.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let manifest_path = Self::get_manifest_path();
        let modified_time = Self::get_manifest_modified_time(&manifest_path)
            .expect("The Cargo.toml should have a modified time.");

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }

        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::Manifest;
    use toml_edit::{Document, Item};

    fn lookup(toml: &str, name: &str) -> String {
        let manifest = Manifest {
            manifest: Document::parse(toml.to_owned().into_boxed_str()).unwrap(),
            modified_time: std::time::SystemTime::UNIX_EPOCH,
        };
        let path = manifest.get_crate_path(name);
        let segments: Vec<String> = path.segments.iter().map(|s| s.ident.to_string()).collect();
        segments.join("::")
    }

    #[test]
    fn resolves_direct_dependency() {
        let toml = "[dependencies]\nlcs_reflect = \"0.1\"\nlcs = \"0.1\"\n";
        assert_eq!(lookup(toml, "lcs_reflect"), "lcs_reflect");
    }

    #[test]
    fn resolves_through_facade() {
        let toml = "[dev-dependencies]\nlcs = \"0.1\"\n";
        assert_eq!(lookup(toml, "lcs_reflect"), "lcs::reflect");
    }

    #[test]
    fn falls_back_to_absolute_path() {
        let toml = "[package]\nname = \"demo\"\n";
        assert!(matches!(
            Document::parse(toml.to_owned().into_boxed_str()).unwrap().get("dependencies"),
            None | Some(Item::None)
        ));
        assert_eq!(lookup(toml, "lcs_reflect"), "lcs_reflect");
    }
}
