//! Field directives.
//!
//! A field's raw directive string is a comma-separated list drawn from
//! `optional` and `enum=<group>`:
//!
//! ```
//! use lcs_reflect::codec::{Directive, DirectiveSet};
//!
//! let set = DirectiveSet::parse("optional, enum=txn_arg").unwrap();
//! assert!(set.contains(Directive::OPTIONAL));
//! assert_eq!(set.group(), Some("txn_arg"));
//!
//! assert!(DirectiveSet::parse("").unwrap().is_empty());
//! assert!(DirectiveSet::parse("enum=").is_err());
//! ```

use bitflags::bitflags;

bitflags! {
    /// The directives a field may carry.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Directive: u8 {
        /// The field is an `Option`; a presence byte precedes the value.
        const OPTIONAL = 1 << 0;
        /// The field is a `Variant` of the named group.
        const ENUM = 1 << 1;
    }
}

/// A tag string the parser rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    #[error("unknown directive `{0}`")]
    Unknown(&'static str),
    #[error("empty directive in `{0}`")]
    Empty(&'static str),
    #[error("`enum=` needs a group name")]
    EmptyGroup,
    #[error("directive `{0}` is repeated")]
    Repeated(&'static str),
}

/// A parsed directive string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectiveSet {
    flags: Directive,
    group: Option<&'static str>,
}

impl DirectiveSet {
    /// The set of a field without directives.
    pub const EMPTY: Self = Self {
        flags: Directive::empty(),
        group: None,
    };

    /// Parses a raw directive string.
    ///
    /// Whitespace around each directive is ignored, and a blank string is
    /// the empty set. A group name is taken verbatim up to the next comma.
    pub fn parse(raw: &'static str) -> Result<Self, TagError> {
        let mut set = Self::EMPTY;
        if raw.trim().is_empty() {
            return Ok(set);
        }

        for directive in raw.split(',').map(str::trim) {
            if directive.is_empty() {
                return Err(TagError::Empty(raw));
            }

            if directive == "optional" {
                set.insert(Directive::OPTIONAL, "optional")?;
            } else if let Some(group) = directive.strip_prefix("enum=") {
                if group.is_empty() {
                    return Err(TagError::EmptyGroup);
                }
                set.insert(Directive::ENUM, "enum")?;
                set.group = Some(group);
            } else {
                return Err(TagError::Unknown(directive));
            }
        }

        Ok(set)
    }

    fn insert(&mut self, flag: Directive, name: &'static str) -> Result<(), TagError> {
        if self.flags.contains(flag) {
            return Err(TagError::Repeated(name));
        }
        self.flags.insert(flag);
        Ok(())
    }

    /// Returns the directive flags.
    #[inline]
    pub const fn flags(&self) -> Directive {
        self.flags
    }

    #[inline]
    pub const fn contains(&self, flag: Directive) -> bool {
        self.flags.contains(flag)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Returns the group named by `enum=`.
    #[inline]
    pub const fn group(&self) -> Option<&'static str> {
        self.group
    }
}

#[cfg(test)]
mod tests {
    use super::{Directive, DirectiveSet, TagError};

    #[test]
    fn parse_each_directive() {
        let set = DirectiveSet::parse("optional").unwrap();
        assert_eq!(set.flags(), Directive::OPTIONAL);
        assert_eq!(set.group(), None);

        let set = DirectiveSet::parse("enum=txn_arg").unwrap();
        assert_eq!(set.flags(), Directive::ENUM);
        assert_eq!(set.group(), Some("txn_arg"));
    }

    #[test]
    fn whitespace_around_directives() {
        let set = DirectiveSet::parse(" enum=g ,\toptional").unwrap();
        assert_eq!(set.flags(), Directive::OPTIONAL | Directive::ENUM);
        assert_eq!(set.group(), Some("g"));

        assert_eq!(DirectiveSet::parse("   ").unwrap(), DirectiveSet::EMPTY);

        let err = DirectiveSet::parse("enum = g").unwrap_err();
        assert_eq!(err, TagError::Unknown("enum = g"));

        // Only the whole directive is trimmed.
        let set = DirectiveSet::parse("enum= g").unwrap();
        assert_eq!(set.group(), Some(" g"));
        assert_eq!(DirectiveSet::parse("enum= "), Err(TagError::EmptyGroup));
    }

    #[test]
    fn malformed_tags() {
        assert_eq!(DirectiveSet::parse("enum="), Err(TagError::EmptyGroup));
        assert_eq!(DirectiveSet::parse("enum"), Err(TagError::Unknown("enum")));
        assert_eq!(DirectiveSet::parse("Optional"), Err(TagError::Unknown("Optional")));
        assert_eq!(DirectiveSet::parse("optional,"), Err(TagError::Empty("optional,")));
        assert_eq!(
            DirectiveSet::parse("optional,optional"),
            Err(TagError::Repeated("optional"))
        );
        assert_eq!(
            DirectiveSet::parse("enum=a,enum=b"),
            Err(TagError::Repeated("enum"))
        );
    }
}
