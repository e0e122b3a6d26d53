use syn::{Generics, Ident};

use crate::derive_data::TypeAttributes;

/// Type-level information shared by every generated impl.
pub(crate) struct ReflectMeta<'a> {
    type_ident: &'a Ident,
    generics: &'a Generics,
    attrs: TypeAttributes,
    lcs_reflect_path: syn::Path,
}

impl<'a> ReflectMeta<'a> {
    pub fn new(type_ident: &'a Ident, generics: &'a Generics, attrs: TypeAttributes) -> Self {
        Self {
            type_ident,
            generics,
            attrs,
            lcs_reflect_path: crate::path::lcs_reflect(),
        }
    }

    #[inline]
    pub fn type_ident(&self) -> &Ident {
        self.type_ident
    }

    #[inline]
    pub fn generics(&self) -> &Generics {
        self.generics
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn lcs_reflect_path(&self) -> &syn::Path {
        &self.lcs_reflect_path
    }

    /// Whether the type has type parameters, which need a generic info cell.
    #[inline]
    pub fn is_generic(&self) -> bool {
        self.generics.type_params().next().is_some()
    }
}
