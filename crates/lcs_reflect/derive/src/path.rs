//! Paths into `lcs_reflect` used by the generated code.

use proc_macro2::TokenStream;
use quote::quote;

/// Get the access path to the `lcs_reflect` crate.
///
/// 1. For crates that depend on `lcs_reflect`, `::lcs_reflect` is returned.
/// 2. For crates that depend on `lcs`, `::lcs::reflect` is returned.
/// 3. Otherwise `::lcs_reflect` is returned, which may be incorrect.
///
/// Reads the builder's `Cargo.toml`, so callers fetch it once and pass it on.
pub(crate) fn lcs_reflect() -> syn::Path {
    lcs_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("lcs_reflect"))
}

#[inline(always)]
pub(crate) fn reflect_(lcs_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #lcs_reflect_path::Reflect
    }
}

#[inline(always)]
pub(crate) fn typed_(lcs_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #lcs_reflect_path::info::Typed
    }
}

#[inline(always)]
pub(crate) fn type_info_(lcs_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #lcs_reflect_path::info::TypeInfo
    }
}

#[inline(always)]
pub(crate) fn struct_info_(lcs_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #lcs_reflect_path::info::StructInfo
    }
}

#[inline(always)]
pub(crate) fn named_field_(lcs_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #lcs_reflect_path::info::NamedField
    }
}

#[inline(always)]
pub(crate) fn hidden_field_(lcs_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #lcs_reflect_path::info::HiddenField
    }
}

#[inline(always)]
pub(crate) fn reflect_kind_(lcs_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #lcs_reflect_path::info::ReflectKind
    }
}

#[inline(always)]
pub(crate) fn reflect_ref_(lcs_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #lcs_reflect_path::ops::ReflectRef
    }
}

#[inline(always)]
pub(crate) fn reflect_mut_(lcs_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #lcs_reflect_path::ops::ReflectMut
    }
}

#[inline(always)]
pub(crate) fn struct_(lcs_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #lcs_reflect_path::ops::Struct
    }
}

#[inline(always)]
pub(crate) fn enum_types_(lcs_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #lcs_reflect_path::registry::EnumTypes
    }
}

#[inline(always)]
pub(crate) fn non_generic_type_info_cell_(lcs_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #lcs_reflect_path::impls::NonGenericTypeInfoCell
    }
}

#[inline(always)]
pub(crate) fn generic_type_info_cell_(lcs_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #lcs_reflect_path::impls::GenericTypeInfoCell
    }
}
