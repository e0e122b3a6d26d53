use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generate implementation code for `Reflect`.
///
/// `kind` names the shape, used for `ReflectKind`, `ReflectRef`
/// and `ReflectMut` alike.
pub(crate) fn impl_trait_reflect(info: &ReflectStruct, kind: TokenStream) -> TokenStream {
    let meta = info.meta();
    let lcs_reflect_path = meta.lcs_reflect_path();
    let reflect_ = crate::path::reflect_(lcs_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(lcs_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(lcs_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(lcs_reflect_path);

    let type_ident = meta.type_ident();
    let (impl_generics, ty_generics, where_clause) = info.split_generics();

    quote! {
        impl #impl_generics #reflect_ for #type_ident #ty_generics #where_clause {
            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::#kind
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::#kind(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::#kind(self)
            }
        }
    }
}
