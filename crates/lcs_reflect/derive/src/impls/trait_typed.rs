use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generate implementation code for `Typed`.
///
/// `type_info_tokens` is an expression building the `TypeInfo`; it runs
/// once per concrete type.
pub(crate) fn impl_trait_typed(info: &ReflectStruct, type_info_tokens: TokenStream) -> TokenStream {
    let meta = info.meta();
    let lcs_reflect_path = meta.lcs_reflect_path();
    let typed_ = crate::path::typed_(lcs_reflect_path);
    let type_info_ = crate::path::type_info_(lcs_reflect_path);

    let inner_cell_tokens = if meta.is_generic() {
        let info_cell = crate::path::generic_type_info_cell_(lcs_reflect_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_insert::<Self>(|| {
                #type_info_tokens
            })
        }
    } else {
        let info_cell = crate::path::non_generic_type_info_cell_(lcs_reflect_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_init(|| {
                #type_info_tokens
            })
        }
    };

    let type_ident = meta.type_ident();
    let (impl_generics, ty_generics, where_clause) = info.split_generics();

    quote! {
        impl #impl_generics #typed_ for #type_ident #ty_generics #where_clause {
            fn type_info() -> &'static #type_info_ {
                #inner_cell_tokens
            }
        }
    }
}
