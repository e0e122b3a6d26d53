use proc_macro::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::derive_data::ReflectStruct;

/// Provided for `#[derive(Reflect)]`.
pub(crate) fn match_reflect_impls(ast: DeriveInput) -> TokenStream {
    let info = match ReflectStruct::from_input(&ast) {
        Ok(val) => val,
        Err(err) => return err.into_compile_error().into(),
    };

    let reflect_impls = super::struct_kind::impl_struct(&info);

    TokenStream::from(quote! {
        const _: () = {
            #reflect_impls
        };
    })
}
