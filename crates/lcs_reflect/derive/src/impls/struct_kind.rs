use proc_macro2::TokenStream;
use quote::quote;

use super::{impl_trait_reflect, impl_trait_typed};

use crate::derive_data::{ReflectStruct, StructField};

/// Implement full reflect for struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let typed_trait_tokens = impl_trait_typed(info, struct_info_tokens(info));
    let reflect_trait_tokens = impl_trait_reflect(info, quote!(Struct));
    let struct_trait_tokens = impl_trait_struct(info);

    quote! {
        #typed_trait_tokens

        #reflect_trait_tokens

        #struct_trait_tokens
    }
}

/// The `TypeInfo::Struct(...)` expression.
fn struct_info_tokens(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let lcs_reflect_path = meta.lcs_reflect_path();
    let type_info_ = crate::path::type_info_(lcs_reflect_path);
    let struct_info_ = crate::path::struct_info_(lcs_reflect_path);
    let named_field_ = crate::path::named_field_(lcs_reflect_path);
    let hidden_field_ = crate::path::hidden_field_(lcs_reflect_path);

    let named = info.exported_fields().map(|field| {
        let ty = field.ty();
        let name = &field.name;
        let tag = with_tag(field);
        quote! {
            #named_field_::new::<#ty>(#name) #tag
        }
    });

    let hidden = info.hidden_fields().map(|field| {
        let name = &field.name;
        let tag = with_tag(field);
        quote! {
            #hidden_field_::new(#name) #tag
        }
    });

    let enum_types = meta.attrs().enum_types.map(|span| {
        let enum_types_ = crate::path::enum_types_(lcs_reflect_path);
        quote::quote_spanned! { span =>
            .with_enum_types(<Self as #enum_types_>::enum_types)
        }
    });

    quote! {
        #type_info_::Struct(
            #struct_info_::new::<Self>(&[ #(#named),* ])
                .with_hidden(&[ #(#hidden),* ])
                #enum_types
        )
    }
}

fn with_tag(field: &StructField) -> Option<TokenStream> {
    field.attrs.tag.as_ref().map(|tag| quote!(.with_tag(#tag)))
}

/// Generate implementation code for `Struct`.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let lcs_reflect_path = meta.lcs_reflect_path();
    let reflect_ = crate::path::reflect_(lcs_reflect_path);
    let struct_ = crate::path::struct_(lcs_reflect_path);

    let fields: Vec<&StructField> = info.exported_fields().collect();
    let field_len = fields.len();
    let indices = 0..field_len;
    let names = fields.iter().map(|field| &field.name);
    let members: Vec<_> = fields.iter().map(|field| &field.member).collect();

    let type_ident = meta.type_ident();
    let (impl_generics, ty_generics, where_clause) = info.split_generics();

    let indices_mut = indices.clone();
    let indices_name = indices.clone();

    quote! {
        impl #impl_generics #struct_ for #type_ident #ty_generics #where_clause {
            #[inline]
            fn field_len(&self) -> usize {
                #field_len
            }

            fn name_at(&self, index: usize) -> ::core::option::Option<&'static str> {
                match index {
                    #( #indices_name => ::core::option::Option::Some(#names), )*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at(&self, index: usize) -> ::core::option::Option<&dyn #reflect_> {
                match index {
                    #( #indices => ::core::option::Option::Some(&self.#members), )*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> ::core::option::Option<&mut dyn #reflect_> {
                match index {
                    #( #indices_mut => ::core::option::Option::Some(&mut self.#members), )*
                    _ => ::core::option::Option::None,
                }
            }
        }
    }
}
