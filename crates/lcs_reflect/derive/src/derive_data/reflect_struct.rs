use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::spanned::Spanned;
use syn::{ImplGenerics, TypeGenerics};
use syn::{Data, DeriveInput, Field, Fields, Index, LitStr, Member, Type, Visibility};

use crate::derive_data::{FieldAttributes, ReflectMeta, TypeAttributes};

// -----------------------------------------------------------------------------
// StructField

/// A parsed struct field.
pub(crate) struct StructField<'a> {
    pub data: &'a Field,
    pub attrs: FieldAttributes,
    /// `"name"` for named fields, `"0"`, `"1"`... for tuple fields.
    pub name: LitStr,
    pub member: Member,
}

impl StructField<'_> {
    #[inline]
    pub fn ty(&self) -> &Type {
        &self.data.ty
    }

    /// Only plain `pub` fields are exported.
    #[inline]
    pub fn is_exported(&self) -> bool {
        matches!(self.data.vis, Visibility::Public(_))
    }
}

// -----------------------------------------------------------------------------
// ReflectStruct

/// A struct accepted by the derive.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let data = match &input.data {
            Data::Struct(data) => data,
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span(),
                    "`Reflect` cannot be derived for enums, use `Variant<G>` fields instead",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span(),
                    "`Reflect` cannot be derived for unions",
                ));
            }
        };

        if let Some(lifetime) = input.generics.lifetimes().next() {
            return Err(syn::Error::new_spanned(
                lifetime,
                "`Reflect` types must be `'static`, lifetime parameters are not supported",
            ));
        }

        let attrs = TypeAttributes::parse(&input.attrs)?;
        let meta = ReflectMeta::new(&input.ident, &input.generics, attrs);

        let fields = match &data.fields {
            Fields::Named(fields) => fields.named.iter().collect(),
            Fields::Unnamed(fields) => fields.unnamed.iter().collect(),
            Fields::Unit => Vec::new(),
        };

        let fields = fields
            .into_iter()
            .enumerate()
            .map(|(index, field)| {
                let attrs = FieldAttributes::parse(&field.attrs)?;
                let (name, member) = match &field.ident {
                    Some(ident) => (
                        LitStr::new(&ident.to_string(), ident.span()),
                        Member::Named(ident.clone()),
                    ),
                    None => (
                        LitStr::new(&index.to_string(), field.span()),
                        Member::Unnamed(Index {
                            index: index as u32,
                            span: field.span(),
                        }),
                    ),
                };
                Ok(StructField {
                    data: field,
                    attrs,
                    name,
                    member,
                })
            })
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(Self { meta, fields })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// Exported fields, in declaration order.
    pub fn exported_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| field.is_exported())
    }

    pub fn hidden_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| !field.is_exported())
    }
}

// -----------------------------------------------------------------------------
// Generics

impl ReflectStruct<'_> {
    /// Splits the generics for an impl block.
    ///
    /// For generic types, the where clause also bounds `Self` and every
    /// exported field type, so the generated bodies type-check without
    /// the user spelling the bounds out.
    pub fn split_generics(&self) -> (ImplGenerics<'_>, TypeGenerics<'_>, TokenStream) {
        let generics = self.meta.generics();
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        if !self.meta.is_generic() {
            return (impl_generics, ty_generics, where_clause.to_token_stream());
        }

        let lcs_reflect_path = self.meta.lcs_reflect_path();
        let reflect_ = crate::path::reflect_(lcs_reflect_path);
        let typed_ = crate::path::typed_(lcs_reflect_path);

        let predicates = where_clause.map(|clause| &clause.predicates);
        let field_types = self.exported_fields().map(StructField::ty);

        let where_tokens = quote! {
            where
                Self: ::core::any::Any + ::core::marker::Send + ::core::marker::Sync,
                #( #field_types: #reflect_ + #typed_, )*
                #predicates
        };

        (impl_generics, ty_generics, where_tokens)
    }
}
