use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Attribute, Expr, ExprLit, Lit, LitStr, Meta, MetaNameValue};

use crate::{REFLECT_ATTRIBUTE_NAME, TAG_ATTRIBUTE_NAME};

// -----------------------------------------------------------------------------
// TypeAttributes

/// Container attributes: `#[reflect(...)]`.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    /// Set by `#[reflect(enum_types)]`.
    pub enum_types: Option<Span>,
}

impl TypeAttributes {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if attr.path().is_ident(TAG_ATTRIBUTE_NAME) {
                return Err(syn::Error::new_spanned(
                    attr,
                    "`#[lcs = \"...\"]` can only be applied to fields",
                ));
            }
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("enum_types") {
                    if this.enum_types.is_some() {
                        return Err(meta.error("`enum_types` is repeated"));
                    }
                    this.enum_types = Some(meta.path.span());
                    return Ok(());
                }
                Err(meta.error("unknown reflect attribute, expected `enum_types`"))
            })?;
        }

        Ok(this)
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// Field attributes: `#[lcs = "..."]`.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    /// The raw directive string, kept verbatim.
    pub tag: Option<LitStr>,
}

impl FieldAttributes {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                return Err(syn::Error::new_spanned(
                    attr,
                    "`#[reflect(...)]` can only be applied to the type",
                ));
            }
            if !attr.path().is_ident(TAG_ATTRIBUTE_NAME) {
                continue;
            }

            let Meta::NameValue(MetaNameValue {
                value: Expr::Lit(ExprLit { lit: Lit::Str(lit), .. }),
                ..
            }) = &attr.meta
            else {
                return Err(syn::Error::new_spanned(attr, "expected `#[lcs = \"...\"]`"));
            };

            if this.tag.is_some() {
                return Err(syn::Error::new_spanned(attr, "`#[lcs]` is repeated"));
            }
            this.tag = Some(lit.clone());
        }

        Ok(this)
    }
}
