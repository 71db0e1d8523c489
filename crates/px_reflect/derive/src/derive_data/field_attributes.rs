use proc_macro2::Span;
use syn::{Attribute, LitStr};

use crate::REFLECT_ATTRIBUTE_NAME;

/// Attributes of a field, `#[reflect(...)]`.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    /// `base`
    pub base: Option<Span>,
    /// `ignore`
    pub ignore: Option<Span>,
    /// `rename = "Name"`
    pub rename: Option<LitStr>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("base") {
                    this.base = Some(attr_span(&meta));
                    Ok(())
                } else if meta.path.is_ident("ignore") {
                    this.ignore = Some(attr_span(&meta));
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    let name: LitStr = meta.value()?.parse()?;
                    if name.value().is_empty() {
                        return Err(syn::Error::new(name.span(), "property name cannot be empty"));
                    }
                    this.rename = Some(name);
                    Ok(())
                } else {
                    Err(meta.error("unknown attribute, expected one of `base`, `ignore`, `rename`"))
                }
            })?;
        }

        match (this.base, this.ignore, &this.rename) {
            (Some(span), Some(_), _) => {
                Err(syn::Error::new(span, "a base field cannot be ignored"))
            }
            (Some(span), _, Some(_)) | (_, Some(span), Some(_)) => Err(syn::Error::new(
                span,
                "`rename` only applies to properties",
            )),
            _ => Ok(this),
        }
    }
}

fn attr_span(meta: &syn::meta::ParseNestedMeta) -> Span {
    meta.path.get_ident().map_or_else(Span::call_site, |i| i.span())
}
