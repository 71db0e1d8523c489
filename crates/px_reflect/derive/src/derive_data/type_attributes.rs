use proc_macro2::Span;
use syn::{Attribute, LitStr, Path};

use crate::REFLECT_ATTRIBUTE_NAME;

/// Attributes of the derived type, `#[reflect(...)]`.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    /// `type_path = "a::b::C"`
    pub type_path: Option<LitStr>,
    /// `partial_eq`
    pub partial_eq: Option<Span>,
    /// `debug`
    pub debug: Option<Span>,
    /// `implements(TraitA, TraitB)`
    pub implements: Vec<Path>,
    /// `auto_register`
    pub auto_register: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                let span = meta.path.get_ident().map_or_else(Span::call_site, |i| i.span());

                if meta.path.is_ident("type_path") {
                    let path: LitStr = meta.value()?.parse()?;
                    validate_type_path(&path)?;
                    set_once(&mut this.type_path, path, &meta)
                } else if meta.path.is_ident("partial_eq") {
                    set_once(&mut this.partial_eq, span, &meta)
                } else if meta.path.is_ident("debug") {
                    set_once(&mut this.debug, span, &meta)
                } else if meta.path.is_ident("auto_register") {
                    set_once(&mut this.auto_register, span, &meta)
                } else if meta.path.is_ident("implements") {
                    meta.parse_nested_meta(|inner| {
                        this.implements.push(inner.path);
                        Ok(())
                    })
                } else if meta.path.is_ident("base")
                    || meta.path.is_ident("ignore")
                    || meta.path.is_ident("rename")
                {
                    Err(meta.error("this attribute can only be applied to fields"))
                } else {
                    Err(meta.error(
                        "unknown attribute, expected one of `type_path`, `partial_eq`, `debug`, `implements`, `auto_register`",
                    ))
                }
            })?;
        }

        Ok(this)
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T, meta: &syn::meta::ParseNestedMeta) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error("duplicate attribute"));
    }
    *slot = Some(value);
    Ok(())
}

fn validate_type_path(path: &LitStr) -> syn::Result<()> {
    let value = path.value();
    if value.is_empty() || value.starts_with("::") || value.ends_with("::") {
        return Err(syn::Error::new(
            path.span(),
            "expected a path like `my_crate::module::Type`, without leading `::`",
        ));
    }
    Ok(())
}
