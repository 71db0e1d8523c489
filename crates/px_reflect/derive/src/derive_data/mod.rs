//! Parses the derive input into a [`ReflectClass`].

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use field_attributes::FieldAttributes;
pub(crate) use type_attributes::TypeAttributes;

use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Ident, Type};

/// A reflected field of the derived struct.
pub(crate) struct ReflectField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub attrs: FieldAttributes,
}

impl ReflectField<'_> {
    /// The property name, the field name unless renamed.
    pub fn property_name(&self) -> String {
        match &self.attrs.rename {
            Some(name) => name.value(),
            None => ident_name(self.ident),
        }
    }
}

/// The parsed input of `#[derive(Reflect)]`: a named, non-generic struct.
pub(crate) struct ReflectClass<'a> {
    pub ident: &'a Ident,
    pub attrs: TypeAttributes,
    pub px_reflect: syn::Path,
    /// Fields exposed as properties, in declaration order.
    pub properties: Vec<ReflectField<'a>>,
    /// The `#[reflect(base)]` field.
    pub base: Option<ReflectField<'a>>,
}

impl<'a> ReflectClass<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let fields = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(fields) => &fields.named,
                _ => {
                    return Err(syn::Error::new(
                        input.ident.span(),
                        "`Reflect` can only be derived for structs with named fields",
                    ));
                }
            },
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span(),
                    "`Reflect` cannot be derived for enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span(),
                    "`Reflect` cannot be derived for unions",
                ));
            }
        };

        if !input.generics.params.is_empty() {
            return Err(syn::Error::new(
                input.generics.span(),
                "`Reflect` cannot be derived for generic types",
            ));
        }

        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;

        let mut properties = Vec::with_capacity(fields.len());
        let mut base: Option<ReflectField<'a>> = None;

        for field in fields {
            // Named fields always carry an ident.
            let Some(ident) = &field.ident else {
                continue;
            };
            let field = ReflectField {
                ident,
                ty: &field.ty,
                attrs: FieldAttributes::parse_attrs(&field.attrs)?,
            };

            if let Some(span) = field.attrs.base {
                if base.is_some() {
                    return Err(syn::Error::new(span, "a class can have at most one `base` field"));
                }
                base = Some(field);
            } else if field.attrs.ignore.is_none() {
                properties.push(field);
            }
        }

        let mut seen = std::collections::BTreeSet::new();
        for property in &properties {
            if !seen.insert(property.property_name()) {
                return Err(syn::Error::new(
                    property.ty.span(),
                    format!("duplicate property name `{}`", property.property_name()),
                ));
            }
        }

        Ok(Self {
            ident: &input.ident,
            attrs,
            px_reflect: crate::path::px_reflect(),
            properties,
            base,
        })
    }
}

// Strips the `r#` prefix of raw identifiers.
fn ident_name(ident: &Ident) -> String {
    let name = ident.to_string();
    match name.strip_prefix("r#") {
        Some(stripped) => stripped.to_string(),
        None => name,
    }
}
