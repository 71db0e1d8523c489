use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};

use crate::derive_data::ReflectClass;

/// Generates the `Typed` implementation, building the `ClassInfo`.
///
/// Getters, base projections and interface casts are nested fn items,
/// which cannot name `Self`, so they use the struct ident.
pub(crate) fn impl_trait_typed(class: &ReflectClass) -> TokenStream {
    let px_reflect = &class.px_reflect;
    let typed_ = crate::path::typed_(px_reflect);
    let type_info_ = crate::path::type_info_(px_reflect);
    let class_info_ = crate::path::class_info_(px_reflect);
    let property_info_ = crate::path::property_info_(px_reflect);
    let info_cell_ = crate::path::non_generic_type_info_cell_(px_reflect);
    let reflect_ = crate::path::reflect_(px_reflect);
    let box_ = crate::path::box_(px_reflect);
    let ident = class.ident;

    let mut items = Vec::new();
    let mut properties = Vec::new();

    for (index, field) in class.properties.iter().enumerate() {
        let getter = format_ident!("__get_property_{}", index, span = Span::call_site());
        let member = field.ident;
        let ty = field.ty;
        let name = field.property_name();

        items.push(quote! {
            fn #getter<'a>(
                value: &'a (dyn #reflect_ + 'static),
            ) -> ::core::option::Option<&'a (dyn #reflect_ + 'static)> {
                value
                    .downcast_ref::<#ident>()
                    .map(|this| &this.#member as &(dyn #reflect_ + 'static))
            }
        });
        properties.push(quote! {
            #property_info_::new::<#ident, #ty>(#name, #getter)
        });
    }

    let with_base = class.base.as_ref().map(|base| {
        let base_info_ = crate::path::base_info_(px_reflect);
        let member = base.ident;
        let ty = base.ty;

        items.push(quote! {
            fn __project_base_ref<'a>(
                value: &'a (dyn #reflect_ + 'static),
            ) -> ::core::option::Option<&'a (dyn #reflect_ + 'static)> {
                value
                    .downcast_ref::<#ident>()
                    .map(|this| &this.#member as &(dyn #reflect_ + 'static))
            }

            fn __project_base_owned(
                value: #box_<dyn #reflect_>,
            ) -> ::core::result::Result<#box_<dyn #reflect_>, #box_<dyn #reflect_>> {
                value
                    .downcast::<#ident>()
                    .map(|this| #box_::new(this.#member) as #box_<dyn #reflect_>)
            }
        });

        quote! {
            .with_base(#base_info_::new(
                <#ty as #typed_>::type_info,
                __project_base_ref,
                __project_base_owned,
            ))
        }
    });

    let with_interfaces = (!class.attrs.implements.is_empty()).then(|| {
        let interface_impl_ = crate::path::interface_impl_(px_reflect);
        let any_ = crate::path::any_(px_reflect);

        let impls = class.attrs.implements.iter().enumerate().map(|(index, path)| {
            let cast = format_ident!("__cast_interface_{}", index, span = Span::call_site());

            items.push(quote! {
                fn #cast(
                    value: #box_<dyn #reflect_>,
                ) -> ::core::result::Result<#box_<dyn #any_>, #box_<dyn #reflect_>> {
                    let this: #box_<#ident> = value.downcast::<#ident>()?;
                    let object: #box_<dyn #path> = this;
                    ::core::result::Result::Ok(#box_::new(object))
                }
            });

            quote! {
                #interface_impl_::new(<#box_<dyn #path> as #typed_>::type_info, #cast)
            }
        });
        let impls: Vec<_> = impls.collect();

        quote! {
            .with_interfaces(&[#(#impls),*])
        }
    });

    quote! {
        impl #typed_ for #ident {
            fn type_info() -> &'static #type_info_ {
                static CELL: #info_cell_ = #info_cell_::new();
                CELL.get_or_init(|| {
                    #(#items)*

                    #type_info_::Class(
                        #class_info_::new::<#ident>(&[#(#properties),*])
                            #with_base
                            #with_interfaces
                    )
                })
            }
        }
    }
}
