use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};

use crate::derive_data::ReflectClass;

/// Generates the `Reflect` implementation.
///
/// `reflect_clone` requires the type to implement `Clone`.
pub(crate) fn impl_trait_reflect(class: &ReflectClass) -> TokenStream {
    let px_reflect = &class.px_reflect;
    let reflect_ = crate::path::reflect_(px_reflect);
    let impls_ = crate::path::impls_(px_reflect);
    let box_ = crate::path::box_(px_reflect);
    let ident = class.ident;

    let partial_eq = class.attrs.partial_eq.map(|span| {
        quote_spanned! { span =>
            #[inline]
            fn reflect_partial_eq(&self, other: &dyn #reflect_) -> ::core::option::Option<bool> {
                #impls_::class_partial_eq(self, other)
            }
        }
    });

    let debug = class.attrs.debug.map(|span| {
        quote_spanned! { span =>
            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                #impls_::class_debug(self, f)
            }
        }
    });

    quote! {
        impl #reflect_ for #ident {
            #[inline]
            fn reflect_clone(&self) -> #box_<dyn #reflect_> {
                #box_::new(<#ident as ::core::clone::Clone>::clone(self))
            }

            #partial_eq
            #debug
        }
    }
}
