use proc_macro2::TokenStream;

use crate::derive_data::ReflectClass;

/// Generates the `inventory` submission of `#[reflect(auto_register)]`.
#[cfg(feature = "auto_register")]
pub(crate) fn impl_auto_register(class: &ReflectClass) -> TokenStream {
    use quote::quote_spanned;

    let Some(span) = class.attrs.auto_register else {
        return TokenStream::new();
    };
    let auto_register_ = crate::path::auto_register_(&class.px_reflect);
    let type_registry_ = crate::path::type_registry_(&class.px_reflect);
    let ident = class.ident;

    quote_spanned! { span =>
        #auto_register_::inventory::submit! {
            #auto_register_::__AutoRegisterFn(#type_registry_::register::<#ident>)
        }
    }
}

/// Without the `auto_register` feature the attribute is accepted and ignored.
#[cfg(not(feature = "auto_register"))]
pub(crate) fn impl_auto_register(_: &ReflectClass) -> TokenStream {
    TokenStream::new()
}
