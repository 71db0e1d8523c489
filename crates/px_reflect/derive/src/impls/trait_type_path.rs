use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectClass;

/// Generates the `TypePath` implementation.
///
/// Without `type_path = "..."`, the path is the module of the type followed
/// by its ident.
pub(crate) fn impl_trait_type_path(class: &ReflectClass) -> TokenStream {
    let type_path_ = crate::path::type_path_(&class.px_reflect);
    let ident = class.ident;
    let ident_str = ident.to_string();

    let (path_tokens, name, module_tokens) = match &class.attrs.type_path {
        Some(custom) => {
            let path = custom.value();
            let (module, name) = match path.rsplit_once("::") {
                Some((module, name)) => (quote!(::core::option::Option::Some(#module)), name.to_string()),
                None => (quote!(::core::option::Option::None), path.clone()),
            };
            (quote!(#path), name, module)
        }
        None => (
            quote!(::core::concat!(::core::module_path!(), "::", #ident_str)),
            ident_str.clone(),
            quote!(::core::option::Option::Some(::core::module_path!())),
        ),
    };

    quote! {
        impl #type_path_ for #ident {
            #[inline]
            fn type_path() -> &'static str {
                #path_tokens
            }

            #[inline]
            fn type_name() -> &'static str {
                #name
            }

            #[inline]
            fn type_ident() -> &'static str {
                #name
            }

            #[inline]
            fn module_path() -> ::core::option::Option<&'static str> {
                #module_tokens
            }
        }
    }
}
