//! Paths to `px_reflect` items used by the generated code.
//!
//! Kept in one place so a change in the `px_reflect` layout touches only
//! this module.

use proc_macro2::TokenStream;
use quote::quote;

/// Returns the path to the `px_reflect` crate as seen by the caller.
///
/// 1. For crates that depend on `px_reflect`, returns `::px_reflect`.
/// 2. For crates that depend on `px_core`, returns `::px_core::reflect`.
/// 3. Otherwise returns `::px_reflect`, which may be wrong.
///
/// Reads the caller's `Cargo.toml`, so it is resolved once per derive.
pub(crate) fn px_reflect() -> syn::Path {
    px_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("px_reflect"))
}

#[inline(always)]
pub(crate) fn reflect_(px_reflect: &syn::Path) -> TokenStream {
    quote! { #px_reflect::Reflect }
}

#[inline(always)]
pub(crate) fn type_path_(px_reflect: &syn::Path) -> TokenStream {
    quote! { #px_reflect::info::TypePath }
}

#[inline(always)]
pub(crate) fn typed_(px_reflect: &syn::Path) -> TokenStream {
    quote! { #px_reflect::info::Typed }
}

#[inline(always)]
pub(crate) fn type_info_(px_reflect: &syn::Path) -> TokenStream {
    quote! { #px_reflect::info::TypeInfo }
}

#[inline(always)]
pub(crate) fn class_info_(px_reflect: &syn::Path) -> TokenStream {
    quote! { #px_reflect::info::ClassInfo }
}

#[inline(always)]
pub(crate) fn property_info_(px_reflect: &syn::Path) -> TokenStream {
    quote! { #px_reflect::info::PropertyInfo }
}

#[inline(always)]
pub(crate) fn base_info_(px_reflect: &syn::Path) -> TokenStream {
    quote! { #px_reflect::info::BaseInfo }
}

#[inline(always)]
pub(crate) fn interface_impl_(px_reflect: &syn::Path) -> TokenStream {
    quote! { #px_reflect::info::InterfaceImpl }
}

#[inline(always)]
pub(crate) fn non_generic_type_info_cell_(px_reflect: &syn::Path) -> TokenStream {
    quote! { #px_reflect::impls::NonGenericTypeInfoCell }
}

#[inline(always)]
pub(crate) fn impls_(px_reflect: &syn::Path) -> TokenStream {
    quote! { #px_reflect::impls }
}

#[inline(always)]
pub(crate) fn box_(px_reflect: &syn::Path) -> TokenStream {
    quote! { #px_reflect::__macro_exports::Box }
}

#[inline(always)]
pub(crate) fn any_(px_reflect: &syn::Path) -> TokenStream {
    quote! { #px_reflect::__macro_exports::Any }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(px_reflect: &syn::Path) -> TokenStream {
    quote! { #px_reflect::__macro_exports::auto_register }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn type_registry_(px_reflect: &syn::Path) -> TokenStream {
    quote! { #px_reflect::registry::TypeRegistry }
}
