//! Provides [`Reflect`](derive@Reflect), the derive macro of `px_reflect`.
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Class Reflection Derivation
///
/// `#[derive(Reflect)]` implements `TypePath`, `Typed` and `Reflect` for a
/// named, non-generic struct. The struct must implement `Clone`, every
/// property type must implement `Reflect` and `Typed`.
///
/// Each field becomes a property of the class, in declaration order.
///
/// ## Type attributes
///
/// ```rust, ignore
/// #[derive(Reflect, Clone)]
/// #[reflect(type_path = "my_crate::model::Foo")]
/// #[reflect(partial_eq, debug)]
/// #[reflect(implements(Named, Sized2d))]
/// #[reflect(auto_register)]
/// struct Foo { /* ... */ }
/// ```
///
/// - `type_path`: replaces the default `module_path!()::Foo` path.
/// - `partial_eq`: `reflect_partial_eq` compares the properties and base.
/// - `debug`: `reflect_debug` prints the properties, inherited ones first.
/// - `implements`: interfaces declared with `impl_interface!` that the type
///   implements. Converting a value to one of them keeps its behavior.
/// - `auto_register`: submits the type to `TypeRegistry::auto_register`.
///
/// ## Field attributes
///
/// ```rust, ignore
/// #[derive(Reflect, Clone)]
/// struct Employee {
///     #[reflect(base)]
///     person: Person,
///     #[reflect(rename = "Salary")]
///     salary: u32,
///     #[reflect(ignore)]
///     cache: Cache,
/// }
/// ```
///
/// - `base`: the field is the base class. Its properties are inherited and
///   the value converts to it. At most one field.
/// - `rename`: the property name, the field name by default.
/// - `ignore`: the field is not a property.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let class = match derive_data::ReflectClass::from_input(&ast) {
        Ok(class) => class,
        Err(err) => return err.into_compile_error().into(),
    };

    let type_path_impl = impls::impl_trait_type_path(&class);
    let typed_impl = impls::impl_trait_typed(&class);
    let reflect_impl = impls::impl_trait_reflect(&class);
    let auto_register_impl = impls::impl_auto_register(&class);

    TokenStream::from(quote! {
        const _: () = {
            #type_path_impl
            #typed_impl
            #reflect_impl
            #auto_register_impl
        };
    })
}
