//! Type registry for looking up type information by id, path or name.
//!
//! ## auto_register
//!
//! Types marked `#[reflect(auto_register)]` are collected at link time with
//! the [`inventory`] crate and registered by [`TypeRegistry::auto_register`].
//! Requires the `auto_register` feature, enabled by default.
//!
//! [`inventory`]: https://docs.rs/inventory

mod type_registry;

pub use type_registry::TypeRegistry;
