//! Compile-time type information.
//!
//! - [`TypePath`], [`Type`]: stable names and identity of a type.
//! - [`Typed`]: static access to the [`TypeInfo`] of a type.
//! - [`TypeInfo`]: one of [`ClassInfo`], [`InterfaceInfo`], [`NumericInfo`],
//!   [`OpaqueInfo`] or [`ObjectInfo`].
//! - [`PropertyInfo`]: a readable member of a class.

// -----------------------------------------------------------------------------
// Modules

mod class_info;
mod interface_info;
mod numeric_info;
mod object_info;
mod opaque_info;
mod property_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use class_info::{BaseInfo, ClassInfo, InterfaceImpl};
pub use interface_info::InterfaceInfo;
pub use numeric_info::{NumericInfo, NumericKind};
pub use object_info::ObjectInfo;
pub use opaque_info::OpaqueInfo;
pub use property_info::{Getter, PropertyInfo};
pub use type_info::{TypeInfo, TypeKind, TypeKindError};
pub use type_path::{DynamicTypePath, Type, TypePath, TypePathTable};
pub use typed::{DynamicTyped, Typed};
