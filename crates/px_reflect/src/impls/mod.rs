//! Reflection support for primitive types, object and interface types,
//! plus the helpers used by generated code.

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod class;
mod interface;
mod primitives;

// -----------------------------------------------------------------------------
// Exports

pub use cell::NonGenericTypeInfoCell;
pub use class::{class_debug, class_partial_eq};
