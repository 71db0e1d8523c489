#![doc = include_str!("../README.md")]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code refers to `px_reflect`, which must also work inside this crate.
extern crate self as px_reflect;

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod hash;
mod reflection;

pub mod cast;
pub mod impls;
pub mod info;
pub mod registry;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use px_reflect_derive as derive;
pub use reflection::{Object, Reflect};
