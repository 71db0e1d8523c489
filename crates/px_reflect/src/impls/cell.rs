//! Static storage of type information.
//!
//! Used to implement [`Typed`](crate::info::Typed). Generic types are not
//! reflected, so one cell per implementation is enough.
//!
//! With `std` the cell is a `std::sync::OnceLock`. Without it, a racy
//! `once_cell::race::OnceBox`: threads may build the info concurrently,
//! only the first stored value is kept.

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

#[cfg(not(feature = "std"))]
use once_cell::race::OnceBox;
#[cfg(feature = "std")]
use std::sync::OnceLock;

use crate::info::TypeInfo;

/// Container for the static [`TypeInfo`] of a non-generic type.
///
/// The info is built on first access.
///
/// ```
/// use px_reflect::{
///     impls::NonGenericTypeInfoCell,
///     info::{OpaqueInfo, TypeInfo, TypePath, Typed},
/// };
///
/// struct Token;
///
/// impl TypePath for Token {
///     fn type_path() -> &'static str { "demo::Token" }
///     fn type_name() -> &'static str { "Token" }
///     fn type_ident() -> &'static str { "Token" }
/// }
///
/// impl Typed for Token {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
///
/// assert!(core::ptr::eq(Token::type_info(), Token::type_info()));
/// ```
pub struct NonGenericTypeInfoCell(
    #[cfg(feature = "std")] OnceLock<TypeInfo>,
    #[cfg(not(feature = "std"))] OnceBox<TypeInfo>,
);

impl NonGenericTypeInfoCell {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        #[cfg(feature = "std")]
        return Self(OnceLock::new());
        #[cfg(not(feature = "std"))]
        return Self(OnceBox::new());
    }

    /// Returns the stored info, building it with `f` on first access.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &TypeInfo
    where
        F: FnOnce() -> TypeInfo,
    {
        #[cfg(feature = "std")]
        return self.0.get_or_init(f);
        #[cfg(not(feature = "std"))]
        return self.0.get_or_init(|| Box::new(f()));
    }
}
