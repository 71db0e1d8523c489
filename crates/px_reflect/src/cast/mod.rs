//! Runtime conversion of reflected values between reflected types.
//!
//! A value converts to a target type when:
//! - it already is of that type,
//! - the target is [`Object`](crate::Object),
//! - the target is a class in its base chain (the base part is moved out),
//! - the target is an interface implemented by it or one of its bases,
//! - both are numbers and the value fits the target, see below.
//!
//! Numeric conversions are checked: integers must fit the target range,
//! floats are truncated towards zero and must be finite and in range.
//! Everything else fails with [`CastError::InvalidCast`].
//!
//! ```
//! use px_reflect::{cast::{self, CastError, Converted}, info::Typed, Reflect};
//!
//! let target = <u8 as Typed>::type_info();
//!
//! let Ok(Converted::Reflect(value)) = cast::convert(Box::new(200_i32), target) else {
//!     unreachable!()
//! };
//! assert_eq!(value.downcast_ref::<u8>(), Some(&200));
//!
//! let err = cast::convert(Box::new(300_i32), target).unwrap_err();
//! assert_eq!(err, CastError::Overflow { from: "i32", to: "u8" });
//! ```

// -----------------------------------------------------------------------------
// Modules

mod error;
mod number;

// -----------------------------------------------------------------------------
// Exports

pub use error::CastError;

// -----------------------------------------------------------------------------
// Conversions

use alloc::boxed::Box;
use core::any::Any;

use crate::Reflect;
use crate::info::{ClassInfo, TypeInfo};

/// The result of [`convert`].
pub enum Converted {
    /// A reflected value of the target type, or of any type for
    /// [`Object`](crate::Object) targets.
    Reflect(Box<dyn Reflect>),
    /// A value of a non-reflected target type, such as an interface
    /// `Box<dyn Trait>`, boxed as `dyn Any`.
    Foreign(Box<dyn Any>),
}

impl core::fmt::Debug for Converted {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Reflect(value) => f.debug_tuple("Reflect").field(value).finish(),
            Self::Foreign(_) => f.write_str("Foreign(..)"),
        }
    }
}

/// Views `value` as a value of type `target` without moving it.
///
/// Succeeds for the type itself, for [`Object`](crate::Object) and for the
/// classes of the base chain. Returns `None` otherwise, even when an owned
/// [`convert`] would succeed.
///
/// ```
/// use px_reflect::{cast, derive::Reflect, info::Typed};
///
/// #[derive(Reflect, Clone)]
/// struct Base { id: u32 }
///
/// #[derive(Reflect, Clone)]
/// struct Derived {
///     #[reflect(base)]
///     base: Base,
/// }
///
/// let value = Derived { base: Base { id: 9 } };
/// let base = cast::upcast_ref(&value, Base::type_info()).unwrap();
///
/// assert_eq!(base.downcast_ref::<Base>().unwrap().id, 9);
/// ```
pub fn upcast_ref<'a>(value: &'a dyn Reflect, target: &TypeInfo) -> Option<&'a dyn Reflect> {
    if value.ty_id() == target.ty_id() || matches!(target, TypeInfo::Object(_)) {
        return Some(value);
    }
    let TypeInfo::Class(_) = target else {
        return None;
    };

    let mut current = value;
    loop {
        let base = class_of(current)?.base()?;
        current = base.project_ref(current)?;
        if current.ty_id() == target.ty_id() {
            return Some(current);
        }
    }
}

/// Converts an owned value to the type `target`.
///
/// See the [module docs](self) for the supported conversions.
pub fn convert(value: Box<dyn Reflect>, target: &'static TypeInfo) -> Result<Converted, CastError> {
    if value.ty_id() == target.ty_id() {
        return Ok(Converted::Reflect(value));
    }
    let source = (*value).reflect_type_info();
    let invalid = CastError::InvalidCast {
        from: source.type_path(),
        to: target.type_path(),
    };

    match target {
        TypeInfo::Object(_) => Ok(Converted::Reflect(value)),
        TypeInfo::Numeric(to) => match source {
            TypeInfo::Numeric(from) => number::convert_number(&*value, from.kind(), to.kind())
                .map(Converted::Reflect),
            _ => Err(invalid),
        },
        TypeInfo::Class(_) => {
            let mut current = value;
            loop {
                let Some(base) = class_of(&*current).and_then(ClassInfo::base) else {
                    return Err(invalid);
                };
                current = base.project_owned(current).map_err(|_| invalid.clone())?;
                if current.ty_id() == target.ty_id() {
                    return Ok(Converted::Reflect(current));
                }
            }
        }
        TypeInfo::Interface(_) => {
            let mut current = value;
            loop {
                let Some(class) = class_of(&*current) else {
                    return Err(invalid);
                };
                if let Some(imp) = class.interface_impl(target) {
                    return imp
                        .cast(current)
                        .map(Converted::Foreign)
                        .map_err(|_| invalid);
                }
                let Some(base) = class.base() else {
                    return Err(invalid);
                };
                current = base.project_owned(current).map_err(|_| invalid.clone())?;
            }
        }
        TypeInfo::Opaque(_) => Err(invalid),
    }
}

#[inline]
fn class_of(value: &dyn Reflect) -> Option<&'static ClassInfo> {
    value.reflect_type_info().as_class().ok()
}
