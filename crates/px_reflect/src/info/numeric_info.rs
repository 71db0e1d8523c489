use core::fmt;

use crate::info::{Type, TypePath, impl_type_fn};

// -----------------------------------------------------------------------------
// NumericKind

/// The primitive number types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
}

impl NumericKind {
    /// Returns the name of the primitive type, e.g. `"u8"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::I128 => "i128",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }

    /// Returns `true` for signed and unsigned integers.
    #[inline]
    pub const fn is_integer(self) -> bool {
        !self.is_float()
    }

    /// Returns `true` for `f32` and `f64`.
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Returns `true` for signed integers and floats.
    #[inline]
    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::I128 | Self::Isize | Self::F32 | Self::F64
        )
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// -----------------------------------------------------------------------------
// NumericInfo

/// A container for compile-time info of primitive numbers.
///
/// Numbers convert between each other through [`cast`](crate::cast),
/// failing when the value does not fit the target.
///
/// ```
/// use px_reflect::info::{NumericKind, Typed};
///
/// let info = <i16 as Typed>::type_info().as_numeric().unwrap();
/// assert_eq!(info.kind(), NumericKind::I16);
/// ```
#[derive(Clone, Debug)]
pub struct NumericInfo {
    ty: Type,
    kind: NumericKind,
}

impl NumericInfo {
    impl_type_fn!(ty);

    /// Creates a new [`NumericInfo`].
    #[inline]
    pub const fn new<T: TypePath>(kind: NumericKind) -> Self {
        Self {
            ty: Type::of::<T>(),
            kind,
        }
    }

    /// Returns the number kind.
    #[inline]
    pub const fn kind(&self) -> NumericKind {
        self.kind
    }
}
