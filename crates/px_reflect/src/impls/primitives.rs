use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{NumericInfo, NumericKind, OpaqueInfo, TypeInfo, TypePath, Typed};

/// Implements `TypePath`, `Typed` and `Reflect` for a primitive type.
macro_rules! impl_reflect_primitive {
    ($ty:ty, $path:expr, $name:expr => $info:expr) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }

            #[inline]
            fn type_ident() -> &'static str {
                $name
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| $info)
            }
        }

        impl Reflect for $ty {
            #[inline]
            fn reflect_clone(&self) -> Box<dyn Reflect> {
                Box::new(<$ty as Clone>::clone(self))
            }

            #[inline]
            fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
                Some(other.downcast_ref::<$ty>().is_some_and(|other| self == other))
            }

            #[inline]
            fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }
        }
    };
}

macro_rules! impl_numeric {
    ($($ty:ident => $kind:ident),* $(,)?) => {$(
        impl_reflect_primitive!(
            $ty, stringify!($ty), stringify!($ty)
                => TypeInfo::Numeric(NumericInfo::new::<$ty>(NumericKind::$kind))
        );
    )*};
}

impl_numeric! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
}

impl_reflect_primitive!(bool, "bool", "bool" => TypeInfo::Opaque(OpaqueInfo::new::<bool>()));
impl_reflect_primitive!(char, "char", "char" => TypeInfo::Opaque(OpaqueInfo::new::<char>()));
impl_reflect_primitive!((), "()", "()" => TypeInfo::Opaque(OpaqueInfo::new::<()>()));
impl_reflect_primitive!(
    String, "alloc::string::String", "String"
        => TypeInfo::Opaque(OpaqueInfo::new::<String>())
);
impl_reflect_primitive!(
    &'static str, "&str", "&str"
        => TypeInfo::Opaque(OpaqueInfo::new::<&'static str>())
);

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::{NumericKind, TypeKind, Typed};

    #[test]
    fn numeric_kinds() {
        let info = <u64 as Typed>::type_info().as_numeric().unwrap();
        assert_eq!(info.kind(), NumericKind::U64);
        assert_eq!(info.type_path(), "u64");

        let info = <f32 as Typed>::type_info().as_numeric().unwrap();
        assert!(info.kind().is_float());
    }

    #[test]
    fn opaque_types() {
        assert_eq!(<String as Typed>::type_info().kind(), TypeKind::Opaque);
        assert_eq!(<String as Typed>::type_info().type_name(), "String");
        assert_eq!(<&'static str as Typed>::type_info().type_path(), "&str");
        assert_eq!(<() as Typed>::type_info().kind(), TypeKind::Opaque);
    }

    #[test]
    fn partial_eq_checks_type() {
        assert_eq!(1_i32.reflect_partial_eq(&1_i32), Some(true));
        assert_eq!(1_i32.reflect_partial_eq(&2_i32), Some(false));
        assert_eq!(1_i32.reflect_partial_eq(&1_i64), Some(false));
        assert_eq!("a".reflect_partial_eq(&"a"), Some(true));
    }
}
