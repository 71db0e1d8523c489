use alloc::boxed::Box;

use crate::Reflect;
use crate::cast::CastError;
use crate::info::NumericKind;

/// A primitive number, widened to the largest type of its family.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Number {
    Signed(i128),
    Unsigned(u128),
    Float(f64),
}

// 2^127 and 2^128, exactly representable as `f64`.
const TWO_POW_127: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;
const TWO_POW_128: f64 = 340_282_366_920_938_463_463_374_607_431_768_211_456.0;

fn read(value: &dyn Reflect, kind: NumericKind) -> Option<Number> {
    macro_rules! read_as {
        ($ty:ty => $variant:ident) => {
            value.downcast_ref::<$ty>().map(|&v| Number::$variant(v.into()))
        };
    }

    match kind {
        NumericKind::I8 => read_as!(i8 => Signed),
        NumericKind::I16 => read_as!(i16 => Signed),
        NumericKind::I32 => read_as!(i32 => Signed),
        NumericKind::I64 => read_as!(i64 => Signed),
        NumericKind::I128 => read_as!(i128 => Signed),
        NumericKind::Isize => value.downcast_ref::<isize>().map(|&v| Number::Signed(v as i128)),
        NumericKind::U8 => read_as!(u8 => Unsigned),
        NumericKind::U16 => read_as!(u16 => Unsigned),
        NumericKind::U32 => read_as!(u32 => Unsigned),
        NumericKind::U64 => read_as!(u64 => Unsigned),
        NumericKind::U128 => read_as!(u128 => Unsigned),
        NumericKind::Usize => value.downcast_ref::<usize>().map(|&v| Number::Unsigned(v as u128)),
        NumericKind::F32 => read_as!(f32 => Float),
        NumericKind::F64 => read_as!(f64 => Float),
    }
}

/// Truncates a float towards zero, keeping it an integer of either family.
///
/// Fails for NaN, infinities and values beyond the 128 bit range.
fn truncate(value: f64) -> Option<Number> {
    if !value.is_finite() {
        return None;
    }
    let value = value.trunc();
    if value >= 0.0 {
        (value < TWO_POW_128).then(|| Number::Unsigned(value as u128))
    } else {
        (value >= -TWO_POW_127).then(|| Number::Signed(value as i128))
    }
}

fn write(number: Number, kind: NumericKind) -> Option<Box<dyn Reflect>> {
    macro_rules! write_int {
        ($ty:ty) => {
            match number {
                Number::Signed(v) => <$ty>::try_from(v).ok(),
                Number::Unsigned(v) => <$ty>::try_from(v).ok(),
                Number::Float(v) => match truncate(v)? {
                    Number::Signed(v) => <$ty>::try_from(v).ok(),
                    Number::Unsigned(v) => <$ty>::try_from(v).ok(),
                    Number::Float(_) => None,
                },
            }
            .map(|v| Box::new(v) as Box<dyn Reflect>)
        };
    }

    match kind {
        NumericKind::I8 => write_int!(i8),
        NumericKind::I16 => write_int!(i16),
        NumericKind::I32 => write_int!(i32),
        NumericKind::I64 => write_int!(i64),
        NumericKind::I128 => write_int!(i128),
        NumericKind::Isize => write_int!(isize),
        NumericKind::U8 => write_int!(u8),
        NumericKind::U16 => write_int!(u16),
        NumericKind::U32 => write_int!(u32),
        NumericKind::U64 => write_int!(u64),
        NumericKind::U128 => write_int!(u128),
        NumericKind::Usize => write_int!(usize),
        NumericKind::F32 => {
            let v = match number {
                Number::Signed(v) => v as f32,
                Number::Unsigned(v) => v as f32,
                Number::Float(v) => v as f32,
            };
            // Finite inputs that round to infinity do not fit.
            let finite_input = !matches!(number, Number::Float(v) if !v.is_finite());
            (!v.is_infinite() || !finite_input).then(|| Box::new(v) as Box<dyn Reflect>)
        }
        NumericKind::F64 => {
            let v = match number {
                Number::Signed(v) => v as f64,
                Number::Unsigned(v) => v as f64,
                Number::Float(v) => v,
            };
            Some(Box::new(v) as Box<dyn Reflect>)
        }
    }
}

/// Converts a number of kind `from` into a number of kind `to`.
///
/// Integers convert when the value fits, floats truncate towards zero and
/// fail when not finite or out of range.
pub(super) fn convert_number(
    value: &dyn Reflect,
    from: NumericKind,
    to: NumericKind,
) -> Result<Box<dyn Reflect>, CastError> {
    let from_path = value.reflect_type_path();
    let number = read(value, from).ok_or(CastError::InvalidCast {
        from: from_path,
        to: to.as_str(),
    })?;

    write(number, to).ok_or(CastError::Overflow {
        from: from_path,
        to: to.as_str(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert<T: Reflect + Copy>(value: impl Reflect, to: NumericKind) -> Result<T, CastError> {
        let from = value
            .reflect_type_info()
            .as_numeric()
            .map(|info| info.kind())
            .unwrap();
        let boxed = convert_number(&value, from, to)?;
        Ok(*boxed.downcast_ref::<T>().unwrap())
    }

    #[test]
    fn integers_in_range() {
        assert_eq!(convert::<i64>(7_u8, NumericKind::I64), Ok(7));
        assert_eq!(convert::<u8>(-0_i32, NumericKind::U8), Ok(0));
        assert_eq!(convert::<i8>(-128_i128, NumericKind::I8), Ok(-128));
        assert_eq!(convert::<u128>(u64::MAX, NumericKind::U128), Ok(u64::MAX as u128));
    }

    #[test]
    fn integers_out_of_range() {
        let err = convert::<u8>(300_u32, NumericKind::U8).unwrap_err();
        assert_eq!(err, CastError::Overflow { from: "u32", to: "u8" });

        assert!(convert::<u32>(-1_i32, NumericKind::U32).is_err());
        assert!(convert::<i64>(u64::MAX, NumericKind::I64).is_err());
    }

    #[test]
    fn floats() {
        assert_eq!(convert::<i32>(-2.9_f64, NumericKind::I32), Ok(-2));
        assert_eq!(convert::<u8>(255.5_f32, NumericKind::U8), Ok(255));
        assert_eq!(convert::<f64>(3_i16, NumericKind::F64), Ok(3.0));
        assert_eq!(convert::<f32>(0.5_f64, NumericKind::F32), Ok(0.5));

        assert!(convert::<i32>(f64::NAN, NumericKind::I32).is_err());
        assert!(convert::<u64>(f64::INFINITY, NumericKind::U64).is_err());
        assert!(convert::<u8>(-1.0_f32, NumericKind::U8).is_err());
        assert!(convert::<f32>(f64::MAX, NumericKind::F32).is_err());
        assert!(convert::<f32>(f64::NEG_INFINITY, NumericKind::F32).unwrap().is_infinite());
    }
}
