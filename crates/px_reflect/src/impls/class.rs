use core::fmt;

use crate::Reflect;
use crate::info::ClassInfo;

/// Compares two class values property by property, bases included.
///
/// Returns `Some(false)` for values of different types and `None` if a
/// property does not support comparison.
///
/// This is the default `reflect_partial_eq` of derived classes marked
/// `#[reflect(partial_eq)]`.
pub fn class_partial_eq(x: &dyn Reflect, y: &dyn Reflect) -> Option<bool> {
    if x.ty_id() != y.ty_id() {
        return Some(false);
    }
    let info = x.reflect_type_info().as_class().ok()?;

    for property in info.properties() {
        let (a, b) = (property.get(x)?, property.get(y)?);
        if !a.reflect_partial_eq(b)? {
            return Some(false);
        }
    }

    match info.base() {
        Some(base) => class_partial_eq(base.project_ref(x)?, base.project_ref(y)?),
        None => Some(true),
    }
}

/// Formats a class value as a struct, inherited properties first.
///
/// This is the default `reflect_debug` of derived classes marked
/// `#[reflect(debug)]`.
pub fn class_debug(value: &dyn Reflect, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let Ok(info) = value.reflect_type_info().as_class() else {
        return write!(f, "Reflect({})", value.reflect_type_path());
    };
    let mut builder = f.debug_struct(info.type_name());
    debug_properties(value, info, &mut builder);
    builder.finish()
}

fn debug_properties(value: &dyn Reflect, info: &ClassInfo, builder: &mut fmt::DebugStruct<'_, '_>) {
    if let Some(base) = info.base()
        && let Some(base_value) = base.project_ref(value)
        && let Ok(base_info) = base.type_info().as_class()
    {
        debug_properties(base_value, base_info, builder);
    }
    for property in info.properties() {
        if let Some(field) = property.get(value) {
            builder.field(property.name(), &field);
        }
    }
}
