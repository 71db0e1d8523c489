use alloc::sync::Arc;
use core::fmt;

use px_reflect::Reflect;
use px_reflect::info::TypeInfo;

/// A constant value.
///
/// Two constants are equal when they share the value or their values
/// compare equal through [`Reflect::reflect_partial_eq`].
#[derive(Clone)]
pub struct ConstantExpr {
    value: Arc<dyn Reflect>,
}

impl ConstantExpr {
    /// Creates a constant node holding `value`.
    pub fn new<T: Reflect>(value: T) -> Self {
        Self {
            value: Arc::new(value),
        }
    }

    /// Returns the value.
    #[inline]
    pub fn value(&self) -> &dyn Reflect {
        &*self.value
    }

    /// Returns the static type, the type of the value.
    #[inline]
    pub fn ty(&self) -> &'static TypeInfo {
        self.value.reflect_type_info()
    }
}

impl PartialEq for ConstantExpr {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
            || self.value.reflect_partial_eq(&*other.value) == Some(true)
    }
}

impl fmt::Debug for ConstantExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConstantExpr").field(&self.value).finish()
    }
}

impl fmt::Display for ConstantExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.value)
    }
}
