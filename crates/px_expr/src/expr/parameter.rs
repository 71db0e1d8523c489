use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;

use px_reflect::info::{TypeInfo, Typed};

/// Display name of the placeholders built by [`ParameterExpr::of_type`].
pub const DEFAULT_PARAMETER_NAME: &str = "o";

struct ParameterData {
    name: String,
    ty: &'static TypeInfo,
}

/// A typed placeholder for the argument of a lambda.
///
/// Placeholders are compared by identity: clones are the same placeholder,
/// two placeholders built separately are different even with the same name
/// and type.
///
/// ```
/// use px_expr::ParameterExpr;
///
/// let a = ParameterExpr::of::<u32>();
/// let b = ParameterExpr::of::<u32>();
///
/// assert_eq!(a, a.clone());
/// assert_ne!(a, b);
/// assert_eq!(a.name(), "o");
/// ```
#[derive(Clone)]
pub struct ParameterExpr(Arc<ParameterData>);

impl ParameterExpr {
    /// Creates a placeholder of type `ty`, named `o`.
    pub fn of_type(ty: &'static TypeInfo) -> Self {
        Self::named(ty, DEFAULT_PARAMETER_NAME)
    }

    /// Creates a placeholder of type `T`, named `o`.
    #[inline]
    pub fn of<T: Typed>() -> Self {
        Self::of_type(T::type_info())
    }

    /// Creates a placeholder with a custom display name.
    pub fn named(ty: &'static TypeInfo, name: impl Into<String>) -> Self {
        Self(Arc::new(ParameterData {
            name: name.into(),
            ty,
        }))
    }

    /// Returns the display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Returns the static type.
    #[inline]
    pub fn ty(&self) -> &'static TypeInfo {
        self.0.ty
    }
}

impl PartialEq for ParameterExpr {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ParameterExpr {}

impl fmt::Debug for ParameterExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterExpr")
            .field("name", &self.0.name)
            .field("ty", &self.0.ty.type_path())
            .field("id", &Arc::as_ptr(&self.0))
            .finish()
    }
}

impl fmt::Display for ParameterExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.name)
    }
}
