use core::fmt;

use px_reflect::info::{PropertyInfo, TypeInfo};

use crate::ParameterExpr;

/// Reads a property from the value bound to a placeholder.
///
/// Built by [`property`](crate::property) and
/// [`property_with`](crate::property_with), which check that the
/// placeholder type is assignable to the declaring type of the property.
/// The static type is the declared type of the property.
#[derive(Clone, Debug, PartialEq)]
pub struct MemberExpr {
    parameter: ParameterExpr,
    member: PropertyInfo,
}

impl MemberExpr {
    // Assignability is checked by the builders.
    pub(crate) fn new(parameter: ParameterExpr, member: PropertyInfo) -> Self {
        Self { parameter, member }
    }

    /// Returns the placeholder the property is read from.
    #[inline]
    pub fn parameter(&self) -> &ParameterExpr {
        &self.parameter
    }

    /// Returns the property descriptor.
    #[inline]
    pub fn member(&self) -> &PropertyInfo {
        &self.member
    }

    /// Returns the static type, the declared type of the property.
    #[inline]
    pub fn ty(&self) -> &'static TypeInfo {
        self.member.property_type()
    }
}

impl fmt::Display for MemberExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.parameter, self.member.name())
    }
}
