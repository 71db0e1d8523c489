use alloc::boxed::Box;
use core::fmt;

use px_reflect::info::TypeInfo;

use crate::Expr;

/// Converts the value of its operand to a target type when evaluated.
///
/// No compatibility check happens when the node is built: a conversion
/// that is invalid for the runtime value fails when the compiled lambda is
/// invoked.
#[derive(Clone, Debug)]
pub struct ConvertExpr {
    operand: Box<Expr>,
    ty: &'static TypeInfo,
}

impl ConvertExpr {
    /// Creates a conversion of `operand` to `ty`.
    pub fn new(operand: impl Into<Expr>, ty: &'static TypeInfo) -> Self {
        Self {
            operand: Box::new(operand.into()),
            ty,
        }
    }

    /// Returns the converted node.
    #[inline]
    pub fn operand(&self) -> &Expr {
        &self.operand
    }

    /// Returns the target type.
    #[inline]
    pub fn ty(&self) -> &'static TypeInfo {
        self.ty
    }
}

impl PartialEq for ConvertExpr {
    fn eq(&self, other: &Self) -> bool {
        self.ty.ty_id() == other.ty.ty_id() && self.operand == other.operand
    }
}

impl fmt::Display for ConvertExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Convert({}, {})", self.operand, self.ty.type_name())
    }
}
