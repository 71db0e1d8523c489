use alloc::boxed::Box;
use core::fmt;

use px_reflect::info::{TypeInfo, Typed};

use crate::{Expr, ExprError};

/// Operator of a [`BinaryExpr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Equal,
    NotEqual,
}

impl BinaryOp {
    /// Returns the operator symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
        }
    }
}

/// Compares two operands of the same type, producing a `bool`.
///
/// Values are compared with `reflect_partial_eq`; types without equality
/// fail when evaluated.
#[derive(Clone, Debug, PartialEq)]
pub struct BinaryExpr {
    op: BinaryOp,
    left: Box<Expr>,
    right: Box<Expr>,
}

impl BinaryExpr {
    /// Creates a comparison.
    ///
    /// Fails with [`ExprError::OperandTypes`] if the operand types differ.
    pub fn new(op: BinaryOp, left: impl Into<Expr>, right: impl Into<Expr>) -> Result<Self, ExprError> {
        let (left, right) = (left.into(), right.into());
        if left.ty().ty_id() != right.ty().ty_id() {
            return Err(ExprError::OperandTypes {
                op: op.symbol(),
                left: left.ty().type_path(),
                right: right.ty().type_path(),
            });
        }
        Ok(Self {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    #[inline]
    pub fn op(&self) -> BinaryOp {
        self.op
    }

    #[inline]
    pub fn left(&self) -> &Expr {
        &self.left
    }

    #[inline]
    pub fn right(&self) -> &Expr {
        &self.right
    }

    /// Returns the static type, always `bool`.
    #[inline]
    pub fn ty(&self) -> &'static TypeInfo {
        <bool as Typed>::type_info()
    }
}

impl fmt::Display for BinaryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.op.symbol(), self.right)
    }
}
