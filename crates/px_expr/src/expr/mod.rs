//! Expression nodes.
//!
//! Nodes are immutable once built. Each one reports a static
//! [`TypeInfo`], the type of the value it produces.

// -----------------------------------------------------------------------------
// Modules

mod binary;
mod constant;
mod convert;
mod member;
mod parameter;

// -----------------------------------------------------------------------------
// Exports

pub use binary::{BinaryExpr, BinaryOp};
pub use constant::ConstantExpr;
pub use convert::ConvertExpr;
pub use member::MemberExpr;
pub use parameter::{DEFAULT_PARAMETER_NAME, ParameterExpr};

// -----------------------------------------------------------------------------
// Expr

use core::fmt;

use px_reflect::Reflect;
use px_reflect::info::TypeInfo;

use crate::ExprError;

/// An expression tree.
///
/// Equality is structural, except for placeholders which compare by
/// identity.
///
/// ```
/// use px_expr::{Expr, ParameterExpr};
///
/// let o = ParameterExpr::of::<String>();
/// let check = Expr::not_equal(o.clone(), Expr::constant(String::new())).unwrap();
///
/// assert_eq!(check.to_string(), "(o != \"\")");
/// assert_eq!(check.ty().type_path(), "bool");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Parameter(ParameterExpr),
    Member(MemberExpr),
    Convert(ConvertExpr),
    Constant(ConstantExpr),
    Binary(BinaryExpr),
}

impl Expr {
    /// Returns the static type of the node.
    pub fn ty(&self) -> &'static TypeInfo {
        match self {
            Self::Parameter(expr) => expr.ty(),
            Self::Member(expr) => expr.ty(),
            Self::Convert(expr) => expr.ty(),
            Self::Constant(expr) => expr.ty(),
            Self::Binary(expr) => expr.ty(),
        }
    }

    /// Creates a constant node.
    #[inline]
    pub fn constant<T: Reflect>(value: T) -> Self {
        Self::Constant(ConstantExpr::new(value))
    }

    /// Creates a conversion node, see [`ConvertExpr`].
    #[inline]
    pub fn convert(operand: impl Into<Expr>, ty: &'static TypeInfo) -> Self {
        Self::Convert(ConvertExpr::new(operand, ty))
    }

    /// Creates an `==` comparison, see [`BinaryExpr::new`].
    #[inline]
    pub fn equal(left: impl Into<Expr>, right: impl Into<Expr>) -> Result<Self, ExprError> {
        BinaryExpr::new(BinaryOp::Equal, left, right).map(Self::Binary)
    }

    /// Creates a `!=` comparison, see [`BinaryExpr::new`].
    #[inline]
    pub fn not_equal(left: impl Into<Expr>, right: impl Into<Expr>) -> Result<Self, ExprError> {
        BinaryExpr::new(BinaryOp::NotEqual, left, right).map(Self::Binary)
    }

    /// Calls `f` on every placeholder used by this tree.
    pub fn for_each_parameter<E>(
        &self,
        f: &mut impl FnMut(&ParameterExpr) -> Result<(), E>,
    ) -> Result<(), E> {
        match self {
            Self::Parameter(expr) => f(expr),
            Self::Member(expr) => f(expr.parameter()),
            Self::Convert(expr) => expr.operand().for_each_parameter(f),
            Self::Constant(_) => Ok(()),
            Self::Binary(expr) => {
                expr.left().for_each_parameter(f)?;
                expr.right().for_each_parameter(f)
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parameter(expr) => fmt::Display::fmt(expr, f),
            Self::Member(expr) => fmt::Display::fmt(expr, f),
            Self::Convert(expr) => fmt::Display::fmt(expr, f),
            Self::Constant(expr) => fmt::Display::fmt(expr, f),
            Self::Binary(expr) => fmt::Display::fmt(expr, f),
        }
    }
}

macro_rules! impl_from_node {
    ($($variant:ident => $node:ty),* $(,)?) => {$(
        impl From<$node> for Expr {
            #[inline]
            fn from(expr: $node) -> Self {
                Self::$variant(expr)
            }
        }
    )*};
}

impl_from_node! {
    Parameter => ParameterExpr,
    Member => MemberExpr,
    Convert => ConvertExpr,
    Constant => ConstantExpr,
    Binary => BinaryExpr,
}
