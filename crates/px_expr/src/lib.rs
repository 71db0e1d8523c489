#![doc = include_str!("../README.md")]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod access;
mod compile;
mod error;
mod expr;
mod lambda;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use access::{
    PropertyInfoExt, parameter, property, property_lambda, property_lambda_with, property_with,
};
pub use compile::CompiledLambda;
pub use error::{ErrorKind, ExprError, InvokeError};
pub use expr::{
    BinaryExpr, BinaryOp, ConstantExpr, ConvertExpr, DEFAULT_PARAMETER_NAME, Expr, MemberExpr,
    ParameterExpr,
};
pub use lambda::LambdaExpr;
