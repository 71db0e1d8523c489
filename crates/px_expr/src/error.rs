use alloc::string::String;
use core::fmt;

use px_reflect::cast::CastError;
use thiserror::Error;

// -----------------------------------------------------------------------------
// ErrorKind

/// Classifies an [`ExprError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required input is absent.
    InvalidArgument,
    /// The inputs are present but their types are incompatible.
    InvalidOperation,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => f.pad("invalid argument"),
            Self::InvalidOperation => f.pad("invalid operation"),
        }
    }
}

// -----------------------------------------------------------------------------
// ExprError

/// Error returned when building or compiling an expression.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExprError {
    /// A required argument is absent.
    #[error("argument `{0}` is absent")]
    MissingArgument(&'static str),

    /// The placeholder cannot stand for a value of the member's declaring type.
    #[error(
        "the type of `{parameter}` ({actual}) is not assignable to the declaring type ({declaring}) of the member `{member}` passed in `member`"
    )]
    NotAssignable {
        parameter: &'static str,
        actual: &'static str,
        declaring: &'static str,
        member: &'static str,
    },

    /// The lambda parameter is not of the lambda input type.
    #[error("lambda parameter has type `{actual}`, expected `{expected}`")]
    ParameterType {
        expected: &'static str,
        actual: &'static str,
    },

    /// The lambda body is not assignable to the lambda result type.
    #[error("lambda body of type `{actual}` is not assignable to the result type `{expected}`")]
    BodyType {
        expected: &'static str,
        actual: &'static str,
    },

    /// The operands of a binary node do not have the same type.
    #[error("operands of `{op}` have different types `{left}` and `{right}`")]
    OperandTypes {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },

    /// The body uses a parameter that is not the lambda parameter.
    #[error("parameter `{name}` of type `{ty}` is not bound by the lambda")]
    UnboundParameter {
        name: String,
        ty: &'static str,
    },
}

impl ExprError {
    /// Returns the category of the error.
    ///
    /// ```
    /// use px_expr::{ErrorKind, ExprError};
    ///
    /// let err = ExprError::MissingArgument("member");
    /// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingArgument(_) => ErrorKind::InvalidArgument,
            Self::NotAssignable { .. }
            | Self::ParameterType { .. }
            | Self::BodyType { .. }
            | Self::OperandTypes { .. }
            | Self::UnboundParameter { .. } => ErrorKind::InvalidOperation,
        }
    }
}

// -----------------------------------------------------------------------------
// InvokeError

/// Error returned when a compiled lambda is invoked.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvokeError {
    /// A conversion failed for the runtime value.
    #[error(transparent)]
    Cast(#[from] CastError),

    /// The member could not be read from the runtime value.
    #[error("member `{member}` is not available on a value of type `{actual}`")]
    MemberUnavailable {
        member: &'static str,
        actual: &'static str,
    },

    /// The operands of a comparison do not support equality.
    #[error("values of type `{0}` cannot be compared")]
    NotComparable(&'static str),

    /// The final value is not of the lambda result type.
    #[error("lambda produced a value of type `{actual}`, expected `{expected}`")]
    ResultMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}
