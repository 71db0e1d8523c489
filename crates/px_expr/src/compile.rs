use alloc::boxed::Box;
use core::any::Any;
use core::fmt;
use core::marker::PhantomData;

use px_reflect::cast::{self, CastError, Converted};
use px_reflect::Reflect;
use px_reflect::info::{TypeInfo, Typed};

use crate::{BinaryOp, Expr, InvokeError, ParameterExpr};

// -----------------------------------------------------------------------------
// CompiledLambda

/// A compiled [`LambdaExpr`](crate::LambdaExpr), callable on values of `T`.
///
/// Member reads borrow from the argument. Values are cloned only when a
/// conversion needs ownership or when the result is returned.
pub struct CompiledLambda<T, R> {
    parameter: ParameterExpr,
    body: Expr,
    _marker: PhantomData<fn(&T) -> R>,
}

impl<T, R> CompiledLambda<T, R> {
    pub(crate) fn new(parameter: ParameterExpr, body: Expr) -> Self {
        Self {
            parameter,
            body,
            _marker: PhantomData,
        }
    }
}

impl<T: Reflect + Typed, R: Typed> CompiledLambda<T, R> {
    /// Evaluates the body with `input` bound to the parameter.
    pub fn call(&self, input: &T) -> Result<R, InvokeError> {
        let value = eval(&self.body, input)?;
        into_result::<R>(value)
    }

    /// Turns the lambda into a plain closure.
    pub fn into_fn(self) -> impl Fn(&T) -> Result<R, InvokeError> + Send + Sync + 'static {
        move |input: &T| self.call(input)
    }
}

impl<T, R> Clone for CompiledLambda<T, R> {
    fn clone(&self) -> Self {
        Self::new(self.parameter.clone(), self.body.clone())
    }
}

impl<T, R> fmt::Debug for CompiledLambda<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledLambda")
            .field("parameter", &self.parameter)
            .field("body", &self.body)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Evaluation

/// An intermediate value.
enum Value<'a> {
    /// Borrowed from the argument or from a constant.
    Borrowed(&'a dyn Reflect),
    /// Produced by a conversion or a comparison.
    Owned(Box<dyn Reflect>),
    /// A value of a non-reflected type, such as an interface object.
    Foreign(Box<dyn Any>),
}

impl Value<'_> {
    fn as_reflect(&self) -> Option<&dyn Reflect> {
        match self {
            Value::Borrowed(value) => Some(*value),
            Value::Owned(value) => Some(&**value),
            Value::Foreign(_) => None,
        }
    }
}

fn eval<'a>(expr: &'a Expr, input: &'a dyn Reflect) -> Result<Value<'a>, InvokeError> {
    match expr {
        // Compilation checked every placeholder is the lambda parameter.
        Expr::Parameter(_) => Ok(Value::Borrowed(input)),
        Expr::Member(expr) => {
            let member = expr.member();
            cast::upcast_ref(input, member.declaring_type())
                .and_then(|object| member.get(object))
                .map(Value::Borrowed)
                .ok_or(InvokeError::MemberUnavailable {
                    member: member.name(),
                    actual: input.reflect_type_path(),
                })
        }
        Expr::Convert(expr) => convert(eval(expr.operand(), input)?, expr.ty()),
        Expr::Constant(expr) => Ok(Value::Borrowed(expr.value())),
        Expr::Binary(expr) => {
            let left = eval(expr.left(), input)?;
            let right = eval(expr.right(), input)?;
            let (Some(l), Some(r)) = (left.as_reflect(), right.as_reflect()) else {
                return Err(InvokeError::NotComparable(expr.left().ty().type_path()));
            };
            let equal = l
                .reflect_partial_eq(r)
                .ok_or(InvokeError::NotComparable(l.reflect_type_path()))?;
            let result = match expr.op() {
                BinaryOp::Equal => equal,
                BinaryOp::NotEqual => !equal,
            };
            Ok(Value::Owned(Box::new(result)))
        }
    }
}

fn convert<'a>(value: Value<'a>, target: &'static TypeInfo) -> Result<Value<'a>, InvokeError> {
    let owned = match value {
        Value::Borrowed(value) => match cast::upcast_ref(value, target) {
            Some(value) => return Ok(Value::Borrowed(value)),
            None => value.reflect_clone(),
        },
        Value::Owned(value) => value,
        Value::Foreign(value) => {
            return if (*value).type_id() == target.ty_id() {
                Ok(Value::Foreign(value))
            } else {
                Err(CastError::InvalidCast {
                    from: "foreign value",
                    to: target.type_path(),
                }
                .into())
            };
        }
    };

    Ok(match cast::convert(owned, target)? {
        Converted::Reflect(value) => Value::Owned(value),
        Converted::Foreign(value) => Value::Foreign(value),
    })
}

fn into_result<R: Typed>(value: Value<'_>) -> Result<R, InvokeError> {
    let value = match value {
        Value::Borrowed(value) => value.reflect_clone(),
        Value::Owned(value) => value,
        Value::Foreign(value) => {
            return value
                .downcast::<R>()
                .map(|value| *value)
                .map_err(|_| InvokeError::ResultMismatch {
                    expected: R::type_path(),
                    actual: "foreign value",
                });
        }
    };

    let value = match value.take::<R>() {
        Ok(result) => return Ok(result),
        Err(value) => value,
    };

    // Object results box the value once more.
    let actual = (*value).reflect_type_path();
    let boxed: Box<dyn Any> = Box::new(value);
    boxed
        .downcast::<R>()
        .map(|value| *value)
        .map_err(|_| InvokeError::ResultMismatch {
            expected: R::type_path(),
            actual,
        })
}
