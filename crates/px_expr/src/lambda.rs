use core::fmt;
use core::marker::PhantomData;

use px_reflect::Reflect;
use px_reflect::info::Typed;

use crate::{CompiledLambda, Expr, ExprError, ParameterExpr};

/// A single-argument function `T -> R` over an expression body.
///
/// ```
/// use px_expr::{Expr, LambdaExpr, ParameterExpr};
///
/// let o = ParameterExpr::of::<u32>();
/// let is_zero = Expr::equal(o.clone(), Expr::constant(0_u32)).unwrap();
///
/// let lambda = LambdaExpr::<u32, bool>::new(is_zero, o).unwrap();
/// assert_eq!(lambda.to_string(), "o => (o == 0)");
///
/// let compiled = lambda.compile().unwrap();
/// assert_eq!(compiled.call(&0), Ok(true));
/// assert_eq!(compiled.call(&7), Ok(false));
/// ```
pub struct LambdaExpr<T, R> {
    parameter: ParameterExpr,
    body: Expr,
    _marker: PhantomData<fn(&T) -> R>,
}

impl<T: Typed, R: Typed> LambdaExpr<T, R> {
    /// Creates a lambda.
    ///
    /// The parameter must be of type `T` and the body of a type
    /// assignable to `R`. Whether the body only uses `parameter` is
    /// checked by [`compile`](Self::compile).
    pub fn new(body: impl Into<Expr>, parameter: ParameterExpr) -> Result<Self, ExprError> {
        let body = body.into();

        if parameter.ty().ty_id() != T::type_info().ty_id() {
            return Err(ExprError::ParameterType {
                expected: T::type_path(),
                actual: parameter.ty().type_path(),
            });
        }
        if !R::type_info().is_assignable_from(body.ty()) {
            return Err(ExprError::BodyType {
                expected: R::type_path(),
                actual: body.ty().type_path(),
            });
        }

        Ok(Self {
            parameter,
            body,
            _marker: PhantomData,
        })
    }
}

impl<T, R> LambdaExpr<T, R> {
    /// Returns the parameter.
    #[inline]
    pub fn parameter(&self) -> &ParameterExpr {
        &self.parameter
    }

    /// Returns the body.
    #[inline]
    pub fn body(&self) -> &Expr {
        &self.body
    }

    /// Consumes the lambda, returning its parameter and body.
    #[inline]
    pub fn into_parts(self) -> (ParameterExpr, Expr) {
        (self.parameter, self.body)
    }
}

impl<T: Reflect + Typed, R: Typed> LambdaExpr<T, R> {
    /// Compiles the lambda into a callable accessor.
    ///
    /// Fails with [`ExprError::UnboundParameter`] if the body uses a
    /// placeholder other than the lambda parameter.
    pub fn compile(&self) -> Result<CompiledLambda<T, R>, ExprError> {
        self.body.for_each_parameter(&mut |used| {
            if *used == self.parameter {
                Ok(())
            } else {
                Err(ExprError::UnboundParameter {
                    name: used.name().into(),
                    ty: used.ty().type_path(),
                })
            }
        })?;

        log::debug!(
            "compiled lambda `{self}` as `{} -> {}`",
            T::type_path(),
            R::type_path()
        );
        Ok(CompiledLambda::new(self.parameter.clone(), self.body.clone()))
    }
}

impl<T, R> Clone for LambdaExpr<T, R> {
    fn clone(&self) -> Self {
        Self {
            parameter: self.parameter.clone(),
            body: self.body.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, R> PartialEq for LambdaExpr<T, R> {
    fn eq(&self, other: &Self) -> bool {
        self.parameter == other.parameter && self.body == other.body
    }
}

impl<T, R> fmt::Debug for LambdaExpr<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LambdaExpr")
            .field("parameter", &self.parameter)
            .field("body", &self.body)
            .finish()
    }
}

impl<T, R> fmt::Display for LambdaExpr<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.parameter, self.body)
    }
}
