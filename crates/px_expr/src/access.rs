//! Builders of property accessor expressions.
//!
//! - [`parameter`]: a fresh placeholder of a type.
//! - [`property`], [`property_with`]: a [`MemberExpr`] reading a property
//!   from a fresh or supplied placeholder.
//! - [`property_lambda`], [`property_lambda_with`]: a [`LambdaExpr`] `T -> R`
//!   reading the property, converted to `R` when it is declared with
//!   another type.
//!
//! Absent inputs are passed as `None` and rejected with
//! [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument).

use px_reflect::info::{PropertyInfo, TypeInfo, Typed};

use crate::{ConvertExpr, Expr, ExprError, LambdaExpr, MemberExpr, ParameterExpr};

// -----------------------------------------------------------------------------
// Builders

/// Creates a new placeholder of type `ty`, named `o`.
///
/// Every call returns a distinct placeholder.
///
/// ```
/// use px_expr::{parameter, ErrorKind};
/// use px_reflect::info::{TypeInfo, Typed};
///
/// let o = parameter(<u8 as Typed>::type_info()).unwrap();
/// assert_eq!(o.ty().type_path(), "u8");
///
/// let err = parameter(None::<&'static TypeInfo>).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
/// ```
pub fn parameter(ty: impl Into<Option<&'static TypeInfo>>) -> Result<ParameterExpr, ExprError> {
    let ty = ty.into().ok_or(ExprError::MissingArgument("ty"))?;
    Ok(ParameterExpr::of_type(ty))
}

/// Builds a read of `member` from a new placeholder of its declaring type.
///
/// ```
/// use px_expr::property;
/// use px_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect, Clone)]
/// struct Account {
///     #[reflect(rename = "Balance")]
///     balance: i64,
/// }
///
/// let access = property(Account::type_info().property("Balance")).unwrap();
///
/// assert_eq!(access.to_string(), "o.Balance");
/// assert_eq!(access.ty().type_path(), "i64");
/// assert_eq!(access.parameter().ty().type_name(), "Account");
/// ```
pub fn property<'m>(member: impl Into<Option<&'m PropertyInfo>>) -> Result<MemberExpr, ExprError> {
    let member = member.into().ok_or(ExprError::MissingArgument("member"))?;
    let placeholder = parameter(member.declaring_type())?;
    property_with(member, &placeholder)
}

/// Builds a read of `member` from `placeholder`.
///
/// Fails with:
/// - [`ExprError::MissingArgument`] if either input is absent, checked first,
/// - [`ExprError::NotAssignable`] if the placeholder type is not the
///   declaring type of the member or a type deriving from it.
pub fn property_with<'m, 'p>(
    member: impl Into<Option<&'m PropertyInfo>>,
    placeholder: impl Into<Option<&'p ParameterExpr>>,
) -> Result<MemberExpr, ExprError> {
    let member = member.into().ok_or(ExprError::MissingArgument("member"))?;
    let placeholder = placeholder
        .into()
        .ok_or(ExprError::MissingArgument("placeholder"))?;

    let declaring = member.declaring_type();
    if !declaring.is_assignable_from(placeholder.ty()) {
        return Err(ExprError::NotAssignable {
            parameter: "placeholder",
            actual: placeholder.ty().type_path(),
            declaring: declaring.type_path(),
            member: member.name(),
        });
    }

    let access = MemberExpr::new(placeholder.clone(), *member);
    log::trace!("built member access `{access}` of type `{}`", access.ty().type_path());
    Ok(access)
}

/// Builds `o => o.member`, typed `T -> R`, from a new placeholder.
///
/// The placeholder has type `T`, which must be the declaring type of the
/// member or derive from it. See [`property_lambda_with`] for the
/// conversion rules.
pub fn property_lambda<'m, T: Typed, R: Typed>(
    member: impl Into<Option<&'m PropertyInfo>>,
) -> Result<LambdaExpr<T, R>, ExprError> {
    let member = member.into().ok_or(ExprError::MissingArgument("member"))?;
    let placeholder = parameter(T::type_info())?;
    lambda_from_access(property_with(member, &placeholder)?)
}

/// Builds `o => o.member`, typed `T -> R`, reading from `placeholder`.
///
/// When the declared type of the member is not `R` the body is wrapped in
/// a [`ConvertExpr`] to `R`. The conversion is checked when the compiled
/// lambda is invoked.
///
/// ```
/// use px_expr::{property_lambda_with, ParameterExpr};
/// use px_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect, Clone)]
/// struct Counter {
///     hits: u32,
/// }
///
/// let o = ParameterExpr::of::<Counter>();
/// let member = Counter::type_info().property("hits");
///
/// let lambda = property_lambda_with::<Counter, u8>(member, &o).unwrap();
/// assert_eq!(lambda.to_string(), "o => Convert(o.hits, u8)");
///
/// let hits = lambda.compile().unwrap();
/// assert_eq!(hits.call(&Counter { hits: 12 }), Ok(12));
/// assert!(hits.call(&Counter { hits: 4096 }).is_err());
/// ```
pub fn property_lambda_with<'m, 'p, T: Typed, R: Typed>(
    member: impl Into<Option<&'m PropertyInfo>>,
    placeholder: impl Into<Option<&'p ParameterExpr>>,
) -> Result<LambdaExpr<T, R>, ExprError> {
    lambda_from_access(property_with(member, placeholder)?)
}

fn lambda_from_access<T: Typed, R: Typed>(access: MemberExpr) -> Result<LambdaExpr<T, R>, ExprError> {
    let parameter = access.parameter().clone();
    let target = R::type_info();

    let body: Expr = if access.ty().ty_id() == target.ty_id() {
        access.into()
    } else {
        ConvertExpr::new(access, target).into()
    };

    let lambda = LambdaExpr::new(body, parameter)?;
    log::trace!("built lambda `{lambda}`");
    Ok(lambda)
}

// -----------------------------------------------------------------------------
// PropertyInfoExt

/// The builders as methods of [`PropertyInfo`].
///
/// ```
/// use px_expr::PropertyInfoExt;
/// use px_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect, Clone)]
/// struct Label {
///     text: String,
/// }
///
/// let text = Label::type_info().property("text").unwrap();
/// let get = text.get_lambda::<Label, String>().unwrap().compile().unwrap();
///
/// assert_eq!(get.call(&Label { text: "on".into() }).unwrap(), "on");
/// ```
pub trait PropertyInfoExt {
    /// See [`property`].
    fn get_expression(&self) -> Result<MemberExpr, ExprError>;

    /// See [`property_with`].
    fn get_expression_with<'p>(
        &self,
        placeholder: impl Into<Option<&'p ParameterExpr>>,
    ) -> Result<MemberExpr, ExprError>;

    /// See [`property_lambda`].
    fn get_lambda<T: Typed, R: Typed>(&self) -> Result<LambdaExpr<T, R>, ExprError>;

    /// See [`property_lambda_with`].
    fn get_lambda_with<'p, T: Typed, R: Typed>(
        &self,
        placeholder: impl Into<Option<&'p ParameterExpr>>,
    ) -> Result<LambdaExpr<T, R>, ExprError>;
}

impl PropertyInfoExt for PropertyInfo {
    #[inline]
    fn get_expression(&self) -> Result<MemberExpr, ExprError> {
        property(self)
    }

    #[inline]
    fn get_expression_with<'p>(
        &self,
        placeholder: impl Into<Option<&'p ParameterExpr>>,
    ) -> Result<MemberExpr, ExprError> {
        property_with(self, placeholder)
    }

    #[inline]
    fn get_lambda<T: Typed, R: Typed>(&self) -> Result<LambdaExpr<T, R>, ExprError> {
        property_lambda(self)
    }

    #[inline]
    fn get_lambda_with<'p, T: Typed, R: Typed>(
        &self,
        placeholder: impl Into<Option<&'p ParameterExpr>>,
    ) -> Result<LambdaExpr<T, R>, ExprError> {
        property_lambda_with(self, placeholder)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::{String, ToString};

    use px_reflect::cast::CastError;
    use px_reflect::derive::Reflect;
    use px_reflect::impl_interface;
    use px_reflect::Object;
    use px_reflect::info::{PropertyInfo, TypeInfo, TypePath, Typed};

    use super::*;
    use crate::{ErrorKind, Expr, InvokeError};

    pub trait TestPropertyBase: Send + Sync {
        fn property(&self) -> &str {
            "Hello from test base."
        }
    }

    impl_interface!(TestPropertyBase);

    #[derive(Reflect, Clone, Debug, PartialEq)]
    #[reflect(implements(TestPropertyBase), partial_eq)]
    struct TestPropertyExtended {
        id: u32,
    }

    impl TestPropertyBase for TestPropertyExtended {
        fn property(&self) -> &str {
            "Hello from test extended."
        }
    }

    #[derive(Reflect, Clone)]
    struct Test {
        #[reflect(rename = "Property")]
        property: TestPropertyExtended,
    }

    #[derive(Reflect, Clone)]
    struct Unrelated {
        value: i32,
    }

    #[derive(Reflect, Clone, Debug, PartialEq)]
    struct Entity {
        #[reflect(rename = "Id")]
        id: i64,
    }

    #[derive(Reflect, Clone)]
    struct Player {
        #[reflect(base)]
        entity: Entity,
        name: String,
    }

    #[derive(Reflect, Clone)]
    struct Team {
        #[reflect(rename = "Leader")]
        leader: Player,
    }

    fn test_property() -> &'static PropertyInfo {
        Test::type_info().property("Property").unwrap()
    }

    fn test_value() -> Test {
        Test {
            property: TestPropertyExtended { id: 1 },
        }
    }

    #[test]
    fn parameter_has_type_and_fresh_identity() {
        let a = parameter(Test::type_info()).unwrap();
        let b = parameter(Test::type_info()).unwrap();

        assert_eq!(a.ty().ty_id(), Test::type_info().ty_id());
        assert_eq!(a.name(), "o");
        assert_ne!(a, b);

        let err = parameter(None::<&'static TypeInfo>).unwrap_err();
        assert_eq!(err, ExprError::MissingArgument("ty"));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn access_uses_declaring_type() {
        let access = property(test_property()).unwrap();

        assert_eq!(access.member(), test_property());
        assert_eq!(access.ty().ty_id(), TestPropertyExtended::type_info().ty_id());
        assert_eq!(access.parameter().ty().ty_id(), Test::type_info().ty_id());
        assert_eq!(access.to_string(), "o.Property");

        // Every call mints a new placeholder.
        let other = test_property().get_expression().unwrap();
        assert_ne!(access.parameter(), other.parameter());
        assert_ne!(access, other);
    }

    #[test]
    fn access_keeps_supplied_placeholder() {
        let o = ParameterExpr::of::<Test>();
        let access = property_with(test_property(), &o).unwrap();

        assert_eq!(access.parameter(), &o);
        assert_eq!(test_property().get_expression_with(&o).unwrap(), access);
    }

    #[test]
    fn missing_arguments() {
        let o = ParameterExpr::of::<Test>();
        let none = None::<&PropertyInfo>;

        let err = property(none).unwrap_err();
        assert_eq!(err, ExprError::MissingArgument("member"));

        let err = property_with(none, &o).unwrap_err();
        assert_eq!(err, ExprError::MissingArgument("member"));

        let err = property_with(test_property(), None::<&ParameterExpr>).unwrap_err();
        assert_eq!(err, ExprError::MissingArgument("placeholder"));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        // Absent inputs are reported before incompatible ones.
        let err = property_with(none, &ParameterExpr::of::<Unrelated>()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = property_lambda::<Test, Object>(none).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = property_lambda_with::<Test, Object>(test_property(), None::<&ParameterExpr>)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn placeholder_of_unrelated_type() {
        let o = ParameterExpr::of::<Unrelated>();
        let err = property_with(test_property(), &o).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidOperation);
        let message = err.to_string();
        assert!(message.contains("`placeholder`"));
        assert!(message.contains(Unrelated::type_path()));
        assert!(message.contains(Test::type_path()));

        // A placeholder typed as an object is not known to be a `Test`.
        let o = ParameterExpr::of::<Object>();
        let err = property_with(test_property(), &o).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOperation);

        let err = property_lambda_with::<Object, Object>(test_property(), &o).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOperation);
    }

    #[test]
    fn lambda_with_declared_type() {
        let lambda = property_lambda::<Test, TestPropertyExtended>(test_property()).unwrap();

        let Expr::Member(access) = lambda.body() else {
            panic!("expected a member access, got `{}`", lambda.body());
        };
        assert_eq!(access.parameter(), lambda.parameter());
        assert_eq!(lambda.to_string(), "o => o.Property");

        let get = lambda.compile().unwrap();
        assert_eq!(get.call(&test_value()), Ok(TestPropertyExtended { id: 1 }));
    }

    #[test]
    fn lambda_to_interface_keeps_behavior() {
        let lambda = test_property()
            .get_lambda::<Test, Box<dyn TestPropertyBase>>()
            .unwrap();

        let Expr::Convert(convert) = lambda.body() else {
            panic!("expected a conversion, got `{}`", lambda.body());
        };
        assert_eq!(
            convert.ty().ty_id(),
            <Box<dyn TestPropertyBase>>::type_info().ty_id()
        );
        assert_eq!(lambda.to_string(), "o => Convert(o.Property, TestPropertyBase)");

        let get = lambda.compile().unwrap().into_fn();
        let result = get(&test_value()).unwrap();
        assert_eq!(result.property(), "Hello from test extended.");
    }

    #[test]
    fn lambda_to_object() {
        let lambda = property_lambda::<Test, Object>(test_property()).unwrap();
        assert!(matches!(lambda.body(), Expr::Convert(_)));

        let result = lambda.compile().unwrap().call(&test_value()).unwrap();
        assert_eq!(
            result.downcast_ref::<TestPropertyExtended>(),
            Some(&TestPropertyExtended { id: 1 })
        );
    }

    #[test]
    fn lambda_parameter_is_access_placeholder() {
        let o = ParameterExpr::of::<Test>();
        let lambda = property_lambda_with::<Test, Object>(test_property(), &o).unwrap();

        assert_eq!(lambda.parameter(), &o);
        let Expr::Convert(convert) = lambda.body() else {
            panic!("expected a conversion");
        };
        let Expr::Member(access) = convert.operand() else {
            panic!("expected a member access");
        };
        assert_eq!(access.parameter(), &o);
    }

    #[test]
    fn lambda_with_wrong_input_type() {
        let o = ParameterExpr::of::<Test>();
        let err = property_lambda_with::<Unrelated, Object>(test_property(), &o).unwrap_err();

        assert_eq!(
            err,
            ExprError::ParameterType {
                expected: Unrelated::type_path(),
                actual: Test::type_path(),
            }
        );
    }

    #[test]
    fn lambda_to_incompatible_result() {
        // The conversion is only checked once a value is read.
        let lambda = property_lambda::<Test, String>(test_property()).unwrap();
        assert_eq!(lambda.to_string(), "o => Convert(o.Property, String)");

        let get = lambda.compile().unwrap();
        assert_eq!(
            get.call(&test_value()),
            Err(InvokeError::Cast(CastError::InvalidCast {
                from: TestPropertyExtended::type_path(),
                to: String::type_path(),
            }))
        );
    }

    #[test]
    fn inherited_property_on_derived_placeholder() {
        let id = Player::type_info().property("Id").unwrap();
        assert_eq!(id.declaring_type().ty_id(), Entity::type_info().ty_id());

        let o = ParameterExpr::of::<Player>();
        let lambda = property_lambda_with::<Player, i64>(id, &o).unwrap();
        let get = lambda.compile().unwrap();

        let player = Player {
            entity: Entity { id: 42 },
            name: "ferris".into(),
        };
        assert_eq!(get.call(&player), Ok(42));

        let name = Player::type_info().property("name").unwrap();
        let get = property_lambda::<Player, Object>(name).unwrap().compile().unwrap();
        let result = get.call(&player).unwrap();
        assert_eq!(result.downcast_ref::<String>().map(String::as_str), Some("ferris"));

        // A base placeholder cannot read a member of the derived type.
        let o = ParameterExpr::of::<Entity>();
        let err = property_with(name, &o).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOperation);
    }

    #[test]
    fn lambda_to_base_class() {
        let leader = Team::type_info().property("Leader").unwrap();
        let lambda = property_lambda::<Team, Entity>(leader).unwrap();
        assert_eq!(lambda.to_string(), "o => Convert(o.Leader, Entity)");

        let team = Team {
            leader: Player {
                entity: Entity { id: 7 },
                name: "lead".into(),
            },
        };
        let get = lambda.compile().unwrap();
        assert_eq!(get.call(&team), Ok(team.leader.entity.clone()));
    }

    #[test]
    fn lambda_placeholder_has_input_type() {
        let id = Player::type_info().property("Id").unwrap();
        let lambda = property_lambda::<Player, i64>(id).unwrap();

        assert_eq!(lambda.parameter().ty().ty_id(), Player::type_info().ty_id());
        assert_eq!(lambda.to_string(), "o => o.Id");

        let player = Player {
            entity: Entity { id: 42 },
            name: "ferris".into(),
        };
        assert_eq!(lambda.compile().unwrap().call(&player), Ok(42));
    }

    #[test]
    fn lambda_from_unrelated_input_type() {
        let err = property_lambda::<Unrelated, Object>(test_property()).unwrap_err();

        assert!(matches!(
            err,
            ExprError::NotAssignable {
                parameter: "placeholder",
                ..
            }
        ));
        assert_eq!(err.kind(), ErrorKind::InvalidOperation);
    }

    #[test]
    fn numeric_conversion_fails_at_invoke() {
        let value = Unrelated::type_info().property("value").unwrap();

        // Building always succeeds.
        let get = property_lambda::<Unrelated, u8>(value).unwrap().compile().unwrap();

        assert_eq!(get.call(&Unrelated { value: 200 }), Ok(200));
        assert_eq!(
            get.call(&Unrelated { value: -1 }),
            Err(InvokeError::Cast(CastError::Overflow {
                from: "i32",
                to: "u8",
            }))
        );

        let get = property_lambda::<Unrelated, f64>(value).unwrap().compile().unwrap();
        assert_eq!(get.call(&Unrelated { value: -3 }), Ok(-3.0));
    }

    #[test]
    fn composed_into_larger_tree() {
        let o = ParameterExpr::of::<Test>();
        let access = property_with(test_property(), &o).unwrap();
        assert_eq!(access.member(), test_property());

        let check = Expr::not_equal(access, Expr::constant(TestPropertyExtended { id: 1 })).unwrap();
        let lambda = LambdaExpr::<Test, bool>::new(check, o).unwrap();
        let is_changed = lambda.compile().unwrap();

        assert_eq!(is_changed.call(&test_value()), Ok(false));
        assert_eq!(
            is_changed.call(&Test {
                property: TestPropertyExtended { id: 2 },
            }),
            Ok(true)
        );
    }

    #[test]
    fn foreign_placeholder_is_unbound() {
        // Built from a placeholder the lambda does not own.
        let access = property(test_property()).unwrap();
        let lambda = LambdaExpr::<Test, TestPropertyExtended>::new(access, ParameterExpr::of::<Test>())
            .unwrap();

        let err = lambda.compile().unwrap_err();
        assert!(matches!(err, ExprError::UnboundParameter { .. }));
        assert_eq!(err.kind(), ErrorKind::InvalidOperation);
    }
}
