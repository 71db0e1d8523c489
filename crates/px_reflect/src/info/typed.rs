use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect), by the
/// primitive types of this crate, by [`Object`](crate::Object) and by the
/// interface types declared with [`impl_interface!`](crate::impl_interface).
///
/// Manual implementations store the info in a [`NonGenericTypeInfoCell`]:
///
/// ```
/// use px_reflect::{
///     impls::NonGenericTypeInfoCell,
///     info::{ClassInfo, PropertyInfo, TypeInfo, TypePath, Typed},
/// };
///
/// #[derive(Clone)]
/// struct Point { x: f32 }
///
/// impl TypePath for Point {
///     fn type_path() -> &'static str { "demo::Point" }
///     fn type_name() -> &'static str { "Point" }
///     fn type_ident() -> &'static str { "Point" }
/// }
///
/// impl Typed for Point {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Class(ClassInfo::new::<Self>(&[])))
///     }
/// }
///
/// assert!(Point::type_info().as_class().is_ok());
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
pub trait Typed: TypePath {
    /// Returns the compile-time type information.
    ///
    /// Use [`DynamicTyped`] for dynamic dispatch.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Dynamic dispatch for [`Typed`], implemented for every `Typed` type.
pub trait DynamicTyped {
    /// Returns the [`TypeInfo`] of the underlying type.
    ///
    /// ```
    /// use px_reflect::{info::DynamicTyped, Reflect};
    ///
    /// let value: Box<dyn Reflect> = Box::new(7_u8);
    /// assert_eq!(value.as_ref().reflect_type_info().type_path(), "u8");
    /// ```
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        T::type_info()
    }
}
