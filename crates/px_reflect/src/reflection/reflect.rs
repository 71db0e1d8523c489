use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::impls::NonGenericTypeInfoCell;
use crate::info::{DynamicTypePath, DynamicTyped, ObjectInfo, TypeInfo, TypePath, Typed};

// -----------------------------------------------------------------------------
// Reflect

/// A reflected value: a `'static` value whose type is known at runtime.
///
/// Usually implemented by [`#[derive(Reflect)]`](crate::derive::Reflect).
/// The primitive numbers, `bool`, `char`, `String`, `&'static str` and `()`
/// implement it out of the box.
///
/// ```
/// use px_reflect::Reflect;
///
/// let value: Box<dyn Reflect> = 5_u16.into_boxed_reflect();
///
/// assert!(value.is::<u16>());
/// assert_eq!(value.reflect_partial_eq(&5_u16), Some(true));
/// assert_eq!(format!("{value:?}"), "5");
/// ```
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any + 'static {
    /// Casts this type to a reflected reference.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Boxes this value as a reflected value.
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Returns the [`TypeId`] of the underlying type.
    ///
    /// `Box<dyn Reflect>::type_id` returns the id of the box itself,
    /// this method does not.
    ///
    /// ```
    /// use px_reflect::Reflect;
    /// use core::any::{Any, TypeId};
    ///
    /// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
    ///
    /// assert!(x.type_id() != TypeId::of::<i32>());
    /// assert!(x.ty_id() == TypeId::of::<i32>());
    /// ```
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Clones the value into a new box.
    fn reflect_clone(&self) -> Box<dyn Reflect>;

    /// Compares with another reflected value.
    ///
    /// Returns `None` if the comparison is not supported, `Some(false)`
    /// for values of different types.
    #[inline]
    fn reflect_partial_eq(&self, _other: &dyn Reflect) -> Option<bool> {
        None
    }

    /// Debug formatter, used by `impl Debug for dyn Reflect`.
    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reflect({})", self.reflect_type_path())
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// ```
    /// # use px_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10_i32.into_boxed_reflect();
    ///
    /// assert_eq!(x.downcast_ref::<i32>(), Some(&10));
    /// assert_eq!(x.downcast_ref::<u32>(), None);
    /// ```
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, consuming the trait object.
    ///
    /// Returns `Err(self)` if the underlying value is not a `T`.
    #[inline]
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if self.is::<T>() {
            #[expect(unsafe_code, reason = "type is already checked")]
            Ok(unsafe { <Box<dyn Any>>::downcast::<T>(self).unwrap_unchecked() })
        } else {
            Err(self)
        }
    }

    /// Downcasts the value to type `T`, unboxing it.
    ///
    /// ```
    /// # use px_reflect::Reflect;
    /// let x: Box<dyn Reflect> = String::from("hi").into_boxed_reflect();
    ///
    /// let x = x.take::<u8>().unwrap_err();
    /// assert_eq!(x.take::<String>().unwrap(), "hi");
    /// ```
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Object

/// The universal object type.
///
/// Any reflected value converts to it by boxing, so every [`TypeInfo`] is
/// assignable to `<Object as Typed>::type_info()`.
///
/// `Object` itself is not [`Reflect`]: it is a result type for accessors
/// and conversions, not a property type. Being [`Typed`], a boxed value
/// reports the object info through [`DynamicTyped`], so dereference it
/// first to reach the info of the value inside.
pub type Object = Box<dyn Reflect>;

impl TypePath for Object {
    #[inline]
    fn type_path() -> &'static str {
        "px_reflect::Object"
    }

    #[inline]
    fn type_name() -> &'static str {
        "Object"
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Object"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("px_reflect")
    }
}

impl Typed for Object {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Object(ObjectInfo::new::<Self>()))
    }
}

#[cfg(test)]
mod tests {
    use alloc::{boxed::Box, format, string::String};

    use crate::Object;
    use crate::Reflect;
    use crate::info::{TypeKind, Typed};

    #[test]
    fn downcast_and_take() {
        let mut value: Box<dyn Reflect> = 3_i64.into_boxed_reflect();

        assert!(value.is::<i64>());
        *value.downcast_mut::<i64>().unwrap() += 1;
        assert_eq!(value.downcast_ref::<i64>(), Some(&4));

        let value = value.take::<i32>().unwrap_err();
        assert_eq!(value.take::<i64>().unwrap(), 4);
    }

    #[test]
    fn clone_keeps_type() {
        let value = String::from("text");
        let cloned = value.reflect_clone();

        assert!(cloned.is::<String>());
        assert_eq!(cloned.reflect_partial_eq(&value), Some(true));
        assert_eq!(cloned.reflect_partial_eq(&1_u8), Some(false));
        assert_eq!(format!("{cloned:?}"), "\"text\"");
    }

    #[test]
    fn object_info() {
        let info = <Object as Typed>::type_info();

        assert_eq!(info.kind(), TypeKind::Object);
        assert_eq!(info.type_path(), "px_reflect::Object");
        assert!(info.is_assignable_from(<bool as Typed>::type_info()));
    }
}
