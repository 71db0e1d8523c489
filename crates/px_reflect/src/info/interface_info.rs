use crate::info::{Type, TypePath, impl_type_fn};

/// A container for compile-time interface info.
///
/// An interface is a trait object type `Box<dyn Trait>`, declared with
/// [`impl_interface!`](crate::impl_interface). Classes list the interfaces
/// they implement with `#[reflect(implements(Trait))]`.
///
/// Interfaces have no properties. Converting a class value to an interface
/// keeps the dynamic behavior of the class.
#[derive(Clone, Debug)]
pub struct InterfaceInfo {
    ty: Type,
}

impl InterfaceInfo {
    impl_type_fn!(ty);

    /// Creates a new [`InterfaceInfo`].
    #[inline]
    pub const fn new<T: TypePath + ?Sized>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}
