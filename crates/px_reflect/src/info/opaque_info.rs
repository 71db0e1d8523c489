use crate::info::{Type, TypePath, impl_type_fn};

/// A container for compile-time info of opaque types.
///
/// Opaque types expose no properties and convert only to themselves and
/// to [`Object`](crate::Object). `bool`, `char`, `String`, `&'static str`
/// and `()` are opaque.
#[derive(Clone, Debug)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    impl_type_fn!(ty);

    /// Creates a new [`OpaqueInfo`].
    #[inline]
    pub const fn new<T: TypePath + ?Sized>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}
