use crate::info::{Type, TypePath, impl_type_fn};

/// Info of the universal object type, [`Object`](crate::Object).
///
/// Every reflected type is assignable to it.
#[derive(Clone, Debug)]
pub struct ObjectInfo {
    ty: Type,
}

impl ObjectInfo {
    impl_type_fn!(ty);

    #[inline]
    pub const fn new<T: TypePath + ?Sized>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}
