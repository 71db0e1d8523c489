//! Items used by the code generated by `px_reflect_derive` and by
//! [`impl_interface!`](crate::impl_interface). Not public API.

pub use alloc::boxed::Box;
pub use core::any::Any;

#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::registry::TypeRegistry;

    /// A registration function submitted by `#[reflect(auto_register)]`.
    pub struct __AutoRegisterFn(pub fn(&mut TypeRegistry));

    inventory::collect!(__AutoRegisterFn);

    pub(crate) fn register_types(registry: &mut TypeRegistry) {
        for item in inventory::iter::<__AutoRegisterFn> {
            (item.0)(registry);
        }
    }
}
