// -----------------------------------------------------------------------------
// Modules

mod auto_register;
mod trait_reflect;
mod trait_type_path;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use auto_register::impl_auto_register;
pub(crate) use trait_reflect::impl_trait_reflect;
pub(crate) use trait_type_path::impl_trait_type_path;
pub(crate) use trait_typed::impl_trait_typed;
