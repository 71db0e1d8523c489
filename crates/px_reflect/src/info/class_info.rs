use alloc::boxed::Box;
use core::any::Any;
use core::fmt;

use crate::Reflect;
use crate::hash::HashMap;
use crate::info::{PropertyInfo, Type, TypeInfo, TypePath, impl_type_fn};

// -----------------------------------------------------------------------------
// BaseInfo

/// The base class of a class, modeled by an embedded field.
///
/// A struct with a `#[reflect(base)]` field IS-A value of that field's type:
/// it exposes the base properties and can be upcast to it.
#[derive(Clone, Copy)]
pub struct BaseInfo {
    type_info: fn() -> &'static TypeInfo,
    project_ref: fn(&dyn Reflect) -> Option<&dyn Reflect>,
    project_owned: fn(Box<dyn Reflect>) -> Result<Box<dyn Reflect>, Box<dyn Reflect>>,
}

impl BaseInfo {
    /// Creates the base descriptor.
    ///
    /// The projections receive a value of the derived type and return the
    /// embedded base value. A value of any other type is returned unchanged
    /// as `None` / `Err`.
    #[inline]
    pub const fn new(
        type_info: fn() -> &'static TypeInfo,
        project_ref: fn(&dyn Reflect) -> Option<&dyn Reflect>,
        project_owned: fn(Box<dyn Reflect>) -> Result<Box<dyn Reflect>, Box<dyn Reflect>>,
    ) -> Self {
        Self {
            type_info,
            project_ref,
            project_owned,
        }
    }

    /// Returns the [`TypeInfo`] of the base class.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    /// Borrows the base part of a derived value.
    #[inline]
    pub fn project_ref<'a>(&self, value: &'a dyn Reflect) -> Option<&'a dyn Reflect> {
        (self.project_ref)(value)
    }

    /// Moves the base part out of a derived value.
    #[inline]
    pub fn project_owned(&self, value: Box<dyn Reflect>) -> Result<Box<dyn Reflect>, Box<dyn Reflect>> {
        (self.project_owned)(value)
    }
}

impl fmt::Debug for BaseInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BaseInfo")
            .field(&self.type_info().type_path())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// InterfaceImpl

/// Records that a class implements an interface.
///
/// The cast converts an owned value of the class into the interface's trait
/// object (`Box<dyn Trait>`), itself boxed as `dyn Any`.
#[derive(Clone, Copy)]
pub struct InterfaceImpl {
    interface: fn() -> &'static TypeInfo,
    cast: fn(Box<dyn Reflect>) -> Result<Box<dyn Any>, Box<dyn Reflect>>,
}

impl InterfaceImpl {
    #[inline]
    pub const fn new(
        interface: fn() -> &'static TypeInfo,
        cast: fn(Box<dyn Reflect>) -> Result<Box<dyn Any>, Box<dyn Reflect>>,
    ) -> Self {
        Self { interface, cast }
    }

    /// Returns the [`TypeInfo`] of the interface.
    #[inline]
    pub fn interface(&self) -> &'static TypeInfo {
        (self.interface)()
    }

    /// Converts `value` to the interface type.
    #[inline]
    pub fn cast(&self, value: Box<dyn Reflect>) -> Result<Box<dyn Any>, Box<dyn Reflect>> {
        (self.cast)(value)
    }
}

impl fmt::Debug for InterfaceImpl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("InterfaceImpl")
            .field(&self.interface().type_path())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// ClassInfo

/// A container for compile-time class info.
///
/// A class is a named struct with readable properties, an optional base
/// class and a list of implemented interfaces.
///
/// ```
/// use px_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect, Clone)]
/// struct Shape {
///     sides: u32,
/// }
///
/// #[derive(Reflect, Clone)]
/// struct Square {
///     #[reflect(base)]
///     shape: Shape,
///     length: f32,
/// }
///
/// let info = Square::type_info().as_class().unwrap();
///
/// assert_eq!(info.property_len(), 1);
/// assert!(info.own_property("sides").is_none());
/// // Inherited from `Shape`.
/// assert!(info.property("sides").is_some());
/// ```
#[derive(Clone, Debug)]
pub struct ClassInfo {
    ty: Type,
    properties: Box<[PropertyInfo]>,
    indices: HashMap<&'static str, usize>,
    base: Option<BaseInfo>,
    interfaces: Box<[InterfaceImpl]>,
}

impl ClassInfo {
    impl_type_fn!(ty);

    /// Creates a new [`ClassInfo`] without base or interfaces.
    ///
    /// Properties keep the input order.
    pub fn new<T: TypePath>(properties: &[PropertyInfo]) -> Self {
        let indices = properties
            .iter()
            .enumerate()
            .map(|(index, property)| (property.name(), index))
            .collect();

        Self {
            ty: Type::of::<T>(),
            properties: properties.into(),
            indices,
            base: None,
            interfaces: Box::new([]),
        }
    }

    /// Sets the base class.
    #[inline]
    pub fn with_base(self, base: BaseInfo) -> Self {
        Self {
            base: Some(base),
            ..self
        }
    }

    /// Sets the implemented interfaces.
    #[inline]
    pub fn with_interfaces(self, interfaces: &[InterfaceImpl]) -> Self {
        Self {
            interfaces: interfaces.into(),
            ..self
        }
    }

    /// Returns the properties declared on this class, in declaration order.
    #[inline]
    pub fn properties(&self) -> &[PropertyInfo] {
        &self.properties
    }

    /// Returns the number of properties declared on this class.
    #[inline]
    pub fn property_len(&self) -> usize {
        self.properties.len()
    }

    /// Returns the property declared on this class with the given name.
    pub fn own_property(&self, name: &str) -> Option<&PropertyInfo> {
        self.properties.get(*self.indices.get(name)?)
    }

    /// Returns the property with the given name, declared on this class
    /// or inherited from the base chain.
    ///
    /// Properties of the class shadow those of its bases.
    pub fn property(&self, name: &str) -> Option<&PropertyInfo> {
        self.own_property(name).or_else(|| {
            self.base_type_info()
                .and_then(|base| base.property(name))
        })
    }

    /// Returns the base descriptor, if any.
    #[inline]
    pub fn base(&self) -> Option<&BaseInfo> {
        self.base.as_ref()
    }

    /// Returns the [`TypeInfo`] of the base class, if any.
    #[inline]
    pub fn base_type_info(&self) -> Option<&'static TypeInfo> {
        self.base.as_ref().map(BaseInfo::type_info)
    }

    /// Returns the interfaces implemented directly by this class.
    #[inline]
    pub fn interfaces(&self) -> &[InterfaceImpl] {
        &self.interfaces
    }

    /// Returns `true` if this class directly implements `interface`.
    pub fn implements(&self, interface: &TypeInfo) -> bool {
        self.interface_impl(interface).is_some()
    }

    /// Returns the direct implementation of `interface`, if any.
    pub fn interface_impl(&self, interface: &TypeInfo) -> Option<&InterfaceImpl> {
        self.interfaces
            .iter()
            .find(|imp| imp.interface().ty_id() == interface.ty_id())
    }
}
