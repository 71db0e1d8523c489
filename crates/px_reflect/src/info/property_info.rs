use core::any::TypeId;
use core::fmt;

use crate::Reflect;
use crate::info::{TypeInfo, Typed};

/// Reads a property out of a reflected value of its declaring type.
///
/// Returns `None` if the value is not of the declaring type.
pub type Getter = for<'a> fn(&'a (dyn Reflect + 'static)) -> Option<&'a (dyn Reflect + 'static)>;

// -----------------------------------------------------------------------------
// PropertyInfo

/// A readable data member of a class.
///
/// Produced by [`#[derive(Reflect)]`](crate::derive::Reflect), one for each
/// reflected field. Two descriptors are equal when they name the same member
/// of the same declaring type.
///
/// ```
/// use px_reflect::{derive::Reflect, info::Typed, Reflect};
///
/// #[derive(Reflect, Clone)]
/// struct Person {
///     #[reflect(rename = "Name")]
///     name: String,
/// }
///
/// let person = Person { name: "Ada".into() };
/// let property = Person::type_info().property("Name").unwrap();
///
/// assert_eq!(property.property_type().type_path(), "alloc::string::String");
/// assert_eq!(property.declaring_type().type_name(), "Person");
///
/// let value = property.get(&person).unwrap();
/// assert_eq!(value.downcast_ref::<String>().unwrap(), "Ada");
/// ```
#[derive(Clone, Copy)]
pub struct PropertyInfo {
    name: &'static str,
    declaring_id: TypeId,
    // Created on first access, a function pointer delays it.
    declaring_type: fn() -> &'static TypeInfo,
    property_type: fn() -> &'static TypeInfo,
    getter: Getter,
}

impl PropertyInfo {
    /// Creates a property named `name` of type `P` declared on `D`.
    #[inline]
    pub const fn new<D: Typed, P: Typed>(name: &'static str, getter: Getter) -> Self {
        Self {
            name,
            declaring_id: TypeId::of::<D>(),
            declaring_type: D::type_info,
            property_type: P::type_info,
            getter,
        }
    }

    /// Returns the property name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the type that declares this property.
    #[inline]
    pub fn declaring_type(&self) -> &'static TypeInfo {
        (self.declaring_type)()
    }

    /// Returns the declared type of this property.
    #[inline]
    pub fn property_type(&self) -> &'static TypeInfo {
        (self.property_type)()
    }

    /// Reads the property from `object`.
    ///
    /// `object` must be exactly the declaring type. Use
    /// [`cast::upcast_ref`](crate::cast::upcast_ref) first for derived types.
    #[inline]
    pub fn get<'a>(&self, object: &'a (dyn Reflect + 'static)) -> Option<&'a (dyn Reflect + 'static)> {
        (self.getter)(object)
    }
}

impl PartialEq for PropertyInfo {
    fn eq(&self, other: &Self) -> bool {
        self.declaring_id == other.declaring_id && self.name == other.name
    }
}

impl Eq for PropertyInfo {}

impl fmt::Debug for PropertyInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyInfo")
            .field("name", &self.name)
            .field("declaring_type", &self.declaring_type().type_path())
            .field("property_type", &self.property_type().type_path())
            .finish()
    }
}
