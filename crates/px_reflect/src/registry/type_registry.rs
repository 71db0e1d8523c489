use alloc::string::String;
use alloc::vec::Vec;
use core::any::TypeId;

use crate::Object;
use crate::hash::{HashMap, HashSet};
use crate::info::{PropertyInfo, TypeInfo, Typed};

// -----------------------------------------------------------------------------
// TypeRegistry

/// A registry of reflected types.
///
/// Maps [`TypeId`]s, full type paths and short type names to the static
/// [`TypeInfo`] of the registered types. Registering a class also registers
/// the types of its properties, its base class and its interfaces.
///
/// Short names shared by two registered types are ambiguous and can only
/// be looked up by full path.
///
/// ```
/// use px_reflect::{derive::Reflect, registry::TypeRegistry};
///
/// #[derive(Reflect, Clone)]
/// struct Item {
///     count: u32,
/// }
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Item>();
///
/// let info = registry.get_with_type_name("Item").unwrap();
/// assert!(info.property("count").is_some());
/// assert!(registry.get_property("Item", "count").is_some());
/// ```
pub struct TypeRegistry {
    type_info_table: HashMap<TypeId, &'static TypeInfo>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    type_name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
}

impl Default for TypeRegistry {
    /// See [`TypeRegistry::new`].
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Creates an empty [`TypeRegistry`].
    #[inline]
    pub fn empty() -> Self {
        Self {
            type_info_table: HashMap::default(),
            type_path_to_id: HashMap::default(),
            type_name_to_id: HashMap::default(),
            ambiguous_names: HashSet::default(),
        }
    }

    /// Creates a registry with the primitive types and [`Object`].
    ///
    /// - `()` `bool` `char`
    /// - `i8 - i128` `isize`
    /// - `u8 - u128` `usize`
    /// - `f32` `f64`
    /// - `String` `&'static str`
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register::<()>();
        registry.register::<bool>();
        registry.register::<char>();
        registry.register::<u8>();
        registry.register::<u16>();
        registry.register::<u32>();
        registry.register::<u64>();
        registry.register::<u128>();
        registry.register::<usize>();
        registry.register::<i8>();
        registry.register::<i16>();
        registry.register::<i32>();
        registry.register::<i64>();
        registry.register::<i128>();
        registry.register::<isize>();
        registry.register::<f32>();
        registry.register::<f64>();
        registry.register::<String>();
        registry.register::<&'static str>();
        registry.register::<Object>();
        registry
    }

    // The type must not be registered yet.
    fn add_new_type_indices(&mut self, info: &'static TypeInfo) {
        let ty = info.ty();
        let type_name = ty.name();

        if !self.ambiguous_names.contains(type_name) {
            if let Some(other) = self.type_name_to_id.remove(type_name) {
                log::warn!(
                    "type name `{type_name}` is ambiguous between `{}` and `{}`",
                    ty.path(),
                    self.type_info_table
                        .get(&other)
                        .map_or("<unknown>", |info| info.type_path()),
                );
                self.ambiguous_names.insert(type_name);
            } else {
                self.type_name_to_id.insert(type_name, ty.id());
            }
        }

        self.type_path_to_id.insert(ty.path(), ty.id());
    }

    /// Registers the type `T` and its dependencies.
    ///
    /// Does nothing if `T` is already registered.
    #[inline]
    pub fn register<T: Typed + ?Sized>(&mut self) {
        self.register_info(T::type_info());
    }

    /// Registers a type from its info, along with its dependencies.
    ///
    /// Returns `false` if the type was already registered, in which case
    /// its dependencies are not visited again.
    pub fn register_info(&mut self, info: &'static TypeInfo) -> bool {
        if self.type_info_table.contains_key(&info.ty_id()) {
            return false;
        }
        self.type_info_table.insert(info.ty_id(), info);
        self.add_new_type_indices(info);
        log::debug!("registered type `{}`", info.type_path());

        if let TypeInfo::Class(class) = info {
            let mut dependencies: Vec<&'static TypeInfo> = class
                .properties()
                .iter()
                .map(PropertyInfo::property_type)
                .collect();
            dependencies.extend(class.base_type_info());
            dependencies.extend(class.interfaces().iter().map(|imp| imp.interface()));

            for dependency in dependencies {
                self.register_info(dependency);
            }
        }
        true
    }

    /// Registers every type marked `#[reflect(auto_register)]`.
    ///
    /// Returns `true` if the static registration list was available.
    /// Always `false` without the `auto_register` feature.
    ///
    /// ```
    /// use px_reflect::{derive::Reflect, registry::TypeRegistry};
    ///
    /// #[derive(Reflect, Clone)]
    /// #[reflect(auto_register)]
    /// struct Config {
    ///     retries: u8,
    /// }
    ///
    /// let mut registry = TypeRegistry::empty();
    /// if registry.auto_register() {
    ///     assert!(registry.get_with_type_name("Config").is_some());
    /// }
    /// ```
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            crate::__macro_exports::auto_register::register_types(self);
            true
        }
        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }

    /// Returns `true` if the type is registered.
    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.type_info_table.contains_key(&type_id)
    }

    /// Returns the info of a registered type.
    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.type_info_table.get(&type_id).copied()
    }

    /// Returns the info of the registered type with the given full path.
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&'static TypeInfo> {
        self.get(*self.type_path_to_id.get(type_path)?)
    }

    /// Returns the info of the registered type with the given short name.
    ///
    /// Returns `None` for [ambiguous](Self::is_ambiguous) names.
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&'static TypeInfo> {
        self.get(*self.type_name_to_id.get(type_name)?)
    }

    /// Looks up a type by full path, then by short name.
    pub fn find(&self, name: &str) -> Option<&'static TypeInfo> {
        self.get_with_type_path(name)
            .or_else(|| self.get_with_type_name(name))
    }

    /// Looks up the property `property` of the type named `type_name`.
    ///
    /// The type is found as by [`find`](Self::find), inherited properties
    /// are included.
    pub fn get_property(&self, type_name: &str, property: &str) -> Option<&'static PropertyInfo> {
        self.find(type_name)?.property(property)
    }

    /// Returns `true` if the short name is shared by several types.
    #[inline]
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    /// Returns the number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.type_info_table.len()
    }

    /// Iterates the registered types, in no particular order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'static TypeInfo> + '_ {
        self.type_info_table.values().copied()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use core::any::TypeId;

    use super::TypeRegistry;
    use crate::Object;
    use crate::info::{TypeKind, Typed};

    mod first {
        #[derive(crate::derive::Reflect, Clone)]
        pub struct Node {
            pub weight: f32,
        }
    }

    mod second {
        use alloc::string::String;

        #[derive(crate::derive::Reflect, Clone)]
        pub struct Node {
            pub label: String,
        }
    }

    #[derive(crate::derive::Reflect, Clone)]
    struct Graph {
        root: first::Node,
        #[reflect(base)]
        meta: Meta,
    }

    #[derive(crate::derive::Reflect, Clone)]
    struct Meta {
        version: u16,
    }

    #[test]
    fn primitives_and_object() {
        let registry = TypeRegistry::new();

        assert!(registry.contains(TypeId::of::<u8>()));
        assert!(registry.contains(TypeId::of::<String>()));
        assert_eq!(
            registry.get_with_type_name("Object").map(|info| info.kind()),
            Some(TypeKind::Object)
        );
        assert!(registry.get_with_type_path("px_reflect::Object").is_some());
        assert!(registry.get(TypeId::of::<Object>()).is_some());
    }

    #[test]
    fn registers_dependencies_once() {
        let mut registry = TypeRegistry::empty();

        assert!(registry.register_info(Graph::type_info()));
        assert!(!registry.register_info(Graph::type_info()));

        assert!(registry.contains(TypeId::of::<first::Node>()));
        assert!(registry.contains(TypeId::of::<Meta>()));
        assert!(registry.contains(TypeId::of::<f32>()));
        assert!(registry.contains(TypeId::of::<u16>()));
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn ambiguous_names() {
        let mut registry = TypeRegistry::new();
        registry.register::<first::Node>();
        assert!(registry.get_with_type_name("Node").is_some());

        registry.register::<second::Node>();
        assert!(registry.is_ambiguous("Node"));
        assert!(registry.get_with_type_name("Node").is_none());

        let path = <second::Node as crate::info::TypePath>::type_path();
        assert!(registry.find(path).is_some());
        assert!(registry.get_property(path, "label").is_some());
        assert!(registry.get_property(path, "weight").is_none());
    }

    #[test]
    fn inherited_property_lookup() {
        let mut registry = TypeRegistry::empty();
        registry.register::<Graph>();

        let version = registry.get_property("Graph", "version").unwrap();
        assert_eq!(version.declaring_type().type_name(), "Meta");
    }
}
