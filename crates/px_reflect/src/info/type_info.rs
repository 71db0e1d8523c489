use core::{error, fmt};

use crate::info::{ClassInfo, InterfaceInfo, NumericInfo, ObjectInfo, OpaqueInfo};
use crate::info::{PropertyInfo, Type};

// -----------------------------------------------------------------------------
// TypeKind

/// The "kind" of a reflected type, one per [`TypeInfo`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Interface,
    Numeric,
    Opaque,
    Object,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class => f.pad("Class"),
            Self::Interface => f.pad("Interface"),
            Self::Numeric => f.pad("Numeric"),
            Self::Opaque => f.pad("Opaque"),
            Self::Object => f.pad("Object"),
        }
    }
}

/// Error returned when a [`TypeInfo`] is not the expected [`TypeKind`].
#[derive(Debug)]
pub struct TypeKindError {
    pub expected: TypeKind,
    pub received: TypeKind,
}

impl fmt::Display for TypeKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "type kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for TypeKindError {}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time information about a reflected type.
///
/// Obtained through [`Typed::type_info`], [`DynamicTyped::reflect_type_info`]
/// or a [`TypeRegistry`]. Always `'static`, so two infos describe the same
/// type exactly when their [`TypeId`]s are equal.
///
/// ```
/// use px_reflect::{info::{Typed, TypeInfo}, Object};
///
/// let info = <u32 as Typed>::type_info();
/// assert!(info.as_numeric().is_ok());
///
/// // Every type can be stored as an object.
/// assert!(<Object as Typed>::type_info().is_assignable_from(info));
/// assert!(!info.is_assignable_from(<Object as Typed>::type_info()));
/// ```
///
/// [`Typed::type_info`]: crate::info::Typed::type_info
/// [`DynamicTyped::reflect_type_info`]: crate::info::DynamicTyped::reflect_type_info
/// [`TypeRegistry`]: crate::registry::TypeRegistry
/// [`TypeId`]: core::any::TypeId
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Class(ClassInfo),
    Interface(InterfaceInfo),
    Numeric(NumericInfo),
    Opaque(OpaqueInfo),
    Object(ObjectInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Converts to the specific info of this kind.
        pub const fn $name(&self) -> Result<&$info, TypeKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(TypeKindError {
                    expected: TypeKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_class: Class => ClassInfo);
    impl_cast_method!(as_interface: Interface => InterfaceInfo);
    impl_cast_method!(as_numeric: Numeric => NumericInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);
    impl_cast_method!(as_object: Object => ObjectInfo);

    /// Returns the underlying [`Type`].
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Class(info) => info.ty(),
            Self::Interface(info) => info.ty(),
            Self::Numeric(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
            Self::Object(info) => info.ty(),
        }
    }

    /// Returns the kind of this type.
    pub const fn kind(&self) -> TypeKind {
        match self {
            Self::Class(_) => TypeKind::Class,
            Self::Interface(_) => TypeKind::Interface,
            Self::Numeric(_) => TypeKind::Numeric,
            Self::Opaque(_) => TypeKind::Opaque,
            Self::Object(_) => TypeKind::Object,
        }
    }

    /// Returns the `TypeId`.
    #[inline]
    pub const fn ty_id(&self) -> core::any::TypeId {
        self.ty().id()
    }

    /// Returns `true` if this is the type `T`.
    #[inline]
    pub fn type_is<T: core::any::Any>(&self) -> bool {
        self.ty().is::<T>()
    }

    /// Returns the type path, see [`TypePath`](crate::info::TypePath).
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.ty().path()
    }

    /// Returns the short type name.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.ty().name()
    }

    /// Looks up a readable property by name.
    ///
    /// Only classes have properties. Properties declared on a base class
    /// are found through the derived class.
    pub fn property(&self, name: &str) -> Option<&PropertyInfo> {
        match self {
            Self::Class(info) => info.property(name),
            _ => None,
        }
    }

    /// Returns `true` if a value of type `from` can be used where this
    /// type is expected.
    ///
    /// This holds when:
    /// - both are the same type,
    /// - `self` is [`Object`](crate::Object),
    /// - `self` is a class in the base chain of `from`,
    /// - `self` is an interface implemented by `from` or one of its bases.
    ///
    /// Numeric types are only assignable from themselves. Widening is a
    /// conversion, see [`cast`](crate::cast).
    pub fn is_assignable_from(&self, from: &TypeInfo) -> bool {
        if self.ty_id() == from.ty_id() {
            return true;
        }
        match self {
            Self::Object(_) => true,
            Self::Class(_) => from.base_chain().any(|base| base.ty_id() == self.ty_id()),
            Self::Interface(_) => core::iter::once(from)
                .chain(from.base_chain().map(|info| -> &TypeInfo { info }))
                .filter_map(|info| info.as_class().ok())
                .any(|class| class.implements(self)),
            Self::Numeric(_) | Self::Opaque(_) => false,
        }
    }

    /// Iterates the base classes of this type, nearest first.
    ///
    /// Empty for everything but classes declared with a `#[reflect(base)]` field.
    pub fn base_chain(&self) -> impl Iterator<Item = &'static TypeInfo> + use<> {
        let first = self.as_class().ok().and_then(ClassInfo::base_type_info);
        core::iter::successors(first, |info| {
            info.as_class().ok().and_then(ClassInfo::base_type_info)
        })
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
