/// Declares the trait object type `Box<dyn Trait>` as a reflected interface.
///
/// Implements [`TypePath`] and [`Typed`] for `Box<dyn Trait>`, so it can be
/// listed in `#[reflect(implements(Trait))]` and used as the result type of
/// an accessor. The type path is the module of the invocation followed by
/// the trait name.
///
/// ```
/// use px_reflect::{impl_interface, info::{Typed, TypeKind}};
///
/// pub trait Shape: Send + Sync {
///     fn area(&self) -> f32;
/// }
///
/// impl_interface!(Shape);
///
/// let info = <Box<dyn Shape> as Typed>::type_info();
/// assert_eq!(info.kind(), TypeKind::Interface);
/// assert_eq!(info.type_name(), "Shape");
/// ```
///
/// [`TypePath`]: crate::info::TypePath
/// [`Typed`]: crate::info::Typed
#[macro_export]
macro_rules! impl_interface {
    ($name:ident) => {
        impl $crate::info::TypePath for $crate::__macro_exports::Box<dyn $name> {
            #[inline]
            fn type_path() -> &'static str {
                ::core::concat!(::core::module_path!(), "::", ::core::stringify!($name))
            }

            #[inline]
            fn type_name() -> &'static str {
                ::core::stringify!($name)
            }

            #[inline]
            fn type_ident() -> &'static str {
                ::core::stringify!($name)
            }

            #[inline]
            fn module_path() -> ::core::option::Option<&'static str> {
                ::core::option::Option::Some(::core::module_path!())
            }
        }

        impl $crate::info::Typed for $crate::__macro_exports::Box<dyn $name> {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::NonGenericTypeInfoCell =
                    $crate::impls::NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    $crate::info::TypeInfo::Interface($crate::info::InterfaceInfo::new::<Self>())
                })
            }
        }
    };
}
