use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// The parsed `Cargo.toml` of the crate that invoked a proc-macro.
///
/// Generated code must name workspace crates through a path that is valid
/// from the invoking crate. A crate may depend on `px_reflect` directly, or
/// only on the `px_core` facade, which re-exports it as `px_core::reflect`.
///
/// # Example
///
/// ```rust
/// # use px_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("px_reflect"));
/// ```
///
/// # Resolution rules
///
/// 1. If `name` is listed in `dependencies`, return `::name`.
/// 2. If `name` begins with `px_` and the crate depends on `px_core`,
///    return `::px_core::short_name` (e.g. `px_reflect` -> `::px_core::reflect`).
/// 3. Repeat step 1-2 in `dev-dependencies`.
/// 4. Otherwise, fall back to `::name`.
///
/// A crate naming itself should add `extern crate self as name;` to its root,
/// so that the fallback also resolves inside its own unit tests.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const FACADE_NAME: &str = "px_core";
const WORKSPACE_PREFIX: &str = "px_";

impl Manifest {
    #[inline(never)]
    fn manifest_path() -> PathBuf {
        let dir = env::var_os("CARGO_MANIFEST_DIR")
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.");
        let path = PathBuf::from(dir).join("Cargo.toml");
        assert!(
            path.exists(),
            "Cargo manifest does not exist at path {}",
            path.display(),
        );
        path
    }

    #[inline(never)]
    fn modified_time_of(path: &Path) -> Result<SystemTime, std::io::Error> {
        std::fs::metadata(path).and_then(|metadata| metadata.modified())
    }

    #[inline(never)]
    fn read(path: &Path) -> Document<Box<str>> {
        let text = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()))
            .into_boxed_str();
        Document::parse(text)
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    fn parse_path(text: &str) -> syn::Path {
        syn::parse_str(text).expect("a crate path is always a valid `syn::Path`")
    }

    fn lookup(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::parse_path(&format!("::{name}")));
        }
        let module = name.strip_prefix(WORKSPACE_PREFIX)?;
        if deps.contains_key(FACADE_NAME) {
            return Some(Self::parse_path(&format!("::{FACADE_NAME}::{module}")));
        }
        None
    }

    /// Return a [`syn::Path`] for the package named `name` as seen from the
    /// invoking crate. See the type-level documentation for the rules.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        ["dependencies", "dev-dependencies"]
            .into_iter()
            .filter_map(|table| match self.manifest.get(table) {
                Some(Item::Table(deps)) => Self::lookup(deps, name),
                _ => None,
            })
            .next()
            .unwrap_or_else(|| Self::parse_path(&format!("::{name}")))
    }

    /// Run `func` with the [`Manifest`] of the invoking crate.
    ///
    /// Manifests are cached per path and re-read when the file's modified
    /// time changes. Reading is not cheap, so a macro should call this once
    /// per invocation and pass the resulting path around.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let path = Self::manifest_path();
        let modified_time =
            Self::modified_time_of(&path).expect("The Cargo.toml should have a modified time.");

        {
            let cache = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(manifest) = cache.get(&path)
                && manifest.modified_time == modified_time
            {
                return func(manifest);
            }
        }

        let manifest = Manifest {
            manifest: Self::read(&path),
            modified_time,
        };
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::Manifest;

    fn manifest(text: &str) -> Manifest {
        Manifest {
            manifest: toml_edit::Document::parse(text.to_string().into_boxed_str()).unwrap(),
            modified_time: std::time::SystemTime::UNIX_EPOCH,
        }
    }

    fn path_string(path: syn::Path) -> String {
        path.segments
            .iter()
            .map(|s| s.ident.to_string())
            .collect::<Vec<_>>()
            .join("::")
    }

    #[test]
    fn direct_dependency() {
        let m = manifest("[dependencies]\npx_reflect = \"0.0.1\"\n");
        assert_eq!(path_string(m.get_crate_path("px_reflect")), "px_reflect");
    }

    #[test]
    fn through_facade() {
        let m = manifest("[dependencies]\npx_core = \"0.0.1\"\n");
        assert_eq!(path_string(m.get_crate_path("px_reflect")), "px_core::reflect");
    }

    #[test]
    fn dev_dependency_and_fallback() {
        let m = manifest("[dev-dependencies]\npx_core = \"0.0.1\"\n");
        assert_eq!(path_string(m.get_crate_path("px_reflect")), "px_core::reflect");

        let m = manifest("[dependencies]\nsyn = \"2\"\n");
        assert_eq!(path_string(m.get_crate_path("px_reflect")), "px_reflect");
    }
}
