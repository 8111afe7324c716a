//! Handler locations.

use std::{
    fmt,
    path::{Component, Path, PathBuf},
};

/// A handler unit's path, relative to the handler root.
///
/// Leading `./` and `/` segments and surrounding whitespace are stripped, so
/// `"./hooks/a.php"` and `"hooks/a.php"` name the same unit and the location
/// is never absolute. `..` segments are kept as written; loaders refuse
/// locations for which [`escapes_root`](Self::escapes_root) holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerLocation(String);

impl HandlerLocation {
    /// Create a location from a configured path.
    pub fn new(location: impl AsRef<str>) -> Self {
        let mut rest = location.as_ref().trim();
        loop {
            if let Some(stripped) = rest.strip_prefix("./") {
                rest = stripped;
            } else if let Some(stripped) = rest.strip_prefix('/') {
                rest = stripped;
            } else {
                break;
            }
        }
        Self(rest.to_owned())
    }

    /// The normalized relative path.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the path has a `..` segment (or a drive prefix), and so may
    /// point outside the handler root.
    pub fn escapes_root(&self) -> bool {
        Path::new(&self.0)
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_) | Component::RootDir))
    }

    /// Compose the absolute path of this location under `root`.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(&self.0)
    }
}

impl fmt::Display for HandlerLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HandlerLocation {
    fn from(location: &str) -> Self {
        Self::new(location)
    }
}

impl From<String> for HandlerLocation {
    fn from(location: String) -> Self {
        Self::new(location)
    }
}
