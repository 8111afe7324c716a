//! Registry settings: where handler units live and where the configuration is.

use std::path::{Path, PathBuf};

/// Configuration file location relative to the handler root.
pub const DEFAULT_CONFIG_FILE: &str = "hooks/hooks.yaml";

/// Environment variable naming the host's document root.
pub const ENV_DOCROOT: &str = "HOOKREG_DOCROOT";

/// Environment variable overriding the handler root.
pub const ENV_ROOT: &str = "HOOKREG_ROOT";

/// Environment variable overriding the configuration file path.
pub const ENV_CONFIG: &str = "HOOKREG_CONFIG";

/// Paths a [`DispatchRegistry`](crate::dispatch::DispatchRegistry) is built from.
///
/// Handler locations in the configuration are resolved against `root`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    root: PathBuf,
    config_path: PathBuf,
}

impl Default for RegistryConfig {
    /// Paths relative to the current directory: root `""`,
    /// configuration `hooks/hooks.yaml`.
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            config_path: PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }
}

impl RegistryConfig {
    /// Explicit handler root and configuration path.
    pub fn new(root: impl Into<PathBuf>, config_path: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            config_path: config_path.into(),
        }
    }

    /// Layout for a host served from `docroot`: handler units live in the
    /// parent of the document root, and the configuration in its
    /// `hooks/hooks.yaml`.
    pub fn from_docroot(docroot: impl AsRef<Path>) -> Self {
        let root = docroot.as_ref().join("..");
        let root = root.canonicalize().unwrap_or(root);
        Self {
            config_path: root.join(DEFAULT_CONFIG_FILE),
            root,
        }
    }

    /// Settings from the process environment.
    ///
    /// `HOOKREG_DOCROOT` selects [`from_docroot`](Self::from_docroot);
    /// otherwise the defaults apply. `HOOKREG_ROOT` and `HOOKREG_CONFIG`
    /// override either.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key).map(PathBuf::from))
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<PathBuf>) -> Self {
        let mut config = match lookup(ENV_DOCROOT) {
            Some(docroot) => Self::from_docroot(docroot),
            None => Self::default(),
        };
        if let Some(root) = lookup(ENV_ROOT) {
            config.root = root;
        }
        if let Some(config_path) = lookup(ENV_CONFIG) {
            config.config_path = config_path;
        }
        config
    }

    /// Set the handler root.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Set the configuration file path.
    pub fn with_config_path(mut self, config_path: impl Into<PathBuf>) -> Self {
        self.config_path = config_path.into();
        self
    }

    /// The directory handler locations are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The configuration file.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_is_cwd_relative() {
        let config = RegistryConfig::default();
        assert_eq!(config.root(), Path::new(""));
        assert_eq!(config.config_path(), Path::new("hooks/hooks.yaml"));
    }

    #[test]
    fn test_from_docroot() {
        let host = tempfile::tempdir().unwrap();
        let docroot = host.path().join("redcap");
        std::fs::create_dir(&docroot).unwrap();

        let config = RegistryConfig::from_docroot(&docroot);
        let expected_root = host.path().canonicalize().unwrap();
        assert_eq!(config.root(), expected_root);
        assert_eq!(config.config_path(), expected_root.join("hooks/hooks.yaml"));
    }

    #[test]
    fn test_lookup_overrides() {
        let vars: HashMap<&str, PathBuf> = [
            (ENV_ROOT, PathBuf::from("/srv/hooks")),
            (ENV_CONFIG, PathBuf::from("/etc/hookreg.yaml")),
        ]
        .into_iter()
        .collect();

        let config = RegistryConfig::from_lookup(|key| vars.get(key).cloned());
        assert_eq!(config.root(), Path::new("/srv/hooks"));
        assert_eq!(config.config_path(), Path::new("/etc/hookreg.yaml"));

        let config = RegistryConfig::from_lookup(|_| None);
        assert_eq!(config, RegistryConfig::default());
    }
}
