#![allow(dead_code)]

use std::{fs, path::Path};
use tempfile::TempDir;

/// A temporary install: the document root is `www/`, and handler files and
/// `hooks/hooks.yaml` sit beside it.
pub struct DocRoot {
    dir: TempDir,
}

impl DocRoot {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("www")).unwrap();
        Self { dir }
    }

    /// Create an empty handler file at `location`.
    pub fn touch(self, location: &str) -> Self {
        let path = self.dir.path().join(location);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
        self
    }

    pub fn config(self, yaml: &str) -> Self {
        let path = self.dir.path().join(hookreg::config::DEFAULT_CONFIG_FILE);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, yaml).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn registry_config(&self) -> hookreg::RegistryConfig {
        hookreg::RegistryConfig::from_docroot(self.path().join("www"))
    }
}
