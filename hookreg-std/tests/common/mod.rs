#![allow(dead_code)]

use std::{fs, path::Path};
use tempfile::TempDir;

// ============================================================================
// Handler Tree
// ============================================================================

/// A temporary handler root with a configuration file and empty handler files.
pub struct HandlerTree {
    dir: TempDir,
}

impl HandlerTree {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Create an (empty) handler file at `location`.
    pub fn touch(self, location: &str) -> Self {
        let path = self.dir.path().join(location);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
        self
    }

    /// Write the hook configuration to `hooks/hooks.yaml`.
    pub fn config(self, yaml: &str) -> Self {
        let path = self.dir.path().join("hooks/hooks.yaml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, yaml).unwrap();
        self
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn registry_config(&self) -> hookreg_std::RegistryConfig {
        hookreg_std::RegistryConfig::new(self.root(), self.root().join("hooks/hooks.yaml"))
    }
}
