//! The shipped [`HandlerLoader`]: a [`Catalog`] anchored at a handler root.

use super::catalog::{Catalog, HandlerUnit};
use hookreg_core::{Handler, HandlerLoader, HandlerLocation, LoadError};
use std::{
    collections::HashMap,
    fs::File,
    io,
    path::{Path, PathBuf},
    sync::{Arc, Once},
};

struct LoadedUnit {
    unit: HandlerUnit,
    once: Once,
}

impl LoadedUnit {
    /// A panicking initialiser leaves the unit unloaded; the next resolve
    /// retries it instead of panicking on a poisoned `Once`.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn ensure_loaded(&self, location: &HandlerLocation) {
        self.once.call_once_force(|_| {
            #[cfg(feature = "tracing")]
            tracing::info!(%location, "loading handler unit");
            self.unit.run_on_load();
        });
    }
}

/// Resolves handlers from a [`Catalog`], checking each unit's file under `root`.
///
/// A location resolves only if `root/location` is a readable regular file
/// that does not lie outside `root`. The unit's load-time initialisers then
/// run once for the lifetime of this loader, however many bindings or events
/// refer to it. Initialisers gathered by `Catalog::collect` run once per
/// process, even across loaders.
///
pub struct CatalogLoader {
    root: PathBuf,
    units: HashMap<HandlerLocation, LoadedUnit>,
}

impl CatalogLoader {
    /// Create a loader for `catalog` with handler files under `root`.
    pub fn new(root: impl Into<PathBuf>, catalog: Catalog) -> Self {
        let units = catalog
            .into_units()
            .into_iter()
            .map(|(location, unit)| {
                let loaded = LoadedUnit {
                    unit,
                    once: Once::new(),
                };
                (location, loaded)
            })
            .collect();
        Self {
            root: root.into(),
            units,
        }
    }

    /// The directory handler locations are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the unit at `location` has been loaded by this loader.
    pub fn is_loaded(&self, location: &HandlerLocation) -> bool {
        self.units
            .get(location)
            .is_some_and(|loaded| loaded.once.is_completed())
    }
}

impl HandlerLoader for CatalogLoader {
    fn resolve(
        &self,
        location: &HandlerLocation,
        function: &str,
    ) -> Result<Arc<dyn Handler>, LoadError> {
        let path = location.resolve(&self.root);
        check_contained(location)
            .and_then(|()| check_readable(&path))
            .map_err(|source| LoadError::FileNotFound {
                location: location.to_string(),
                path,
                source,
            })?;

        let not_found = || LoadError::FunctionNotFound {
            location: location.to_string(),
            function: function.to_owned(),
        };

        // A file with nothing registered for it defines no functions.
        let loaded = self.units.get(location).ok_or_else(not_found)?;
        loaded.ensure_loaded(location);
        loaded.unit.function(function).ok_or_else(not_found)
    }
}

fn check_contained(location: &HandlerLocation) -> io::Result<()> {
    if location.escapes_root() {
        Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "location escapes the handler root",
        ))
    } else {
        Ok(())
    }
}

fn check_readable(path: &Path) -> io::Result<()> {
    let file = File::open(path)?;
    if file.metadata()?.is_file() {
        Ok(())
    } else {
        Err(io::Error::other("not a regular file"))
    }
}
