//! Compile-time registry of handler units.
//!
//! Rust cannot `require` a source file at runtime, so each handler unit is
//! registered up front under the location the configuration refers to. A
//! unit holds its named functions and, optionally, initialisers that stand
//! in for the unit's top-level code and run the first time it is loaded.

use hookreg_core::{Handler, HandlerLocation};
use std::{collections::HashMap, fmt, sync::Arc};

/// Code run once, the first time a unit is loaded.
pub type OnLoad = Arc<dyn Fn() + Send + Sync>;

/// The functions and load-time initialisers registered under one location.
#[derive(Default, Clone)]
pub struct HandlerUnit {
    functions: HashMap<String, Arc<dyn Handler>>,
    on_load: Vec<OnLoad>,
}

impl HandlerUnit {
    /// The function named `name`, if the unit defines it.
    pub fn function(&self, name: &str) -> Option<Arc<dyn Handler>> {
        self.functions.get(name).cloned()
    }

    /// Names of all functions the unit defines.
    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    pub(crate) fn run_on_load(&self) {
        for init in &self.on_load {
            init();
        }
    }
}

impl fmt::Debug for HandlerUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.function_names().collect();
        names.sort_unstable();
        f.debug_struct("HandlerUnit")
            .field("functions", &names)
            .field("on_load", &self.on_load.len())
            .finish()
    }
}

// ============================================================================
// CatalogBuilder - for constructing catalogs
// ============================================================================

/// Builder for constructing a [`Catalog`].
///
/// # Example
/// ```ignore
/// let catalog = CatalogBuilder::new()
///     .register("hooks/projects/test.php", "test_save_record", test_save_record)
///     .on_load("hooks/projects/test.php", || audit::init())
///     .build();
/// ```
#[derive(Default)]
pub struct CatalogBuilder {
    units: HashMap<HandlerLocation, HandlerUnit>,
}

impl CatalogBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` as `function` in the unit at `location`.
    pub fn register<H: Handler>(
        mut self,
        location: impl Into<HandlerLocation>,
        function: impl Into<String>,
        handler: H,
    ) -> Self {
        self.register_mut(location, function, handler);
        self
    }

    /// Register a handler (mutable version).
    pub fn register_mut<H: Handler>(
        &mut self,
        location: impl Into<HandlerLocation>,
        function: impl Into<String>,
        handler: H,
    ) {
        self.register_shared_mut(location, function, Arc::new(handler));
    }

    /// Register an already shared handler (mutable version).
    ///
    /// A later registration of the same function in the same unit replaces
    /// the earlier one.
    pub fn register_shared_mut(
        &mut self,
        location: impl Into<HandlerLocation>,
        function: impl Into<String>,
        handler: Arc<dyn Handler>,
    ) {
        let location = location.into();
        let function = function.into();
        let unit = self.units.entry(location.clone()).or_default();
        if unit.functions.insert(function.clone(), handler).is_some() {
            #[cfg(feature = "tracing")]
            tracing::warn!(%location, %function, "handler registered twice, keeping the last one");
        }
    }

    /// Run `init` the first time the unit at `location` is loaded.
    pub fn on_load<F>(mut self, location: impl Into<HandlerLocation>, init: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_load_mut(location, init);
        self
    }

    /// Add a load-time initialiser (mutable version).
    pub fn on_load_mut<F>(&mut self, location: impl Into<HandlerLocation>, init: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.units
            .entry(location.into())
            .or_default()
            .on_load
            .push(Arc::new(init));
    }

    /// Merge every unit of `other` into this builder.
    pub fn merge(mut self, other: Catalog) -> Self {
        for (location, unit) in other.units {
            let target = self.units.entry(location).or_default();
            target.functions.extend(unit.functions);
            target.on_load.extend(unit.on_load);
        }
        self
    }

    /// Build the immutable catalog.
    pub fn build(self) -> Catalog {
        Catalog { units: self.units }
    }

    /// Number of units registered so far.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

// ============================================================================
// Catalog - immutable unit storage
// ============================================================================

/// An immutable set of handler units keyed by location.
#[derive(Default, Clone, Debug)]
pub struct Catalog {
    units: HashMap<HandlerLocation, HandlerUnit>,
}

impl Catalog {
    /// Start building a catalog.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// The unit registered at `location`.
    pub fn unit(&self, location: &HandlerLocation) -> Option<&HandlerUnit> {
        self.units.get(location)
    }

    /// Registered locations, in no particular order.
    pub fn locations(&self) -> impl Iterator<Item = &HandlerLocation> {
        self.units.keys()
    }

    /// Number of registered units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether no unit is registered.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub(crate) fn into_units(self) -> HashMap<HandlerLocation, HandlerUnit> {
        self.units
    }
}
