//! Distributed handler registration via `inventory`.
//!
//! Handler crates submit [`HandlerRegistration`]s (usually through the
//! `#[hook_handler]` attribute) and [`UnitInitializer`]s; [`Catalog::collect`]
//! gathers every submission linked into the binary.

use super::catalog::{Catalog, CatalogBuilder};
use hookreg_core::{BoxError, Handler, HookArgs};
use std::{
    collections::BTreeMap,
    ptr,
    sync::{Arc, Mutex, Once, PoisonError},
};

/// A handler submitted to the distributed catalog.
pub struct HandlerRegistration {
    /// The unit location the handler belongs to.
    pub location: &'static str,
    /// The function name bindings refer to.
    pub function: &'static str,
    /// The handler itself.
    pub handler: &'static dyn Handler,
}

inventory::collect!(HandlerRegistration);

/// A load-time initialiser submitted to the distributed catalog.
pub struct UnitInitializer {
    /// The unit location the initialiser belongs to.
    pub location: &'static str,
    /// Runs once per process, the first time any loader loads the unit.
    pub on_load: fn(),
}

inventory::collect!(UnitInitializer);

/// One `Once` per submitted initialiser, keyed by the submission's address.
///
/// Submissions are process-level items, so they run once per process no
/// matter how many catalogs or loaders are built from them.
static STARTED: Mutex<BTreeMap<usize, Arc<Once>>> = Mutex::new(BTreeMap::new());

impl UnitInitializer {
    fn run_once(&'static self) {
        let key = ptr::from_ref(self).addr();
        let once = STARTED
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key)
            .or_insert_with(|| Arc::new(Once::new()))
            .clone();
        once.call_once_force(|_| (self.on_load)());
    }
}

struct StaticHandler(&'static dyn Handler);

impl Handler for StaticHandler {
    fn call(&self, args: &HookArgs) -> Result<(), BoxError> {
        self.0.call(args)
    }
}

impl CatalogBuilder {
    /// Add every handler and initialiser submitted through `inventory`.
    pub fn collect_submitted(mut self) -> Self {
        for registration in inventory::iter::<HandlerRegistration> {
            self.register_mut(
                registration.location,
                registration.function,
                StaticHandler(registration.handler),
            );
        }
        for initializer in inventory::iter::<UnitInitializer> {
            self.on_load_mut(initializer.location, move || initializer.run_once());
        }
        self
    }
}

impl Catalog {
    /// A catalog of everything submitted through `inventory`.
    pub fn collect() -> Catalog {
        CatalogBuilder::new().collect_submitted().build()
    }
}

/// Submit a handler to the distributed catalog.
///
/// ```rust,ignore
/// fn test_save_record(args: &HookArgs) -> Result<(), BoxError> { Ok(()) }
///
/// hookreg_std::submit_handler!("hooks/projects/test.php", test_save_record);
/// ```
#[macro_export]
macro_rules! submit_handler {
    ($location:expr, $function:ident) => {
        $crate::inventory::submit! {
            $crate::loader::HandlerRegistration {
                location: $location,
                function: ::core::stringify!($function),
                handler: &$function,
            }
        }
    };
}

/// Submit a load-time initialiser to the distributed catalog.
#[macro_export]
macro_rules! submit_on_load {
    ($location:expr, $init:path) => {
        $crate::inventory::submit! {
            $crate::loader::UnitInitializer {
                location: $location,
                on_load: $init,
            }
        }
    };
}
