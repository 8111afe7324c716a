//! # hookreg - Tenant-Filtered Hook Dispatch
//!
//! `hookreg` lets a host application announce lifecycle events by name and
//! have them dispatched to handler functions declared in a configuration
//! file. Each binding may be restricted to a set of tenants, and handler
//! units are loaded lazily, at most once, only when a binding applies.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hookreg::prelude::*;
//!
//! #[hookreg::hook_handler(location = "hooks/projects/test.php")]
//! fn test_save_record(args: &HookArgs) -> Result<(), BoxError> {
//!     println!("saved record {}", args[1]);
//!     Ok(())
//! }
//!
//! // hooks/hooks.yaml:
//! //
//! // redcap_save_record:
//! //   hooks/projects/test.php: "test_save_record: 12, 14"
//!
//! let registry = DispatchRegistry::from_catalog(RegistryConfig::from_env(), Catalog::collect())?;
//! hookreg::redcap::redcap_save_record(&registry, 14, "rec-1", "demographics", 1, None, None, None)?;
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod macros;
pub mod redcap;

pub use hookreg_core::{
    // Bindings
    Binding,
    // Errors
    BindingError,
    BoxError,
    ConfigError,
    DELIMITER,
    DispatchError,
    ErrorKind,
    // Handler
    Handler,
    // Loading
    HandlerLoader,
    HandlerLocation,
    HookArgs,
    HookregError,
    LoadError,
    // Arguments
    Param,
    SEPARATOR,
    TenantFilter,
    WILDCARD,
};

pub use hookreg_std::{
    Catalog, CatalogBuilder, CatalogLoader, ConfigView, DispatchRegistry, DispatchSummary,
    RegistryConfig,
};

/// Configuration types.
pub mod config {
    pub use hookreg_std::config::{
        ConfigView, DEFAULT_CONFIG_FILE, Entry, RegistryConfig, Section,
        settings::{ENV_CONFIG, ENV_DOCROOT, ENV_ROOT},
    };
}

/// Handler units and loaders.
pub mod loader {
    pub use hookreg_std::loader::{Catalog, CatalogBuilder, CatalogLoader, HandlerUnit, OnLoad};

    #[cfg(feature = "inventory")]
    pub use hookreg_std::loader::{HandlerRegistration, UnitInitializer};
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use hookreg_std::testing::*;
}

/// Prelude module - common imports for hookreg.
///
/// # Usage
///
/// ```rust,ignore
/// use hookreg::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, Catalog, DispatchError, DispatchRegistry, DispatchSummary, Handler,
        HandlerLoader, HookArgs, Param, RegistryConfig,
    };
}

#[cfg(feature = "macros")]
pub use hookreg_macros::{hook_handler, on_load};

#[cfg(feature = "inventory")]
pub use inventory;
