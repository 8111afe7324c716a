//! Hook configuration.
//!
//! - [`ConfigView`] - the immutable event → location → binding mapping
//! - [`RegistryConfig`] - handler root and configuration file paths

pub mod settings;
pub mod view;

pub use settings::{DEFAULT_CONFIG_FILE, RegistryConfig};
pub use view::{ConfigView, Entry, Section};
