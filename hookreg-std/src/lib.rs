//! # hookreg-std
//!
//! Standard implementations for the hookreg hook dispatch registry.
//!
//! This crate provides:
//! - **Configuration**: [`ConfigView`], the immutable event → location →
//!   binding mapping, and [`RegistryConfig`]
//! - **Handler loading**: [`Catalog`] and [`CatalogLoader`]
//! - **Dispatch**: [`DispatchRegistry`]
//! - **Testing utilities**: [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use hookreg_core;

// Modules
pub mod config;
pub mod dispatch;
pub mod loader;
pub mod testing;

pub use config::{ConfigView, RegistryConfig};
pub use dispatch::{DispatchRegistry, DispatchSummary};
pub use loader::{Catalog, CatalogBuilder, CatalogLoader};

#[cfg(feature = "inventory")]
pub use inventory;
