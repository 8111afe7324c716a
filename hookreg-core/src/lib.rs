//! # hookreg-core
//!
//! Core types and traits for the hookreg hook dispatch registry.
//!
//! This crate has minimal dependencies and is meant to be imported by handler
//! crates that only need to define handlers, not dispatch them.
//!
//! # Building Blocks
//!
//! - [`Binding`] / [`TenantFilter`] - the parsed form of a `function:filter`
//!   configuration value
//! - [`HandlerLocation`] - a handler unit's path relative to the handler root
//! - [`HookArgs`] / [`Param`] - the positional arguments of one event
//! - [`Handler`] - a callable inside a handler unit
//! - [`HandlerLoader`] - resolves a handler from a location and a name
//!
//! # Error Types
//!
//! - [`HookregError`] - Top-level error type
//! - [`ConfigError`], [`BindingError`], [`LoadError`], [`DispatchError`]
//! - [`ErrorKind`] - flat classification shared by all of them

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod args;
mod binding;
mod error;
mod handler;
mod loader;
mod location;

// Re-exports
pub use args::{HookArgs, Param};
pub use binding::{Binding, DELIMITER, SEPARATOR, TenantFilter, WILDCARD};
pub use error::{
    BindingError, BoxError, ConfigError, DispatchError, ErrorKind, HookregError, LoadError,
};
pub use handler::Handler;
pub use loader::HandlerLoader;
pub use location::HandlerLocation;
