//! Event dispatch.
//!
//! [`DispatchRegistry`] is the entry point hosts call once per event
//! occurrence.

pub mod registry;

pub use registry::{DispatchRegistry, DispatchSummary};
