//! The handler-resolution seam.
//!
//! Everything that is genuinely dynamic about hook dispatch ("load the code at
//! this path, then find a function in it by name") happens behind
//! [`HandlerLoader`]. The registry never touches handler code directly.

use crate::{error::LoadError, handler::Handler, location::HandlerLocation};
use std::sync::Arc;

/// Resolves a named handler from a handler unit.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot resolve hook handlers",
    label = "missing `HandlerLoader` implementation",
    note = "Implement `HandlerLoader::resolve` to map a location and function name to a handler."
)]
pub trait HandlerLoader: Send + Sync {
    /// Load the unit at `location` (at most once) and return its `function`.
    ///
    /// # Errors
    ///
    /// - [`LoadError::FileNotFound`] if the unit's file is not readable.
    /// - [`LoadError::FunctionNotFound`] if the unit has no such function.
    fn resolve(
        &self,
        location: &HandlerLocation,
        function: &str,
    ) -> Result<Arc<dyn Handler>, LoadError>;
}

impl<L: HandlerLoader + ?Sized> HandlerLoader for Arc<L> {
    fn resolve(
        &self,
        location: &HandlerLocation,
        function: &str,
    ) -> Result<Arc<dyn Handler>, LoadError> {
        (**self).resolve(location, function)
    }
}

impl<L: HandlerLoader + ?Sized> HandlerLoader for Box<L> {
    fn resolve(
        &self,
        location: &HandlerLocation,
        function: &str,
    ) -> Result<Arc<dyn Handler>, LoadError> {
        (**self).resolve(location, function)
    }
}

impl<L: HandlerLoader + ?Sized> HandlerLoader for &L {
    fn resolve(
        &self,
        location: &HandlerLocation,
        function: &str,
    ) -> Result<Arc<dyn Handler>, LoadError> {
        (**self).resolve(location, function)
    }
}
