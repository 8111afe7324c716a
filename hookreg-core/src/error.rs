//! Error types for hookreg.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`HookregError`] - Top-level error type for all hookreg operations
//! - [`ConfigError`] - Errors while loading the hook configuration
//! - [`BindingError`] - Malformed `function:filter` binding strings
//! - [`LoadError`] - Errors while resolving a handler unit or function
//! - [`DispatchError`] - Errors surfaced by a single `process_hook` call
//!
//! Every error exposes a [`kind`](DispatchError::kind) so callers can branch on
//! the failure class without matching the full hierarchy.

use std::{io, path::PathBuf};
use thiserror::Error;

/// A boxed error type for handler-side failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Coarse classification of every failure the registry can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The configuration file does not exist or cannot be read.
    ConfigUnreadable,
    /// The configuration file was read but is not a valid two-level mapping.
    ConfigMalformed,
    /// A binding string is not of the form `function:filter`.
    BindingMalformed,
    /// The handler location does not point at a readable file.
    HandlerFileNotFound,
    /// The handler unit does not define the configured function.
    HandlerFunctionNotFound,
    /// The handler ran and returned an error.
    HandlerFailed,
}

/// Top-level error type for all hookreg operations.
#[derive(Error, Debug)]
pub enum HookregError {
    /// The registry could not be constructed.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// A dispatch failed.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),
}

impl HookregError {
    /// The failure class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            HookregError::Config(e) => e.kind(),
            HookregError::Dispatch(e) => e.kind(),
        }
    }
}

/// Errors that can occur while loading the hook configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file is missing or unreadable.
    #[error("cannot read hook configuration {}", .path.display())]
    Unreadable {
        /// The path that was read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The contents are not a mapping of event name to location/binding pairs.
    #[error("malformed hook configuration {origin}: {reason}")]
    Malformed {
        /// Where the configuration came from (a path, or `<inline>`).
        origin: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl ConfigError {
    /// The failure class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::Unreadable { .. } => ErrorKind::ConfigUnreadable,
            ConfigError::Malformed { .. } => ErrorKind::ConfigMalformed,
        }
    }
}

/// A binding string that is not `function:filter`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// No `:` separates the function name from the tenant filter.
    #[error("binding `{raw}` has no `:` between function name and tenant filter")]
    MissingDelimiter {
        /// The offending binding string.
        raw: String,
    },

    /// More than one `:` appears in the binding.
    #[error("binding `{raw}` has more than one `:` delimiter")]
    ExtraDelimiter {
        /// The offending binding string.
        raw: String,
    },

    /// Nothing but whitespace precedes the delimiter.
    #[error("binding `{raw}` names no function")]
    EmptyFunction {
        /// The offending binding string.
        raw: String,
    },

    /// The filter holds neither `*` nor any tenant id.
    #[error("binding `{raw}` has an empty tenant filter")]
    EmptyFilter {
        /// The offending binding string.
        raw: String,
    },
}

impl BindingError {
    /// The failure class of this error. Always [`ErrorKind::BindingMalformed`].
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::BindingMalformed
    }

    /// The binding string that failed to parse.
    pub fn raw(&self) -> &str {
        match self {
            BindingError::MissingDelimiter { raw }
            | BindingError::ExtraDelimiter { raw }
            | BindingError::EmptyFunction { raw }
            | BindingError::EmptyFilter { raw } => raw,
        }
    }
}

/// Errors raised while resolving a handler.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The composed handler path is not a readable file.
    #[error("handler file {} for `{location}` is not readable", .path.display())]
    FileNotFound {
        /// The configured location.
        location: String,
        /// The absolute path that was checked.
        path: PathBuf,
        /// Why the file could not be opened.
        #[source]
        source: io::Error,
    },

    /// The unit loaded but defines no function with the configured name.
    #[error("handler unit `{location}` does not define `{function}`")]
    FunctionNotFound {
        /// The configured location.
        location: String,
        /// The configured function name.
        function: String,
    },
}

impl LoadError {
    /// The failure class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LoadError::FileNotFound { .. } => ErrorKind::HandlerFileNotFound,
            LoadError::FunctionNotFound { .. } => ErrorKind::HandlerFunctionNotFound,
        }
    }
}

/// Errors that abort a single dispatch.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A binding registered for the event could not be parsed.
    #[error("event `{event}`: invalid binding for `{location}`: {source}")]
    Binding {
        /// The event being dispatched.
        event: String,
        /// The location the binding was configured under.
        location: String,
        /// The parse failure.
        #[source]
        source: BindingError,
    },

    /// A matching handler could not be resolved.
    #[error("event `{event}`: {source}")]
    Load {
        /// The event being dispatched.
        event: String,
        /// The resolution failure.
        #[source]
        source: LoadError,
    },

    /// A handler ran and reported an error.
    #[error("event `{event}`: handler `{function}` in `{location}` failed: {source}")]
    Handler {
        /// The event being dispatched.
        event: String,
        /// The handler location.
        location: String,
        /// The handler function name.
        function: String,
        /// The error the handler returned.
        #[source]
        source: BoxError,
    },
}

impl DispatchError {
    /// The failure class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DispatchError::Binding { source, .. } => source.kind(),
            DispatchError::Load { source, .. } => source.kind(),
            DispatchError::Handler { .. } => ErrorKind::HandlerFailed,
        }
    }

    /// The event whose dispatch failed.
    pub fn event(&self) -> &str {
        match self {
            DispatchError::Binding { event, .. }
            | DispatchError::Load { event, .. }
            | DispatchError::Handler { event, .. } => event,
        }
    }
}
