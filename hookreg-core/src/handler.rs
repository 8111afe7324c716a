//! # Handler
//!
//! The callable found inside a handler unit. Handlers receive the event's
//! positional arguments and act purely by side effect; a successful return
//! carries no value back to the host.
//!
//! # Usage Patterns
//!
//! 1. **Plain function**: `fn handle(args: &HookArgs) -> Result<(), BoxError>`
//! 2. **Closure**: `|args: &HookArgs| { ...; Ok(()) }`
//! 3. **Struct implementation**: `impl Handler for AuditTrail`

use crate::{args::HookArgs, error::BoxError};

/// A function registered in a handler unit.
///
/// Handlers are invoked synchronously and in configuration order. An `Err`
/// aborts the remainder of the dispatch and is surfaced to the host.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a hook handler",
    label = "missing `Handler` implementation",
    note = "Handlers are `Fn(&HookArgs) -> Result<(), BoxError>` or implement `Handler::call`."
)]
pub trait Handler: Send + Sync + 'static {
    /// Run the handler with the event's arguments.
    fn call(&self, args: &HookArgs) -> Result<(), BoxError>;
}

// Blanket impl for functions and closures
impl<F> Handler for F
where
    F: Fn(&HookArgs) -> Result<(), BoxError> + Send + Sync + 'static,
{
    fn call(&self, args: &HookArgs) -> Result<(), BoxError> {
        (self)(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    fn first_arg_positive(args: &HookArgs) -> Result<(), BoxError> {
        match args.get(0).and_then(|p| p.as_int()) {
            Some(v) if v > 0 => Ok(()),
            _ => Err("first argument must be a positive id".into()),
        }
    }

    #[test]
    fn test_fn_is_handler() {
        let handler: Arc<dyn Handler> = Arc::new(first_arg_positive);
        assert!(handler.call(&HookArgs::new().with(3)).is_ok());
        assert!(handler.call(&HookArgs::new()).is_err());
    }

    #[test]
    fn test_closure_is_handler() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let handler = move |_args: &HookArgs| -> Result<(), BoxError> {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        };

        Handler::call(&handler, &HookArgs::new()).unwrap();
        Handler::call(&handler, &HookArgs::new()).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }
}
