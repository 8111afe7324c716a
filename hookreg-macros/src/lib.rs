//! Procedural macros for hookreg.
//!
//! Both attributes submit to the distributed catalog gathered by
//! `Catalog::collect()`, so they require the `inventory` feature of `hookreg`.

use proc_macro::TokenStream;

mod register;

/// Register a function in a handler unit.
///
/// The function keeps its name and signature; it is additionally submitted to
/// the distributed catalog under `location`, callable by the name the
/// configuration uses (the Rust name unless `name` overrides it).
///
/// # Usage
///
/// ```rust,ignore
/// #[hookreg::hook_handler(location = "hooks/projects/test.php")]
/// fn test_save_record(args: &HookArgs) -> Result<(), BoxError> {
///     // ...
///     Ok(())
/// }
///
/// // Infallible handlers may omit the return type.
/// #[hookreg::hook_handler(location = "plugins/example/hooks.php", name = "example_save_record")]
/// fn save(args: &HookArgs) {
///     // ...
/// }
/// ```
#[proc_macro_attribute]
pub fn hook_handler(attr: TokenStream, item: TokenStream) -> TokenStream {
    register::hook_handler_impl(attr, item)
}

/// Register a load-time initialiser for a handler unit.
///
/// The function runs once, the first time a loader loads `location`.
///
/// ```rust,ignore
/// #[hookreg::on_load(location = "hooks/projects/test.php")]
/// fn connect_audit_log() {
///     // ...
/// }
/// ```
#[proc_macro_attribute]
pub fn on_load(attr: TokenStream, item: TokenStream) -> TokenStream {
    register::on_load_impl(attr, item)
}
