/// Defines one adapter function per host event.
///
/// Each adapter takes the registry followed by the event's fixed parameter
/// list. The first parameter is the tenant: it is stringified for filter
/// matching and also passed on to handlers, so handlers receive exactly the
/// arguments the host supplied, in order. The event name dispatched is the
/// adapter's own name.
///
/// # Example
///
/// ```rust,ignore
/// hookreg::host_events! {
///     /// Called after a record is saved.
///     pub fn redcap_save_record(project_id: i64, record: &str, instrument: &str);
/// }
///
/// redcap_save_record(&registry, 14, "rec-1", "demographics")?;
/// ```
#[macro_export]
macro_rules! host_events {
    ($(
        $(#[$meta:meta])*
        $vis:vis fn $event:ident($tenant:ident: $tenant_ty:ty $(, $arg:ident: $arg_ty:ty)*);
    )*) => {
        $(
            $(#[$meta])*
            $vis fn $event<L: $crate::HandlerLoader>(
                registry: &$crate::DispatchRegistry<L>,
                $tenant: $tenant_ty,
                $($arg: $arg_ty),*
            ) -> ::core::result::Result<$crate::DispatchSummary, $crate::DispatchError> {
                let tenant = ::std::string::ToString::to_string(&$tenant);
                let params = $crate::HookArgs::new()
                    .with($tenant)
                    $(.with($arg))*;
                registry.process_hook(::core::stringify!($event), &tenant, &params)
            }
        )*
    };
}
