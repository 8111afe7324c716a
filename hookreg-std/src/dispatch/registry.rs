//! The dispatch registry.
//!
//! For one event occurrence, walks every binding configured for the event in
//! configuration order, skips those whose tenant filter rejects the calling
//! tenant, and invokes the rest through a [`HandlerLoader`].
//!
//! # Failure policy
//!
//! Dispatch is fail-fast: the first malformed binding, unresolvable handler or
//! failing handler aborts the remaining bindings and is returned to the
//! caller. Handlers that already ran are not rolled back.

use crate::{
    config::{ConfigView, Entry, RegistryConfig},
    loader::{Catalog, CatalogLoader},
};
use hookreg_core::{
    Binding, ConfigError, DispatchError, HandlerLoader, HandlerLocation, HookArgs,
};

/// What a successful dispatch did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    /// Handlers invoked.
    pub invoked: usize,
    /// Bindings skipped because their tenant filter did not match.
    pub skipped: usize,
}

/// Maps events to handlers through an immutable [`ConfigView`].
///
/// The registry holds no mutable state of its own: it is `Send + Sync`
/// whenever its loader is, and concurrent dispatches are independent.
///
/// # Example
/// ```ignore
/// let registry = DispatchRegistry::from_catalog(RegistryConfig::from_env(), catalog)?;
/// registry.process_hook("redcap_save_record", "14", &args)?;
/// ```
pub struct DispatchRegistry<L> {
    config: RegistryConfig,
    view: ConfigView,
    loader: L,
}

impl DispatchRegistry<CatalogLoader> {
    /// Load the configuration and resolve handlers from `catalog` under
    /// `config.root()`.
    pub fn from_catalog(config: RegistryConfig, catalog: Catalog) -> Result<Self, ConfigError> {
        let loader = CatalogLoader::new(config.root(), catalog);
        Self::new(config, loader)
    }
}

impl<L: HandlerLoader> DispatchRegistry<L> {
    /// Load the configuration file named by `config`.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`]; a registry never exists without its configuration.
    pub fn new(config: RegistryConfig, loader: L) -> Result<Self, ConfigError> {
        let view = ConfigView::load(config.config_path())?;
        Ok(Self::with_view(config, view, loader))
    }

    /// Use an already loaded view.
    pub fn with_view(config: RegistryConfig, view: ConfigView, loader: L) -> Self {
        Self {
            config,
            view,
            loader,
        }
    }

    /// Invoke every handler bound to `event` whose filter admits `tenant`.
    ///
    /// Handlers run synchronously, in configuration order, each receiving
    /// `params`. An event with no bindings is a successful no-op.
    ///
    /// # Errors
    ///
    /// The first [`DispatchError`] encountered; remaining bindings are not
    /// processed.
    pub fn process_hook(
        &self,
        event: &str,
        tenant: &str,
        params: &HookArgs,
    ) -> Result<DispatchSummary, DispatchError> {
        let entries = self.view.get(event);
        if entries.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!(event, "no handlers configured");
            return Ok(DispatchSummary::default());
        }

        let result = self.dispatch_entries(event, tenant, params, entries);
        #[cfg(feature = "tracing")]
        if let Err(err) = &result {
            tracing::warn!(event, tenant, error = %err, "hook dispatch aborted");
        }
        result
    }

    fn dispatch_entries(
        &self,
        event: &str,
        tenant: &str,
        params: &HookArgs,
        entries: &[Entry],
    ) -> Result<DispatchSummary, DispatchError> {
        let mut summary = DispatchSummary::default();

        for entry in entries {
            let location = entry.location();
            let binding = parse_entry(event, entry)?;

            if !binding.matches(tenant) {
                #[cfg(feature = "tracing")]
                tracing::debug!(event, tenant, %location, filter = %binding.filter(), "binding skipped");
                summary.skipped += 1;
                continue;
            }

            let handler = self
                .loader
                .resolve(location, binding.function())
                .map_err(|source| DispatchError::Load {
                    event: event.to_owned(),
                    source,
                })?;

            #[cfg(feature = "tracing")]
            tracing::trace!(event, tenant, %location, function = binding.function(), "invoking handler");
            handler
                .call(params)
                .map_err(|source| DispatchError::Handler {
                    event: event.to_owned(),
                    location: location.to_string(),
                    function: binding.function().to_owned(),
                    source,
                })?;
            summary.invoked += 1;
        }

        Ok(summary)
    }

    /// The parsed bindings for `event`, in configuration order.
    ///
    /// # Errors
    ///
    /// [`DispatchError::Binding`] for the first malformed entry.
    pub fn bindings(&self, event: &str) -> Result<Vec<(HandlerLocation, Binding)>, DispatchError> {
        self.view
            .get(event)
            .iter()
            .map(|entry| Ok((entry.location().clone(), parse_entry(event, entry)?)))
            .collect()
    }

    /// The configuration this registry dispatches from.
    pub fn view(&self) -> &ConfigView {
        &self.view
    }

    /// The loader handlers are resolved through.
    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// The settings this registry was built from.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }
}

fn parse_entry(event: &str, entry: &Entry) -> Result<Binding, DispatchError> {
    Binding::parse(entry.binding()).map_err(|source| DispatchError::Binding {
        event: event.to_owned(),
        location: entry.location().to_string(),
        source,
    })
}
