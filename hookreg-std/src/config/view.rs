//! The immutable hook configuration.
//!
//! The configuration is a two-level YAML mapping: event name → handler
//! location → binding string. Document order is preserved at both levels,
//! because it is the order handlers run in.
//!
//! ```yaml
//! redcap_save_record:
//!   hooks/projects/test.php: "test_save_record: 12, 14"
//!   plugins/example/hooks.php: "example_save_record:*"
//! ```
//!
//! A binding with a colon followed by a space (`fn : 1, 2`) must be quoted;
//! unquoted, YAML reads it as a nested mapping and the document is rejected
//! as malformed. `fn:1,2` may be written bare.

use hookreg_core::{ConfigError, HandlerLocation};
use serde_yaml::{Mapping, Value};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

const INLINE_ORIGIN: &str = "<inline>";

/// One configured `location: binding` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    location: HandlerLocation,
    binding: String,
}

impl Entry {
    /// The handler unit's location.
    pub fn location(&self) -> &HandlerLocation {
        &self.location
    }

    /// The raw, unparsed binding string.
    pub fn binding(&self) -> &str {
        &self.binding
    }
}

/// All bindings registered for one event, in configuration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    event: String,
    entries: Vec<Entry>,
}

impl Section {
    /// The event name this section configures.
    pub fn event(&self) -> &str {
        &self.event
    }

    /// The entries in configuration order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

/// A read-only view of the hook configuration.
///
/// Built once from a file (or a string) and never modified afterwards; there
/// is no API to add, change or remove entries.
#[derive(Debug, Clone, Default)]
pub struct ConfigView {
    source: Option<PathBuf>,
    sections: Vec<Section>,
    index: HashMap<String, usize>,
}

impl ConfigView {
    /// Load the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Unreadable`] if the file is missing or cannot be read.
    /// - [`ConfigError::Malformed`] if it is not a mapping of event name to
    ///   `location: binding` pairs.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let origin = path.display().to_string();
        let text = String::from_utf8(bytes).map_err(|e| malformed(&origin, e))?;

        let mut view = Self::parse(&text, &origin)?;
        view.source = Some(path.to_path_buf());

        #[cfg(feature = "tracing")]
        tracing::debug!(
            path = %path.display(),
            events = view.len(),
            "loaded hook configuration"
        );
        Ok(view)
    }

    /// Build a view from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        Self::parse(text, INLINE_ORIGIN)
    }

    fn parse(text: &str, origin: &str) -> Result<Self, ConfigError> {
        let mut view = ConfigView::default();
        if text.trim().is_empty() {
            return Ok(view);
        }

        let root: Value = serde_yaml::from_str(text).map_err(|e| malformed(origin, e))?;
        let root = match root {
            Value::Mapping(root) => root,
            Value::Null => return Ok(view),
            other => {
                return Err(malformed(
                    origin,
                    format!("expected a mapping of event names, found {}", kind_of(&other)),
                ));
            }
        };

        for (key, value) in root {
            let event = scalar_key(&key)
                .ok_or_else(|| malformed(origin, format!("invalid event name {key:?}")))?;
            let entries = match value {
                Value::Mapping(mapping) => parse_entries(&event, mapping, origin)?,
                Value::Null => Vec::new(),
                other => {
                    return Err(malformed(
                        origin,
                        format!("section `{event}` must be a mapping, found {}", kind_of(&other)),
                    ));
                }
            };

            if view.index.contains_key(&event) {
                return Err(malformed(origin, format!("event `{event}` appears twice")));
            }
            view.index.insert(event.clone(), view.sections.len());
            view.sections.push(Section { event, entries });
        }

        Ok(view)
    }

    /// The entries registered for `event`, in configuration order.
    ///
    /// An event with no section yields an empty slice; that is not an error.
    pub fn get(&self, event: &str) -> &[Entry] {
        match self.section(event) {
            Some(section) => section.entries(),
            None => &[],
        }
    }

    /// The section for `event`, if the configuration has one.
    pub fn section(&self, event: &str) -> Option<&Section> {
        self.index.get(event).map(|&i| &self.sections[i])
    }

    /// Whether `event` has a section.
    pub fn contains(&self, event: &str) -> bool {
        self.index.contains_key(event)
    }

    /// Configured event names, in configuration order.
    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.event.as_str())
    }

    /// All sections, in configuration order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Number of configured events.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether no event is configured.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The file this view was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

fn parse_entries(event: &str, mapping: Mapping, origin: &str) -> Result<Vec<Entry>, ConfigError> {
    let mut entries: Vec<Entry> = Vec::with_capacity(mapping.len());
    for (key, value) in mapping {
        let location = scalar_key(&key).ok_or_else(|| {
            malformed(origin, format!("invalid handler location {key:?} in `{event}`"))
        })?;
        let location = HandlerLocation::new(location);

        let binding = match value {
            Value::String(binding) => binding,
            other => {
                return Err(malformed(
                    origin,
                    format!(
                        "binding for `{location}` in `{event}` must be a string, found {}",
                        kind_of(&other)
                    ),
                ));
            }
        };

        if entries.iter().any(|e| e.location == location) {
            return Err(malformed(
                origin,
                format!("handler location `{location}` appears twice in `{event}`"),
            ));
        }
        entries.push(Entry { location, binding });
    }
    Ok(entries)
}

fn scalar_key(key: &Value) -> Option<String> {
    match key {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_owned()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

fn malformed(origin: &str, reason: impl ToString) -> ConfigError {
    ConfigError::Malformed {
        origin: origin.to_owned(),
        reason: reason.to_string(),
    }
}
