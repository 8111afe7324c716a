//! Binding strings: `"<function>:<tenant filter>"`.
//!
//! A binding names the function to call inside a handler unit and the tenants
//! it applies to. The filter is either the wildcard `*` or a comma-separated
//! list of tenant ids. Whitespace around every delimiter is ignored, so
//! `" fn : 1 , 2 "` and `"fn:1,2"` are the same binding.

use crate::error::BindingError;
use std::{collections::BTreeSet, fmt, str::FromStr};

/// Separates the function name from the tenant filter.
pub const DELIMITER: char = ':';

/// Separates tenant ids inside the filter.
pub const SEPARATOR: char = ',';

/// Filter value matching every tenant.
pub const WILDCARD: &str = "*";

/// Which tenants a binding applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TenantFilter {
    /// Matches every tenant.
    Any,
    /// Matches exactly these tenant ids. Never empty.
    Tenants(BTreeSet<String>),
}

impl TenantFilter {
    /// Parse a filter segment. Returns `None` if it holds no tenant id.
    pub fn parse(segment: &str) -> Option<Self> {
        let segment = segment.trim();
        if segment == WILDCARD {
            return Some(TenantFilter::Any);
        }

        let tenants: BTreeSet<String> = segment
            .split(SEPARATOR)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_owned)
            .collect();

        if tenants.is_empty() {
            None
        } else {
            Some(TenantFilter::Tenants(tenants))
        }
    }

    /// Whether `tenant` passes this filter. Comparison is exact after trimming.
    pub fn matches(&self, tenant: &str) -> bool {
        match self {
            TenantFilter::Any => true,
            TenantFilter::Tenants(tenants) => tenants.contains(tenant.trim()),
        }
    }

    /// Whether this is the wildcard filter.
    pub fn is_wildcard(&self) -> bool {
        matches!(self, TenantFilter::Any)
    }
}

impl fmt::Display for TenantFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TenantFilter::Any => f.write_str(WILDCARD),
            TenantFilter::Tenants(tenants) => {
                for (i, tenant) in tenants.iter().enumerate() {
                    if i > 0 {
                        write!(f, "{SEPARATOR}")?;
                    }
                    f.write_str(tenant)?;
                }
                Ok(())
            }
        }
    }
}

/// A parsed binding: the function to invoke and the tenants it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    function: String,
    filter: TenantFilter,
}

impl Binding {
    /// Create a binding from its parts.
    pub fn new(function: impl Into<String>, filter: TenantFilter) -> Self {
        Self {
            function: function.into(),
            filter,
        }
    }

    /// Parse a raw `function:filter` string.
    ///
    /// # Errors
    ///
    /// Returns a [`BindingError`] if the string has no delimiter, more than one
    /// delimiter, an empty function name, or a filter with no tenant ids.
    pub fn parse(raw: &str) -> Result<Self, BindingError> {
        let mut parts = raw.split(DELIMITER);
        let (Some(function), Some(filter)) = (parts.next(), parts.next()) else {
            return Err(BindingError::MissingDelimiter { raw: raw.to_owned() });
        };
        if parts.next().is_some() {
            return Err(BindingError::ExtraDelimiter { raw: raw.to_owned() });
        }

        let function = function.trim();
        if function.is_empty() {
            return Err(BindingError::EmptyFunction { raw: raw.to_owned() });
        }

        let filter = TenantFilter::parse(filter)
            .ok_or_else(|| BindingError::EmptyFilter { raw: raw.to_owned() })?;

        Ok(Self::new(function, filter))
    }

    /// The function name to resolve in the handler unit.
    pub fn function(&self) -> &str {
        &self.function
    }

    /// The tenant filter.
    pub fn filter(&self) -> &TenantFilter {
        &self.filter
    }

    /// Whether this binding applies to `tenant`.
    pub fn matches(&self, tenant: &str) -> bool {
        self.filter.matches(tenant)
    }
}

impl FromStr for Binding {
    type Err = BindingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Binding::parse(s)
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{DELIMITER}{}", self.function, self.filter)
    }
}
