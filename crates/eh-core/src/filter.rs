//! Element hiding filter objects
//!
//! [`ElemHideFilter`] owns the normalized filter text together with the
//! offsets computed by [`crate::parse::parse`], and answers questions about
//! the selector and the domain list without re-parsing.

use crate::css::CssProperty;
use crate::domains::DomainMap;
use crate::parse::parse;
use crate::types::{FilterType, ParseOutcome};

/// Separator of the domain list in element hiding filters.
pub const DOMAIN_SEPARATOR: char = ',';

/// Error type for building filters from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("Empty filter text")]
    Empty,
    #[error("Not an element hiding filter: {0}")]
    NotElemHide(String),
}

/// A parsed element hiding, exception or CSS property filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElemHideFilter {
    text: String,
    outcome: ParseOutcome,
    domains: Option<DomainMap>,
}

impl ElemHideFilter {
    /// Parse one filter line. Outer whitespace is trimmed first.
    pub fn from_text(text: &str) -> Result<Self, FilterError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(FilterError::Empty);
        }

        let mut owned = trimmed.to_string();
        let outcome = parse(&mut owned);
        if outcome.is_unknown() {
            return Err(FilterError::NotElemHide(trimmed.to_string()));
        }

        let domains = outcome
            .has_domains()
            .then(|| DomainMap::parse(&owned[..outcome.domains_end], DOMAIN_SEPARATOR));

        Ok(Self {
            text: owned,
            outcome,
            domains,
        })
    }

    /// Normalized filter text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> FilterType {
        self.outcome.kind
    }

    pub fn outcome(&self) -> &ParseOutcome {
        &self.outcome
    }

    pub fn is_exception(&self) -> bool {
        self.outcome.kind == FilterType::ElemHideException
    }

    /// Everything after the marker.
    pub fn selector(&self) -> &str {
        &self.text[self.outcome.selector_start..]
    }

    /// Lowercased domain list as written, empty for generic filters.
    pub fn domains_source(&self) -> &str {
        &self.text[..self.outcome.domains_end]
    }

    pub fn domains(&self) -> Option<&DomainMap> {
        self.domains.as_ref()
    }

    /// Comma-joined included domains.
    pub fn selector_domain(&self) -> String {
        self.domains
            .as_ref()
            .map(|d| d.selector_domain(DOMAIN_SEPARATOR))
            .unwrap_or_default()
    }

    /// Pattern pieces, for CSS property filters only.
    pub fn css_property(&self) -> Option<CssProperty<'_>> {
        self.outcome
            .css
            .map(|offsets| CssProperty::new(&self.text, self.outcome.selector_start, offsets))
    }

    /// Whether this filter applies on pages of `host`.
    pub fn is_active_on_domain(&self, host: &str) -> bool {
        self.domains
            .as_ref()
            .map_or(true, |d| d.is_active_on(host))
    }

    /// True when the filter is not restricted to specific domains.
    pub fn is_generic(&self) -> bool {
        self.domains.as_ref().map_or(true, DomainMap::is_generic)
    }
}

impl core::str::FromStr for ElemHideFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

/// Parse one filter line into an [`ElemHideFilter`].
pub fn parse_filter(text: &str) -> Result<ElemHideFilter, FilterError> {
    ElemHideFilter::from_text(text)
}
