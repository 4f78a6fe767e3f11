//! Core type definitions for element hiding filters
//!
//! Offsets are byte offsets into the filter text. They are only meaningful
//! against the exact buffer they were computed for.

// =============================================================================
// Filter Types
// =============================================================================

/// Classification of a single filter line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterType {
    /// Not an element hiding filter of any kind
    #[default]
    Unknown,
    /// `domains##selector`
    ElemHide,
    /// `domains#@#selector`
    ElemHideException,
    /// Element hiding with an embedded `[-abp-properties="..."]` pattern
    CssProperty,
}

impl FilterType {
    /// Stable lowercase name, used by the CLI and the wasm bindings.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::ElemHide => "elemhide",
            Self::ElemHideException => "elemhideexception",
            Self::CssProperty => "cssproperty",
        }
    }
}

impl core::fmt::Display for FilterType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Parse Outcome
// =============================================================================

/// Extra boundaries of a CSS property filter.
///
/// In order: end of the selector prefix (where the marker starts), start of
/// the embedded pattern (after the opening quote), end of the pattern (at
/// the closing quote) and start of the trailing selector text (after `]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CssPropertyOffsets {
    pub prefix_end: usize,
    pub regexp_start: usize,
    pub regexp_end: usize,
    pub suffix_start: usize,
}

/// Result of parsing one filter line.
///
/// When `kind` is [`FilterType::Unknown`] the offsets carry no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ParseOutcome {
    pub kind: FilterType,
    /// Offset of the `#` terminating the domain list.
    pub domains_end: usize,
    /// Offset of the first selector character.
    pub selector_start: usize,
    /// Present only for [`FilterType::CssProperty`].
    pub css: Option<CssPropertyOffsets>,
}

impl ParseOutcome {
    /// Rejection value.
    pub const fn unknown() -> Self {
        Self {
            kind: FilterType::Unknown,
            domains_end: 0,
            selector_start: 0,
            css: None,
        }
    }

    #[inline]
    pub fn is_unknown(&self) -> bool {
        self.kind == FilterType::Unknown
    }

    /// True when the filter text starts with a domain list.
    #[inline]
    pub fn has_domains(&self) -> bool {
        !self.is_unknown() && self.domains_end != 0
    }
}

// =============================================================================
// Domain Entries
// =============================================================================

/// One domain of a filter's domain list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainEntry {
    /// Lowercased domain. The empty string is the default entry.
    pub domain: String,
    /// `true` for included domains, `false` for `~excluded` ones.
    pub included: bool,
}
