//! Element Hiding Filter Core
//!
//! Parses and classifies single lines of element hiding filter syntax:
//! `domains##selector`, exceptions (`domains#@#selector`) and CSS property
//! filters (`##div[-abp-properties='pattern']`).
//!
//! # Architecture
//!
//! Parsing is one forward pass over the filter text. Offsets of the domain
//! list end and selector start are recorded as the scan goes; afterwards
//! insignificant spaces are compacted out and the domain list is lowercased,
//! both in place on the caller's buffer. No parse tree is allocated.
//!
//! # Modules
//!
//! - `scanner`: Forward-only byte cursor
//! - `parse`: Grammar validation and boundary location
//! - `normalize`: Whitespace compaction with offset remapping
//! - `domains`: Ordered domain list, activation and serialization
//! - `css`: CSS property pattern slicing
//! - `filter`: Owned filter objects and the text-to-filter factory
//! - `types`: Shared type definitions

pub mod css;
pub mod domains;
pub mod filter;
pub mod normalize;
pub mod parse;
pub mod scanner;
pub mod types;

// Re-export commonly used types
pub use css::CssProperty;
pub use domains::DomainMap;
pub use filter::{parse_filter, ElemHideFilter, FilterError};
pub use parse::{classify, parse};
pub use types::{CssPropertyOffsets, DomainEntry, FilterType, ParseOutcome};
