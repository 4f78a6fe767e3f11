//! Element hiding filter parser
//!
//! Validates one trimmed filter line and records where the domain list ends
//! and where the selector starts:
//!
//! ```text
//! filter       := domain-part '#' exception? '#' selector
//! domain-part  := characters other than / * | @ " ! #
//! exception    := '@'   (optionally surrounded by spaces)
//! selector     := non-empty, no '{' or '}'
//! ```
//!
//! The text is modified in place: spaces before the selector are removed and
//! the domain list is lowercased. Selectors are left untouched.
//!
//! # Examples
//!
//! ```
//! use eh_core::parse::parse;
//! use eh_core::FilterType;
//!
//! let mut text = String::from("Example.COM # # .ad .banner");
//! let outcome = parse(&mut text);
//! assert_eq!(outcome.kind, FilterType::ElemHide);
//! assert_eq!(text, "example.com##.ad .banner");
//! assert_eq!(&text[outcome.selector_start..], ".ad .banner");
//! ```

use crate::domains::lowercase_domain;
use crate::normalize::normalize_whitespace;
use crate::scanner::Scanner;
use crate::types::{CssPropertyOffsets, FilterType, ParseOutcome};

/// Marker opening the embedded pattern of a CSS property filter.
pub const CSS_PROPERTY_MARKER: &str = "[-abp-properties=";

bitflags::bitflags! {
    /// Facts collected while scanning.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct ScanFlags: u8 {
        /// A space was seen before the selector
        const SAW_SPACE = 1 << 0;
        /// `#@#` exception marker
        const EXCEPTION = 1 << 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    DomainPart,
    AfterHash,
    SelectorBody,
}

#[derive(Debug, Clone, Copy)]
struct Located {
    domains_end: usize,
    selector_start: usize,
    flags: ScanFlags,
}

/// Parse and normalize one element hiding filter.
///
/// `text` must already be trimmed. On success it is rewritten to its
/// normalized form and the returned offsets index into that form. On
/// [`FilterType::Unknown`] the text is left as it was.
pub fn parse(text: &mut String) -> ParseOutcome {
    let Some(located) = locate(text) else {
        return ParseOutcome::unknown();
    };

    let mut domains_end = located.domains_end;
    let mut selector_start = located.selector_start;

    if located.flags.contains(ScanFlags::SAW_SPACE) {
        normalize_whitespace(text, &mut domains_end, &mut selector_start);
    }
    if text[..domains_end].is_ascii() {
        text[..domains_end].make_ascii_lowercase();
    } else {
        let lowered = lowercase_domain(&text[..domains_end]);
        text.replace_range(..domains_end, &lowered);
    }

    if located.flags.contains(ScanFlags::EXCEPTION) {
        return ParseOutcome {
            kind: FilterType::ElemHideException,
            domains_end,
            selector_start,
            css: None,
        };
    }

    let css = find_css_property(text, selector_start);
    ParseOutcome {
        kind: if css.is_some() {
            FilterType::CssProperty
        } else {
            FilterType::ElemHide
        },
        domains_end,
        selector_start,
        css,
    }
}

/// Classify `text` without keeping the normalized form.
pub fn classify(text: &str) -> FilterType {
    let mut owned = text.trim().to_string();
    parse(&mut owned).kind
}

/// Single pass over the text. Returns `None` for anything that is not an
/// element hiding filter.
fn locate(text: &str) -> Option<Located> {
    let mut scanner = Scanner::new(text);
    let mut flags = ScanFlags::empty();
    let mut domains_end = 0;
    let mut state = State::DomainPart;

    loop {
        state = match state {
            State::DomainPart => {
                let mut terminated = false;
                while !scanner.done() {
                    match scanner.next() {
                        b'#' => {
                            domains_end = scanner.position() - 1;
                            terminated = true;
                            break;
                        }
                        ch @ (b'/' | b'*' | b'|' | b'@' | b'"' | b'!') => {
                            log::trace!(
                                "rejecting {text:?}: '{}' in domain list",
                                ch as char
                            );
                            return None;
                        }
                        b' ' => flags |= ScanFlags::SAW_SPACE,
                        _ => {}
                    }
                }
                if !terminated {
                    log::trace!("rejecting {text:?}: no '#' separator");
                    return None;
                }
                State::AfterHash
            }
            State::AfterHash => {
                if scanner.skip(b' ') {
                    flags |= ScanFlags::SAW_SPACE;
                }
                if scanner.skip_one(b'@') {
                    flags |= ScanFlags::EXCEPTION;
                    if scanner.skip(b' ') {
                        flags |= ScanFlags::SAW_SPACE;
                    }
                }
                if scanner.next() != b'#' {
                    log::trace!("rejecting {text:?}: malformed marker");
                    return None;
                }
                if scanner.skip(b' ') {
                    flags |= ScanFlags::SAW_SPACE;
                }
                if scanner.done() {
                    log::trace!("rejecting {text:?}: empty selector");
                    return None;
                }
                State::SelectorBody
            }
            State::SelectorBody => {
                let selector_start = scanner.position();
                while !scanner.done() {
                    if matches!(scanner.next(), b'{' | b'}') {
                        log::trace!("rejecting {text:?}: brace in selector");
                        return None;
                    }
                }
                return Some(Located {
                    domains_end,
                    selector_start,
                    flags,
                });
            }
        };
    }
}

/// Look for `[-abp-properties="..."]` in the selector. Malformed markers
/// are not errors; the filter just stays a plain element hiding filter.
fn find_css_property(text: &str, selector_start: usize) -> Option<CssPropertyOffsets> {
    let prefix_end = selector_start + text[selector_start..].find(CSS_PROPERTY_MARKER)?;
    let bytes = text.as_bytes();

    // Needs at least the quote and one more character.
    let regexp_start = prefix_end + CSS_PROPERTY_MARKER.len() + 1;
    if regexp_start >= bytes.len() {
        return None;
    }

    let quote = bytes[regexp_start - 1];
    if quote != b'\'' && quote != b'"' {
        log::debug!("ignoring property marker in {text:?}: unquoted pattern");
        return None;
    }

    let Some(len) = bytes[regexp_start..].iter().position(|&b| b == quote) else {
        log::debug!("ignoring property marker in {text:?}: unterminated pattern");
        return None;
    };
    let regexp_end = regexp_start + len;
    if bytes.get(regexp_end + 1) != Some(&b']') {
        log::debug!("ignoring property marker in {text:?}: missing ']'");
        return None;
    }

    Some(CssPropertyOffsets {
        prefix_end,
        regexp_start,
        regexp_end,
        suffix_start: regexp_end + 2,
    })
}
