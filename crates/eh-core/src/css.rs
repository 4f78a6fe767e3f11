//! CSS property filters
//!
//! `example.com##div[-abp-properties='width: *px']` hides `div` elements
//! whose computed style matches the embedded pattern. This module only
//! slices the pattern out of the filter and turns it into a regular
//! expression source; matching happens elsewhere.

use crate::types::CssPropertyOffsets;

/// Character class for the `^` separator placeholder.
const SEPARATOR_CLASS: &str = r"(?:[\x00-\x24\x26-\x2C\x2F\x3A-\x40\x5B-\x5E\x60\x7B-\x7F]|$)";

/// Replacement for a leading `||`: any scheme, then optional subdomains.
/// No lookahead, so the source stays valid for the `regex` crate.
const HOST_ANCHOR: &str = r"^[\w\-]+:\/+(?:[^\/]+\.)?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StartAnchor {
    None,
    Start,
    Host,
}

/// Borrowed view of the pieces of a CSS property filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CssProperty<'a> {
    text: &'a str,
    selector_start: usize,
    offsets: CssPropertyOffsets,
}

impl<'a> CssProperty<'a> {
    pub(crate) fn new(text: &'a str, selector_start: usize, offsets: CssPropertyOffsets) -> Self {
        Self {
            text,
            selector_start,
            offsets,
        }
    }

    /// Selector text before the `[-abp-properties=` marker.
    pub fn selector_prefix(&self) -> &'a str {
        &self.text[self.selector_start..self.offsets.prefix_end]
    }

    /// Pattern exactly as written between the quotes.
    pub fn regexp_source(&self) -> &'a str {
        &self.text[self.offsets.regexp_start..self.offsets.regexp_end]
    }

    /// Selector text after the closing `]`.
    pub fn selector_suffix(&self) -> &'a str {
        &self.text[self.offsets.suffix_start..]
    }

    pub fn offsets(&self) -> CssPropertyOffsets {
        self.offsets
    }

    /// Regular expression source for the embedded pattern.
    pub fn regexp_pattern(&self) -> String {
        pattern_to_regexp(self.regexp_source())
    }
}

/// Convert a property pattern to a regular expression source.
///
/// `/.../` is taken as a literal regular expression. Anything else is
/// wildcard syntax: `*` matches any run, `^` a separator, `|` at either end
/// anchors, a leading `||` anchors at a host, and every other ASCII
/// punctuation character is escaped. A trailing `^|` is just `^`.
pub fn pattern_to_regexp(pattern: &str) -> String {
    if pattern.len() >= 2 && pattern.starts_with('/') && pattern.ends_with('/') {
        return pattern[1..pattern.len() - 1].to_string();
    }

    let (start_anchor, body) = if let Some(rest) = pattern.strip_prefix("||") {
        (StartAnchor::Host, rest)
    } else if let Some(rest) = pattern.strip_prefix('|') {
        (StartAnchor::Start, rest)
    } else {
        (StartAnchor::None, pattern)
    };
    let (end_anchor, body) = if body.ends_with("^|") {
        (false, &body[..body.len() - 1])
    } else {
        match body.strip_suffix('|') {
            Some(rest) => (true, rest),
            None => (false, body),
        }
    };

    let mut out = String::with_capacity(body.len() * 2);
    let mut last_was_wildcard = false;
    for ch in body.chars() {
        if ch == '*' {
            if !last_was_wildcard {
                out.push_str(".*");
            }
            last_was_wildcard = true;
            continue;
        }
        last_was_wildcard = false;

        if ch == '^' {
            out.push_str(SEPARATOR_CLASS);
        } else if ch.is_ascii() && !(ch.is_ascii_alphanumeric() || ch == '_') {
            out.push('\\');
            out.push(ch);
        } else {
            out.push(ch);
        }
    }

    let mut trimmed = out.as_str();
    if start_anchor == StartAnchor::None {
        trimmed = trimmed.strip_prefix(".*").unwrap_or(trimmed);
    }
    if !end_anchor {
        trimmed = trimmed.strip_suffix(".*").unwrap_or(trimmed);
    }

    let mut result = String::with_capacity(trimmed.len() + HOST_ANCHOR.len() + 1);
    match start_anchor {
        StartAnchor::None => {}
        StartAnchor::Start => result.push('^'),
        StartAnchor::Host => result.push_str(HOST_ANCHOR),
    }
    result.push_str(trimmed);
    if end_anchor {
        result.push('$');
    }
    result
}
