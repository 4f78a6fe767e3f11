//! Domain lists of element hiding filters
//!
//! A domain list such as `a.com,~b.a.com` restricts where a filter applies.
//! Entries keep the order they were written in; a repeated domain takes the
//! flag of its last occurrence.
//!
//! # Examples
//!
//! ```
//! use eh_core::domains::DomainMap;
//!
//! let domains = DomainMap::parse("a.com,~b.com,c.com", ',');
//! assert_eq!(domains.selector_domain(','), "a.com,c.com");
//! assert!(domains.is_active_on("www.a.com"));
//! assert!(!domains.is_active_on("b.com"));
//! ```

use std::collections::HashMap;

use crate::types::DomainEntry;

/// Prefix marking an excluded domain.
pub const EXCLUSION_MARKER: char = '~';

/// Key of the entry that applies when no listed domain matches.
pub const DEFAULT_DOMAIN: &str = "";

/// Lowercase a domain one char at a time.
///
/// A char is only replaced when its lowercase form is a single char of the
/// same UTF-8 length, so byte offsets into the result match the input.
pub fn lowercase_domain(domain: &str) -> String {
    if domain.is_ascii() {
        return domain.to_ascii_lowercase();
    }

    domain
        .chars()
        .map(|ch| {
            let mut lower = ch.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(l), None) if l.len_utf8() == ch.len_utf8() => l,
                _ => ch,
            }
        })
        .collect()
}

/// Insertion-ordered map from domain to include/exclude flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainMap {
    entries: Vec<DomainEntry>,
    index: HashMap<String, usize>,
}

impl DomainMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Split `source` on `separator` and record each domain.
    ///
    /// Tokens prefixed with `~` are exclusions. Empty tokens are skipped.
    /// A default entry is appended last: it is `true` unless at least one
    /// domain was included.
    pub fn parse(source: &str, separator: char) -> Self {
        let mut map = Self::new();
        let mut has_includes = false;

        for token in source.split(separator) {
            let (included, domain) = match token.strip_prefix(EXCLUSION_MARKER) {
                Some(rest) => (false, rest),
                None => (true, token),
            };
            if domain.is_empty() {
                continue;
            }
            has_includes |= included;
            map.insert(lowercase_domain(domain), included);
        }

        map.insert(DEFAULT_DOMAIN.to_string(), !has_includes);
        map
    }

    /// Set the flag for `domain`. A domain already present keeps its
    /// position and takes the new flag.
    pub fn insert(&mut self, domain: String, included: bool) {
        match self.index.get(&domain) {
            Some(&slot) => self.entries[slot].included = included,
            None => {
                self.index.insert(domain.clone(), self.entries.len());
                self.entries.push(DomainEntry { domain, included });
            }
        }
    }

    /// Flag recorded for exactly `domain`.
    pub fn get(&self, domain: &str) -> Option<bool> {
        self.index.get(domain).map(|&slot| self.entries[slot].included)
    }

    /// Entries in insertion order, including the default entry.
    pub fn iter(&self) -> impl Iterator<Item = &DomainEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flag of the default entry. An empty map applies everywhere.
    pub fn default_flag(&self) -> bool {
        self.get(DEFAULT_DOMAIN).unwrap_or(true)
    }

    /// True when no specific domain is included.
    pub fn is_generic(&self) -> bool {
        self.default_flag()
    }

    /// Whether a filter with this domain list applies on `host`.
    ///
    /// Walks from `host` up through its parent domains; the most specific
    /// listed domain decides.
    pub fn is_active_on(&self, host: &str) -> bool {
        if host.is_empty() {
            return self.default_flag();
        }

        let host = lowercase_domain(host.trim_end_matches('.'));
        let mut candidate = host.as_str();
        loop {
            if let Some(included) = self.get(candidate) {
                return included;
            }
            match candidate.find('.') {
                Some(dot) => candidate = &candidate[dot + 1..],
                None => break,
            }
        }

        self.default_flag()
    }

    /// Join the included, non-empty domains with `separator`.
    pub fn selector_domain(&self, separator: char) -> String {
        let mut result = String::new();
        for entry in self.entries.iter().filter(|e| e.included && !e.domain.is_empty()) {
            if !result.is_empty() {
                result.push(separator);
            }
            result.push_str(&entry.domain);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_order() {
        let map = DomainMap::parse("c.com,a.com,~b.com", ',');
        let domains: Vec<_> = map.iter().map(|e| (e.domain.as_str(), e.included)).collect();
        assert_eq!(
            domains,
            vec![("c.com", true), ("a.com", true), ("b.com", false), ("", false)]
        );
    }

    #[test]
    fn test_selector_domain() {
        let map = DomainMap::parse("a.com,~b.com,c.com", ',');
        assert_eq!(map.selector_domain(','), "a.com,c.com");
    }

    #[test]
    fn test_selector_domain_excludes_only() {
        let map = DomainMap::parse("~a.com,~b.com", ',');
        assert_eq!(map.selector_domain(','), "");
        assert!(map.is_generic());
    }

    #[test]
    fn test_selector_domain_empty() {
        assert_eq!(DomainMap::new().selector_domain(','), "");
    }

    #[test]
    fn test_skips_empty_tokens() {
        let map = DomainMap::parse("a.com,,~,b.com,", ',');
        assert_eq!(map.len(), 3);
        assert_eq!(map.selector_domain(','), "a.com,b.com");
    }

    #[test]
    fn test_duplicates_last_write_wins() {
        let map = DomainMap::parse("a.com,b.com,~a.com", ',');
        assert_eq!(map.get("a.com"), Some(false));
        assert_eq!(map.iter().next().map(|e| e.domain.as_str()), Some("a.com"));
        assert_eq!(map.selector_domain(','), "b.com");
    }

    #[test]
    fn test_custom_separator() {
        let map = DomainMap::parse("a.com|~b.com", '|');
        assert_eq!(map.get("a.com"), Some(true));
        assert_eq!(map.get("b.com"), Some(false));
    }

    #[test]
    fn test_is_active_on() {
        let map = DomainMap::parse("example.com,~ads.example.com", ',');
        assert!(map.is_active_on("example.com"));
        assert!(map.is_active_on("www.example.com"));
        assert!(map.is_active_on("WWW.Example.COM"));
        assert!(!map.is_active_on("ads.example.com"));
        assert!(!map.is_active_on("x.ads.example.com"));
        assert!(!map.is_active_on("other.com"));
        assert!(!map.is_active_on(""));
    }

    #[test]
    fn test_is_active_on_excludes_only() {
        let map = DomainMap::parse("~example.com", ',');
        assert!(map.is_active_on("other.com"));
        assert!(map.is_active_on(""));
        assert!(!map.is_active_on("sub.example.com"));
    }

    #[test]
    fn test_lowercase_domain_non_ascii() {
        assert_eq!(lowercase_domain("BÜCHER.De"), "bücher.de");
        assert_eq!(lowercase_domain("ÉCOLE.fr"), "école.fr");
    }

    #[test]
    fn test_lowercase_domain_keeps_length() {
        // 'İ' lowercases to two chars and 'Ⱥ' to a longer encoding.
        assert_eq!(lowercase_domain("İ.com"), "İ.com");
        assert_eq!(lowercase_domain("Ⱥ.com"), "Ⱥ.com");
        for input in ["İ.COM", "ȺB.com", "BÜCHER.de"] {
            assert_eq!(lowercase_domain(input).len(), input.len(), "{input}");
        }
    }

    #[test]
    fn test_is_active_on_non_ascii() {
        let map = DomainMap::parse("BÜCHER.de", ',');
        assert_eq!(map.get("bücher.de"), Some(true));
        assert!(map.is_active_on("bücher.de"));
        assert!(map.is_active_on("Shop.BÜCHER.DE"));
    }

    #[test]
    fn test_trailing_dot_host() {
        let map = DomainMap::parse("example.com", ',');
        assert!(map.is_active_on("example.com."));
    }
}
