//! Whitespace compaction for the domain and marker region
//!
//! Only spaces before the selector are insignificant. Selector whitespace
//! is kept as written.

/// Remove every space before `selector_start` and shift both offsets left
/// by the number of spaces removed before them.
///
/// Returns the number of removed spaces. Expects `text` to be trimmed.
pub fn normalize_whitespace(
    text: &mut String,
    domains_end: &mut usize,
    selector_start: &mut usize,
) -> usize {
    let limit = *selector_start;
    let domains_limit = *domains_end;
    let mut pos = 0usize;
    let mut removed = 0usize;
    let mut removed_before_domains_end = 0usize;

    text.retain(|ch| {
        let at = pos;
        pos += ch.len_utf8();
        if at < limit && ch == ' ' {
            removed += 1;
            if at < domains_limit {
                removed_before_domains_end += 1;
            }
            false
        } else {
            true
        }
    });

    *domains_end -= removed_before_domains_end;
    *selector_start -= removed;
    removed
}
