//! String measurement and splitting under the `support_unicode` toggle.
//!
//! All op lengths and slice indices for insert text go through these two
//! functions, so the whole crate measures in the same unit: extended
//! grapheme clusters by default, raw bytes when the toggle is off.

use unicode_segmentation::UnicodeSegmentation;

use crate::config;

/// Length of `s` in measurement units.
pub(crate) fn len(s: &str) -> usize {
    if config::support_unicode() {
        s.graphemes(true).count()
    } else {
        s.len()
    }
}

/// Split `s` at `idx` measurement units.
///
/// In byte mode the index must fall on a `char` boundary; indices derived
/// from op lengths of peers sharing the toggle always do.
pub(crate) fn split(s: &str, idx: usize) -> (&str, &str) {
    if config::support_unicode() {
        let byte_idx = s
            .grapheme_indices(true)
            .nth(idx)
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        s.split_at(byte_idx)
    } else {
        s.split_at(idx)
    }
}
