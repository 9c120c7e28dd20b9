//! Process-wide configuration.
//!
//! The single knob is `support_unicode`, which selects how insert text is
//! measured and split: extended grapheme clusters (the default) or raw
//! bytes. Peers exchanging deltas must agree on the setting, and it must
//! not change while any delta is alive or lengths become inconsistent.
//! Set it once at start-up.

use std::sync::atomic::{AtomicBool, Ordering};

static SUPPORT_UNICODE: AtomicBool = AtomicBool::new(true);

/// True when string lengths are measured in extended grapheme clusters.
pub fn support_unicode() -> bool {
    SUPPORT_UNICODE.load(Ordering::Relaxed)
}

/// Select the string measurement mode: `true` for extended grapheme
/// clusters, `false` for raw bytes.
pub fn set_support_unicode(enabled: bool) {
    SUPPORT_UNICODE.store(enabled, Ordering::Relaxed);
}
