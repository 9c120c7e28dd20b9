//! Raw-byte measurement mode. This suite lives in its own binary so the
//! process-wide toggle never races the grapheme-mode suites; every test
//! here switches the toggle off first.

use quill_delta::{config, Delta, DeltaError, Op, Priority};

#[test]
fn lengths_count_bytes() {
    config::set_support_unicode(false);
    let doc = Delta::new().insert("héllo", None);
    assert_eq!(doc.length(), 6);
    assert_eq!(Op::insert("é", None).length(), 2);
    assert_eq!(Op::insert(1u64, None).length(), 1);
}

#[test]
fn apply_checks_byte_lengths() {
    config::set_support_unicode(false);
    let doc = Delta::new().insert("ab", None);
    assert_eq!(
        doc.apply(&Delta::new().delete(3)),
        Err(DeltaError::LengthMismatch)
    );
    let trimmed = doc.apply(&Delta::new().delete(2)).unwrap();
    assert!(trimmed.is_empty());
}

#[test]
fn compose_slices_at_byte_offsets() {
    config::set_support_unicode(false);
    let a = Delta::new().insert("abcd", None);
    let b = Delta::new().retain(2, None).delete(1);
    assert_eq!(
        a.compose(&b),
        Delta::new().insert("abd", None)
    );
}

#[test]
fn transform_counts_bytes() {
    config::set_support_unicode(false);
    let a = Delta::new().insert("xy", None);
    let b = Delta::new().insert("z", None);
    assert_eq!(
        a.transform(&b, Priority::Left),
        Delta::new().retain(2, None).insert("z", None)
    );
}

#[test]
fn diff_scripts_over_bytes() {
    config::set_support_unicode(false);
    let a = Delta::new().insert("ac", None);
    let b = Delta::new().insert("abc", None);
    let change = a.diff(&b).unwrap();
    assert_eq!(change, Delta::new().retain(1, None).insert("b", None));
    assert_eq!(a.apply(&change), Ok(b));
}
