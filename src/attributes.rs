//! Attribute maps attached to insert and retain operations.
//!
//! An attribute map is a JSON object of format keys: `{"bold": true}`,
//! `{"color": "red"}` and so on. The absent map and the empty map are
//! equivalent, which is why every function here takes and returns
//! `Option<&Attributes>` / `Option<Attributes>` and never produces
//! `Some` of an empty map. A null value is an explicit erasure marker:
//! it is dropped when formats land on an insert but preserved while
//! composing retains, so the removal of a format can itself propagate.

use serde_json::{Map, Value};

/// A map of format keys to opaque JSON values.
pub type Attributes = Map<String, Value>;

/// Which side wins when concurrent edits collide: tie-break for inserts
/// at the same position and for conflicting formats on overlapping
/// retains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Left,
    Right,
}

impl Priority {
    pub fn opposite(self) -> Priority {
        match self {
            Priority::Left => Priority::Right,
            Priority::Right => Priority::Left,
        }
    }
}

/// Right-biased merge of two attribute maps.
///
/// Every key in `b` overrides `a`. With `keep_nulls` false, entries left
/// with a null value are dropped, the rule for composing formats
/// onto an insert. With `keep_nulls` true they survive as erasure markers,
/// the rule for composing two retains.
pub fn compose(
    a: Option<&Attributes>,
    b: Option<&Attributes>,
    keep_nulls: bool,
) -> Option<Attributes> {
    let mut out = a.cloned().unwrap_or_default();
    if let Some(b) = b {
        for (key, value) in b {
            out.insert(key.clone(), value.clone());
        }
    }
    if !keep_nulls {
        out.retain(|_, value| !value.is_null());
    }
    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

/// Transform `right` against the concurrent `left`.
///
/// With right priority the right map survives untouched. With left
/// priority, keys already set by `left` shadow the right map; only keys
/// new to `left` come through.
pub fn transform(
    left: Option<&Attributes>,
    right: Option<&Attributes>,
    priority: Priority,
) -> Option<Attributes> {
    if priority == Priority::Right {
        return right.filter(|attrs| !attrs.is_empty()).cloned();
    }
    let right = right?;
    let out: Attributes = match left {
        None => right.clone(),
        Some(left) => right
            .iter()
            .filter(|(key, _)| !left.contains_key(*key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect(),
    };
    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

/// The formats to apply to `a` to arrive at `b`; keys removed by `b` map
/// to null.
pub fn diff(a: Option<&Attributes>, b: Option<&Attributes>) -> Option<Attributes> {
    let empty = Attributes::new();
    let a = a.unwrap_or(&empty);
    let b = b.unwrap_or(&empty);
    let mut out = Attributes::new();
    for (key, value) in b {
        if a.get(key) != Some(value) {
            out.insert(key.clone(), value.clone());
        }
    }
    for key in a.keys() {
        if !b.contains_key(key) {
            out.insert(key.clone(), Value::Null);
        }
    }
    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(value: Value) -> Attributes {
        value.as_object().expect("test attrs must be an object").clone()
    }

    #[test]
    fn compose_right_overrides_left() {
        let a = attrs(json!({"bold": true, "color": "red"}));
        let b = attrs(json!({"color": "blue"}));
        let out = compose(Some(&a), Some(&b), false).unwrap();
        assert_eq!(out, attrs(json!({"bold": true, "color": "blue"})));
    }

    #[test]
    fn compose_drops_nulls_for_inserts() {
        let a = attrs(json!({"bold": true}));
        let b = attrs(json!({"bold": null, "color": "red"}));
        let out = compose(Some(&a), Some(&b), false).unwrap();
        assert_eq!(out, attrs(json!({"color": "red"})));
    }

    #[test]
    fn compose_keeps_nulls_for_retains() {
        let a = attrs(json!({"color": "blue"}));
        let b = attrs(json!({"bold": true, "color": "red", "font": null}));
        let out = compose(Some(&a), Some(&b), true).unwrap();
        assert_eq!(
            out,
            attrs(json!({"bold": true, "color": "red", "font": null}))
        );
    }

    #[test]
    fn compose_empty_result_is_absent() {
        let b = attrs(json!({"bold": null}));
        assert_eq!(compose(None, Some(&b), false), None);
        assert_eq!(compose(None, None, true), None);
    }

    #[test]
    fn transform_right_priority_returns_right() {
        let left = attrs(json!({"bold": true}));
        let right = attrs(json!({"bold": false, "italic": true}));
        let out = transform(Some(&left), Some(&right), Priority::Right).unwrap();
        assert_eq!(out, right);
    }

    #[test]
    fn transform_left_priority_shadows_existing_keys() {
        let left = attrs(json!({"bold": true}));
        let right = attrs(json!({"bold": false, "italic": true}));
        let out = transform(Some(&left), Some(&right), Priority::Left).unwrap();
        assert_eq!(out, attrs(json!({"italic": true})));
    }

    #[test]
    fn transform_left_priority_full_shadow_is_absent() {
        let left = attrs(json!({"bold": true}));
        let right = attrs(json!({"bold": false}));
        assert_eq!(transform(Some(&left), Some(&right), Priority::Left), None);
    }

    #[test]
    fn diff_reports_changes_and_removals() {
        let a = attrs(json!({"bold": true, "color": "red"}));
        let b = attrs(json!({"color": "blue", "italic": true}));
        let out = diff(Some(&a), Some(&b)).unwrap();
        assert_eq!(
            out,
            attrs(json!({"bold": null, "color": "blue", "italic": true}))
        );
    }

    #[test]
    fn diff_of_equal_maps_is_absent() {
        let a = attrs(json!({"bold": true}));
        assert_eq!(diff(Some(&a), Some(&a)), None);
        assert_eq!(diff(None, None), None);
    }
}
