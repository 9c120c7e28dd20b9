//! Splitting a document into lines.

use crate::attributes::Attributes;
use crate::delta::Delta;
use crate::error::DeltaError;
use crate::op::{InsertValue, Op};

/// One line of a document: the content before a newline, paired with the
/// attributes that newline carried (line formatting such as headers lives
/// on the `\n` in the Quill model).
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub delta: Delta,
    pub attributes: Attributes,
}

impl Delta {
    /// Split a document at `\n`. Each newline closes the accumulated line
    /// content and contributes its attributes as the line attributes;
    /// content after the last newline forms a final line with empty
    /// attributes. Fails with [`DeltaError::BadDocument`] unless every op
    /// is an insert.
    pub fn lines(&self) -> Result<Vec<Line>, DeltaError> {
        let mut lines = Vec::new();
        let mut current = Delta::new();
        for op in self.ops() {
            let (value, attributes) = match op {
                Op::Insert { value, attributes } => (value, attributes),
                _ => return Err(DeltaError::BadDocument),
            };
            match value {
                InsertValue::Text(text) => {
                    let mut rest = text.as_str();
                    while let Some(pos) = rest.find('\n') {
                        let (line_text, tail) = rest.split_at(pos);
                        if !line_text.is_empty() {
                            current.push(Op::insert(line_text, attributes.clone()));
                        }
                        lines.push(Line {
                            delta: std::mem::take(&mut current),
                            attributes: attributes.clone().unwrap_or_default(),
                        });
                        rest = &tail[1..];
                    }
                    if !rest.is_empty() {
                        current.push(Op::insert(rest, attributes.clone()));
                    }
                }
                _ => current.push(op.clone()),
            }
        }
        if !current.is_empty() {
            lines.push(Line {
                delta: current,
                attributes: Attributes::new(),
            });
        }
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn attrs(value: Value) -> Option<Attributes> {
        value.as_object().cloned()
    }

    #[test]
    fn newline_attributes_become_line_attributes() {
        let doc = Delta::new()
            .insert("ab", attrs(json!({"bold": true})))
            .insert("\n", attrs(json!({"header": 1})))
            .insert("cd", None);
        let lines = doc.lines().unwrap();
        assert_eq!(
            lines,
            vec![
                Line {
                    delta: Delta::new().insert("ab", attrs(json!({"bold": true}))),
                    attributes: attrs(json!({"header": 1})).unwrap(),
                },
                Line {
                    delta: Delta::new().insert("cd", None),
                    attributes: Attributes::new(),
                },
            ]
        );
    }

    #[test]
    fn newlines_inside_one_insert() {
        let doc = Delta::new().insert("a\nb\nc", None);
        let lines = doc.lines().unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].delta, Delta::new().insert("a", None));
        assert_eq!(lines[1].delta, Delta::new().insert("b", None));
        assert_eq!(lines[2].delta, Delta::new().insert("c", None));
    }

    #[test]
    fn consecutive_newlines_emit_blank_lines() {
        let doc = Delta::new().insert("a\n\nb", None);
        let lines = doc.lines().unwrap();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].delta.is_empty());
    }

    #[test]
    fn trailing_newline_emits_no_extra_line() {
        let doc = Delta::new().insert("a\n", None);
        let lines = doc.lines().unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].delta, Delta::new().insert("a", None));
    }

    #[test]
    fn embeds_join_the_current_line() {
        let doc = Delta::new()
            .insert("a", None)
            .insert(1u64, attrs(json!({"src": "img"})))
            .insert("b\n", None);
        let lines = doc.lines().unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].delta.ops().len(), 3);
    }

    #[test]
    fn non_document_is_rejected() {
        let delta = Delta::new().insert("a", None).retain(1, None);
        assert_eq!(delta.lines(), Err(DeltaError::BadDocument));
        let delta = Delta::new().delete(1);
        assert_eq!(delta.lines(), Err(DeltaError::BadDocument));
    }

    #[test]
    fn empty_document_has_no_lines() {
        assert_eq!(Delta::new().lines().unwrap(), vec![]);
    }
}
