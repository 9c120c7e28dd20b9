//! The three primitive operations of a delta.
//!
//! Every operation acts at an implicit cursor: `Insert` adds content,
//! `Retain` skips over (and optionally reformats) existing content,
//! `Delete` removes it. Lengths are measured in the crate-wide string
//! unit (see [`crate::config`]); embeds always measure 1.

use std::cmp::Ordering;

use serde_json::{Map, Value};

use crate::attributes::Attributes;
use crate::text;

/// The payload of an insert: a text run, an integer embed or an object
/// embed. Embeds are indivisible units of length 1.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertValue {
    Text(String),
    Embed(u64),
    EmbedMap(Map<String, Value>),
}

impl InsertValue {
    pub fn length(&self) -> usize {
        match self {
            InsertValue::Text(text) => text::len(text),
            InsertValue::Embed(_) | InsertValue::EmbedMap(_) => 1,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, InsertValue::Text(_))
    }
}

impl From<&str> for InsertValue {
    fn from(text: &str) -> InsertValue {
        InsertValue::Text(text.to_string())
    }
}

impl From<String> for InsertValue {
    fn from(text: String) -> InsertValue {
        InsertValue::Text(text)
    }
}

impl From<u64> for InsertValue {
    fn from(embed: u64) -> InsertValue {
        InsertValue::Embed(embed)
    }
}

impl From<Map<String, Value>> for InsertValue {
    fn from(embed: Map<String, Value>) -> InsertValue {
        InsertValue::EmbedMap(embed)
    }
}

/// Operation kind tag, used for kind-filtered lengths and the iterator's
/// skip bias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Insert,
    Retain,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Insert {
        value: InsertValue,
        attributes: Option<Attributes>,
    },
    Retain {
        count: usize,
        attributes: Option<Attributes>,
    },
    Delete {
        count: usize,
    },
}

impl Op {
    /// Build an insert. Empty attribute maps are dropped, and null
    /// attribute values are stripped; they only carry meaning on retains.
    pub fn insert(value: impl Into<InsertValue>, attributes: Option<Attributes>) -> Op {
        let attributes = attributes
            .map(|mut attrs| {
                attrs.retain(|_, value| !value.is_null());
                attrs
            })
            .filter(|attrs| !attrs.is_empty());
        Op::Insert {
            value: value.into(),
            attributes,
        }
    }

    /// Build a retain; an empty attribute map is dropped.
    pub fn retain(count: usize, attributes: Option<Attributes>) -> Op {
        Op::Retain {
            count,
            attributes: attributes.filter(|attrs| !attrs.is_empty()),
        }
    }

    pub fn delete(count: usize) -> Op {
        Op::Delete { count }
    }

    pub fn kind(&self) -> OpKind {
        match self {
            Op::Insert { .. } => OpKind::Insert,
            Op::Retain { .. } => OpKind::Retain,
            Op::Delete { .. } => OpKind::Delete,
        }
    }

    /// Length of the op in measurement units.
    pub fn length(&self) -> usize {
        match self {
            Op::Insert { value, .. } => value.length(),
            Op::Retain { count, .. } | Op::Delete { count } => *count,
        }
    }

    /// Compare two ops by length.
    pub fn compare(a: &Op, b: &Op) -> Ordering {
        a.length().cmp(&b.length())
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            Op::Insert { attributes, .. } | Op::Retain { attributes, .. } => attributes.as_ref(),
            Op::Delete { .. } => None,
        }
    }

    /// Split the op at `idx` of its length, preserving attributes on both
    /// halves.
    ///
    /// Embeds are indivisible: the head is the whole embed and the tail is
    /// an empty text insert, which the next push discards. Callers rely on
    /// always getting a pair back.
    pub fn slice(&self, idx: usize) -> (Op, Op) {
        match self {
            Op::Insert {
                value: InsertValue::Text(text),
                attributes,
            } => {
                let (head, tail) = text::split(text, idx);
                (
                    Op::Insert {
                        value: InsertValue::Text(head.to_string()),
                        attributes: attributes.clone(),
                    },
                    Op::Insert {
                        value: InsertValue::Text(tail.to_string()),
                        attributes: attributes.clone(),
                    },
                )
            }
            Op::Insert { attributes, .. } => (
                self.clone(),
                Op::Insert {
                    value: InsertValue::Text(String::new()),
                    attributes: attributes.clone(),
                },
            ),
            Op::Retain { count, attributes } => (
                Op::Retain {
                    count: idx,
                    attributes: attributes.clone(),
                },
                Op::Retain {
                    count: count - idx,
                    attributes: attributes.clone(),
                },
            ),
            Op::Delete { count } => (Op::Delete { count: idx }, Op::Delete { count: count - idx }),
        }
    }

    /// Merge two adjacent ops of the same kind carrying equal attributes:
    /// text inserts concatenate, retains and deletes add their counts.
    /// Embed inserts never merge. Returns `None` when the pair must stay
    /// separate.
    pub fn compact(a: &Op, b: &Op) -> Option<Op> {
        match (a, b) {
            (
                Op::Insert {
                    value: InsertValue::Text(left),
                    attributes: a_attrs,
                },
                Op::Insert {
                    value: InsertValue::Text(right),
                    attributes: b_attrs,
                },
            ) if a_attrs == b_attrs => Some(Op::Insert {
                value: InsertValue::Text(format!("{left}{right}")),
                attributes: a_attrs.clone(),
            }),
            (
                Op::Retain {
                    count: left,
                    attributes: a_attrs,
                },
                Op::Retain {
                    count: right,
                    attributes: b_attrs,
                },
            ) if a_attrs == b_attrs => Some(Op::Retain {
                count: left + right,
                attributes: a_attrs.clone(),
            }),
            (Op::Delete { count: left }, Op::Delete { count: right }) => {
                Some(Op::Delete {
                    count: left + right,
                })
            }
            _ => None,
        }
    }

    /// True for a retain carrying no formatting; such ops say nothing at
    /// the tail of a delta and are removed by trim.
    pub fn is_trimmable(&self) -> bool {
        matches!(
            self,
            Op::Retain {
                attributes: None,
                ..
            }
        )
    }
}
