//! The delta container: an ordered op sequence kept in canonical form.
//!
//! Four invariants hold at all times and every operator relies on them:
//! no zero-length op is present; adjacent compatible ops are merged
//! (embeds excepted); an insert never directly follows a delete, it is
//! hoisted leftward, where it may merge again; and `trim` removes
//! trailing attribute-less retains.

mod apply;
mod compose;
mod diff;
pub(crate) mod iter;
mod lines;
mod transform;

pub use lines::Line;

use crate::attributes::Attributes;
use crate::op::{InsertValue, Op, OpKind};

/// An ordered sequence of operations describing a change, or, when it
/// holds only inserts, a document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Delta {
    ops: Vec<Op>,
}

impl Delta {
    pub fn new() -> Delta {
        Delta { ops: Vec::new() }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Delta {
        Delta {
            ops: Vec::with_capacity(capacity),
        }
    }

    /// Build a delta from raw operations, re-establishing the container
    /// invariants op by op.
    pub fn from_ops(ops: impl IntoIterator<Item = Op>) -> Delta {
        let mut delta = Delta::new();
        for op in ops {
            delta.push(op);
        }
        delta
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<Op> {
        self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    // ── Builders ──────────────────────────────────────────────────────────

    pub fn insert(mut self, value: impl Into<InsertValue>, attributes: Option<Attributes>) -> Delta {
        self.push(Op::insert(value, attributes));
        self
    }

    pub fn retain(mut self, count: usize, attributes: Option<Attributes>) -> Delta {
        self.push(Op::retain(count, attributes));
        self
    }

    pub fn delete(mut self, count: usize) -> Delta {
        self.push(Op::delete(count));
        self
    }

    // ── Normalized push ───────────────────────────────────────────────────

    /// Append an op, maintaining the container invariants. Zero-length ops
    /// are discarded; an insert hoists past a trailing delete (inserting
    /// before or after deleting at the same position is equivalent, and
    /// keeping inserts first makes the form canonical); adjacent
    /// compatible ops merge.
    pub fn push(&mut self, op: Op) {
        if op.length() == 0 {
            return;
        }
        if let (Some(Op::Delete { .. }), Op::Insert { .. }) = (self.ops.last(), &op) {
            if let Some(deleted) = self.ops.pop() {
                self.push(op);
                self.ops.push(deleted);
            }
            return;
        }
        if let Some(last) = self.ops.last_mut() {
            if let Some(merged) = Op::compact(last, &op) {
                *last = merged;
                return;
            }
        }
        self.ops.push(op);
    }

    /// Drop trailing attribute-less retains; they carry no information.
    pub fn trim(&mut self) {
        while self.ops.last().is_some_and(Op::is_trimmable) {
            self.ops.pop();
        }
    }

    // ── Lengths ───────────────────────────────────────────────────────────

    /// Total length of all ops.
    pub fn length(&self) -> usize {
        self.ops.iter().map(Op::length).sum()
    }

    /// Total length of the ops whose kind is in `kinds`.
    pub fn length_of(&self, kinds: &[OpKind]) -> usize {
        self.ops
            .iter()
            .filter(|op| kinds.contains(&op.kind()))
            .map(Op::length)
            .sum()
    }

    /// True when every op is an insert, i.e. the delta is a document.
    pub fn is_document(&self) -> bool {
        self.ops.iter().all(|op| matches!(op, Op::Insert { .. }))
    }

    // ── Concat / slice ────────────────────────────────────────────────────

    /// Append another delta's ops; the seam is re-compacted.
    pub fn concat(mut self, other: Delta) -> Delta {
        for op in other.ops {
            self.push(op);
        }
        self
    }

    /// The sub-delta covering `[start, start + len)` of this delta's op
    /// sequence, cutting ops at the boundaries.
    pub fn slice(&self, start: usize, len: usize) -> Delta {
        let mut cursor = iter::OpCursor::new(&self.ops);
        let mut out = Delta::new();
        let mut skip = start;
        while skip > 0 && cursor.has_next() {
            if let Some(op) = cursor.take_length(skip) {
                skip -= op.length();
            }
        }
        let mut remaining = len;
        while remaining > 0 && cursor.has_next() {
            if let Some(op) = cursor.take_length(remaining) {
                remaining -= op.length();
                out.push(op);
            }
        }
        out
    }

    /// Fold a sequence of deltas into one with repeated composition.
    pub fn compose_all<'a>(deltas: impl IntoIterator<Item = &'a Delta>) -> Delta {
        deltas
            .into_iter()
            .fold(Delta::new(), |acc, delta| acc.compose(delta))
    }
}
