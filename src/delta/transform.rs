//! Operational transformation of concurrent deltas.

use crate::attributes::{self, Priority};
use crate::delta::iter::{next_pair, OpCursor};
use crate::delta::Delta;
use crate::op::{Op, OpKind};

impl Delta {
    /// Rebase `other` past `self`, both drawn against the same base
    /// document, so the result can be applied after `self`.
    ///
    /// `priority` breaks ties: with [`Priority::Left`], `self`'s inserts
    /// keep their position ahead of concurrent inserts at the same cursor
    /// and `self`'s formats shadow conflicting ones on overlapping
    /// retains. Transforming each side past the other with opposite
    /// priorities converges on the same document.
    ///
    /// A left insert is never split by the walk: whatever `other` does to
    /// existing content, the inserted span is new to it and is crossed
    /// whole, as a retain.
    pub fn transform(&self, other: &Delta, priority: Priority) -> Delta {
        let mut left = OpCursor::new(self.ops());
        let mut right = OpCursor::new(other.ops());
        let mut out = Delta::with_capacity(self.ops().len() + other.ops().len());

        loop {
            match next_pair(&mut left, &mut right, Some(OpKind::Insert)) {
                (None, None) => break,
                (None, Some(op)) => out.push(op),
                // whatever `self` still does happens past `other`'s end
                (Some(_), None) => break,
                (Some(a), Some(b)) => match (a, b) {
                    (a @ Op::Insert { .. }, b @ Op::Insert { .. })
                        if priority == Priority::Right =>
                    {
                        out.push(b);
                        left.put_back(a);
                    }
                    (a @ Op::Insert { .. }, b) => {
                        out.push(Op::retain(a.length(), None));
                        right.put_back(b);
                    }
                    (a, b @ Op::Insert { .. }) => {
                        out.push(b);
                        left.put_back(a);
                    }
                    (
                        Op::Retain { count, attributes: a_attrs },
                        Op::Retain { attributes: b_attrs, .. },
                    ) => {
                        out.push(Op::Retain {
                            count,
                            attributes: attributes::transform(
                                a_attrs.as_ref(),
                                b_attrs.as_ref(),
                                priority,
                            ),
                        });
                    }
                    (Op::Retain { .. }, b @ Op::Delete { .. }) => out.push(b),
                    // `self` already removed the span `other` touches
                    (Op::Delete { .. }, Op::Retain { .. }) => {}
                    (Op::Delete { .. }, Op::Delete { .. }) => {}
                },
            }
        }
        out.trim();
        out
    }

    /// Rebase an integer cursor position past this delta. Deletes before
    /// the position pull it left; inserts at or before it push it right,
    /// unless the position holds [`Priority::Left`] at the exact insertion
    /// point.
    pub fn transform_position(&self, index: usize, priority: Priority) -> usize {
        let mut index = index;
        let mut offset = 0;
        for op in self.ops() {
            if offset > index {
                break;
            }
            let length = op.length();
            match op {
                Op::Delete { .. } => index -= length.min(index - offset),
                Op::Insert { .. } => {
                    if offset < index || priority == Priority::Right {
                        index += length;
                    }
                    offset += length;
                }
                Op::Retain { .. } => offset += length,
            }
        }
        index
    }
}
