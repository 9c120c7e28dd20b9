//! Composition of two sequential deltas.

use crate::attributes;
use crate::delta::iter::{next_pair, OpCursor};
use crate::delta::Delta;
use crate::op::{Op, OpKind};

impl Delta {
    /// Combine `self` followed by `other` into a single equivalent delta:
    /// applying the result equals applying `self` and then `other`.
    ///
    /// The walk pairs length-matched fragments, except that a left delete
    /// is never split: content it removed is invisible to `other`, so it
    /// passes straight through to the output.
    pub fn compose(&self, other: &Delta) -> Delta {
        let mut left = OpCursor::new(self.ops());
        let mut right = OpCursor::new(other.ops());
        let mut out = Delta::with_capacity(self.ops().len() + other.ops().len());

        loop {
            match next_pair(&mut left, &mut right, Some(OpKind::Delete)) {
                (None, None) => break,
                (Some(op), None) | (None, Some(op)) => out.push(op),
                (Some(a), Some(b)) => match (a, b) {
                    // the right insert lands first; the left op goes again
                    (a, b @ Op::Insert { .. }) => {
                        out.push(b);
                        left.put_back(a);
                    }
                    // a left delete removed content `other` never saw
                    (a @ Op::Delete { .. }, b) => {
                        out.push(a);
                        right.put_back(b);
                    }
                    (
                        Op::Insert { value, attributes: a_attrs },
                        Op::Retain { attributes: b_attrs, .. },
                    ) => {
                        out.push(Op::Insert {
                            value,
                            attributes: attributes::compose(
                                a_attrs.as_ref(),
                                b_attrs.as_ref(),
                                false,
                            ),
                        });
                    }
                    // the right delete consumes the left insert whole
                    (Op::Insert { .. }, Op::Delete { .. }) => {}
                    (
                        Op::Retain { count, attributes: a_attrs },
                        Op::Retain { attributes: b_attrs, .. },
                    ) => {
                        out.push(Op::Retain {
                            count,
                            attributes: attributes::compose(
                                a_attrs.as_ref(),
                                b_attrs.as_ref(),
                                true,
                            ),
                        });
                    }
                    (Op::Retain { .. }, b @ Op::Delete { .. }) => out.push(b),
                },
            }
        }
        out.trim();
        out
    }
}
