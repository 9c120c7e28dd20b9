//! Difference of two documents, expressed as a delta.

use unicode_segmentation::UnicodeSegmentation;

use crate::attributes;
use crate::config;
use crate::delta::iter::OpCursor;
use crate::delta::Delta;
use crate::error::DeltaError;
use crate::op::{InsertValue, Op};
use crate::util::diff::{diff as edit_script, DiffTag};

/// Embeds project to U+0000 so script positions line up with op lengths.
/// A text insert that genuinely contains U+0000 is indistinguishable from
/// an embed at this stage; the equal-span value check below resolves the
/// collision by re-inserting.
const EMBED_SENTINEL: char = '\0';

impl Delta {
    /// Compute the change that turns this document into `other`:
    /// `a.apply(&a.diff(&b)?) == Ok(b)`. Fails with
    /// [`DeltaError::BadDocument`] unless both deltas are documents.
    pub fn diff(&self, other: &Delta) -> Result<Delta, DeltaError> {
        let src = projection(self)?;
        let dst = projection(other)?;

        let script = if config::support_unicode() {
            let src: Vec<&str> = src.graphemes(true).collect();
            let dst: Vec<&str> = dst.graphemes(true).collect();
            edit_script(&src, &dst)
        } else {
            edit_script(src.as_bytes(), dst.as_bytes())
        };

        let mut a = OpCursor::new(self.ops());
        let mut b = OpCursor::new(other.ops());
        let mut out = Delta::new();

        for (tag, span) in script {
            let mut remaining = span;
            while remaining > 0 {
                let taken = match tag {
                    DiffTag::Ins => {
                        let len = b.peek_length().min(remaining);
                        if let Some(op) = b.take_length(len) {
                            out.push(op);
                        }
                        len
                    }
                    DiffTag::Del => {
                        let len = a.peek_length().min(remaining);
                        a.take_length(len);
                        out.push(Op::delete(len));
                        len
                    }
                    DiffTag::Eql => {
                        let len = a.peek_length().min(b.peek_length()).min(remaining);
                        let a_op = a.take_length(len);
                        let b_op = b.take_length(len);
                        if let (
                            Some(Op::Insert { value: a_value, attributes: a_attrs }),
                            Some(Op::Insert { value: b_value, attributes: b_attrs }),
                        ) = (a_op, b_op)
                        {
                            if a_value == b_value {
                                out.push(Op::Retain {
                                    count: len,
                                    attributes: attributes::diff(
                                        a_attrs.as_ref(),
                                        b_attrs.as_ref(),
                                    ),
                                });
                            } else {
                                // sentinel collision: same length, different
                                // content, so replace instead of retaining
                                out.push(Op::Insert {
                                    value: b_value,
                                    attributes: b_attrs,
                                });
                                out.push(Op::delete(len));
                            }
                        }
                        len
                    }
                };
                if taken == 0 {
                    break;
                }
                remaining -= taken;
            }
        }
        out.trim();
        Ok(out)
    }
}

fn projection(delta: &Delta) -> Result<String, DeltaError> {
    let mut text = String::new();
    for op in delta.ops() {
        match op {
            Op::Insert {
                value: InsertValue::Text(s),
                ..
            } => text.push_str(s),
            Op::Insert { .. } => text.push(EMBED_SENTINEL),
            _ => return Err(DeltaError::BadDocument),
        }
    }
    Ok(text)
}
