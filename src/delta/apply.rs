//! Application of a change to a document.

use crate::delta::Delta;
use crate::error::DeltaError;
use crate::op::OpKind;

impl Delta {
    /// Apply `change` to this document, producing the new document.
    ///
    /// Fails with [`DeltaError::LengthMismatch`] when the change retains
    /// or deletes more content than the document holds; nothing is applied
    /// partially. Application is composition once the lengths line up.
    pub fn apply(&self, change: &Delta) -> Result<Delta, DeltaError> {
        let consumed = change.length_of(&[OpKind::Retain, OpKind::Delete]);
        if consumed > self.length_of(&[OpKind::Insert]) {
            return Err(DeltaError::LengthMismatch);
        }
        Ok(self.compose(change))
    }

    /// [`Delta::apply`], panicking on error.
    pub fn must_apply(&self, change: &Delta) -> Delta {
        match self.apply(change) {
            Ok(doc) => doc,
            Err(err) => panic!("{err}"),
        }
    }
}
