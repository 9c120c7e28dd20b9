//! Quill Delta: the document model behind collaborative rich-text editors.
//!
//! A [`Delta`] is an ordered list of insert / retain / delete operations
//! describing either a document (inserts only) or a change to one. This
//! crate implements the operation algebra such editors converge on:
//! [`Delta::compose`], [`Delta::transform`] (operational transformation),
//! [`Delta::apply`], [`Delta::lines`] and [`Delta::diff`], plus the JSON
//! wire form used by the wider Quill ecosystem.
//!
//! Deltas are values: they are built through [`Delta::push`] (or the
//! fluent `insert`/`retain`/`delete` builders), which maintains a canonical
//! form at all times, and every operator returns a fresh delta. The only
//! process-wide configuration is [`config::set_support_unicode`], which
//! selects whether strings are measured in extended grapheme clusters or
//! raw bytes.

pub mod attributes;
pub mod codec;
pub mod config;
pub mod delta;
pub mod error;
pub mod op;

mod text;
mod util;

pub use attributes::{Attributes, Priority};
pub use delta::{Delta, Line};
pub use error::DeltaError;
pub use op::{InsertValue, Op, OpKind};
