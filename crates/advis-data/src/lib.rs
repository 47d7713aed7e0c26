//! # advis-data
//!
//! Loads the nine snapshot tables from CSV text and caches them for the
//! lifetime of a [`TableRepository`].
//!
//! - [`parse_table`] maps columns to record fields by header name and rejects
//!   structurally malformed text (inconsistent column counts, values that do
//!   not fit the typed column).
//! - [`RawTable`] keeps the same text as untyped cells with number/text
//!   inference, for inspection.
//! - [`TableSource`] abstracts where the text comes from: a directory, an
//!   in-memory map, or the snapshot compiled into the binary.
//! - [`TableRepository`] parses each table on first access and hands out the
//!   same `Arc` afterwards. There is no invalidation.

pub mod error;
pub mod parse;
pub mod raw;
pub mod repository;
pub mod source;

pub use error::DataError;
pub use parse::parse_table;
pub use raw::{Cell, RawTable};
pub use repository::TableRepository;
pub use source::{DirectorySource, EmbeddedSource, InMemorySource, TableSource};
