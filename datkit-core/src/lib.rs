//! Record model for DAT catalogs: variants, schema-validated records,
//! and the hash algorithms whose digests they carry.
//!
//! Parsers produce [`Record`]s through [`Record::insert`], which enforces the
//! per-variant field whitelist in [`schema`]. Higher-level crates filter,
//! compare, and merge these records.

pub mod error;
pub mod hash;
pub mod record;
pub mod schema;
pub mod value;
pub mod variant;

pub use error::RecordError;
pub use hash::HashType;
pub use record::Record;
pub use schema::Scope;
pub use value::FieldValue;
pub use variant::{Variant, VariantParseError};
