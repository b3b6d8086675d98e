//! Filter DSL for DAT records.
//!
//! Expressions look like `rom.crc==deadbeef` or `game.year>=1990`: a
//! [`FieldKey`] naming a scope and field, an [`Operator`], and a value. A
//! [`FilterSet`] evaluates many of them against each record, applying each
//! predicate only to the record kinds its scope names.

pub mod error;
pub mod key;
pub mod operator;
pub mod predicate;
pub mod set;

pub use datkit_core::Scope;
pub use error::FilterError;
pub use key::FieldKey;
pub use operator::Operator;
pub use predicate::FilterPredicate;
pub use set::FilterSet;
