//! Field manipulation and identity rules for DAT item records.
//!
//! [`manipulator`] holds the primitive edits that setter/remover tools build
//! on, [`identity`] decides when two dumps are the same artifact, and
//! [`merge`] applies those rules across whole item lists.

pub mod error;
pub mod identity;
pub mod manipulator;
pub mod merge;

pub use error::OperationFailure;
pub use identity::{
    FieldMatch, conditional_field_equal, convert_to_rom, duplicate_suffix, equal_to,
    fill_missing_hashes, has_zero_hash, hash_match, is_nodump,
};
pub use manipulator::{remove_field, replace_field, set_field};
pub use merge::{merge_duplicates, resolve_duplicate_names};
