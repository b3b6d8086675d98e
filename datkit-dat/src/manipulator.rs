//! Primitive field edits used by setter, replacer, and remover tools.
//!
//! Each operation either applies completely or returns an
//! [`OperationFailure`] without touching the record.

use datkit_core::{FieldValue, Record};

use crate::error::OperationFailure;

/// Remove `field` from `record`. Removing an absent field succeeds.
pub fn remove_field(record: &mut Record, field: &str) -> Result<(), OperationFailure> {
    if field.is_empty() {
        return Err(OperationFailure::EmptyFieldName);
    }
    if record.remove(field) {
        log::trace!("removed '{field}' from {} record", record.variant());
    }
    Ok(())
}

/// Copy `field` from `from` into `to`, overwriting whatever `to` holds.
///
/// Both records must be the same variant and `from` must hold the field
/// (a present null counts).
pub fn replace_field(from: &Record, to: &mut Record, field: &str) -> Result<(), OperationFailure> {
    if field.is_empty() {
        return Err(OperationFailure::EmptyFieldName);
    }
    if from.variant() != to.variant() {
        return Err(OperationFailure::VariantMismatch {
            from: from.variant(),
            to: to.variant(),
        });
    }
    if !from.contains(field) {
        return Err(OperationFailure::missing_field(from.variant(), field));
    }

    // Same variant and the key exists in `from`, so it is in the schema.
    to.insert(field, from.get(field).cloned())
        .map_err(|_| OperationFailure::missing_field(to.variant(), field))
}

/// Overwrite an existing `field`. Never adds a key that is not already there.
pub fn set_field(
    record: &mut Record,
    field: &str,
    value: Option<FieldValue>,
) -> Result<(), OperationFailure> {
    if field.is_empty() {
        return Err(OperationFailure::EmptyFieldName);
    }
    if !record.contains(field) {
        return Err(OperationFailure::missing_field(record.variant(), field));
    }
    record
        .insert(field, value)
        .map_err(|_| OperationFailure::missing_field(record.variant(), field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use datkit_core::Variant;

    fn rom() -> Record {
        Record::new(Variant::Rom)
            .with("name", "game.bin")
            .unwrap()
            .with("crc", "deadbeef")
            .unwrap()
            .with_null("md5")
            .unwrap()
    }

    #[test]
    fn remove_present_and_absent() {
        let mut record = rom();
        assert_eq!(remove_field(&mut record, "crc"), Ok(()));
        assert!(!record.contains("crc"));
        assert_eq!(remove_field(&mut record, "crc"), Ok(()));
        assert_eq!(remove_field(&mut record, "sha1"), Ok(()));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn remove_rejects_empty_field() {
        let mut record = rom();
        assert_eq!(
            remove_field(&mut record, ""),
            Err(OperationFailure::EmptyFieldName)
        );
        assert_eq!(record, rom());
    }

    #[test]
    fn replace_copies_value() {
        let from = rom();
        let mut to = Record::new(Variant::Rom).with("crc", "00000000").unwrap();
        assert_eq!(replace_field(&from, &mut to, "crc"), Ok(()));
        assert_eq!(to.get_str("crc"), Some("deadbeef"));

        // A present null is copied as a present null.
        assert_eq!(replace_field(&from, &mut to, "md5"), Ok(()));
        assert!(to.contains("md5"));
        assert_eq!(to.get("md5"), None);
    }

    #[test]
    fn replace_preconditions() {
        let from = rom();
        let mut to = Record::new(Variant::Rom);
        assert_eq!(
            replace_field(&from, &mut to, ""),
            Err(OperationFailure::EmptyFieldName)
        );
        assert_eq!(
            replace_field(&from, &mut to, "sha1"),
            Err(OperationFailure::missing_field(Variant::Rom, "sha1"))
        );

        let mut disk = Record::new(Variant::Disk);
        assert_eq!(
            replace_field(&from, &mut disk, "name"),
            Err(OperationFailure::VariantMismatch {
                from: Variant::Rom,
                to: Variant::Disk,
            })
        );
        assert!(to.is_empty());
        assert!(disk.is_empty());
    }

    #[test]
    fn set_only_updates_existing_fields() {
        let mut record = rom();
        assert_eq!(
            set_field(&mut record, "crc", Some("b19ed489".into())),
            Ok(())
        );
        assert_eq!(record.get_str("crc"), Some("b19ed489"));

        assert_eq!(set_field(&mut record, "md5", Some("abc".into())), Ok(()));
        assert_eq!(record.get_str("md5"), Some("abc"));

        assert_eq!(
            set_field(&mut record, "sha1", Some("abc".into())),
            Err(OperationFailure::missing_field(Variant::Rom, "sha1"))
        );
        assert!(!record.contains("sha1"));

        assert_eq!(
            set_field(&mut record, "", None),
            Err(OperationFailure::EmptyFieldName)
        );
    }

    #[test]
    fn set_can_null_a_field() {
        let mut record = rom();
        assert_eq!(set_field(&mut record, "CRC", None), Ok(()));
        assert!(record.contains("crc"));
        assert_eq!(record.get("crc"), None);
    }
}
