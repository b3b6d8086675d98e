//! Identity rules for dump records.
//!
//! DAT sources rarely agree on which hashes they publish, so two records are
//! considered the same dump when the hashes they *both* carry agree and at
//! least one of them is actually shared. Missing hashes are wildcards.

use datkit_core::{FieldValue, Record, Variant};

/// Outcome of comparing one optional field between two records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMatch {
    /// Both sides carry the same value.
    Confirmed,
    /// At least one side has no data.
    Wildcard,
    /// Both sides carry data and it differs.
    Conflict,
}

/// Compare two optional values. Empty strings count as no data.
///
/// Values are compared by their string rendering, so a size stored as
/// `"1024"` by one parser matches `1024` stored by another.
pub fn conditional_field_equal(a: Option<&FieldValue>, b: Option<&FieldValue>) -> FieldMatch {
    let a = a.filter(|value| !value.is_empty());
    let b = b.filter(|value| !value.is_empty());
    match (a, b) {
        (Some(a), Some(b)) if a == b || a.to_string() == b.to_string() => FieldMatch::Confirmed,
        (Some(_), Some(_)) => FieldMatch::Conflict,
        _ => FieldMatch::Wildcard,
    }
}

/// [`conditional_field_equal`] applied to one field of two records.
pub fn field_match(a: &Record, b: &Record, field: &str) -> FieldMatch {
    conditional_field_equal(a.get(field), b.get(field))
}

/// Whether the record's status is `nodump` (any case).
pub fn is_nodump(record: &Record) -> bool {
    record.variant().has_status()
        && record
            .get_str("status")
            .is_some_and(|status| status.eq_ignore_ascii_case("nodump"))
}

/// Whether two records agree on their identity hashes.
///
/// Requires the same variant with a non-empty identity list, no conflicting
/// hash, and at least one hash confirmed on both sides.
pub fn hash_match(a: &Record, b: &Record) -> bool {
    if a.variant() != b.variant() {
        return false;
    }

    let mut confirmed = false;
    for hash in a.variant().identity_hashes() {
        match field_match(a, b, hash.field()) {
            FieldMatch::Conflict => return false,
            FieldMatch::Confirmed => confirmed = true,
            FieldMatch::Wildcard => {}
        }
    }
    confirmed
}

/// Whether two records describe the same artifact.
pub fn equal_to(a: &Record, b: &Record) -> bool {
    if a.variant() != b.variant() {
        return false;
    }

    // Known-undumped items have nothing to compare.
    if is_nodump(a) && is_nodump(b) {
        return true;
    }

    match a.variant() {
        Variant::Rom => field_match(a, b, "size") != FieldMatch::Conflict && hash_match(a, b),
        Variant::Disk | Variant::Media => hash_match(a, b),
        Variant::Header
        | Variant::Machine
        | Variant::Sample
        | Variant::Archive
        | Variant::BiosSet
        | Variant::Chip
        | Variant::DeviceRef
        | Variant::Release => a == b,
    }
}

/// Whether the record looks like a placeholder dump.
///
/// True when the variant has identity hashes and either none of them is
/// populated or any populated one is its algorithm's zero hash.
pub fn has_zero_hash(record: &Record) -> bool {
    let hashes = record.variant().identity_hashes();
    if hashes.is_empty() {
        return false;
    }

    let mut any_present = false;
    for hash in hashes {
        if let Some(digest) = non_empty(record, hash.field()) {
            if hash.is_zero(&digest) {
                return true;
            }
            any_present = true;
        }
    }
    !any_present
}

/// Copy identity hashes `target` lacks from `source`. Never overwrites.
///
/// Returns how many fields were filled.
pub fn fill_missing_hashes(target: &mut Record, source: &Record) -> usize {
    let mut filled = 0;
    for hash in target.variant().identity_hashes() {
        let field = hash.field();
        if non_empty(target, field).is_some() {
            continue;
        }
        let Some(value) = source.get(field).filter(|v| !v.is_empty()) else {
            continue;
        };
        match target.insert(field, Some(value.clone())) {
            Ok(()) => filled += 1,
            Err(e) => log::warn!("could not fill {field}: {e}"),
        }
    }
    filled
}

/// Suffix that disambiguates same-named records: `_` plus the first
/// populated identity hash, or `_1` when there is none.
pub fn duplicate_suffix(record: &Record) -> String {
    record
        .variant()
        .identity_hashes()
        .iter()
        .find_map(|hash| non_empty(record, hash.field()))
        .map_or_else(|| "_1".to_string(), |digest| format!("_{digest}"))
}

const DISK_COPIED: &[&str] = &["merge", "region", "status", "optional", "md5", "sha1"];
const MEDIA_COPIED: &[&str] = &["md5", "sha1", "sha256", "spamsum"];

/// Convert a disk or media record into the equivalent ROM.
///
/// Disks become `<name>.chd` and media become `<name>.aaruf`; a missing
/// name stays missing. Every other variant yields `None`.
pub fn convert_to_rom(record: &Record) -> Option<Record> {
    let (extension, copied) = match record.variant() {
        Variant::Disk => (".chd", DISK_COPIED),
        Variant::Media => (".aaruf", MEDIA_COPIED),
        _ => return None,
    };

    let name = record
        .get_string("name")
        .map(|name| FieldValue::String(format!("{name}{extension}")));
    let fields = std::iter::once(("name", name)).chain(
        copied
            .iter()
            .map(|field| (*field, record.get(field).cloned())),
    );

    Record::try_from_fields(Variant::Rom, fields)
        .inspect_err(|e| log::error!("{} to rom conversion failed: {e}", record.variant()))
        .ok()
}

fn non_empty(record: &Record, field: &str) -> Option<String> {
    record
        .get(field)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
}

#[cfg(test)]
#[path = "tests/identity_tests.rs"]
mod tests;
