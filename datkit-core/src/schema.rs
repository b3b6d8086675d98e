//! Field whitelists and scope aliases for every record variant.
//!
//! This is the read-only registry consulted whenever a field name arrives as
//! a string: record insertion, `scope.field` keys, and the manipulation
//! primitives. Everything here is `'static` and can be shared freely.

use crate::variant::Variant;

const HEADER_FIELDS: &[&str] = &[
    "author",
    "build",
    "category",
    "comment",
    "date",
    "datversion",
    "debug",
    "description",
    "email",
    "emulatorversion",
    "filename",
    "forcemerging",
    "forcenodump",
    "forcepacking",
    "forcezipping",
    "header",
    "homepage",
    "id",
    "imfolder",
    "mameconfig",
    "name",
    "notes",
    "plugin",
    "refname",
    "romtitle",
    "rootdir",
    "schemalocation",
    "screenshotsheight",
    "screenshotswidth",
    "system",
    "timestamp",
    "type",
    "url",
    "version",
];

const MACHINE_FIELDS: &[&str] = &[
    "board",
    "buttons",
    "category",
    "cloneof",
    "cloneofid",
    "comment",
    "company",
    "control",
    "country",
    "crc",
    "description",
    "developer",
    "dirname",
    "displaycount",
    "displaytype",
    "duplicateid",
    "emulator",
    "enabled",
    "extra",
    "favorite",
    "genre",
    "hash",
    "history",
    "id",
    "im1crc",
    "im2crc",
    "imagenumber",
    "isbios",
    "isdevice",
    "ismechanical",
    "language",
    "location",
    "manufacturer",
    "name",
    "notes",
    "playedcount",
    "playedtime",
    "players",
    "publisher",
    "ratings",
    "rebuildto",
    "relatedto",
    "releasenumber",
    "romof",
    "rotation",
    "runnable",
    "sampleof",
    "savetype",
    "score",
    "source",
    "sourcefile",
    "status",
    "subgenre",
    "supported",
    "system",
    "tags",
    "titleid",
    "url",
    "year",
];

const ROM_FIELDS: &[&str] = &[
    "album",
    "altromname",
    "altromtitle",
    "artist",
    "bios",
    "crc",
    "date",
    "dispose",
    "extension",
    "filecount",
    "fileisskipped",
    "filename",
    "format",
    "header",
    "inverted",
    "md2",
    "md4",
    "md5",
    "merge",
    "mia",
    "name",
    "offset",
    "optional",
    "original",
    "region",
    "remark",
    "rotation",
    "serial",
    "sha1",
    "sha256",
    "sha384",
    "sha512",
    "size",
    "soundonly",
    "source",
    "spamsum",
    "status",
    "summation",
    "title",
    "type",
    "value",
];

const DISK_FIELDS: &[&str] = &[
    "flags", "index", "md5", "merge", "name", "optional", "region", "sha1", "status", "writable",
];

const MEDIA_FIELDS: &[&str] = &["md5", "name", "sha1", "sha256", "spamsum"];

const SAMPLE_FIELDS: &[&str] = &["name"];

const ARCHIVE_FIELDS: &[&str] = &[
    "clone",
    "description",
    "languages",
    "name",
    "region",
    "regparent",
];

const BIOSSET_FIELDS: &[&str] = &["default", "description", "name"];

const CHIP_FIELDS: &[&str] = &["clock", "name", "soundonly", "tag", "type"];

const DEVICEREF_FIELDS: &[&str] = &["name"];

const RELEASE_FIELDS: &[&str] = &["date", "default", "language", "name", "region"];

/// Legal field names for `variant`, in alphabetical order.
pub fn fields(variant: Variant) -> &'static [&'static str] {
    match variant {
        Variant::Header => HEADER_FIELDS,
        Variant::Machine => MACHINE_FIELDS,
        Variant::Rom => ROM_FIELDS,
        Variant::Disk => DISK_FIELDS,
        Variant::Media => MEDIA_FIELDS,
        Variant::Sample => SAMPLE_FIELDS,
        Variant::Archive => ARCHIVE_FIELDS,
        Variant::BiosSet => BIOSSET_FIELDS,
        Variant::Chip => CHIP_FIELDS,
        Variant::DeviceRef => DEVICEREF_FIELDS,
        Variant::Release => RELEASE_FIELDS,
    }
}

/// Canonical spelling of `field` for `variant`, if the schema allows it.
///
/// Matching is ASCII case-insensitive.
pub fn canonical_field(variant: Variant, field: &str) -> Option<&'static str> {
    fields(variant)
        .iter()
        .copied()
        .find(|name| name.eq_ignore_ascii_case(field))
}

/// Sorted union of the fields of every item variant.
pub fn item_fields() -> Vec<&'static str> {
    let mut all: Vec<&'static str> = Variant::items()
        .flat_map(|variant| fields(variant).iter().copied())
        .collect();
    all.sort_unstable();
    all.dedup();
    all
}

/// The record kinds a `scope.field` key can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// DAT header records only.
    Header,
    /// Machine (game/set) records only.
    Machine,
    /// Every item record regardless of variant.
    Item,
    /// Item records of one specific variant.
    Variant(Variant),
}

impl Scope {
    /// Resolve a scope alias (case-insensitive).
    ///
    /// `game`, `resource` and `set` all mean `machine`; `datitem` means
    /// `item`. A bare item variant name (`rom`, `disk`, ...) is a
    /// variant-restricted scope, distinct from the generic `item`.
    pub fn resolve(alias: &str) -> Option<Scope> {
        let lower = alias.to_ascii_lowercase();
        match lower.as_str() {
            "header" => Some(Scope::Header),
            "game" | "machine" | "resource" | "set" => Some(Scope::Machine),
            "datitem" | "item" => Some(Scope::Item),
            other => other
                .parse::<Variant>()
                .ok()
                .filter(Variant::is_item)
                .map(Scope::Variant),
        }
    }

    /// Canonical name of the scope.
    pub fn name(&self) -> &'static str {
        match self {
            Scope::Header => "header",
            Scope::Machine => "machine",
            Scope::Item => "item",
            Scope::Variant(variant) => variant.short_name(),
        }
    }

    /// Canonical spelling of `field` within this scope, if legal.
    ///
    /// The generic item scope accepts any field of any item variant.
    pub fn canonical_field(&self, field: &str) -> Option<&'static str> {
        match self {
            Scope::Header => canonical_field(Variant::Header, field),
            Scope::Machine => canonical_field(Variant::Machine, field),
            Scope::Item => Variant::items().find_map(|variant| canonical_field(variant, field)),
            Scope::Variant(variant) => canonical_field(*variant, field),
        }
    }

    /// Whether records of `variant` are addressed by this scope.
    pub fn applies_to(&self, variant: Variant) -> bool {
        match self {
            Scope::Header => variant == Variant::Header,
            Scope::Machine => variant == Variant::Machine,
            Scope::Item => variant.is_item(),
            Scope::Variant(scoped) => *scoped == variant,
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::HashType;

    #[test]
    fn field_lists_are_sorted_and_unique() {
        for &variant in Variant::all() {
            let list = fields(variant);
            let mut sorted = list.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(list, sorted.as_slice(), "{variant} fields out of order");
        }
    }

    #[test]
    fn identity_fields_are_in_schema() {
        for &variant in Variant::all() {
            for hash in variant.identity_hashes() {
                assert!(
                    canonical_field(variant, hash.field()).is_some(),
                    "{variant} is missing identity field {}",
                    hash.field()
                );
            }
        }
    }

    #[test]
    fn canonical_field_ignores_case() {
        assert_eq!(canonical_field(Variant::Rom, "SHA1"), Some("sha1"));
        assert_eq!(canonical_field(Variant::Sample, "crc"), None);
        assert_eq!(canonical_field(Variant::Rom, HashType::Crc.field()), Some("crc"));
    }

    #[test]
    fn scope_aliases() {
        let cases = [
            ("game", Scope::Machine),
            ("SET", Scope::Machine),
            ("resource", Scope::Machine),
            ("machine", Scope::Machine),
            ("header", Scope::Header),
            ("datitem", Scope::Item),
            ("item", Scope::Item),
            ("rom", Scope::Variant(Variant::Rom)),
            ("Disk", Scope::Variant(Variant::Disk)),
            ("sample", Scope::Variant(Variant::Sample)),
        ];
        for (alias, expected) in cases {
            assert_eq!(Scope::resolve(alias), Some(expected), "alias '{alias}'");
        }
        assert_eq!(Scope::resolve("cartridge"), None);
        assert_eq!(Scope::resolve(""), None);
    }

    #[test]
    fn item_scope_uses_field_union() {
        assert_eq!(Scope::Item.canonical_field("crc"), Some("crc"));
        assert_eq!(Scope::Item.canonical_field("writable"), Some("writable"));
        assert_eq!(Scope::Item.canonical_field("manufacturer"), None);
        assert!(item_fields().contains(&"clock"));
    }

    #[test]
    fn scope_application() {
        assert!(Scope::Item.applies_to(Variant::Sample));
        assert!(!Scope::Item.applies_to(Variant::Machine));
        assert!(Scope::Variant(Variant::Rom).applies_to(Variant::Rom));
        assert!(!Scope::Variant(Variant::Rom).applies_to(Variant::Disk));
        assert!(Scope::Header.applies_to(Variant::Header));
        assert!(!Scope::Machine.applies_to(Variant::Header));
    }
}
