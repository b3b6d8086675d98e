use crate::hash::HashType;

/// Record kinds a DAT catalog can hold.
///
/// A record's variant is fixed when it is created. Converting between kinds
/// (e.g. a disk into a ROM) always produces a new record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variant {
    // Containers
    Header,
    Machine,

    // Items with identity hashes
    Rom,
    Disk,
    Media,

    // Items without identity hashes
    Sample,
    Archive,
    BiosSet,
    Chip,
    DeviceRef,
    Release,
}

/// All variants in registration order.
const ALL_VARIANTS: &[Variant] = &[
    Variant::Header,
    Variant::Machine,
    Variant::Rom,
    Variant::Disk,
    Variant::Media,
    Variant::Sample,
    Variant::Archive,
    Variant::BiosSet,
    Variant::Chip,
    Variant::DeviceRef,
    Variant::Release,
];

const DISK_IDENTITY: &[HashType] = &[HashType::Md5, HashType::Sha1];

const MEDIA_IDENTITY: &[HashType] = &[
    HashType::Md5,
    HashType::Sha1,
    HashType::Sha256,
    HashType::SpamSum,
];

const ROM_IDENTITY: &[HashType] = &[
    HashType::Crc,
    HashType::Md2,
    HashType::Md4,
    HashType::Md5,
    HashType::Sha1,
    HashType::Sha256,
    HashType::Sha384,
    HashType::Sha512,
    HashType::SpamSum,
];

impl Variant {
    /// Canonical lowercase name, also usable as a filter scope.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Machine => "machine",
            Self::Rom => "rom",
            Self::Disk => "disk",
            Self::Media => "media",
            Self::Sample => "sample",
            Self::Archive => "archive",
            Self::BiosSet => "biosset",
            Self::Chip => "chip",
            Self::DeviceRef => "deviceref",
            Self::Release => "release",
        }
    }

    /// Whether this variant is a dumped item (anything below a machine).
    pub fn is_item(&self) -> bool {
        !matches!(self, Self::Header | Self::Machine)
    }

    /// Ordered hash fields used for identity comparison and duplicate suffixes.
    ///
    /// Order is significant: [`crate::Record`] suffixes are derived from the
    /// first populated entry.
    pub fn identity_hashes(&self) -> &'static [HashType] {
        match self {
            Self::Disk => DISK_IDENTITY,
            Self::Media => MEDIA_IDENTITY,
            Self::Rom => ROM_IDENTITY,
            Self::Header
            | Self::Machine
            | Self::Sample
            | Self::Archive
            | Self::BiosSet
            | Self::Chip
            | Self::DeviceRef
            | Self::Release => &[],
        }
    }

    /// Whether this variant carries a dump status (`good`, `baddump`, `nodump`, ...).
    pub fn has_status(&self) -> bool {
        matches!(self, Self::Rom | Self::Disk)
    }

    /// All variants, containers first.
    pub fn all() -> &'static [Variant] {
        ALL_VARIANTS
    }

    /// All item variants (everything except header and machine).
    pub fn items() -> impl Iterator<Item = Variant> {
        ALL_VARIANTS.iter().copied().filter(Variant::is_item)
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Error returned when a string does not name a [`Variant`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown record type: '{0}'")]
pub struct VariantParseError(pub String);

impl std::str::FromStr for Variant {
    type Err = VariantParseError;

    /// Parse a variant from its short name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.short_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| VariantParseError(s.to_string()))
    }
}
