/// Hash algorithms whose digests DAT records carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashType {
    /// CRC-32
    Crc,
    /// MD2 (128-bit)
    Md2,
    /// MD4 (128-bit)
    Md4,
    /// MD5 (128-bit)
    Md5,
    /// SHA-1 (160-bit)
    Sha1,
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
    /// SpamSum fuzzy hash
    SpamSum,
}

impl HashType {
    /// Human-readable algorithm name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Crc => "CRC-32",
            Self::Md2 => "MD2",
            Self::Md4 => "MD4",
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA-1",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
            Self::SpamSum => "SpamSum",
        }
    }

    /// Record field holding this digest.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Crc => "crc",
            Self::Md2 => "md2",
            Self::Md4 => "md4",
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
            Self::SpamSum => "spamsum",
        }
    }

    /// Digest of a zero-length input, used to flag placeholder dumps.
    pub fn zero_hash(&self) -> &'static str {
        match self {
            Self::Crc => "00000000",
            Self::Md2 => "8350e5a3e24c153df2275c9f80692773",
            Self::Md4 => "31d6cfe0d16ae931b73c59d7e0c089c0",
            Self::Md5 => "d41d8cd98f00b204e9800998ecf8427e",
            Self::Sha1 => "da39a3ee5e6b4b0d3255bfef95601890afd80709",
            Self::Sha256 => "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
            Self::Sha384 => {
                "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b"
            }
            Self::Sha512 => {
                "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
            }
            Self::SpamSum => "3::",
        }
    }

    /// Whether `digest` is this algorithm's zero hash (hex case ignored).
    pub fn is_zero(&self, digest: &str) -> bool {
        digest.eq_ignore_ascii_case(self.zero_hash())
    }
}

impl std::fmt::Display for HashType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
