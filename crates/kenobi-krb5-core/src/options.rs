use std::{fmt::Display, num::NonZero};

/// A checksum type code as assigned in RFC 3961 section 8
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChecksumType(NonZero<i32>);
impl ChecksumType {
    pub const CRC32: Self = Self::from_const(1);
    pub const RSA_MD4: Self = Self::from_const(2);
    pub const RSA_MD4_DES: Self = Self::from_const(3);
    pub const DES_MAC: Self = Self::from_const(4);
    pub const RSA_MD5: Self = Self::from_const(7);
    pub const RSA_MD5_DES: Self = Self::from_const(8);
    pub const HMAC_SHA1_DES3_KD: Self = Self::from_const(12);
    pub const HMAC_SHA1_96_AES128: Self = Self::from_const(15);
    pub const HMAC_SHA1_96_AES256: Self = Self::from_const(16);

    const fn from_const(val: i32) -> Self {
        match NonZero::new(val) {
            Some(code) => Self(code),
            None => panic!("checksum type must not be zero"),
        }
    }
    pub fn new(val: i32) -> Option<Self> {
        NonZero::new(val).map(Self)
    }
    pub fn code(self) -> i32 {
        self.0.get()
    }
}
impl Display for ChecksumType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "checksum type {}", self.code())
    }
}

/// KDC request options (RFC 4120 section 5.4.1), bit 0 being the most significant
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct KdcOptions(pub u32);
impl KdcOptions {
    pub const FORWARDABLE: Self = Self(0x4000_0000);
    pub const FORWARDED: Self = Self(0x2000_0000);
    pub const PROXIABLE: Self = Self(0x1000_0000);
    pub const PROXY: Self = Self(0x0800_0000);
    pub const ALLOW_POSTDATE: Self = Self(0x0400_0000);
    pub const POSTDATED: Self = Self(0x0200_0000);
    pub const RENEWABLE: Self = Self(0x0080_0000);
    pub const RENEWABLE_OK: Self = Self(0x0000_0010);
    pub const ENC_TKT_IN_SKEY: Self = Self(0x0000_0008);
    pub const RENEW: Self = Self(0x0000_0002);
    pub const VALIDATE: Self = Self(0x0000_0001);

    #[must_use]
    pub fn with(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
    #[must_use]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

/// Client library behaviour switches
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LibraryOptions(pub u32);
impl LibraryOptions {
    /// Adjust for the offset between local time and the KDC's clock
    pub const SYNC_KDCTIME: Self = Self(0x0001);

    #[must_use]
    pub fn with(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
    #[must_use]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}
