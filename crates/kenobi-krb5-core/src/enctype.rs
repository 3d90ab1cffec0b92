use std::{fmt::Display, num::NonZero, str::FromStr};

/// An encryption type code as assigned in RFC 3961 section 8.
///
/// Zero is reserved as a list terminator and never a valid code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Enctype(NonZero<i32>);
impl Enctype {
    pub const DES_CBC_CRC: Self = Self::from_const(1);
    pub const DES_CBC_MD4: Self = Self::from_const(2);
    pub const DES_CBC_MD5: Self = Self::from_const(3);
    pub const DES_CBC_RAW: Self = Self::from_const(4);
    pub const DES3_CBC_MD5: Self = Self::from_const(5);
    pub const DES3_CBC_RAW: Self = Self::from_const(6);
    pub const DES_HMAC_SHA1: Self = Self::from_const(8);
    pub const DES3_CBC_SHA1: Self = Self::from_const(16);
    pub const AES128_CTS_HMAC_SHA1_96: Self = Self::from_const(17);
    pub const AES256_CTS_HMAC_SHA1_96: Self = Self::from_const(18);
    pub const AES128_CTS_HMAC_SHA256_128: Self = Self::from_const(19);
    pub const AES256_CTS_HMAC_SHA384_192: Self = Self::from_const(20);
    pub const RC4_HMAC: Self = Self::from_const(23);
    pub const RC4_HMAC_EXP: Self = Self::from_const(24);
    pub const CAMELLIA128_CTS_CMAC: Self = Self::from_const(25);
    pub const CAMELLIA256_CTS_CMAC: Self = Self::from_const(26);

    const fn from_const(val: i32) -> Self {
        match NonZero::new(val) {
            Some(code) => Self(code),
            None => panic!("enctype code must not be zero"),
        }
    }
    pub fn new(val: i32) -> Option<Self> {
        NonZero::new(val).map(Self)
    }
    pub fn code(self) -> i32 {
        self.0.get()
    }
    /// The canonical name from the builtin table, if the code is listed there
    pub fn name(self) -> Option<&'static str> {
        BUILTIN.iter().find(|e| e.enctype == self).map(|e| e.names[0])
    }
    /// Single DES, raw triple DES and export-grade RC4 are broken or deprecated (RFC 6649, RFC 8429)
    pub fn is_weak(self) -> bool {
        BUILTIN.iter().find(|e| e.enctype == self).is_some_and(|e| e.weak)
    }
}
impl Display for Enctype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "enctype {}", self.code()),
        }
    }
}
impl From<Enctype> for i32 {
    fn from(value: Enctype) -> Self {
        value.code()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown encryption type name {0:?}")]
pub struct UnknownEnctypeName(pub String);

impl FromStr for Enctype {
    type Err = UnknownEnctypeName;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuiltinRegistry
            .by_name(s)
            .ok_or_else(|| UnknownEnctypeName(s.to_owned()))
    }
}

/// Answers which enctypes the library supports and how they are spelled in configuration.
pub trait EnctypeRegistry {
    fn is_supported(&self, enctype: Enctype) -> bool;
    fn by_name(&self, name: &str) -> Option<Enctype>;
}

/// The RFC 3961/3962/4757/6803/8009 enctype table
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinRegistry;
impl EnctypeRegistry for BuiltinRegistry {
    fn is_supported(&self, enctype: Enctype) -> bool {
        BUILTIN.iter().any(|e| e.enctype == enctype)
    }
    fn by_name(&self, name: &str) -> Option<Enctype> {
        BUILTIN
            .iter()
            .find(|e| e.names.iter().any(|n| n.eq_ignore_ascii_case(name)))
            .map(|e| e.enctype)
    }
}
impl<R: EnctypeRegistry + ?Sized> EnctypeRegistry for &R {
    fn is_supported(&self, enctype: Enctype) -> bool {
        (**self).is_supported(enctype)
    }
    fn by_name(&self, name: &str) -> Option<Enctype> {
        (**self).by_name(name)
    }
}

struct Entry {
    enctype: Enctype,
    names: &'static [&'static str],
    weak: bool,
}
const BUILTIN: &[Entry] = &[
    Entry {
        enctype: Enctype::DES_CBC_CRC,
        names: &["des-cbc-crc"],
        weak: true,
    },
    Entry {
        enctype: Enctype::DES_CBC_MD4,
        names: &["des-cbc-md4"],
        weak: true,
    },
    Entry {
        enctype: Enctype::DES_CBC_MD5,
        names: &["des-cbc-md5"],
        weak: true,
    },
    Entry {
        enctype: Enctype::DES_CBC_RAW,
        names: &["des-cbc-raw"],
        weak: true,
    },
    Entry {
        enctype: Enctype::DES3_CBC_MD5,
        names: &["des3-cbc-md5"],
        weak: true,
    },
    Entry {
        enctype: Enctype::DES3_CBC_RAW,
        names: &["des3-cbc-raw"],
        weak: true,
    },
    Entry {
        enctype: Enctype::DES_HMAC_SHA1,
        names: &["des-hmac-sha1"],
        weak: true,
    },
    Entry {
        enctype: Enctype::DES3_CBC_SHA1,
        names: &["des3-cbc-sha1", "des3-hmac-sha1", "des3-cbc-sha1-kd"],
        weak: true,
    },
    Entry {
        enctype: Enctype::AES128_CTS_HMAC_SHA1_96,
        names: &["aes128-cts-hmac-sha1-96", "aes128-cts", "aes128-sha1"],
        weak: false,
    },
    Entry {
        enctype: Enctype::AES256_CTS_HMAC_SHA1_96,
        names: &["aes256-cts-hmac-sha1-96", "aes256-cts", "aes256-sha1"],
        weak: false,
    },
    Entry {
        enctype: Enctype::AES128_CTS_HMAC_SHA256_128,
        names: &["aes128-cts-hmac-sha256-128", "aes128-sha2"],
        weak: false,
    },
    Entry {
        enctype: Enctype::AES256_CTS_HMAC_SHA384_192,
        names: &["aes256-cts-hmac-sha384-192", "aes256-sha2"],
        weak: false,
    },
    Entry {
        enctype: Enctype::RC4_HMAC,
        names: &["arcfour-hmac", "rc4-hmac", "arcfour-hmac-md5"],
        weak: true,
    },
    Entry {
        enctype: Enctype::RC4_HMAC_EXP,
        names: &["arcfour-hmac-exp", "rc4-hmac-exp", "arcfour-hmac-md5-exp"],
        weak: true,
    },
    Entry {
        enctype: Enctype::CAMELLIA128_CTS_CMAC,
        names: &["camellia128-cts-cmac", "camellia128-cts"],
        weak: false,
    },
    Entry {
        enctype: Enctype::CAMELLIA256_CTS_CMAC,
        names: &["camellia256-cts-cmac", "camellia256-cts"],
        weak: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_not_an_enctype() {
        assert_eq!(Enctype::new(0), None);
        assert_eq!(Enctype::new(5), Some(Enctype::DES3_CBC_MD5));
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(BuiltinRegistry.by_name("DES-CBC-CRC"), Some(Enctype::DES_CBC_CRC));
        assert_eq!(BuiltinRegistry.by_name("rc4-hmac"), Some(Enctype::RC4_HMAC));
        assert_eq!(BuiltinRegistry.by_name("bogus-name"), None);
        assert_eq!(BuiltinRegistry.by_name(""), None);
    }

    #[test]
    fn display_prefers_canonical_name() {
        assert_eq!(Enctype::DES3_CBC_SHA1.to_string(), "des3-cbc-sha1");
        assert_eq!(Enctype::new(-128).map(|e| e.to_string()).as_deref(), Some("enctype -128"));
    }

    #[test]
    fn unlisted_codes_are_unsupported() {
        assert!(BuiltinRegistry.is_supported(Enctype::AES256_CTS_HMAC_SHA1_96));
        let unknown = Enctype::new(9999).unwrap();
        assert!(!BuiltinRegistry.is_supported(unknown));
        assert!(!unknown.is_weak());
    }

    #[test]
    fn legacy_des_family_is_weak() {
        assert!(Enctype::DES_CBC_CRC.is_weak());
        assert!(Enctype::DES3_CBC_MD5.is_weak());
        assert!(!Enctype::AES128_CTS_HMAC_SHA1_96.is_weak());
    }
}
