//! Preferred enctype lists of a [`Context`](crate::Context).
use kenobi_krb5_core::{Enctype, EnctypeRegistry};

use crate::Error;

mod in_ticket;
mod tgs;

pub use tgs::parse_enctype_list;

/// Enctype preferences applied when the application has not chosen its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnctypePolicy {
    /// Used for initial ticket requests when no explicit list was set
    pub in_tkt_defaults: Vec<Enctype>,
    /// Parsed when `default_tgs_enctypes` is missing from the profile
    pub tgs_fallback: String,
}
impl EnctypePolicy {
    /// `des3-cbc-md5 des-cbc-md5 des-cbc-crc`
    ///
    /// These are the preferences of DES-era KDCs. All three are cryptographically weak
    /// (RFC 6649, RFC 8429) and only kept for interoperability with such KDCs.
    pub fn legacy() -> Self {
        Self {
            in_tkt_defaults: vec![Enctype::DES3_CBC_MD5, Enctype::DES_CBC_MD5, Enctype::DES_CBC_CRC],
            tgs_fallback: String::from("des3-cbc-md5 des-cbc-md5 des-cbc-crc"),
        }
    }
    /// Whether any of the initial ticket defaults is a weak enctype
    pub fn has_weak_defaults(&self) -> bool {
        self.in_tkt_defaults.iter().any(|e| e.is_weak())
    }
}
impl Default for EnctypePolicy {
    fn default() -> Self {
        Self::legacy()
    }
}

/// The ticket-granting enctype preference of a context
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TgsEnctypes {
    /// Resolved from `default_tgs_enctypes` whenever it is queried
    #[default]
    Default,
    Explicit(Vec<Enctype>),
}

/// Checks every candidate before allocating, so a rejected list leaves no trace
fn validated_copy(registry: &dyn EnctypeRegistry, candidates: &[Enctype]) -> Result<Vec<Enctype>, Error> {
    if let Some(&unsupported) = candidates.iter().find(|e| !registry.is_supported(**e)) {
        return Err(Error::UnsupportedEnctype(unsupported));
    }
    copy_list(candidates)
}

fn copy_list(list: &[Enctype]) -> Result<Vec<Enctype>, Error> {
    let mut copy = Vec::new();
    copy.try_reserve_exact(list.len())?;
    copy.extend_from_slice(list);
    Ok(copy)
}
