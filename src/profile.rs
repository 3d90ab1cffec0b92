//! Typed lookups into the krb5 configuration profile.
//!
//! The profile is a TOML document with one table per krb5.conf section:
//!
//! ```toml
//! [libdefaults]
//! clockskew = 120
//! kdc_timesync = 1
//! default_tgs_enctypes = "aes256-cts des3-cbc-sha1"
//! ```
use std::str::FromStr;

use toml::{Table, Value};

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("profile section [{section}] is not a table")]
    NotASection { section: String },
    #[error("profile relation {key} in [{section}] is not an integer")]
    NotAnInteger { section: String, key: String },
    #[error("profile relation {key} in [{section}] is not a string")]
    NotAString { section: String, key: String },
}

/// Read access to configuration relations.
///
/// Lookups may block on whatever storage backs the profile.
pub trait Profile {
    /// Reads an integer relation, falling back to `default` when it is absent.
    /// The result is clamped to `[min, max]`.
    fn get_integer(&self, section: &str, key: &str, min: i64, max: i64, default: i64) -> Result<i64, ProfileError>;
    /// Reads a string relation, falling back to `default` when it is absent.
    /// `subkey` addresses a relation nested one level below `key`.
    fn get_string(&self, section: &str, key: &str, subkey: Option<&str>, default: &str) -> Result<String, ProfileError>;
}

fn clamp(value: i64, min: i64, max: i64) -> i64 {
    value.max(min).min(max)
}

/// A profile without relations, every lookup yields its default
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyProfile;
impl Profile for EmptyProfile {
    fn get_integer(&self, _section: &str, _key: &str, min: i64, max: i64, default: i64) -> Result<i64, ProfileError> {
        Ok(clamp(default, min, max))
    }
    fn get_string(&self, _section: &str, _key: &str, _subkey: Option<&str>, default: &str) -> Result<String, ProfileError> {
        Ok(default.to_owned())
    }
}

#[derive(Clone, Debug, Default)]
pub struct TomlProfile {
    table: Table,
}
impl TomlProfile {
    pub fn new(table: Table) -> Self {
        Self { table }
    }
    fn relation(&self, section: &str, key: &str) -> Result<Option<&Value>, ProfileError> {
        match self.table.get(section) {
            None => Ok(None),
            Some(Value::Table(relations)) => Ok(relations.get(key)),
            Some(_) => Err(ProfileError::NotASection {
                section: section.to_owned(),
            }),
        }
    }
}
impl FromStr for TomlProfile {
    type Err = toml::de::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).map(Self::new)
    }
}
impl Profile for TomlProfile {
    fn get_integer(&self, section: &str, key: &str, min: i64, max: i64, default: i64) -> Result<i64, ProfileError> {
        let not_an_integer = || ProfileError::NotAnInteger {
            section: section.to_owned(),
            key: key.to_owned(),
        };
        let value = match self.relation(section, key)? {
            None => default,
            Some(Value::Integer(i)) => *i,
            Some(Value::Boolean(b)) => i64::from(*b),
            Some(Value::String(s)) => s.trim().parse().map_err(|_| not_an_integer())?,
            Some(_) => return Err(not_an_integer()),
        };
        tracing::trace!(section, key, value, "profile integer lookup");
        Ok(clamp(value, min, max))
    }
    fn get_string(&self, section: &str, key: &str, subkey: Option<&str>, default: &str) -> Result<String, ProfileError> {
        let not_a_string = || ProfileError::NotAString {
            section: section.to_owned(),
            key: key.to_owned(),
        };
        let value = match (self.relation(section, key)?, subkey) {
            (None, _) => None,
            (Some(value), None) => Some(value),
            (Some(Value::Table(nested)), Some(subkey)) => nested.get(subkey),
            (Some(_), Some(_)) => return Err(not_a_string()),
        };
        let rendered = match value {
            None => default.to_owned(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Array(items)) => {
                let words = items
                    .iter()
                    .map(|item| item.as_str().ok_or_else(not_a_string))
                    .collect::<Result<Vec<_>, _>>()?;
                words.join(" ")
            }
            Some(Value::Integer(i)) => i.to_string(),
            Some(Value::Boolean(b)) => b.to_string(),
            Some(_) => return Err(not_a_string()),
        };
        tracing::trace!(section, key, subkey, value = %rendered, "profile string lookup");
        Ok(rendered)
    }
}
