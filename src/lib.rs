//! Kerberos client context setup and enctype preference negotiation.
//!
//! ```no_run
//! use kenobi_krb5::{Context, Enctype};
//!
//! let mut ctx = Context::init()?;
//! ctx.set_default_in_tkt_enctypes(Some(&[Enctype::AES256_CTS_HMAC_SHA1_96]))?;
//! let _tgs = ctx.get_tgs_enctypes(Some("krbtgt/EXAMPLE.COM@EXAMPLE.COM"))?;
//! # Ok::<(), kenobi_krb5::Error>(())
//! ```
pub use kenobi_krb5_core::{
    BuiltinRegistry, ChecksumType, Enctype, EnctypeRegistry, KdcOptions, LibraryOptions, UnknownEnctypeName,
};

pub mod context;
pub mod enctypes;
mod error;
pub mod platform;
pub mod profile;

pub use context::{Context, ContextBuilder};
pub use enctypes::{parse_enctype_list, EnctypePolicy, TgsEnctypes};
pub use error::Error;
pub use platform::{OsState, Platform, PlatformError, ProfilePlatform, SystemPlatform};
pub use profile::{EmptyProfile, Profile, ProfileError, TomlProfile};
