use std::time::Duration;

use kenobi_krb5_core::{ChecksumType, Enctype, EnctypeRegistry, KdcOptions, LibraryOptions};

pub use builder::ContextBuilder;

use crate::{
    enctypes::{EnctypePolicy, TgsEnctypes},
    platform::{OsState, Platform},
    profile::{EmptyProfile, Profile},
    Error,
};

mod builder;

pub(crate) const LIBDEFAULTS: &str = "libdefaults";
pub(crate) const DEFAULT_CLOCK_SKEW: i64 = 5 * 60;
pub(crate) const DEFAULT_KDC_REQ_SUMTYPE: ChecksumType = ChecksumType::RSA_MD5;
pub(crate) const DEFAULT_KDC_OPTIONS: KdcOptions = KdcOptions::RENEWABLE_OK;

/// A Kerberos library context.
///
/// Holds the enctype preferences, the opened profile and the request defaults used by
/// everything built on top of it. Dropping the context releases all of it, including the
/// platform state. A context does no locking; share it across threads only behind your own.
pub struct Context {
    pub(crate) in_tkt_enctypes: Vec<Enctype>,
    pub(crate) tgs_enctypes: TgsEnctypes,
    default_realm: Option<String>,
    pub(crate) clock_skew: Duration,
    pub(crate) kdc_req_sumtype: ChecksumType,
    pub(crate) kdc_default_options: KdcOptions,
    pub(crate) library_options: LibraryOptions,
    pub(crate) os: Option<OsState>,
    pub(crate) registry: Box<dyn EnctypeRegistry>,
    pub(crate) policy: EnctypePolicy,
    platform: Box<dyn Platform>,
}
impl Context {
    /// Initializes a context from the system profile with the builtin enctype table and the legacy policy
    pub fn init() -> Result<Self, Error> {
        ContextBuilder::new().init()
    }
    /// Starts a context with a custom platform, enctype registry or policy
    pub fn builder() -> ContextBuilder {
        ContextBuilder::new()
    }
    pub(crate) fn allocate(
        platform: Box<dyn Platform>,
        registry: Box<dyn EnctypeRegistry>,
        policy: EnctypePolicy,
    ) -> Self {
        Self {
            in_tkt_enctypes: Vec::new(),
            tgs_enctypes: TgsEnctypes::Default,
            default_realm: None,
            clock_skew: Duration::ZERO,
            kdc_req_sumtype: DEFAULT_KDC_REQ_SUMTYPE,
            kdc_default_options: KdcOptions::default(),
            library_options: LibraryOptions::default(),
            os: None,
            registry,
            policy,
            platform,
        }
    }
    pub(crate) fn platform(&self) -> &dyn Platform {
        self.platform.as_ref()
    }
    /// Tears the context down. Equivalent to dropping it.
    pub fn free(self) {
        drop(self)
    }
    /// The profile opened by the platform during initialization
    pub fn profile(&self) -> &dyn Profile {
        match &self.os {
            Some(os) => os.profile(),
            None => &EmptyProfile,
        }
    }
    /// The platform state, present for every context handed out by [`ContextBuilder::init`]
    pub fn os_state(&self) -> Option<&OsState> {
        self.os.as_ref()
    }
    pub fn default_realm(&self) -> Option<&str> {
        self.default_realm.as_deref()
    }
    /// Replaces the default realm, `None` clears it
    pub fn set_default_realm(&mut self, realm: Option<&str>) -> Result<(), Error> {
        self.default_realm = match realm {
            Some(realm) => {
                let mut owned = String::new();
                owned.try_reserve_exact(realm.len())?;
                owned.push_str(realm);
                Some(owned)
            }
            None => None,
        };
        Ok(())
    }
    /// Maximum tolerated difference between the local clock and a KDC's
    pub fn clock_skew(&self) -> Duration {
        self.clock_skew
    }
    /// Checksum type used to protect KDC requests
    pub fn kdc_req_sumtype(&self) -> ChecksumType {
        self.kdc_req_sumtype
    }
    /// Options set on every KDC request unless the caller overrides them
    pub fn kdc_default_options(&self) -> KdcOptions {
        self.kdc_default_options
    }
    /// Behaviour switches read from `[libdefaults]`
    pub fn library_options(&self) -> LibraryOptions {
        self.library_options
    }
}
impl Drop for Context {
    fn drop(&mut self) {
        if let Some(os) = self.os.take() {
            self.platform.finalize(os);
        }
        tracing::debug!(realm = self.default_realm.as_deref(), "released krb5 context");
    }
}
impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("in_tkt_enctypes", &self.in_tkt_enctypes)
            .field("tgs_enctypes", &self.tgs_enctypes)
            .field("default_realm", &self.default_realm)
            .field("clock_skew", &self.clock_skew)
            .field("kdc_req_sumtype", &self.kdc_req_sumtype)
            .field("kdc_default_options", &self.kdc_default_options)
            .field("library_options", &self.library_options)
            .field("os", &self.os)
            .finish_non_exhaustive()
    }
}
