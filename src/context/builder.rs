use std::time::Duration;

use kenobi_krb5_core::{BuiltinRegistry, EnctypeRegistry, LibraryOptions};

use super::{Context, DEFAULT_CLOCK_SKEW, DEFAULT_KDC_OPTIONS, DEFAULT_KDC_REQ_SUMTYPE, LIBDEFAULTS};
use crate::{
    enctypes::EnctypePolicy,
    platform::{Platform, SystemPlatform},
    Error,
};

pub struct ContextBuilder {
    platform: Box<dyn Platform>,
    registry: Box<dyn EnctypeRegistry>,
    policy: EnctypePolicy,
}
impl ContextBuilder {
    pub fn new() -> Self {
        Self {
            platform: Box::new(SystemPlatform::new()),
            registry: Box::new(BuiltinRegistry),
            policy: EnctypePolicy::legacy(),
        }
    }
    #[must_use]
    pub fn platform(self, platform: impl Platform + 'static) -> Self {
        Self {
            platform: Box::new(platform),
            ..self
        }
    }
    #[must_use]
    pub fn registry(self, registry: impl EnctypeRegistry + 'static) -> Self {
        Self {
            registry: Box::new(registry),
            ..self
        }
    }
    #[must_use]
    pub fn policy(self, policy: EnctypePolicy) -> Self {
        Self { policy, ..self }
    }
    /// Builds the context.
    ///
    /// If any step fails, whatever was already set up is torn down before the error is returned.
    pub fn init(self) -> Result<Context, Error> {
        if self.policy.has_weak_defaults() {
            tracing::debug!(defaults = ?self.policy.in_tkt_defaults, "enctype policy prefers weak enctypes");
        }
        let mut ctx = Context::allocate(self.platform, self.registry, self.policy);
        ctx.set_default_in_tkt_enctypes(None)?;
        ctx.set_default_tgs_enctypes(None)?;
        ctx.os = Some(ctx.platform().init()?);

        let profile = ctx.profile();
        let clock_skew = profile.get_integer(LIBDEFAULTS, "clockskew", 0, DEFAULT_CLOCK_SKEW, DEFAULT_CLOCK_SKEW)?;
        let kdc_timesync = profile.get_integer(LIBDEFAULTS, "kdc_timesync", i64::MIN, i64::MAX, 0)?;

        ctx.clock_skew = Duration::from_secs(clock_skew.unsigned_abs());
        ctx.kdc_req_sumtype = DEFAULT_KDC_REQ_SUMTYPE;
        ctx.kdc_default_options = DEFAULT_KDC_OPTIONS;
        if kdc_timesync != 0 {
            ctx.library_options = ctx.library_options.with(LibraryOptions::SYNC_KDCTIME);
        }
        tracing::debug!(clock_skew = ?ctx.clock_skew, kdc_timesync, "initialized krb5 context");
        Ok(ctx)
    }
}
impl Default for ContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
