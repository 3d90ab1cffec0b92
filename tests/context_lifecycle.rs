use std::{cell::Cell, rc::Rc, time::Duration};

use kenobi_krb5::{
    ChecksumType, Context, Enctype, EnctypePolicy, Error, KdcOptions, LibraryOptions, OsState, Platform,
    PlatformError, ProfileError, TomlProfile,
};

#[derive(Clone, Default)]
struct RecordingPlatform {
    inits: Rc<Cell<u32>>,
    finalizes: Rc<Cell<u32>>,
    fail: bool,
    attach_data: bool,
    data_drops: Rc<Cell<u32>>,
    profile: TomlProfile,
}

struct PlatformData {
    drops: Rc<Cell<u32>>,
}
impl Drop for PlatformData {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
impl RecordingPlatform {
    fn with_profile(text: &str) -> Self {
        Self {
            profile: text.parse().unwrap(),
            ..Self::default()
        }
    }
}
impl Platform for RecordingPlatform {
    fn init(&self) -> Result<OsState, PlatformError> {
        self.inits.set(self.inits.get() + 1);
        if self.fail {
            return Err(PlatformError::Other("simulated failure".into()));
        }
        let state = OsState::new(self.profile.clone());
        if self.attach_data {
            let data = PlatformData {
                drops: self.data_drops.clone(),
            };
            return Ok(state.with_platform_data(Box::new(data)));
        }
        Ok(state)
    }
    fn finalize(&self, state: OsState) {
        self.finalizes.set(self.finalizes.get() + 1);
        drop(state);
    }
}

#[test]
fn fresh_context_has_builtin_defaults() {
    let ctx = Context::builder().platform(RecordingPlatform::default()).init().unwrap();
    assert_eq!(
        ctx.get_default_in_tkt_enctypes().unwrap(),
        [Enctype::DES3_CBC_MD5, Enctype::DES_CBC_MD5, Enctype::DES_CBC_CRC]
    );
    assert_eq!(ctx.clock_skew(), Duration::from_secs(300));
    assert_eq!(ctx.kdc_req_sumtype(), ChecksumType::RSA_MD5);
    assert_eq!(ctx.kdc_default_options(), KdcOptions::RENEWABLE_OK);
    assert!(!ctx.library_options().contains(LibraryOptions::SYNC_KDCTIME));
    assert_eq!(ctx.default_realm(), None);
}

#[test]
fn profile_overrides_clock_skew_within_bounds() {
    let ctx = Context::builder()
        .platform(RecordingPlatform::with_profile("[libdefaults]\nclockskew = 120\n"))
        .init()
        .unwrap();
    assert_eq!(ctx.clock_skew(), Duration::from_secs(120));

    let ctx = Context::builder()
        .platform(RecordingPlatform::with_profile("[libdefaults]\nclockskew = 86400\n"))
        .init()
        .unwrap();
    assert_eq!(ctx.clock_skew(), Duration::from_secs(300));
}

#[test]
fn kdc_timesync_sets_library_option() {
    let ctx = Context::builder()
        .platform(RecordingPlatform::with_profile("[libdefaults]\nkdc_timesync = 1\n"))
        .init()
        .unwrap();
    assert!(ctx.library_options().contains(LibraryOptions::SYNC_KDCTIME));
}

#[test]
fn any_nonzero_kdc_timesync_sets_library_option() {
    for value in ["-1", "7", "\"-30\""] {
        let ctx = Context::builder()
            .platform(RecordingPlatform::with_profile(&format!("[libdefaults]\nkdc_timesync = {value}\n")))
            .init()
            .unwrap();
        assert!(
            ctx.library_options().contains(LibraryOptions::SYNC_KDCTIME),
            "kdc_timesync = {value}"
        );
    }
    let ctx = Context::builder()
        .platform(RecordingPlatform::with_profile("[libdefaults]\nkdc_timesync = 0\n"))
        .init()
        .unwrap();
    assert!(!ctx.library_options().contains(LibraryOptions::SYNC_KDCTIME));
}

#[test]
fn platform_data_lives_until_teardown() {
    let platform = RecordingPlatform {
        attach_data: true,
        ..RecordingPlatform::default()
    };
    let ctx = Context::builder().platform(platform.clone()).init().unwrap();
    let data = ctx.os_state().and_then(|os| os.platform_data());
    assert!(data.is_some_and(|data| data.is::<PlatformData>()));
    assert_eq!(platform.data_drops.get(), 0);
    ctx.free();
    assert_eq!(platform.finalizes.get(), 1);
    assert_eq!(platform.data_drops.get(), 1);
}

#[test]
fn platform_failure_is_returned_unchanged() {
    let platform = RecordingPlatform {
        fail: true,
        ..RecordingPlatform::default()
    };
    let err = Context::builder().platform(platform.clone()).init().unwrap_err();
    match err {
        Error::OsInit(PlatformError::Other(inner)) => assert_eq!(inner.to_string(), "simulated failure"),
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(platform.inits.get(), 1);
    assert_eq!(platform.finalizes.get(), 0);
}

#[test]
fn failure_after_platform_init_releases_os_state() {
    let platform = RecordingPlatform::with_profile("[libdefaults]\nclockskew = \"soon\"\n");
    let err = Context::builder().platform(platform.clone()).init().unwrap_err();
    assert!(matches!(err, Error::ConfigRead(ProfileError::NotAnInteger { .. })));
    assert_eq!(platform.inits.get(), 1);
    assert_eq!(platform.finalizes.get(), 1);
}

#[test]
fn unsupported_policy_default_fails_before_platform_init() {
    let platform = RecordingPlatform::default();
    let bogus = Enctype::new(4242).unwrap();
    let policy = EnctypePolicy {
        in_tkt_defaults: vec![Enctype::AES256_CTS_HMAC_SHA1_96, bogus],
        ..EnctypePolicy::legacy()
    };
    let err = Context::builder()
        .platform(platform.clone())
        .policy(policy)
        .init()
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedEnctype(e) if e == bogus));
    assert_eq!(platform.inits.get(), 0);
}

#[test]
fn teardown_without_default_realm() {
    let platform = RecordingPlatform::default();
    let ctx = Context::builder().platform(platform.clone()).init().unwrap();
    assert_eq!(ctx.default_realm(), None);
    ctx.free();
    assert_eq!(platform.finalizes.get(), 1);
}

#[test]
fn default_realm_can_be_replaced_and_cleared() {
    let platform = RecordingPlatform::default();
    let mut ctx = Context::builder().platform(platform.clone()).init().unwrap();
    ctx.set_default_realm(Some("EXAMPLE.COM")).unwrap();
    assert_eq!(ctx.default_realm(), Some("EXAMPLE.COM"));
    ctx.set_default_realm(Some("OTHER.ORG")).unwrap();
    assert_eq!(ctx.default_realm(), Some("OTHER.ORG"));
    ctx.set_default_realm(None).unwrap();
    assert_eq!(ctx.default_realm(), None);
    drop(ctx);
    assert_eq!(platform.finalizes.get(), 1);
}
