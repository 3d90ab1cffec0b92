//! The OS-specific part of context setup: locating and opening the profile.
use std::{
    any::Any,
    path::{Path, PathBuf},
};

use crate::profile::{Profile, TomlProfile};

#[cfg(unix)]
mod unix;
#[cfg(unix)]
use unix as sys;
#[cfg(windows)]
mod windows;
#[cfg(windows)]
use self::windows as sys;

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("cannot read profile {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse profile {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("cannot locate the system configuration directory")]
    NoConfigDirectory,
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

/// Platform resources owned by a context between [`Platform::init`] and [`Platform::finalize`]
pub struct OsState {
    profile: Box<dyn Profile>,
    platform_data: Option<Box<dyn Any>>,
}
impl OsState {
    pub fn new(profile: impl Profile + 'static) -> Self {
        Self {
            profile: Box::new(profile),
            platform_data: None,
        }
    }
    /// Attaches state that only the platform itself interprets
    #[must_use]
    pub fn with_platform_data(self, data: Box<dyn Any>) -> Self {
        Self {
            platform_data: Some(data),
            ..self
        }
    }
    pub fn profile(&self) -> &dyn Profile {
        self.profile.as_ref()
    }
    pub fn platform_data(&self) -> Option<&dyn Any> {
        self.platform_data.as_deref()
    }
}
impl std::fmt::Debug for OsState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OsState")
            .field("platform_data", &self.platform_data.is_some())
            .finish_non_exhaustive()
    }
}

pub trait Platform {
    fn init(&self) -> Result<OsState, PlatformError>;
    /// Releases what `init` acquired. Called exactly once per successful `init`.
    fn finalize(&self, state: OsState) {
        drop(state)
    }
}

/// Reads the profile from `KRB5_CONFIG` or the platform's default krb5 configuration file
#[derive(Clone, Debug, Default)]
pub struct SystemPlatform {
    config_paths: Option<Vec<PathBuf>>,
}
impl SystemPlatform {
    pub fn new() -> Self {
        Self::default()
    }
    /// Uses the first existing file in `paths` instead of consulting the environment
    pub fn with_config_paths(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            config_paths: Some(paths.into_iter().collect()),
        }
    }
    fn profile_paths(&self) -> Result<Vec<PathBuf>, PlatformError> {
        if let Some(paths) = &self.config_paths {
            return Ok(paths.clone());
        }
        if let Some(var) = std::env::var_os("KRB5_CONFIG") {
            return Ok(std::env::split_paths(&var).collect());
        }
        Ok(vec![sys::default_profile_path()?])
    }
}
impl Platform for SystemPlatform {
    fn init(&self) -> Result<OsState, PlatformError> {
        for path in self.profile_paths()? {
            if let Some(profile) = load_profile(&path)? {
                tracing::debug!(path = %path.display(), "loaded krb5 profile");
                return Ok(OsState::new(profile));
            }
        }
        tracing::debug!("no krb5 profile found, using built-in defaults");
        Ok(OsState::new(TomlProfile::default()))
    }
}

/// Reads a TOML profile from disk, `None` if the file does not exist
pub fn load_profile(path: &Path) -> Result<Option<TomlProfile>, PlatformError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(PlatformError::Io {
                path: path.to_owned(),
                source,
            })
        }
    };
    text.parse().map(Some).map_err(|source| PlatformError::Parse {
        path: path.to_owned(),
        source,
    })
}

/// Hands out clones of a fixed in-memory profile
#[derive(Clone, Debug, Default)]
pub struct ProfilePlatform<P> {
    profile: P,
}
impl<P: Profile + Clone + 'static> ProfilePlatform<P> {
    pub fn new(profile: P) -> Self {
        Self { profile }
    }
}
impl<P: Profile + Clone + 'static> Platform for ProfilePlatform<P> {
    fn init(&self) -> Result<OsState, PlatformError> {
        Ok(OsState::new(self.profile.clone()))
    }
}
