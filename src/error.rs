use kenobi_krb5_core::Enctype;

use crate::{platform::PlatformError, profile::ProfileError};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("out of memory")]
    OutOfMemory,
    #[error("program lacks support for encryption type {0}")]
    UnsupportedEnctype(Enctype),
    #[error(transparent)]
    ConfigRead(#[from] ProfileError),
    #[error(transparent)]
    OsInit(#[from] PlatformError),
}
impl From<std::collections::TryReserveError> for Error {
    fn from(_value: std::collections::TryReserveError) -> Self {
        Self::OutOfMemory
    }
}
