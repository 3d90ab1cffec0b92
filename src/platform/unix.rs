use std::path::PathBuf;

use super::PlatformError;

pub(super) fn default_profile_path() -> Result<PathBuf, PlatformError> {
    Ok(PathBuf::from("/etc/krb5.conf"))
}
