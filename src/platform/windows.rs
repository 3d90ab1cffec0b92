use std::{ffi::OsString, os::windows::ffi::OsStringExt, path::PathBuf};

use ::windows::Win32::System::SystemInformation::GetWindowsDirectoryW;

use super::PlatformError;

const MAX_PATH: usize = 260;

/// `%WINDIR%\krb5.ini`, where MIT Kerberos for Windows keeps its profile
pub(super) fn default_profile_path() -> Result<PathBuf, PlatformError> {
    let mut buffer = [0u16; MAX_PATH];
    let len = unsafe { GetWindowsDirectoryW(Some(&mut buffer)) } as usize;
    if len == 0 || len > buffer.len() {
        return Err(PlatformError::NoConfigDirectory);
    }
    let dir = OsString::from_wide(&buffer[..len]);
    Ok(PathBuf::from(dir).join("krb5.ini"))
}
