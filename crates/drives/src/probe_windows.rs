//! Windows volume queries via Win32.

use std::ptr;

use windows_sys::Win32::Storage::FileSystem::{GetDriveTypeW, GetVolumeInformationW};

use crate::{DriveKind, DriveLetter};

fn wide_root(letter: DriveLetter) -> Vec<u16> {
    letter.root().encode_utf16().chain(std::iter::once(0)).collect()
}

pub fn drive_kind(letter: DriveLetter) -> DriveKind {
    let root = wide_root(letter);
    // SAFETY: `root` is a NUL-terminated UTF-16 string that outlives the call.
    let code = unsafe { GetDriveTypeW(root.as_ptr()) };
    DriveKind::from_raw(code)
}

/// A volume is ready when its metadata can be read.
pub fn is_ready(letter: DriveLetter) -> bool {
    let root = wide_root(letter);
    // SAFETY: `root` is NUL-terminated; every out buffer is null with size 0,
    // which the API accepts for information the caller does not need.
    let ok = unsafe {
        GetVolumeInformationW(
            root.as_ptr(),
            ptr::null_mut(),
            0,
            ptr::null_mut(),
            ptr::null_mut(),
            ptr::null_mut(),
            ptr::null_mut(),
            0,
        )
    };
    let ready = ok != 0;
    if !ready {
        tracing::debug!(drive = %letter, "volume information unavailable");
    }
    ready
}
