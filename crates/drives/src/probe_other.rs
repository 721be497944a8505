//! Stub volume queries for platforms without drive letters.

use crate::{DriveKind, DriveLetter};

pub fn drive_kind(_letter: DriveLetter) -> DriveKind {
    DriveKind::NoRootDir
}

pub fn is_ready(_letter: DriveLetter) -> bool {
    false
}
