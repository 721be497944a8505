//! Drive letters and volume kinds.

use std::fmt;

use serde::Serialize;

/// An uppercase ASCII drive letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DriveLetter(char);

impl DriveLetter {
    pub(crate) const fn from_upper(c: char) -> Self {
        Self(c)
    }

    /// Returns `None` for anything but an ASCII letter. Lowercase is accepted.
    pub fn new(c: char) -> Option<Self> {
        c.is_ascii_alphabetic().then(|| Self(c.to_ascii_uppercase()))
    }

    pub fn as_char(self) -> char {
        self.0
    }

    /// Volume root, e.g. `D:\`.
    pub fn root(self) -> String {
        format!("{}:\\", self.0)
    }
}

impl fmt::Display for DriveLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for DriveLetter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.0)
    }
}

/// Volume type as reported by `GetDriveTypeW`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DriveKind {
    Unknown,
    /// No volume is mounted at the root.
    NoRootDir,
    Removable,
    Fixed,
    /// Network share.
    Remote,
    CdRom,
    RamDisk,
}

impl DriveKind {
    /// Decodes a `GetDriveTypeW` return code.
    pub fn from_raw(code: u32) -> Self {
        match code {
            1 => DriveKind::NoRootDir,
            2 => DriveKind::Removable,
            3 => DriveKind::Fixed,
            4 => DriveKind::Remote,
            5 => DriveKind::CdRom,
            6 => DriveKind::RamDisk,
            _ => DriveKind::Unknown,
        }
    }
}

impl fmt::Display for DriveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriveKind::Unknown => write!(f, "unknown"),
            DriveKind::NoRootDir => write!(f, "no root dir"),
            DriveKind::Removable => write!(f, "removable"),
            DriveKind::Fixed => write!(f, "fixed"),
            DriveKind::Remote => write!(f, "remote"),
            DriveKind::CdRom => write!(f, "cd-rom"),
            DriveKind::RamDisk => write!(f, "ram disk"),
        }
    }
}

/// Probe result for a single drive letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DriveStatus {
    pub letter: DriveLetter,
    pub kind: DriveKind,
    pub ready: bool,
}

impl DriveStatus {
    /// Whether the drive can host the installation.
    pub fn qualifies(&self) -> bool {
        self.kind == DriveKind::Fixed && self.ready
    }
}
