//! Installation drive selection.
//!
//! Probes a fixed list of candidate drive letters and writes the target
//! directory of the first fixed, ready drive into the installer session.

mod drive;
mod select;

#[cfg(target_os = "windows")]
#[path = "probe_windows.rs"]
mod platform;

#[cfg(not(target_os = "windows"))]
#[path = "probe_other.rs"]
mod platform;

pub use drive::{DriveKind, DriveLetter, DriveStatus};
pub use select::{CANDIDATES, TARGET_SUBFOLDER, probe_candidates, select_install_target, target_dir};

/// Answers volume metadata questions about a drive letter.
///
/// Both queries are infallible: a letter with no volume behind it is
/// reported as [`DriveKind::NoRootDir`] and not ready.
pub trait DriveProbe {
    fn kind(&self, letter: DriveLetter) -> DriveKind;

    fn is_ready(&self, letter: DriveLetter) -> bool;

    /// Queries both attributes. Readiness is only asked for fixed drives.
    fn status(&self, letter: DriveLetter) -> DriveStatus {
        let kind = self.kind(letter);
        let ready = kind == DriveKind::Fixed && self.is_ready(letter);
        DriveStatus { letter, kind, ready }
    }
}

/// Probe backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl DriveProbe for SystemProbe {
    fn kind(&self, letter: DriveLetter) -> DriveKind {
        platform::drive_kind(letter)
    }

    fn is_ready(&self, letter: DriveLetter) -> bool {
        platform::is_ready(letter)
    }
}

/// Errors from drive selection.
#[derive(Debug, thiserror::Error)]
pub enum DriveError {
    #[error("no fixed, ready drive among candidates {}", format_letters(.tried))]
    NoQualifyingDrive { tried: Vec<DriveLetter> },
}

fn format_letters(letters: &[DriveLetter]) -> String {
    letters
        .iter()
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
