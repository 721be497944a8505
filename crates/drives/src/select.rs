//! The drive selection custom action.

use ide_setup_session::{InstallProperties, PropertyBag};

use crate::{DriveError, DriveLetter, DriveProbe, DriveStatus};

/// Candidate drives in priority order.
pub const CANDIDATES: [DriveLetter; 2] = [DriveLetter::from_upper('D'), DriveLetter::from_upper('C')];

/// Folder created under the selected drive root.
pub const TARGET_SUBFOLDER: &str = "Configurations";

/// Returns the install target directory on `letter`, e.g. `D:\Configurations`.
pub fn target_dir(letter: DriveLetter) -> String {
    format!("{}{TARGET_SUBFOLDER}", letter.root())
}

/// Probes every candidate without selecting one.
pub fn probe_candidates<P: DriveProbe + ?Sized>(probe: &P) -> Vec<DriveStatus> {
    CANDIDATES.iter().map(|&letter| probe.status(letter)).collect()
}

/// Picks the first fixed, ready candidate and stores its target directory
/// as the install folder.
///
/// On failure the session is left untouched.
pub fn select_install_target<S, P>(session: &mut S, probe: &P) -> Result<String, DriveError>
where
    S: PropertyBag + ?Sized,
    P: DriveProbe + ?Sized,
{
    for letter in CANDIDATES {
        let status = probe.status(letter);
        if !status.qualifies() {
            tracing::debug!(
                drive = %letter,
                kind = %status.kind,
                ready = status.ready,
                "drive does not qualify"
            );
            continue;
        }

        let dir = target_dir(letter);
        session.set_install_folder(&dir);
        tracing::info!(drive = %letter, install_folder = %dir, "install folder set");
        return Ok(dir);
    }

    tracing::error!("no fixed, ready drive found");
    Err(DriveError::NoQualifyingDrive {
        tried: CANDIDATES.to_vec(),
    })
}
