//! Install path validation.
//!
//! [`check_path`] runs the rules against a candidate path in a fixed order
//! and reports the first violation. [`validate_install_folder`] is the
//! custom action: it reads the path from the session and records the
//! outcome there, so the folder dialog can block progress and show the
//! message.

mod rules;

use ide_setup_session::{ActionResult, InstallProperties, PropertyBag, Validity};

pub use rules::{
    MAX_PATH_CHARS, REQUIRED_FOLDER_NAME, UMLAUTS, exceeds_max_length, folder_name, has_umlauts,
    is_well_formed,
};

/// A rule the candidate path broke.
///
/// The display strings are shown verbatim by the installer UI.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathViolation {
    #[error("Installation path contains Umlauts")]
    Umlauts,

    #[error("The path is too long. Maximum 32 characters")]
    TooLong { chars: usize },

    #[error("The path contains invalid characters. Only alphanumeric characters are allowed")]
    InvalidCharacters,

    #[error("The installation folder must be named \"projects\"")]
    WrongFolderName { found: String },
}

/// Checks `path` against every rule, stopping at the first violation.
pub fn check_path(path: &str) -> Result<(), PathViolation> {
    if has_umlauts(path) {
        return Err(PathViolation::Umlauts);
    }
    if exceeds_max_length(path) {
        return Err(PathViolation::TooLong {
            chars: path.chars().count(),
        });
    }
    if !is_well_formed(path) {
        return Err(PathViolation::InvalidCharacters);
    }
    let name = folder_name(path);
    if name != REQUIRED_FOLDER_NAME {
        return Err(PathViolation::WrongFolderName {
            found: name.to_string(),
        });
    }
    Ok(())
}

/// Validates the session's install folder and records the outcome.
///
/// Always succeeds at the host level; rejections are reported through
/// the validity flag and message.
pub fn validate_install_folder<S: PropertyBag + ?Sized>(session: &mut S) -> ActionResult {
    let path = session.install_folder();
    match check_path(&path) {
        Ok(()) => {
            tracing::info!(%path, "install folder accepted");
            session.record_validation(Validity::Valid, None);
        }
        Err(violation) => {
            tracing::info!(%path, ?violation, "install folder rejected");
            session.record_validation(Validity::Invalid, Some(&violation.to_string()));
        }
    }
    ActionResult::Success
}
