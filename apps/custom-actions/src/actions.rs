//! Custom action dispatch against a session file.

use std::path::Path;

use anyhow::Context;
use ide_setup_drives::{DriveProbe, SystemProbe, probe_candidates, select_install_target};
use ide_setup_session::{ActionResult, InstallProperties, MemorySession, PropertyBag};
use ide_setup_validation::validate_install_folder;

use crate::cli::Command;

/// Runs `command` against the session stored at `session_path`.
pub fn run(command: &Command, session_path: &Path) -> anyhow::Result<ActionResult> {
    match command {
        Command::SelectDrive => {
            with_session(session_path, |session| select_drive(session, &SystemProbe))
        }
        Command::ValidatePath { path } => with_session(session_path, |session| {
            if let Some(path) = path {
                session.set_install_folder(path);
            }
            validate_install_folder(session)
        }),
        Command::Probe => {
            let statuses = probe_candidates(&SystemProbe);
            println!("{}", serde_json::to_string_pretty(&statuses)?);
            Ok(ActionResult::Success)
        }
        Command::Show => {
            let session = load(session_path)?;
            println!("{}", serde_json::to_string_pretty(&session)?);
            Ok(ActionResult::Success)
        }
    }
}

/// Drive selection as seen by the host: any error aborts the install.
pub fn select_drive<S, P>(session: &mut S, probe: &P) -> ActionResult
where
    S: PropertyBag + ?Sized,
    P: DriveProbe + ?Sized,
{
    match select_install_target(session, probe) {
        Ok(_) => ActionResult::Success,
        Err(e) => {
            tracing::error!(error = %e, "drive selection failed");
            ActionResult::Failure
        }
    }
}

fn load(path: &Path) -> anyhow::Result<MemorySession> {
    MemorySession::load(path)
        .with_context(|| format!("failed to load session {}", path.display()))
}

fn with_session(
    path: &Path,
    action: impl FnOnce(&mut MemorySession) -> ActionResult,
) -> anyhow::Result<ActionResult> {
    let mut session = load(path)?;
    let result = action(&mut session);
    session
        .save(path)
        .with_context(|| format!("failed to save session {}", path.display()))?;
    tracing::info!(%result, session = %path.display(), "custom action finished");
    Ok(result)
}
