//! Known session keys and typed access to them.

use std::fmt;

use crate::PropertyBag;

/// Property names shared with the installer host.
pub mod keys {
    /// Target directory, or the user-entered candidate path.
    pub const INSTALL_FOLDER: &str = "INSTALLFOLDER";
    /// `"1"` when the candidate path passed validation, `"0"` otherwise.
    pub const INSTALL_FOLDER_VALID: &str = "INSTALLFOLDER_VALID";
    /// Human-readable reason for the last rejection.
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
}

/// Outcome of path validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid,
}

impl Validity {
    /// Encoding used in the property bag.
    pub fn as_property(self) -> &'static str {
        match self {
            Validity::Valid => "1",
            Validity::Invalid => "0",
        }
    }

    /// Decodes the property bag encoding.
    pub fn from_property(value: &str) -> Option<Self> {
        match value {
            "1" => Some(Validity::Valid),
            "0" => Some(Validity::Invalid),
            _ => None,
        }
    }

    pub fn is_valid(self) -> bool {
        self == Validity::Valid
    }
}

/// Coarse result reported back to the installer host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionResult {
    Success,
    /// Aborts the installation.
    Failure,
}

impl fmt::Display for ActionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionResult::Success => write!(f, "success"),
            ActionResult::Failure => write!(f, "failure"),
        }
    }
}

/// Typed accessors for the install target keys.
pub trait InstallProperties: PropertyBag {
    /// The install folder; an unset key reads as an empty string.
    fn install_folder(&self) -> String {
        self.get(keys::INSTALL_FOLDER).unwrap_or_default()
    }

    fn set_install_folder(&mut self, path: &str) {
        self.set(keys::INSTALL_FOLDER, path);
    }

    /// Validity recorded by the last validation run, if any.
    fn validity(&self) -> Option<Validity> {
        self.get(keys::INSTALL_FOLDER_VALID)
            .as_deref()
            .and_then(Validity::from_property)
    }

    /// Message recorded by the last validation run; empty counts as none.
    fn validation_error(&self) -> Option<String> {
        self.get(keys::VALIDATION_ERROR).filter(|m| !m.is_empty())
    }

    /// Records a validation outcome, overwriting the previous one.
    ///
    /// The message is cleared when none is given.
    fn record_validation(&mut self, validity: Validity, message: Option<&str>) {
        self.set(keys::INSTALL_FOLDER_VALID, validity.as_property());
        self.set(keys::VALIDATION_ERROR, message.unwrap_or(""));
    }
}

impl<T: PropertyBag + ?Sized> InstallProperties for T {}
