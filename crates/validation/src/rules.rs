//! Individual path rules as standalone predicates.

use std::sync::LazyLock;

use regex::Regex;

/// Longest accepted path, in characters.
pub const MAX_PATH_CHARS: usize = 32;

/// Required name of the folder below the drive root.
pub const REQUIRED_FOLDER_NAME: &str = "projects";

/// Characters rejected anywhere in the path.
pub const UMLAUTS: [char; 7] = ['ä', 'ö', 'ü', 'Ä', 'Ö', 'Ü', 'ß'];

// Drive root followed by one or more alphanumeric segments, with an
// optional trailing backslash.
static WELL_FORMED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]:\\[A-Za-z0-9]+(\\[A-Za-z0-9]+)*\\?$").expect("path pattern compiles")
});

pub fn has_umlauts(path: &str) -> bool {
    path.chars().any(|c| UMLAUTS.contains(&c))
}

pub fn exceeds_max_length(path: &str) -> bool {
    path.chars().count() > MAX_PATH_CHARS
}

pub fn is_well_formed(path: &str) -> bool {
    WELL_FORMED.is_match(path)
}

/// Everything after the drive root, ignoring one trailing backslash.
///
/// This is the remainder after the *first* backslash, so `C:\a\projects`
/// yields `a\projects`. Only a single folder directly below the root can
/// therefore match [`REQUIRED_FOLDER_NAME`].
pub fn folder_name(path: &str) -> &str {
    let trimmed = path.strip_suffix('\\').unwrap_or(path);
    match trimmed.split_once('\\') {
        Some((_, rest)) => rest,
        None => trimmed,
    }
}
