fn main() {
    println!("Run `cargo test -p path-scenarios` to execute the custom action scenarios.");
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::fs;
    use std::path::PathBuf;

    use ide_setup_drives::{DriveKind, DriveLetter, DriveProbe, select_install_target};
    use ide_setup_session::{
        ActionResult, InstallProperties, MemorySession, PropertyBag, Validity, keys,
    };
    use ide_setup_validation::validate_install_folder;
    use serde::Deserialize;
    use serde::de::DeserializeOwned;

    /// Returns the path to the fixtures directory.
    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    fn load_fixture<T: DeserializeOwned>(name: &str) -> T {
        let path = fixtures_dir().join(name);
        let data = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
        serde_json::from_str(&data)
            .unwrap_or_else(|e| panic!("failed to parse fixture {}: {e}", path.display()))
    }

    #[derive(Debug, Deserialize)]
    struct PathCase {
        name: String,
        path: String,
        valid: bool,
        #[serde(default)]
        message: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct DriveCase {
        name: String,
        drives: HashMap<char, (String, bool)>,
        install_folder: Option<String>,
    }

    /// Probe answering from a fixture's drive table.
    struct TableProbe<'a>(&'a HashMap<char, (String, bool)>);

    impl DriveProbe for TableProbe<'_> {
        fn kind(&self, letter: DriveLetter) -> DriveKind {
            match self.0.get(&letter.as_char()).map(|(kind, _)| kind.as_str()) {
                Some("fixed") => DriveKind::Fixed,
                Some("removable") => DriveKind::Removable,
                Some("remote") => DriveKind::Remote,
                Some("cdRom") => DriveKind::CdRom,
                Some("ramDisk") => DriveKind::RamDisk,
                Some(other) => panic!("unknown drive kind in fixture: {other}"),
                None => DriveKind::NoRootDir,
            }
        }

        fn is_ready(&self, letter: DriveLetter) -> bool {
            self.0
                .get(&letter.as_char())
                .is_some_and(|(_, ready)| *ready)
        }
    }

    #[test]
    fn validate_path_scenarios() {
        let cases: Vec<PathCase> = load_fixture("validate_path.json");
        assert!(!cases.is_empty());

        for case in cases {
            let mut session = MemorySession::new();
            session.set_install_folder(&case.path);

            let result = validate_install_folder(&mut session);
            assert_eq!(result, ActionResult::Success, "{}", case.name);

            let expected = if case.valid {
                Validity::Valid
            } else {
                Validity::Invalid
            };
            assert_eq!(session.validity(), Some(expected), "{}", case.name);
            assert_eq!(session.validation_error(), case.message, "{}", case.name);
        }
    }

    #[test]
    fn select_drive_scenarios() {
        let cases: Vec<DriveCase> = load_fixture("select_drive.json");
        assert!(!cases.is_empty());

        for case in cases {
            let probe = TableProbe(&case.drives);
            let mut session = MemorySession::new();

            let result = select_install_target(&mut session, &probe);

            assert_eq!(result.ok(), case.install_folder, "{}", case.name);
            assert_eq!(
                session.get(keys::INSTALL_FOLDER),
                case.install_folder,
                "{}",
                case.name
            );
        }
    }

    #[test]
    fn selected_drive_then_validated_is_rejected() {
        // The drive selector's target is not a valid user-entered folder.
        let drives = HashMap::from([('C', ("fixed".to_string(), true))]);
        let mut session = MemorySession::new();

        select_install_target(&mut session, &TableProbe(&drives)).unwrap();
        validate_install_folder(&mut session);

        assert_eq!(session.validity(), Some(Validity::Invalid));
        assert_eq!(
            session.validation_error().as_deref(),
            Some("The installation folder must be named \"projects\"")
        );
    }
}
