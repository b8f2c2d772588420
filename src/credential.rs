// Credential module: data model and persistence for the Firecrawl API
// key. It is intentionally small and synchronous; the interactive flow
// in `ui` builds on these pieces.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Default destination file, relative to the current working directory.
/// The rest of the lead-generation tooling reads the key from here.
pub const KEY_FILE: &str = "firecrawl_api_key.txt";

/// Environment variable that overrides the destination path.
pub const KEY_FILE_ENV: &str = "FIRECRAWL_API_KEY_FILE";

/// Result of one interactive capture: either the key was written, or
/// the operator pressed Enter to skip. Write failures are reported as
/// errors, not as an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    Saved,
    Skipped,
}

/// The captured API key. Always non-empty and trimmed by construction;
/// the value itself is opaque and never validated for format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    value: String,
}

impl Credential {
    /// Build a credential from one line of operator input. Surrounding
    /// whitespace is trimmed; an empty result means the operator chose
    /// to skip, so `None` is returned and nothing is persisted.
    pub fn from_input(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Credential {
                value: trimmed.to_string(),
            })
        }
    }

    /// The trimmed key string, exactly as it will be written to disk.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Write the key to `path`, replacing any previous contents.
    ///
    /// The write goes to a temporary file in the destination directory
    /// which is then renamed into place, so an interrupt mid-write can
    /// never leave a truncated or partial key file behind.
    pub fn persist(&self, path: &Path) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
        tmp.write_all(self.value.as_bytes())
            .context("Failed to write API key")?;
        tmp.persist(path)
            .with_context(|| format!("Failed to save API key to {}", path.display()))?;
        Ok(())
    }
}

/// Resolve the destination path for the key file: the `KEY_FILE_ENV`
/// variable if set, otherwise `KEY_FILE` in the current directory.
pub fn key_file_path() -> PathBuf {
    std::env::var_os(KEY_FILE_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(KEY_FILE))
}

/// Read a previously saved key back from `path`. Used by callers that
/// want to reuse a key from an earlier run.
pub fn load(path: &Path) -> Result<String> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read API key from {}", path.display()))?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn from_input_keeps_non_empty_value() {
        let cred = Credential::from_input("fc-abc123").unwrap();
        assert_eq!(cred.value(), "fc-abc123");
    }

    #[test]
    fn from_input_trims_surrounding_whitespace() {
        let cred = Credential::from_input("  fc-xyz  ").unwrap();
        assert_eq!(cred.value(), "fc-xyz");
    }

    #[test]
    fn from_input_rejects_empty_and_whitespace_only() {
        assert!(Credential::from_input("").is_none());
        assert!(Credential::from_input("   \t  ").is_none());
    }

    #[test]
    fn persist_writes_exact_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("firecrawl_api_key.txt");
        let cred = Credential::from_input("fc-abc123").unwrap();
        cred.persist(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fc-abc123");
    }

    #[test]
    fn persist_overwrites_instead_of_appending() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("firecrawl_api_key.txt");
        Credential::from_input("fc-first")
            .unwrap()
            .persist(&path)
            .unwrap();
        Credential::from_input("fc-second")
            .unwrap()
            .persist(&path)
            .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fc-second");
    }

    #[test]
    fn persist_is_idempotent_for_the_same_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("firecrawl_api_key.txt");
        let cred = Credential::from_input("fc-abc123").unwrap();
        cred.persist(&path).unwrap();
        cred.persist(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fc-abc123");
    }

    #[test]
    fn load_round_trips_the_saved_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("firecrawl_api_key.txt");
        let cred = Credential::from_input("fc-round-trip").unwrap();
        cred.persist(&path).unwrap();
        assert_eq!(load(&path).unwrap(), "fc-round-trip");
    }

    #[cfg(unix)]
    #[test]
    fn persist_reports_unwritable_destination() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let locked = dir.path().join("locked");
        std::fs::create_dir(&locked).unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o555)).unwrap();

        let cred = Credential::from_input("fc-abc123").unwrap();
        let err = cred.persist(&locked.join("firecrawl_api_key.txt"));
        assert!(err.is_err());

        // restore so TempDir cleanup succeeds
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn key_file_path_honors_override_then_default() {
        // Both branches in one test so no parallel test observes the
        // variable mid-change.
        std::env::set_var(KEY_FILE_ENV, "/tmp/alternate_key.txt");
        assert_eq!(key_file_path(), PathBuf::from("/tmp/alternate_key.txt"));
        std::env::remove_var(KEY_FILE_ENV);
        assert_eq!(key_file_path(), PathBuf::from(KEY_FILE));
    }
}
