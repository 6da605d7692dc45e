use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Chrome user-data directory for a run.
///
/// A temporary directory keeps each run isolated and is removed on drop; a
/// persistent one keeps LinkedIn session cookies between runs so repeated
/// logins are not needed.
pub struct ProfileDir {
    path: PathBuf,
    ephemeral: bool,
}

impl ProfileDir {
    /// Create a fresh directory that is deleted when the run ends.
    pub fn temporary() -> Result<Self> {
        let temp_dir = tempfile::tempdir().map_err(|e| Error::Io(e.into()))?;

        Ok(Self {
            path: temp_dir.keep(),
            ephemeral: true,
        })
    }

    /// Use (creating if needed) a directory that survives the run.
    pub fn persistent(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            std::fs::create_dir_all(&path).map_err(Error::Io)?;
        }

        Ok(Self {
            path,
            ephemeral: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_ephemeral(&self) -> bool {
        self.ephemeral
    }
}

impl Drop for ProfileDir {
    fn drop(&mut self) {
        if self.ephemeral && self.path.exists() {
            let _ = std::fs::remove_dir_all(&self.path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temporary_profile_is_removed_on_drop() {
        let profile = ProfileDir::temporary().unwrap();
        let path = profile.path().to_path_buf();

        assert!(path.is_dir());
        drop(profile);
        assert!(!path.exists());
    }

    #[test]
    fn test_persistent_profile_survives_drop() {
        let temp_dir = tempfile::tempdir().unwrap();
        let profile_path = temp_dir.path().join("linkedin-profile");

        let profile = ProfileDir::persistent(profile_path.clone()).unwrap();
        assert!(profile_path.is_dir());
        assert!(!profile.is_ephemeral());

        drop(profile);
        assert!(profile_path.exists());
    }

    #[test]
    fn test_persistent_profile_creates_missing_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let profile_path = temp_dir.path().join("new-profile");
        assert!(!profile_path.exists());

        let _profile = ProfileDir::persistent(profile_path.clone()).unwrap();

        assert!(profile_path.is_dir());
    }
}
