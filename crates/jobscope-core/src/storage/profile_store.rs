//! YAML persistence for the evaluator's profile.
//!
//! Layout inside the data directory:
//!
//! ```text
//! profile.yaml                      current profile
//! profile_history/profile-v1.0.yaml archived revisions
//! ```

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::energy::{Profile, ProfileVersion};
use crate::error::{CoreError, Result};

const PROFILE_FILE: &str = "profile.yaml";
const HISTORY_DIR: &str = "profile_history";

/// Reads and writes the profile under one root directory.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    root: PathBuf,
}

impl ProfileStore {
    /// Store rooted at the data directory.
    pub fn open() -> Result<Self> {
        Ok(Self::at(data_dir()?))
    }

    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.root.join(PROFILE_FILE)
    }

    fn history_dir(&self) -> PathBuf {
        self.root.join(HISTORY_DIR)
    }

    fn archived_path(&self, version: ProfileVersion) -> PathBuf {
        self.history_dir().join(format!("profile-v{version}.yaml"))
    }

    pub fn exists(&self) -> bool {
        self.path().exists()
    }

    /// Load and validate the current profile.
    pub fn load(&self) -> Result<Profile> {
        let path = self.path();
        if !path.exists() {
            return Err(CoreError::ProfileMissing { path });
        }
        read_profile(&path)
    }

    pub fn save(&self, profile: &Profile) -> Result<()> {
        profile.validate()?;
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(self.path(), serde_yaml::to_string(profile)?)?;
        Ok(())
    }

    /// Apply an edit through [`Profile::update`], archiving the previous
    /// revision. Returns the new profile.
    pub fn update<F>(&self, today: NaiveDate, edit: F) -> Result<Profile>
    where
        F: FnOnce(&mut Profile),
    {
        let current = self.load()?;
        let next = current.update(today, edit)?;

        std::fs::create_dir_all(self.history_dir())?;
        std::fs::write(
            self.archived_path(current.version),
            serde_yaml::to_string(&current)?,
        )?;
        self.save(&next)?;
        Ok(next)
    }

    /// Archived versions, oldest first.
    pub fn history(&self) -> Result<Vec<ProfileVersion>> {
        let dir = self.history_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut versions = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let name = entry?.file_name();
            let Some(name) = name.to_str() else { continue };
            let Some(label) = name
                .strip_prefix("profile-v")
                .and_then(|rest| rest.strip_suffix(".yaml"))
            else {
                continue;
            };
            match label.parse::<ProfileVersion>() {
                Ok(version) => versions.push(version),
                Err(e) => tracing::warn!(file = %name, "skipping archived profile: {e}"),
            }
        }
        versions.sort();
        Ok(versions)
    }

    pub fn load_version(&self, version: ProfileVersion) -> Result<Profile> {
        let path = self.archived_path(version);
        if !path.exists() {
            return Err(CoreError::ProfileMissing { path });
        }
        read_profile(&path)
    }
}

/// Read and validate a profile YAML file anywhere on disk.
pub(crate) fn read_profile(path: &Path) -> Result<Profile> {
    let content = std::fs::read_to_string(path)?;
    let profile: Profile = serde_yaml::from_str(&content)?;
    profile.validate()?;
    Ok(profile)
}

impl Profile {
    /// Load and validate a profile from an arbitrary YAML file.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        read_profile(path)
    }
}
