//! Optional user directory with display names and avatar links.
//!
//! The presence source only carries numeric ids; a small TOML file maps
//! them to human-readable metadata for the dashboard dropdown:
//!
//! ```toml
//! [users.10]
//! name = "Maciej Z."
//! avatar = "https://intranet.example.com:443/api/images/users/10"
//! ```
//!
//! The file is optional. Without it the directory is empty and the v2
//! user endpoints report nothing.

use crate::error::{Error, Result};
use crate::store::types::UserId;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Display metadata for one user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserProfile {
    /// Human-readable name shown in the dropdown.
    pub name: String,

    /// Link to the user's avatar image, if any.
    #[serde(default)]
    pub avatar: Option<String>,
}

/// On-disk shape of the directory file.
#[derive(Debug, Default, Deserialize)]
struct DirectoryFile {
    #[serde(default)]
    users: BTreeMap<String, UserProfile>,
}

/// Lookup table from user id to profile.
#[derive(Debug, Default)]
pub struct UserDirectory {
    profiles: BTreeMap<UserId, UserProfile>,
}

impl UserDirectory {
    /// Creates a directory with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads the directory from a TOML file.
    ///
    /// TOML table keys are strings, so ids are validated here; a key
    /// that is not an integer is a configuration error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read users file {}: {}", path.display(), e))
        })?;

        let file: DirectoryFile = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse users file: {}", e)))?;

        let mut profiles = BTreeMap::new();
        for (key, profile) in file.users {
            let user_id: UserId = key
                .parse()
                .map_err(|_| Error::Config(format!("invalid user id '{}' in users file", key)))?;
            profiles.insert(user_id, profile);
        }

        Ok(Self { profiles })
    }

    /// Returns the profile for `user_id`, if known.
    pub fn get(&self, user_id: UserId) -> Option<&UserProfile> {
        self.profiles.get(&user_id)
    }

    /// All profiles ordered by display name, then id.
    pub fn sorted_by_name(&self) -> Vec<(UserId, &UserProfile)> {
        let mut entries: Vec<(UserId, &UserProfile)> =
            self.profiles.iter().map(|(id, p)| (*id, p)).collect();
        entries.sort_by(|a, b| a.1.name.cmp(&b.1.name).then_with(|| a.0.cmp(&b.0)));
        entries
    }

    /// Number of known profiles.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// True when no profiles are loaded.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_directory(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_directory() {
        let file = write_directory(
            r#"
[users.10]
name = "Maciej Z."
avatar = "https://intranet.example.com:443/api/images/users/10"

[users.11]
name = "Adam P."
"#,
        );

        let directory = UserDirectory::load(file.path()).unwrap();

        assert_eq!(directory.len(), 2);
        let profile = directory.get(10).unwrap();
        assert_eq!(profile.name, "Maciej Z.");
        assert_eq!(
            profile.avatar.as_deref(),
            Some("https://intranet.example.com:443/api/images/users/10")
        );
        assert!(directory.get(11).unwrap().avatar.is_none());
        assert!(directory.get(9).is_none());
    }

    #[test]
    fn test_sorted_by_name() {
        let file = write_directory(
            r#"
[users.10]
name = "Zofia K."

[users.11]
name = "Adam P."
"#,
        );

        let directory = UserDirectory::load(file.path()).unwrap();
        let names: Vec<&str> = directory
            .sorted_by_name()
            .iter()
            .map(|(_, p)| p.name.as_str())
            .collect();

        assert_eq!(names, vec!["Adam P.", "Zofia K."]);
    }

    #[test]
    fn test_non_integer_id_rejected() {
        let file = write_directory("[users.ten]\nname = \"Broken\"\n");
        assert!(UserDirectory::load(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(UserDirectory::load(&dir.path().join("users.toml")).is_err());
    }

    #[test]
    fn test_empty_directory() {
        let directory = UserDirectory::empty();
        assert!(directory.is_empty());
        assert!(directory.sorted_by_name().is_empty());
    }
}
