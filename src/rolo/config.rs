//! Store locations.
//!
//! The core is told *where* its data lives; deciding that is the
//! embedding client's job. [`Paths::resolve`] covers the common cases:
//! an explicit directory (tests, portable setups) or the platform data
//! directory.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::{Result, RoloError};

pub const ADDRESSBOOK_FILENAME: &str = "addressbook.json";
pub const NOTES_FILENAME: &str = "notes.json";

/// Where the two store files live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    data_dir: PathBuf,
}

impl Paths {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Uses `dir` when given, otherwise the platform data directory
    /// (e.g. `~/.local/share/rolo` on Linux).
    pub fn resolve(dir: Option<PathBuf>) -> Result<Self> {
        match dir {
            Some(data_dir) => Ok(Self::new(data_dir)),
            None => {
                let project_dirs = ProjectDirs::from("com", "rolo", "rolo").ok_or_else(|| {
                    RoloError::Store("could not determine a data directory".to_string())
                })?;
                Ok(Self::new(project_dirs.data_dir().to_path_buf()))
            }
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn addressbook_file(&self) -> PathBuf {
        self.data_dir.join(ADDRESSBOOK_FILENAME)
    }

    pub fn notes_file(&self) -> PathBuf {
        self.data_dir.join(NOTES_FILENAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_directory_wins() {
        let paths = Paths::resolve(Some(PathBuf::from("/tmp/rolo-data"))).unwrap();
        assert_eq!(paths.data_dir(), Path::new("/tmp/rolo-data"));
        assert_eq!(
            paths.addressbook_file(),
            Path::new("/tmp/rolo-data/addressbook.json")
        );
        assert_eq!(paths.notes_file(), Path::new("/tmp/rolo-data/notes.json"));
    }
}
