use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use super::path::AvatarFile;
use crate::app::error::AvatarError;

/// Directory avatars are written into.
#[derive(Debug, Clone)]
pub struct OutputDir {
    root: PathBuf,
}

impl OutputDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The process working directory. Kept relative so returned paths are
    /// bare file names.
    pub fn current() -> Self {
        Self::new("")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes `bytes` next to the target first and renames it into place, so
    /// the target is either the previous file or the complete new one.
    #[tracing::instrument(name = "Persisting avatar", skip(self, bytes), fields(bytes = bytes.len()))]
    pub fn persist(&self, file: &AvatarFile, bytes: &[u8]) -> Result<PathBuf, AvatarError> {
        let target = self.root.join(file.as_str());
        let staging = self.root.join(format!(".{}.tmp", Uuid::new_v4()));

        if let Err(e) = write_synced(&staging, bytes).and_then(|_| fs::rename(&staging, &target))
        {
            tracing::error!(error = %e, target = %target.display(), "failed to persist avatar");
            _ = fs::remove_file(&staging);
            return Err(e.into());
        }

        Ok(target)
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("avatar-disk-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_persist_writes_target_only() {
        let dir = scratch();
        let output = OutputDir::new(&dir);
        let file = AvatarFile::for_glyphs("Ke").unwrap();

        let path = output.persist(&file, b"first").unwrap();
        assert_eq!(path, dir.join("Ke.png"));
        assert_eq!(fs::read(&path).unwrap(), b"first");

        output.persist(&file, b"second").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"second");
        assert_eq!(entries(&dir), vec!["Ke.png".to_string()]);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_persist_into_missing_directory_fails() {
        let dir = scratch().join("missing");
        let output = OutputDir::new(&dir);
        let file = AvatarFile::for_glyphs("Ke").unwrap();

        let err = output.persist(&file, b"bytes").unwrap_err();

        assert!(matches!(err, AvatarError::Write(_)));
        assert!(!dir.exists());
    }

    #[test]
    fn test_failed_rename_removes_staging_file() {
        let dir = scratch();
        // A non-empty directory squatting on the target name makes the rename fail.
        fs::create_dir(dir.join("Ke.png")).unwrap();
        fs::write(dir.join("Ke.png").join("keep"), b"x").unwrap();
        let output = OutputDir::new(&dir);
        let file = AvatarFile::for_glyphs("Ke").unwrap();

        let err = output.persist(&file, b"bytes").unwrap_err();

        assert!(matches!(err, AvatarError::Write(_)));
        assert_eq!(entries(&dir), vec!["Ke.png".to_string()]);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_current_directory_paths_are_bare_file_names() {
        let file = AvatarFile::for_glyphs("Ke").unwrap();

        assert_eq!(
            OutputDir::current().root().join(file.as_str()),
            PathBuf::from("Ke.png")
        );
    }
}
