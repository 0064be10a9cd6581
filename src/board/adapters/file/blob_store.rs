//! Blob store backed by one JSON file per key.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;
use tracing::warn;

use crate::board::ports::{BlobStore, BlobStoreError, BlobStoreResult};

/// Blob store that keeps each key in `<data-dir>/<key>.json`.
///
/// Writes land in a temporary sibling first and are renamed over the
/// target, so readers never observe a half-written document.
#[derive(Debug)]
pub struct FileBlobStore {
    root: Utf8PathBuf,
    dir: Dir,
}

impl FileBlobStore {
    /// Opens the store rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`BlobStoreError::Io`] when the directory cannot be created
    /// or opened.
    pub fn open(root: impl AsRef<Utf8Path>) -> BlobStoreResult<Self> {
        let path = root.as_ref();
        Dir::create_ambient_dir_all(path, ambient_authority()).map_err(BlobStoreError::io)?;
        let dir = Dir::open_ambient_dir(path, ambient_authority()).map_err(BlobStoreError::io)?;
        Ok(Self {
            root: path.to_owned(),
            dir,
        })
    }

    /// Returns the data directory.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Returns the full path of the file holding `key`.
    ///
    /// # Errors
    ///
    /// Returns [`BlobStoreError::InvalidKey`] when the key is not a plain
    /// file stem.
    pub fn path_for(&self, key: &str) -> BlobStoreResult<Utf8PathBuf> {
        Ok(self.root.join(file_name(key)?))
    }
}

/// Maps a key to its file name, rejecting anything that could escape the
/// data directory.
fn file_name(key: &str) -> BlobStoreResult<String> {
    let is_valid = !key.is_empty()
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
    if !is_valid {
        return Err(BlobStoreError::InvalidKey(key.to_owned()));
    }
    Ok(format!("{key}.json"))
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> BlobStoreResult<Option<String>> {
        let name = file_name(key)?;
        match self.dir.read_to_string(&name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(BlobStoreError::io(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> BlobStoreResult<()> {
        let name = file_name(key)?;
        let staging = format!("{name}.tmp");
        self.dir
            .write(&staging, value)
            .map_err(BlobStoreError::io)?;
        if let Err(err) = self.dir.rename(&staging, &self.dir, &name) {
            if let Err(cleanup) = self.dir.remove_file(&staging) {
                warn!(file = %staging, error = %cleanup, "failed to remove staging file");
            }
            return Err(BlobStoreError::io(err));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::file_name;
    use crate::board::ports::BlobStoreError;
    use rstest::rstest;

    #[rstest]
    #[case("kanbanTasks")]
    #[case("board-2024_q1")]
    fn file_name_accepts_plain_keys(#[case] key: &str) {
        assert_eq!(
            file_name(key).expect("plain key should be accepted"),
            format!("{key}.json")
        );
    }

    #[rstest]
    #[case("")]
    #[case("../escape")]
    #[case("nested/key")]
    #[case("with space")]
    fn file_name_rejects_unsafe_keys(#[case] key: &str) {
        assert!(matches!(
            file_name(key),
            Err(BlobStoreError::InvalidKey(rejected)) if rejected == key
        ));
    }
}
