//! Board configuration.

use camino::{Utf8Path, Utf8PathBuf};

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "kanbanTasks";

/// Data directory used when none is configured.
pub const DEFAULT_DATA_DIR: &str = ".taskboard";

/// Where and under which key the board is persisted.
///
/// # Examples
///
/// ```
/// use taskboard::config::BoardConfig;
///
/// let config = BoardConfig::default().with_storage_key("sprint");
/// assert_eq!(config.storage_key(), "sprint");
/// assert_eq!(config.data_dir().as_str(), ".taskboard");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    data_dir: Utf8PathBuf,
    storage_key: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            data_dir: Utf8PathBuf::from(DEFAULT_DATA_DIR),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
        }
    }
}

impl BoardConfig {
    /// Sets the data directory used by file-backed storage.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<Utf8PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Sets the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }

    /// Returns the data directory.
    #[must_use]
    pub fn data_dir(&self) -> &Utf8Path {
        &self.data_dir
    }

    /// Returns the storage key.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }
}
