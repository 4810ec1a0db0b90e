use std::path::PathBuf;

use directories::ProjectDirs;

/// Per-user state directory holding the persisted library and the log file.
/// Falls back to a dot-directory next to the binary when the platform dirs
/// cannot be resolved.
pub fn state_dir() -> PathBuf {
    ProjectDirs::from("com", "mixtape", "mixtape")
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".mixtape"))
}
