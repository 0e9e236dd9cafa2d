//! File-based locking around the snippet file.
//!
//! Cross-platform (fs2) advisory locks on a sidecar `<file>.lock`:
//! - Exclusive: save (tmp write + rename).
//! - Shared: load.
//!
//! Lock is released on Drop.

use anyhow::{Context, Result};
use fs2::FileExt;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use crate::consts::LOCK_SUFFIX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockMode {
    Shared,
    Exclusive,
}

pub struct LockGuard {
    file: std::fs::File,
    path: PathBuf,
    mode: LockMode,
}

impl LockGuard {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> LockMode {
        self.mode
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        // fs2 unlock errors on drop are ignored deliberately.
        let _ = self.file.unlock();
    }
}

/// `<data file>.lock` next to the data file.
pub fn lock_file_path(data_file: &Path) -> PathBuf {
    let mut s = data_file.as_os_str().to_os_string();
    s.push(LOCK_SUFFIX);
    PathBuf::from(s)
}

/// Acquire a lock for `data_file` in the requested mode. Blocks until acquired.
pub fn acquire_lock(data_file: &Path, mode: LockMode) -> Result<LockGuard> {
    let path = lock_file_path(data_file);
    let file = OpenOptions::new()
        .create(true)
        .read(true)
        .write(true)
        .open(&path)
        .with_context(|| format!("open lock file {}", path.display()))?;
    match mode {
        LockMode::Shared => file
            .lock_shared()
            .with_context(|| format!("lock_shared {}", path.display()))?,
        LockMode::Exclusive => file
            .lock_exclusive()
            .with_context(|| format!("lock_exclusive {}", path.display()))?,
    }
    Ok(LockGuard { file, path, mode })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_path_appends_suffix() {
        let p = lock_file_path(Path::new("/tmp/x/snippets.json"));
        assert_eq!(p, PathBuf::from("/tmp/x/snippets.json.lock"));
    }

    #[test]
    fn exclusive_then_shared_after_drop() -> Result<()> {
        let dir = std::env::temp_dir().join(format!("snipdb-lock-{}", std::process::id()));
        std::fs::create_dir_all(&dir)?;
        let data = dir.join("snippets.json");
        {
            let g = acquire_lock(&data, LockMode::Exclusive)?;
            assert_eq!(g.mode(), LockMode::Exclusive);
            assert!(g.path().exists());
        }
        let g = acquire_lock(&data, LockMode::Shared)?;
        assert_eq!(g.mode(), LockMode::Shared);
        Ok(())
    }
}
