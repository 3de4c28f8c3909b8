use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

const LOCK_FILE: &str = "lasso.lock";

/// Lock file in the OS temp directory. A second launch sees the file and
/// exits; the guard removes it when the first instance shuts down.
pub struct InstanceLock {
    path: PathBuf,
}

impl InstanceLock {
    /// `Ok(None)` means another instance already holds the lock.
    pub fn acquire() -> io::Result<Option<Self>> {
        Self::acquire_at(std::env::temp_dir().join(LOCK_FILE))
    }

    pub fn acquire_at(path: PathBuf) -> io::Result<Option<Self>> {
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                let _ = writeln!(file, "{}", std::process::id());
                Ok(Some(Self { path }))
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl Drop for InstanceLock {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            tracing::warn!("failed to remove instance lock: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_is_refused_until_drop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOCK_FILE);

        let first = InstanceLock::acquire_at(path.clone()).unwrap();
        assert!(first.is_some());
        assert!(InstanceLock::acquire_at(path.clone()).unwrap().is_none());

        drop(first);
        assert!(InstanceLock::acquire_at(path.clone()).unwrap().is_some());
    }

    #[test]
    fn lock_file_records_the_pid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOCK_FILE);
        let _lock = InstanceLock::acquire_at(path.clone()).unwrap().unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents.trim().parse::<u32>().unwrap(),
            std::process::id()
        );
    }
}
