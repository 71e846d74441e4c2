//! Append-only line sink with size-based rotation.
//!
//! When the active file grows past the limit it is renamed to `<name>.1`,
//! existing backups shift up by one (`.1` to `.2`, ...), and the oldest
//! beyond the retention count is removed.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

const MAX_BACKUP_FILES: usize = 3;

pub struct RotatingSink {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    file: Mutex<Option<File>>,
}

impl RotatingSink {
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    pub const fn with_limits(path: PathBuf, max_bytes: u64, backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            backups,
            file: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is full.
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("sink lock poisoned: {e}")))?;

        if self.is_full() {
            *file = None;
            self.rotate()?;
        }

        // A handle that failed a write is dropped and reopened next time.
        let mut handle = match file.take() {
            Some(handle) => handle,
            None => OpenOptions::new().create(true).append(true).open(&self.path)?,
        };

        writeln!(handle, "{line}")?;
        handle.flush()?;
        *file = Some(handle);
        Ok(())
    }

    fn is_full(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|meta| meta.len() >= self.max_bytes)
    }

    fn rotate(&self) -> io::Result<()> {
        if self.backups == 0 {
            return remove_if_exists(&self.path);
        }

        remove_if_exists(&self.backup_path(self.backups))?;
        for index in (1..self.backups).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1))
    }

    fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

impl std::fmt::Debug for RotatingSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingSink")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("backups", &self.backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let sink = RotatingSink::new(path.clone());

        sink.append_line("{\"a\":1}").unwrap();
        sink.append_line("{\"b\":2}").unwrap();

        assert_eq!(read(&path), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_into_numbered_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let sink = RotatingSink::with_limits(path.clone(), 4, 2);

        for line in ["one", "two", "three", "four"] {
            sink.append_line(line).unwrap();
        }

        assert_eq!(read(&path), "four\n");
        assert_eq!(read(&dir.path().join("trace.json.1")), "three\n");
        assert_eq!(read(&dir.path().join("trace.json.2")), "two\n");
        assert!(!dir.path().join("trace.json.3").exists());
    }

    #[test]
    fn zero_backups_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let sink = RotatingSink::with_limits(path.clone(), 4, 0);

        sink.append_line("first").unwrap();
        sink.append_line("second").unwrap();

        assert_eq!(read(&path), "second\n");
        assert!(!dir.path().join("trace.json.1").exists());
    }
}
