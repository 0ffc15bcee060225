//! Rotating file writer with size-based rotation and backup retention.
//!
//! This module provides a thread-safe file writer that automatically rotates
//! the log file when it exceeds a size threshold, keeping a fixed number of
//! backups. It plugs into `tracing-subscriber`'s fmt layer as a
//! [`MakeWriter`].

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// # Rotation Strategy
///
/// 1. Check file size before each write
/// 2. If size > limit, rotate:
///    - Rename current file to `<name>.<timestamp>`
///    - Create new empty file on the next write
///    - Remove oldest backups beyond the retention count
///
/// Timestamps are `YYYYmmddHHMMSS` followed by nanoseconds, so backups sort
/// oldest-first by name.
pub struct FileWriter {
    /// Path to the primary log file.
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    /// Lazily-initialized file handle (opens on first write).
    writer: Mutex<Option<fs::File>>,
}

impl FileWriter {
    /// Creates a writer rotating at 10 MB and keeping 3 backups.
    ///
    /// The file is not opened until the first write.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    #[must_use]
    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self { file_path, max_bytes, max_backups, writer: Mutex::new(None) }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Appends `bytes` to the file, rotating first if it has grown too large.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if rotation, opening, writing, or flushing fails,
    /// or if the internal lock was poisoned.
    pub fn write_bytes(&self, bytes: &[u8]) -> io::Result<()> {
        let mut writer = self.writer.lock().map_err(|e| io::Error::other(format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            let file = OpenOptions::new().create(true).append(true).open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer.as_mut().ok_or_else(|| io::Error::other("No file available"))?;

        file.write_all(bytes)?;
        file.flush()?;
        drop(writer);

        Ok(())
    }

    fn check_and_rotate(&self, writer: &mut Option<fs::File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_bytes {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    fn rotate_files(&self) -> io::Result<()> {
        let timestamp = chrono::Utc::now().format("%Y%m%d%H%M%S%f");
        let backup_path = PathBuf::from(format!("{}.{timestamp}", self.file_path.display()));

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()
    }

    /// Removes the oldest backups beyond the retention limit. Individual
    /// deletion errors are ignored.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent_dir = self.file_path.parent().ok_or_else(|| io::Error::other("No parent directory"))?;

        let prefix = self
            .file_path
            .file_name()
            .and_then(|s| s.to_str())
            .map(|name| format!("{name}."))
            .ok_or_else(|| io::Error::other("Invalid file name"))?;

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.file_name().and_then(|name| name.to_str()).is_some_and(|name| name.starts_with(&prefix)))
            .collect();

        backups.sort();
        backups.reverse();

        for old_backup in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl Write for &FileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_bytes(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = &'a Self;

    fn make_writer(&'a self) -> Self::Writer {
        self
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backups(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_name().to_string_lossy().starts_with("bookcase.log."))
            .count()
    }

    #[test]
    fn appends_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FileWriter::new(dir.path().join("bookcase.log"));
        writer.write_bytes(b"one\n").unwrap();
        (&writer).write_all(b"two\n").unwrap();
        assert_eq!(fs::read_to_string(writer.path()).unwrap(), "one\ntwo\n");
        assert_eq!(backups(dir.path()), 0);
    }

    #[test]
    fn rotates_and_prunes_backups() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FileWriter::with_limits(dir.path().join("bookcase.log"), 10, 2);
        for _ in 0..4 {
            writer.write_bytes(b"0123456789ab\n").unwrap();
        }
        assert_eq!(fs::read_to_string(writer.path()).unwrap(), "0123456789ab\n");
        assert_eq!(backups(dir.path()), 2);
    }
}
