//! Size-based rotation for the file sink.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::writer::{MakeWriter, MutexGuardWriter};

/// Appends to a log file, renaming it away once writes would push it past a
/// size threshold.
///
/// Backups rotate through `<path>.1` (newest) up to `<path>.N` (oldest); the
/// oldest generation is removed when the window is full. A single record
/// larger than the threshold is written whole rather than split.
#[derive(Debug)]
pub struct RollingFile {
    path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    file: File,
    written: u64,
}

impl RollingFile {
    /// Opens `path` for appending. Bytes already present count toward the
    /// rotation threshold.
    pub fn open(path: impl Into<PathBuf>, max_bytes: u64, max_backups: usize) -> io::Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();
        Ok(Self { path, max_bytes, max_backups, file, written })
    }

    /// Shifts the backup window by one generation and reopens the live file.
    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        if self.max_backups == 0 {
            self.file = File::create(&self.path)?;
            self.written = 0;
            return Ok(());
        }

        let oldest = backup_path(&self.path, self.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.max_backups).rev() {
            let from = backup_path(&self.path, index);
            if from.exists() {
                fs::rename(&from, backup_path(&self.path, index + 1))?;
            }
        }
        fs::rename(&self.path, backup_path(&self.path, 1))?;

        self.file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        self.written = 0;
        Ok(())
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let would_overflow = self.written + buf.len() as u64 > self.max_bytes;
        if self.max_bytes > 0 && self.written > 0 && would_overflow {
            self.rotate()?;
        }
        let written = self.file.write(buf)?;
        self.written += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Returns `<path>.<index>`.
fn backup_path(path: &Path, index: usize) -> PathBuf {
    let mut raw = path.as_os_str().to_os_string();
    raw.push(format!(".{index}"));
    PathBuf::from(raw)
}

/// Cloneable [`MakeWriter`] over a shared [`RollingFile`].
///
/// The file sink's `fmt` layer writes each record under the lock, so rotation
/// never splits a record across generations.
#[derive(Debug, Clone)]
pub struct RollingWriter {
    inner: Arc<Mutex<RollingFile>>,
}

impl RollingWriter {
    pub fn open(path: impl Into<PathBuf>, max_bytes: u64, max_backups: usize) -> io::Result<Self> {
        let file = RollingFile::open(path, max_bytes, max_backups)?;
        Ok(Self { inner: Arc::new(Mutex::new(file)) })
    }
}

impl<'a> MakeWriter<'a> for RollingWriter {
    type Writer = MutexGuardWriter<'a, RollingFile>;

    fn make_writer(&'a self) -> Self::Writer {
        self.inner.make_writer()
    }
}
