use std::{
    fmt, fs,
    io::Write as _,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::{Error, Result};

/// Result of closing an [`OutputFile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteResult {
    /// Buffer was written to disk
    Written,
    /// Existing file already had the same content; nothing was written
    Unchanged,
    /// Buffer was thrown away by [`OutputFile::discard`]; nothing was written
    Discarded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Buffering,
    Committed,
    Unchanged,
    Discarded,
}

/// A generated file that only touches the disk when its content changes.
///
/// Text is buffered in memory. On [`close`](Self::close) the buffer is
/// compared with the file already at `path`; identical content leaves the
/// existing file (and its timestamp) alone, so downstream builds don't
/// rebuild unchanged outputs.
///
/// # Example
///
/// ```no_run
/// use std::fmt::Write;
///
/// use idlgen_core::OutputFile;
///
/// let result = OutputFile::scoped("gen-rs/shapes.rs", |out| {
///     writeln!(out, "pub struct Point;")?;
///     Ok::<_, Box<dyn std::error::Error>>(())
/// });
/// ```
#[derive(Debug)]
pub struct OutputFile {
    path: PathBuf,
    buffer: String,
    state: State,
}

impl OutputFile {
    /// Start buffering output destined for `path`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            buffer: String::new(),
            state: State::Buffering,
        }
    }

    /// Point this writer at a new `path`, dropping anything buffered so far.
    pub fn reopen(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
        self.buffer.clear();
        self.state = State::Buffering;
    }

    /// Run `body` against a fresh writer and close it afterwards.
    ///
    /// If `body` fails the buffer is discarded and nothing is written.
    pub fn scoped<F, E>(path: impl Into<PathBuf>, body: F) -> std::result::Result<WriteResult, E>
    where
        F: FnOnce(&mut OutputFile) -> std::result::Result<(), E>,
        E: From<Error>,
    {
        let mut file = Self::open(path);
        match body(&mut file) {
            Ok(()) => file.close().map_err(|e| E::from(*e)),
            Err(err) => {
                file.discard();
                Err(err)
            }
        }
    }

    /// Get the destination path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the buffered content
    pub fn contents(&self) -> &str {
        &self.buffer
    }

    /// Append text to the buffer.
    pub fn push_str(&mut self, s: &str) {
        self.buffer.push_str(s);
    }

    /// Returns true once the buffer has been written to disk.
    pub fn is_committed(&self) -> bool {
        self.state == State::Committed
    }

    /// Write the buffer to disk if it differs from the existing file.
    ///
    /// A missing or unreadable destination is always written. Closing a
    /// file a second time does nothing and repeats the first outcome; a
    /// discarded file reports [`WriteResult::Discarded`].
    pub fn close(&mut self) -> Result<WriteResult> {
        match self.state {
            State::Committed => return Ok(WriteResult::Written),
            State::Unchanged => return Ok(WriteResult::Unchanged),
            State::Discarded => return Ok(WriteResult::Discarded),
            State::Buffering => {}
        }

        match fs::read(&self.path) {
            Ok(existing) if existing == self.buffer.as_bytes() => {
                tracing::debug!(path = %self.path.display(), "content unchanged, skipping write");
                self.state = State::Unchanged;
                Ok(WriteResult::Unchanged)
            }
            _ => self.commit(),
        }
    }

    /// Write the whole buffer to disk, overwriting any existing file.
    pub fn commit(&mut self) -> Result<WriteResult> {
        let mut file =
            fs::File::create(&self.path).map_err(|e| Error::output(&self.path, e))?;
        file.write_all(self.buffer.as_bytes())
            .map_err(|e| Error::output(&self.path, e))?;

        tracing::debug!(path = %self.path.display(), bytes = self.buffer.len(), "wrote file");
        self.state = State::Committed;
        Ok(WriteResult::Written)
    }

    /// Drop the buffered content without touching the disk.
    pub fn discard(&mut self) {
        if self.state == State::Buffering {
            self.buffer.clear();
            self.state = State::Discarded;
        }
    }
}

impl fmt::Write for OutputFile {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

impl Drop for OutputFile {
    fn drop(&mut self) {
        if self.state == State::Buffering {
            tracing::warn!(
                path = %self.path.display(),
                "output file dropped without close, discarding buffered content"
            );
        }
    }
}
