//! Chunked file reader over tokio's async filesystem

use std::io::ErrorKind;
use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncReadExt, BufReader};

use crate::HashError;

/// Fixed read granularity. Bounds cancellation latency and progress
/// resolution to one chunk's worth of work.
pub const CHUNK_SIZE: usize = 1024 * 1024;

/// A file opened for sequential chunked reading.
///
/// The handle is held for the reader's entire lifetime and released when
/// the reader is dropped, on every exit path.
#[derive(Debug)]
pub struct ChunkedReader {
    reader: BufReader<File>,
    path: String,
    len: u64,
}

impl ChunkedReader {
    /// Open `path` and capture its total byte length from metadata.
    ///
    /// # Errors
    /// Returns [`HashError::NotFound`], [`HashError::PermissionDenied`] or
    /// [`HashError::IsADirectory`] for open-time failures.
    pub async fn open(path: &Path) -> Result<Self, HashError> {
        let display = path.display().to_string();

        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| Self::classify_open_error(e, &display))?;

        if metadata.is_dir() {
            return Err(HashError::IsADirectory(display));
        }

        let file = File::open(path)
            .await
            .map_err(|e| Self::classify_open_error(e, &display))?;

        Ok(Self {
            reader: BufReader::new(file),
            path: display,
            len: metadata.len(),
        })
    }

    /// Total byte length of the file, known up front.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Read the next chunk into `buf`, returning the number of bytes read.
    /// Zero signals end of file.
    ///
    /// # Errors
    /// Returns [`HashError::Io`] on any read failure; the reader should not
    /// be used afterwards.
    pub async fn read_chunk(&mut self, buf: &mut [u8]) -> Result<usize, HashError> {
        self.reader.read(buf).await.map_err(|e| HashError::Io {
            path: self.path.clone(),
            source: e,
        })
    }

    fn classify_open_error(err: std::io::Error, path: &str) -> HashError {
        match err.kind() {
            ErrorKind::NotFound => HashError::NotFound(path.to_string()),
            ErrorKind::PermissionDenied => HashError::PermissionDenied(path.to_string()),
            _ => HashError::Io {
                path: path.to_string(),
                source: err,
            },
        }
    }
}
