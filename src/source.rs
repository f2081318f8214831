//! Places that point text can be fetched from.
//!
//! A [Source] hands the loader the complete contents of its input in one
//! asynchronous call. Paths, byte slices, and anything implementing
//! [futures::io::AsyncRead] (via [AsyncSource]) are supported out of the box.
//! Implement the trait yourself to fetch over the network:
//!
//! ```
//! use async_trait::async_trait;
//! use pointnorm::{Result, Source};
//!
//! struct Canned;
//!
//! #[async_trait]
//! impl Source for Canned {
//!     async fn fetch(&mut self) -> Result<Vec<u8>> {
//!         Ok(b"x,y,z,size\n1,2,3,4\n".to_vec())
//!     }
//!
//!     fn name(&self) -> String {
//!         "canned".to_string()
//!     }
//! }
//!
//! let dataset = futures::executor::block_on(pointnorm::load(Canned)).unwrap();
//! assert_eq!(1, dataset.len());
//! ```

use crate::{Error, Result};
use async_trait::async_trait;
use futures::io::{AllowStdIo, AsyncRead, AsyncReadExt};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// Something that can produce the full text of a point file.
#[async_trait]
pub trait Source: Send {
    /// Fetches every byte of the source.
    ///
    /// Implementations should report failures as [Error::SourceUnavailable].
    async fn fetch(&mut self) -> Result<Vec<u8>>;

    /// Returns a short description of the source, used in logs and errors.
    fn name(&self) -> String;
}

async fn read_path(path: &Path) -> Result<Vec<u8>> {
    let unavailable = |error: io::Error| Error::SourceUnavailable {
        source_name: path.display().to_string(),
        error,
    };
    let file = File::open(path).map_err(unavailable)?;
    let mut read = AllowStdIo::new(file);
    let mut bytes = Vec::new();
    let _ = read.read_to_end(&mut bytes).await.map_err(unavailable)?;
    Ok(bytes)
}

#[async_trait]
impl Source for &Path {
    async fn fetch(&mut self) -> Result<Vec<u8>> {
        read_path(self).await
    }

    fn name(&self) -> String {
        self.display().to_string()
    }
}

#[async_trait]
impl Source for PathBuf {
    async fn fetch(&mut self) -> Result<Vec<u8>> {
        read_path(self).await
    }

    fn name(&self) -> String {
        self.display().to_string()
    }
}

#[async_trait]
impl Source for &[u8] {
    async fn fetch(&mut self) -> Result<Vec<u8>> {
        Ok(self.to_vec())
    }

    fn name(&self) -> String {
        format!("{} bytes in memory", self.len())
    }
}

/// Adapts any [AsyncRead] into a [Source].
///
/// # Examples
///
/// ```
/// use futures::io::Cursor;
/// use pointnorm::AsyncSource;
///
/// let source = AsyncSource::new(Cursor::new(b"x,y,z,size\n1,2,3,4\n".to_vec()));
/// let dataset = futures::executor::block_on(pointnorm::load(source)).unwrap();
/// assert_eq!(1, dataset.len());
/// ```
#[derive(Debug)]
pub struct AsyncSource<R> {
    read: R,
    name: String,
}

impl<R: AsyncRead + Unpin + Send> AsyncSource<R> {
    /// Wraps a reader.
    pub fn new(read: R) -> AsyncSource<R> {
        AsyncSource {
            read,
            name: "async reader".to_string(),
        }
    }

    /// Sets the name reported in logs and errors.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> AsyncSource<R> {
        self.name = name.into();
        self
    }

    /// Returns the wrapped reader.
    pub fn into_inner(self) -> R {
        self.read
    }
}

#[async_trait]
impl<R: AsyncRead + Unpin + Send> Source for AsyncSource<R> {
    async fn fetch(&mut self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        let _ = self
            .read
            .read_to_end(&mut bytes)
            .await
            .map_err(|error| Error::SourceUnavailable {
                source_name: self.name.clone(),
                error,
            })?;
        Ok(bytes)
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}
