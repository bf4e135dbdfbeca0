//! Byte sources for uploaded files.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::error::ReadError;
use super::traits::ByteSource;

/// A file already held in memory, e.g. a multipart upload.
#[derive(Debug, Clone)]
pub struct MemorySource {
    name: String,
    bytes: Vec<u8>,
}

impl MemorySource {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

#[async_trait]
impl ByteSource for MemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, ReadError> {
        if self.bytes.is_empty() {
            return Err(ReadError::Empty);
        }
        Ok(self.bytes.clone())
    }
}

/// A file on the local filesystem.
#[derive(Debug, Clone)]
pub struct PathSource {
    path: PathBuf,
    name: String,
}

impl PathSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }
}

#[async_trait]
impl ByteSource for PathSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, ReadError> {
        let bytes = tokio::fs::read(&self.path).await?;
        if bytes.is_empty() {
            return Err(ReadError::Empty);
        }
        Ok(bytes)
    }
}
