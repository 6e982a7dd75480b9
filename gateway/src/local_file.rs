//! Upload source backed by a file on disk.

use std::io;
use std::path::{Path, PathBuf};

use wall::acquire::UploadSource;

/// A file offered for upload. Name, media type and size are captured up
/// front so validation never reads the contents.
#[derive(Debug, Clone)]
pub struct LocalFile {
    path: PathBuf,
    name: String,
    media_type: &'static str,
    size: u64,
}

impl LocalFile {
    /// Stat `path` and record its metadata.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file cannot be stat'ed or is not a file.
    pub async fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let meta = tokio::fs::metadata(&path).await?;
        if !meta.is_file() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, format!("{} is not a file", path.display())));
        }
        let name = path.file_name().map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        Ok(Self { media_type: media_type_for(&path), name, size: meta.len(), path })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl UploadSource for LocalFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn media_type(&self) -> &str {
        self.media_type
    }

    fn size(&self) -> u64 {
        self.size
    }

    async fn read(&self) -> io::Result<Vec<u8>> {
        tokio::fs::read(&self.path).await
    }
}

/// Media type from a file extension, case-insensitive.
#[must_use]
pub fn media_type_for(path: &Path) -> &'static str {
    let ext = path.extension().map(|e| e.to_string_lossy().to_ascii_lowercase()).unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "avif" => "image/avif",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
#[path = "local_file_test.rs"]
mod tests;
