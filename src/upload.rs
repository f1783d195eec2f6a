//! Upload intake — validates and stores an uploaded PDF document.
//!
//! Validation runs before anything touches the disk: size first, then the
//! extension. Accepted files are written as `<unix-ms>-<original name>`
//! into the configured destination directory, which must already exist.
//! A rejected or failed write never leaves a file behind.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

use axum::body::Bytes;
use futures_util::{Stream, StreamExt};
use serde::Serialize;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::models::DocumentCategory;

pub const PDF_ONLY_MESSAGE: &str = "Only PDF files are allowed!";

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("File too large. Maximum {limit} bytes.")]
    PayloadTooLarge { limit: u64 },
    #[error("Only PDF files are allowed!")]
    UnsupportedMediaType,
    #[error("Upload interrupted: {0}")]
    Interrupted(String),
    #[error("Failed to store upload: {0}")]
    Io(#[from] io::Error),
}

/// Where accepted files go and how large they may be.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub destination: PathBuf,
    pub max_bytes: u64,
}

/// Metadata for a stored document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredFileDescriptor {
    pub destination_path: PathBuf,
    pub generated_filename: String,
    pub original_filename: String,
    pub size_bytes: u64,
    pub extension: String,
    pub content_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<DocumentCategory>,
}

impl StoredFileDescriptor {
    pub fn path(&self) -> PathBuf {
        self.destination_path.join(&self.generated_filename)
    }
}

/// Gate in front of document storage.
#[derive(Debug, Clone)]
pub struct UploadIntake {
    config: UploadConfig,
    category: Option<DocumentCategory>,
}

impl UploadIntake {
    pub fn new(config: UploadConfig) -> Self {
        Self {
            config,
            category: None,
        }
    }

    /// Intake writing into `<root>/<category>/`.
    pub fn for_category(root: &Path, category: DocumentCategory, max_bytes: u64) -> Self {
        Self {
            config: UploadConfig {
                destination: root.join(category.dir_name()),
                max_bytes,
            },
            category: Some(category),
        }
    }

    pub fn max_bytes(&self) -> u64 {
        self.config.max_bytes
    }

    pub fn destination(&self) -> &Path {
        &self.config.destination
    }

    /// Validate and store an upload.
    ///
    /// `declared_size` is checked up front when the client sent one; the
    /// stream is counted as it is written as well, so an under-declared or
    /// undeclared body is still capped.
    pub async fn accept<S, E>(
        &self,
        stream: S,
        original_filename: &str,
        declared_size: Option<u64>,
    ) -> Result<StoredFileDescriptor, UploadError>
    where
        S: Stream<Item = Result<Bytes, E>>,
        E: Into<UploadError>,
    {
        let limit = self.config.max_bytes;
        if let Some(size) = declared_size.filter(|&size| size > limit) {
            tracing::warn!(size, limit, "Upload rejected: too large");
            return Err(UploadError::PayloadTooLarge { limit });
        }

        let original = base_filename(original_filename);
        if !has_pdf_extension(&original) {
            tracing::warn!(filename = %original, "Upload rejected: not a PDF");
            return Err(UploadError::UnsupportedMediaType);
        }

        let generated_filename =
            format!("{}-{}", chrono::Utc::now().timestamp_millis(), original);
        let path = self.config.destination.join(&generated_filename);

        // create_new: a same-millisecond name clash fails instead of overwriting
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| {
                tracing::error!(path = %path.display(), "Failed to open upload target: {e}");
                UploadError::Io(e)
            })?;
        let partial = PartialUpload::new(path.clone());

        let written = write_capped(&mut file, stream, limit).await?;
        drop(file);
        partial.keep();

        let content_type = mime_guess::from_path(&path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        tracing::info!(
            filename = %generated_filename,
            size = written,
            destination = %self.config.destination.display(),
            "Document stored"
        );

        Ok(StoredFileDescriptor {
            destination_path: self.config.destination.clone(),
            generated_filename,
            original_filename: original,
            size_bytes: written,
            extension: ".pdf".to_string(),
            content_type,
            category: self.category,
        })
    }

    /// Store an upload that is already buffered in memory.
    pub async fn accept_bytes(
        &self,
        original_filename: &str,
        bytes: Bytes,
    ) -> Result<StoredFileDescriptor, UploadError> {
        let size = bytes.len() as u64;
        let stream = futures_util::stream::iter(std::iter::once(Ok::<_, io::Error>(bytes)));
        self.accept(stream, original_filename, Some(size)).await
    }
}

// ═══════════════════════════════════════════════════════════
// PartialUpload — removes an unfinished file on drop
// ═══════════════════════════════════════════════════════════

/// Owns a freshly created upload file until it is fully written.
///
/// Dropping the guard without [`PartialUpload::keep`] deletes the file, so
/// a failed write or a cancelled request leaves nothing behind.
struct PartialUpload {
    path: Option<PathBuf>,
}

impl PartialUpload {
    fn new(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    fn keep(mut self) {
        self.path = None;
    }
}

impl Drop for PartialUpload {
    fn drop(&mut self) {
        if let Some(path) = self.path.take() {
            if let Err(e) = std::fs::remove_file(&path) {
                tracing::error!(path = %path.display(), "Failed to remove partial upload: {e}");
            }
        }
    }
}

async fn write_capped<S, E>(
    file: &mut tokio::fs::File,
    stream: S,
    limit: u64,
) -> Result<u64, UploadError>
where
    S: Stream<Item = Result<Bytes, E>>,
    E: Into<UploadError>,
{
    let mut stream = std::pin::pin!(stream);
    let mut written: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| {
            let err: UploadError = e.into();
            tracing::warn!("Upload stream failed mid-transfer: {err}");
            err
        })?;

        written += chunk.len() as u64;
        if written > limit {
            tracing::warn!(limit, "Upload rejected: body exceeded size limit");
            return Err(UploadError::PayloadTooLarge { limit });
        }
        file.write_all(&chunk).await?;
    }

    file.flush().await?;
    Ok(written)
}

/// Final path component of a client-supplied filename.
pub fn base_filename(name: &str) -> String {
    name.rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or_default()
        .chars()
        .filter(|&c| c != '\0')
        .collect()
}

/// Case-insensitive `.pdf` extension check.
pub fn has_pdf_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.to_lowercase() == "pdf")
}

/// Create the per-category directories under the upload root.
///
/// Bootstrap-time only. `UploadIntake` itself never creates directories.
pub fn prepare_upload_root(root: &Path) -> io::Result<()> {
    for category in DocumentCategory::ALL {
        std::fs::create_dir_all(root.join(category.dir_name()))?;
    }
    Ok(())
}
