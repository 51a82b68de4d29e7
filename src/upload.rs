//! Audio file selection and validation for prediction uploads.
//!
//! Desktop file pickers do not report a MIME type, so one is derived from the
//! file extension. Only `audio/*` types are accepted.

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Largest upload the service accepts.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

const AUDIO_EXTENSIONS: [(&str, &str); 12] = [
    ("wav", "audio/wav"),
    ("wave", "audio/wav"),
    ("mp3", "audio/mpeg"),
    ("ogg", "audio/ogg"),
    ("oga", "audio/ogg"),
    ("opus", "audio/opus"),
    ("webm", "audio/webm"),
    ("flac", "audio/flac"),
    ("m4a", "audio/mp4"),
    ("aac", "audio/aac"),
    ("aif", "audio/aiff"),
    ("aiff", "audio/aiff"),
];

/// Reasons a file selection is rejected.
#[derive(Debug, thiserror::Error)]
pub enum FileValidationError {
    /// The file's type is not `audio/*`.
    #[error("{name} is not an audio file (type: {})", .mime.as_deref().unwrap_or("unknown"))]
    NotAudio { name: String, mime: Option<String> },
    /// The file is larger than [`MAX_UPLOAD_BYTES`].
    #[error("{name} is {size} bytes; the limit is {limit} bytes", limit = MAX_UPLOAD_BYTES)]
    TooLarge { name: String, size: u64 },
    /// The file could not be read.
    #[error("Failed to read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A validated audio file held in memory until it is uploaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedFile {
    name: String,
    mime: String,
    bytes: Arc<[u8]>,
}

impl UploadedFile {
    /// Validate a file selection from its parts.
    pub fn from_parts(
        name: impl Into<String>,
        mime: Option<&str>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Result<Self, FileValidationError> {
        let name = name.into();
        let mime = match mime.map(str::trim) {
            Some(mime) if is_audio_mime(mime) => mime.to_string(),
            other => {
                return Err(FileValidationError::NotAudio {
                    name,
                    mime: other.map(str::to_string),
                });
            }
        };
        let bytes = bytes.into();
        let size = bytes.len() as u64;
        if size > MAX_UPLOAD_BYTES {
            return Err(FileValidationError::TooLarge { name, size });
        }
        Ok(Self { name, mime, bytes })
    }

    /// Validate and load a file from disk.
    ///
    /// The type check runs before the file is opened so a wrong selection
    /// never touches the disk.
    pub fn from_path(path: &Path) -> Result<Self, FileValidationError> {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let mime = mime_for_path(path);
        if !mime.is_some_and(is_audio_mime) {
            return Err(FileValidationError::NotAudio {
                name,
                mime: mime.map(str::to_string),
            });
        }
        let unreadable = |source| FileValidationError::Unreadable {
            path: path.to_path_buf(),
            source,
        };
        let size = std::fs::metadata(path).map_err(unreadable)?.len();
        if size > MAX_UPLOAD_BYTES {
            return Err(FileValidationError::TooLarge { name, size });
        }
        let bytes = std::fs::read(path).map_err(unreadable)?;
        Self::from_parts(name, mime, bytes)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// True when a MIME type names an audio format.
pub fn is_audio_mime(mime: &str) -> bool {
    mime.trim().to_ascii_lowercase().starts_with("audio/")
}

/// Guess a MIME type from a file extension.
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    AUDIO_EXTENSIONS
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mime)| *mime)
}

/// Extensions offered by the file picker filter.
pub fn audio_extensions() -> impl Iterator<Item = &'static str> {
    AUDIO_EXTENSIONS.iter().map(|(ext, _)| *ext)
}
