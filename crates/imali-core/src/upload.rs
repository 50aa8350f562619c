//! # Upload Acceptance Policy
//!
//! Pure decision logic for document uploads: which formats are accepted,
//! the hard size cap, and when an oversized image should be recompressed
//! client-side before entering the registry. No pixel work happens here —
//! the UI collaborator executes the returned `CompressionPlan` with a
//! one-shot canvas re-encode.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::FileFormat;

/// Hard cap on any upload. Files above this are rejected outright.
pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// Images above this size get a recompression plan before acceptance.
pub const IMAGE_RECOMPRESSION_THRESHOLD_BYTES: u64 = 1024 * 1024;

/// Parameters for the client-side image re-encode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompressionPlan {
    /// Longest edge after resize, in pixels.
    pub max_edge_px: u32,
    /// JPEG re-encode quality in `[0, 1]`.
    pub jpeg_quality: f32,
}

impl Default for CompressionPlan {
    fn default() -> Self {
        Self {
            max_edge_px: 1200,
            jpeg_quality: 0.7,
        }
    }
}

/// Why an upload was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadRejection {
    /// The filename extension is not in the accepted set.
    #[error("unsupported file format {extension:?}; accepted: pdf, jpg, jpeg, png")]
    UnsupportedFormat {
        /// The offending extension (may be empty).
        extension: String,
    },

    /// The file exceeds the hard size cap.
    #[error("file is {size_bytes} bytes, above the {cap_bytes}-byte cap")]
    TooLarge {
        /// Actual size of the file.
        size_bytes: u64,
        /// The cap that was exceeded.
        cap_bytes: u64,
    },
}

/// Outcome of the upload policy for one candidate file.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadDecision {
    /// Accept the file as-is.
    Accept(FileFormat),
    /// Recompress with the given plan, then accept.
    CompressFirst(FileFormat, CompressionPlan),
    /// Refuse the file.
    Reject(UploadRejection),
}

/// Decide what to do with a candidate upload.
///
/// The decision depends only on the filename extension and the byte
/// size. Order of checks: format, hard cap, image recompression
/// threshold. PDFs are never recompressed regardless of size.
pub fn evaluate_upload(name: &str, size_bytes: u64) -> UploadDecision {
    let extension = name.rsplit('.').next().filter(|e| *e != name).unwrap_or("");
    let format = match FileFormat::from_extension(extension) {
        Some(format) => format,
        None => {
            return UploadDecision::Reject(UploadRejection::UnsupportedFormat {
                extension: extension.to_string(),
            });
        }
    };

    if size_bytes > MAX_UPLOAD_BYTES {
        return UploadDecision::Reject(UploadRejection::TooLarge {
            size_bytes,
            cap_bytes: MAX_UPLOAD_BYTES,
        });
    }

    if format.is_image() && size_bytes > IMAGE_RECOMPRESSION_THRESHOLD_BYTES {
        return UploadDecision::CompressFirst(format, CompressionPlan::default());
    }

    UploadDecision::Accept(format)
}
