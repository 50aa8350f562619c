//! # Document Kinds and File References
//!
//! The kinds of supporting documents a participant may owe, and the
//! file-reference types that stand in for uploaded content. This
//! workspace never touches file bytes — a `FileRef` is an opaque handle
//! produced by the upload collaborator.

use serde::{Deserialize, Serialize};

/// A kind of supporting document a participant can be required to supply.
///
/// `Ord` is derived so requirement sets are `BTreeSet`s with a stable
/// iteration order, which keeps violation messages deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DocKind {
    /// Identity document triplet (type, number, scan). Required for every
    /// participant without exception.
    #[serde(rename = "PIECE_IDENTITE")]
    Identity,
    /// Birth certificate. Manager-grade participants only.
    #[serde(rename = "ACTE_NAISSANCE")]
    BirthCertificate,
    /// Criminal-record extract, owed when the filer disclosed a record.
    #[serde(rename = "CASIER_JUDICIAIRE")]
    CriminalRecord,
    /// Signed affidavit substituting for the criminal-record extract.
    #[serde(rename = "DECLARATION_HONNEUR")]
    HonorDeclaration,
    /// Signature capture accompanying the honor declaration (drawn on
    /// screen or uploaded as an image).
    #[serde(rename = "SIGNATURE_DECLARATION")]
    HonorSignature,
    /// Marriage certificate, owed when the filer declared being married.
    #[serde(rename = "ACTE_MARIAGE")]
    MarriageCertificate,
}

impl std::fmt::Display for DocKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Identity => "identity document",
            Self::BirthCertificate => "birth certificate",
            Self::CriminalRecord => "criminal record extract",
            Self::HonorDeclaration => "honor declaration",
            Self::HonorSignature => "honor declaration signature",
            Self::MarriageCertificate => "marriage certificate",
        };
        f.write_str(s)
    }
}

/// Accepted upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    Pdf,
    Jpg,
    Jpeg,
    Png,
}

impl FileFormat {
    /// Resolve a format from a filename extension, case-insensitively.
    /// Returns `None` for anything outside the accepted set.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "jpg" => Some(Self::Jpg),
            "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }

    /// Whether this format is a raster image, eligible for client-side
    /// recompression.
    pub fn is_image(&self) -> bool {
        matches!(self, Self::Jpg | Self::Jpeg | Self::Png)
    }
}

/// Opaque reference to an uploaded file.
///
/// Carries just enough metadata for the upload policy to make decisions;
/// the bytes live with the upload collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    /// Original filename as supplied by the user.
    pub name: String,
    /// Resolved format (already vetted against the accepted set).
    pub format: FileFormat,
    /// Size in bytes after any recompression.
    pub size_bytes: u64,
}

/// The identity document triplet every participant must supply.
///
/// Fields may be empty while the form is being filled; completeness is
/// enforced by the eligibility validator, not by construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentityDocument {
    /// Document type as selected on the form (passport, NINA card, ...).
    #[serde(rename = "document_type")]
    pub kind: String,
    /// Document number.
    #[serde(rename = "document_number")]
    pub number: String,
    /// Scan of the document.
    #[serde(rename = "document_file")]
    pub file: Option<FileRef>,
}

impl IdentityDocument {
    /// Whether all three parts of the triplet are present.
    pub fn is_complete(&self) -> bool {
        !self.kind.trim().is_empty() && !self.number.trim().is_empty() && self.file.is_some()
    }
}

/// A captured signature for the honor declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SignatureCapture {
    /// Signature drawn on screen, stored as an encoded image data URL.
    #[serde(rename = "drawn")]
    Drawn { data_url: String },
    /// Signature uploaded as an image file.
    #[serde(rename = "uploaded")]
    Uploaded(FileRef),
}
