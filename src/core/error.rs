//! Error types and result handling for SafeSight.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our custom Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for SafeSight operations.
///
/// Only input rejections ([`Error::UnsupportedFileType`], [`Error::InvalidUrl`],
/// [`Error::FileTooLarge`], [`Error::FileRead`]) reach callers of the analyzers.
/// Extractor and lookup failures are absorbed at their boundary and analysis
/// completes with whatever signals were gathered.
#[derive(Error, Debug)]
pub enum Error {
    // ===== Input Rejections =====
    #[error("File type not allowed: {extension}")]
    UnsupportedFileType { extension: String },

    #[error("File exceeds the analysis size limit ({size} bytes, limit {limit} bytes)")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid URL: {url}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    // ===== Absorbed Analysis Errors =====
    #[error("Extraction failed for {extractor}: {reason}")]
    Extraction { extractor: String, reason: String },

    #[error("Lookup {operation} failed: {reason}")]
    LookupFailed { operation: String, reason: String },

    #[error("Lookup {operation} timed out after {timeout_secs}s")]
    LookupTimeout {
        operation: String,
        timeout_secs: u64,
    },

    // ===== Configuration Errors =====
    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),

    #[error("Invalid configuration value: {field} - {message}")]
    ConfigInvalid { field: String, message: String },

    // ===== Serialization Errors =====
    #[error("JSON serialization error")]
    JsonSerialize(#[from] serde_json::Error),

    // ===== Generic Errors =====
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a file read error.
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Create an unsupported file type error.
    pub fn unsupported(extension: impl Into<String>) -> Self {
        Self::UnsupportedFileType {
            extension: extension.into(),
        }
    }

    /// Create an invalid URL error.
    pub fn invalid_url(url: impl Into<String>, source: url::ParseError) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            source,
        }
    }

    /// Create an extraction error.
    pub fn extraction(extractor: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Extraction {
            extractor: extractor.into(),
            reason: reason.into(),
        }
    }

    /// Create a lookup failure error.
    pub fn lookup_failed(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::LookupFailed {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Create a lookup timeout error.
    pub fn lookup_timeout(operation: impl Into<String>, timeout_secs: u64) -> Self {
        Self::LookupTimeout {
            operation: operation.into(),
            timeout_secs,
        }
    }

    /// Check if this error rejects the input before analysis begins.
    ///
    /// Rejections are the only errors surfaced to analyzer callers; everything
    /// else is absorbed mid-analysis.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedFileType { .. }
                | Error::FileTooLarge { .. }
                | Error::FileRead { .. }
                | Error::InvalidUrl { .. }
        )
    }

    /// Check if this error must be absorbed at an extractor or lookup boundary.
    pub fn is_absorbed(&self) -> bool {
        matches!(
            self,
            Error::Extraction { .. } | Error::LookupFailed { .. } | Error::LookupTimeout { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::unsupported(".iso");
        assert_eq!(err.to_string(), "File type not allowed: .iso");
    }

    #[test]
    fn test_rejection_classification() {
        assert!(Error::unsupported(".iso").is_rejection());
        assert!(Error::FileTooLarge {
            size: 30_000_000,
            limit: 26_214_400
        }
        .is_rejection());
        assert!(!Error::extraction("pdf", "truncated stream").is_rejection());
    }

    #[test]
    fn test_absorbed_classification() {
        assert!(Error::extraction("office", "read failed").is_absorbed());
        assert!(Error::lookup_timeout("rdap", 5).is_absorbed());
        assert!(!Error::unsupported(".iso").is_absorbed());
    }
}
