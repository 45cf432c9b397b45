//! File analysis: extension dispatch, signal extraction, scoring, advice.

pub mod advisor;
pub mod category;
pub mod extractors;
pub mod scoring;

pub use category::{extension_of, FileCategory, ALLOWED_EXTENSIONS};

use crate::core::config::FileConfig;
use crate::core::error::{Error, Result};
use crate::core::types::{FileAnalysisResult, FileHashes, FileMetadata, Signal};
use crate::file::extractors::script::ScriptScanner;
use crate::utils::hash::HashCalculator;
use crate::utils::mime::mime_for_extension;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;

/// File analysis orchestrator.
///
/// Stateless per invocation: each call reads its input, runs the extractor
/// for the declared category, and assembles an immutable result. Extractor
/// internals are fail-open; the only caller-facing failures are input
/// rejections (disallowed type, oversize, unreadable file).
pub struct FileAnalyzer {
    max_size_bytes: u64,
    script_scanner: ScriptScanner,
}

impl Default for FileAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl FileAnalyzer {
    /// Create an analyzer with default limits.
    pub fn new() -> Self {
        Self::with_config(&FileConfig::default())
    }

    /// Create an analyzer with the given file settings.
    pub fn with_config(config: &FileConfig) -> Self {
        Self {
            max_size_bytes: config.max_size_bytes(),
            script_scanner: ScriptScanner::new(),
        }
    }

    /// Analyze a file on disk under its declared name.
    ///
    /// Hashes stream the file once (all three digests in a single pass);
    /// content extraction reads it separately.
    pub fn analyze_file(&self, path: &Path, declared_name: &str) -> Result<FileAnalysisResult> {
        let extension = extension_of(declared_name);
        let category = FileCategory::from_extension(&extension)
            .ok_or_else(|| Error::unsupported(&extension))?;

        let file_size = std::fs::metadata(path)
            .map_err(|e| Error::file_read(path, e))?
            .len();
        if file_size > self.max_size_bytes {
            return Err(Error::FileTooLarge {
                size: file_size,
                limit: self.max_size_bytes,
            });
        }

        let (hashes, size) = HashCalculator::hash_file(path)?;
        let data = std::fs::read(path).map_err(|e| Error::file_read(path, e))?;

        let signals = self.extract_signals(category, &data, &extension);
        Ok(self.assemble(declared_name, extension, size, hashes, signals))
    }

    /// Analyze an in-memory buffer under its declared name.
    pub fn analyze_bytes(&self, data: &[u8], declared_name: &str) -> Result<FileAnalysisResult> {
        let extension = extension_of(declared_name);
        let category = FileCategory::from_extension(&extension)
            .ok_or_else(|| Error::unsupported(&extension))?;

        let size = data.len() as u64;
        if size > self.max_size_bytes {
            return Err(Error::FileTooLarge {
                size,
                limit: self.max_size_bytes,
            });
        }

        let hashes = HashCalculator::hash_bytes(data);
        let signals = self.extract_signals(category, data, &extension);
        Ok(self.assemble(declared_name, extension, size, hashes, signals))
    }

    /// Run the extractor for the category inside a fail-open boundary.
    ///
    /// Any failure inside an extractor downgrades to "no signals from this
    /// extractor"; the analysis still completes.
    fn extract_signals(&self, category: FileCategory, data: &[u8], extension: &str) -> Vec<Signal> {
        let signals = self.run_extractor(category, || match category {
            FileCategory::Pdf => extractors::pdf::scan(data),
            FileCategory::Office => extractors::office::scan(data, extension),
            FileCategory::Archive => extractors::archive::scan(data.len() as u64),
            FileCategory::Script => self.script_scanner.scan(data),
            FileCategory::Executable => extractors::executable::scan(data),
            FileCategory::Apk => extractors::apk::scan(data),
            FileCategory::Jar => extractors::jar::scan(data),
            FileCategory::Image => extractors::image::scan(data),
            FileCategory::Text | FileCategory::Package => Vec::new(),
        });

        log::debug!("{} extractor fired {} signal(s)", category, signals.len());
        signals
    }

    /// Fail-open boundary around an extractor call.
    fn run_extractor<F>(&self, category: FileCategory, scan: F) -> Vec<Signal>
    where
        F: FnOnce() -> Vec<Signal>,
    {
        match catch_unwind(AssertUnwindSafe(scan)) {
            Ok(signals) => signals,
            Err(_) => {
                let err = Error::extraction(category.to_string(), "extractor aborted");
                log::warn!("{}; continuing without its signals", err);
                Vec::new()
            }
        }
    }

    fn assemble(
        &self,
        declared_name: &str,
        extension: String,
        size: u64,
        hashes: FileHashes,
        signals: Vec<Signal>,
    ) -> FileAnalysisResult {
        let risk_score = scoring::risk_score(&signals);
        let risk_level = scoring::risk_level(risk_score);
        let next_steps = advisor::next_steps(&signals, risk_level);

        FileAnalysisResult {
            risk_score,
            risk_level,
            signals,
            metadata: FileMetadata {
                original_name: declared_name.to_string(),
                size,
                mime_type: mime_for_extension(&extension).to_string(),
                extension,
                hashes,
            },
            next_steps,
        }
    }
}
