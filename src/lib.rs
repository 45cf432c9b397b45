//! SafeSight: a heuristic file and URL triage tool.
//!
//! This crate gives end users a quick, non-definitive second opinion before
//! opening a file or visiting a link. It scores inputs with a fixed,
//! auditable catalogue of weighted heuristic rules and explains every point
//! of the verdict: which rules fired, why they matter, what was observed,
//! and what to do next. It is not a malware detection engine.

pub mod core;
pub mod file;
pub mod ui;
pub mod url;
pub mod utils;

// Re-export commonly used types
pub use crate::core::config::Config;
pub use crate::core::error::{Error, Result};
pub use crate::core::types::*;
pub use crate::file::FileAnalyzer;
pub use crate::url::UrlAnalyzer;
