//! Archive signal extraction.
//!
//! Archives are judged by size only; contents are never listed or
//! expanded.

use crate::core::types::{RiskLevel, Signal, SignalDef};

/// Size above which an archive is flagged (10MB).
const LARGE_ARCHIVE_BYTES: u64 = 10 * 1024 * 1024;

const LARGE_SIZE: SignalDef = SignalDef {
    id: "archive_large_size",
    title: "Large archive file",
    weight: 15,
    why: "Large archives may contain many files or large executables",
    risk_level: RiskLevel::Low,
};

/// Scan an archive by its byte size.
pub fn scan(size: u64) -> Vec<Signal> {
    let mut signals = Vec::new();

    if size > LARGE_ARCHIVE_BYTES {
        signals.push(LARGE_SIZE.fire(format!("Archive size: {}MB", size / 1024 / 1024)));
    }

    signals
}
