//! Android package signal extraction.

use super::contains_bytes;
use crate::core::types::{RiskLevel, Signal, SignalDef};

const MANIFEST_FOUND: SignalDef = SignalDef {
    id: "apk_manifest_found",
    title: "Android APK detected",
    weight: 60,
    why: "APK files can contain malicious Android applications",
    risk_level: RiskLevel::High,
};

/// Scan APK bytes for the Android manifest entry name.
pub fn scan(data: &[u8]) -> Vec<Signal> {
    let mut signals = Vec::new();

    if contains_bytes(data, b"AndroidManifest.xml") {
        signals.push(MANIFEST_FOUND.fire("Found AndroidManifest.xml in APK"));
    }

    signals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_detected() {
        let data = b"PK\x03\x04AndroidManifest.xml\x00\x00";
        let signals = scan(data);
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].id, "apk_manifest_found");
        assert_eq!(signals[0].risk_level, RiskLevel::High);
    }

    #[test]
    fn test_plain_zip_not_flagged() {
        assert!(scan(b"PK\x03\x04some/other/entry").is_empty());
    }
}
