//! Office document signal extraction.

use super::contains_bytes;
use crate::core::types::{RiskLevel, Signal, SignalDef};

const MACRO_DETECTED: SignalDef = SignalDef {
    id: "office_macro_detected",
    title: "Macro detected in Office document",
    weight: 60,
    why: "Office documents with macros can execute malicious code",
    risk_level: RiskLevel::High,
};

const MACRO_ENABLED: SignalDef = SignalDef {
    id: "office_macro_enabled",
    title: "Macro-enabled document format",
    weight: 40,
    why: "Macro-enabled formats can contain executable code",
    risk_level: RiskLevel::Medium,
};

/// Scan an Office document for macro indicators.
///
/// The content check looks for the VBA project stream name in the raw
/// bytes; the naming-convention check fires on any extension carrying the
/// macro-enabled `m` (docm, xlsm) regardless of content.
pub fn scan(data: &[u8], extension: &str) -> Vec<Signal> {
    let mut signals = Vec::new();

    if contains_bytes(data, b"vbaProject.bin") || contains_bytes(data, b"VBA") {
        signals.push(MACRO_DETECTED.fire("Found VBA project or macro indicators"));
    }

    if extension.trim_start_matches('.').contains('m') {
        signals.push(MACRO_ENABLED.fire(format!(
            "File extension indicates macro support: {}",
            extension
        )));
    }

    signals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_docx() {
        let data = b"PK\x03\x04word/document.xml";
        assert!(scan(data, ".docx").is_empty());
    }

    #[test]
    fn test_vba_project_stream() {
        let data = b"PK\x03\x04word/vbaProject.bin\x00\x00";
        let signals = scan(data, ".docx");
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].id, "office_macro_detected");
        assert_eq!(signals[0].weight, 60);
    }

    #[test]
    fn test_macro_enabled_extension_fires_without_content() {
        let signals = scan(b"PK\x03\x04nothing here", ".docm");
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].id, "office_macro_enabled");
        assert!(signals[0].evidence.contains(".docm"));
    }

    #[test]
    fn test_both_signals_for_macro_enabled_with_vba() {
        let signals = scan(b"xl/vbaProject.bin", ".xlsm");
        let ids: Vec<&str> = signals.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["office_macro_detected", "office_macro_enabled"]);
    }

    #[test]
    fn test_pptx_has_no_macro_letter() {
        // pptx contains no 'm' past the dot
        assert!(scan(b"PK\x03\x04", ".pptx").is_empty());
    }
}
