//! PDF signal extraction.
//!
//! Scans the decoded document text for the object keys that mark active
//! content: JavaScript actions, embedded files, and automatic launch
//! actions. Decoding is deliberately shallow (a lossy byte-to-char pass
//! over the raw stream); the tokens of interest appear verbatim in the
//! object structure of unencrypted PDFs.

use crate::core::types::{RiskLevel, Signal, SignalDef};

const JS_DETECTED: SignalDef = SignalDef {
    id: "pdf_js_detected",
    title: "JavaScript detected in PDF",
    weight: 30,
    why: "PDFs with JavaScript can execute code and may be malicious",
    risk_level: RiskLevel::Medium,
};

const EMBEDDED_FILES: SignalDef = SignalDef {
    id: "pdf_embedded_files",
    title: "Embedded files detected",
    weight: 20,
    why: "PDFs with embedded files may contain malicious content",
    risk_level: RiskLevel::Low,
};

const SUSPICIOUS_ACTIONS: SignalDef = SignalDef {
    id: "pdf_suspicious_actions",
    title: "Suspicious actions detected",
    weight: 40,
    why: "PDFs with automatic actions can be dangerous",
    risk_level: RiskLevel::High,
};

/// Scan PDF bytes for active-content markers.
pub fn scan(data: &[u8]) -> Vec<Signal> {
    let mut signals = Vec::new();

    // Lossy decode keeps every byte as a char, so the /Name tokens survive.
    let text: String = data.iter().map(|&b| b as char).collect();

    if text.contains("/JS") || text.contains("/JavaScript") {
        signals.push(JS_DETECTED.fire("Found JavaScript references in PDF content"));
    }

    if text.contains("/EmbeddedFile") || text.contains("/F") {
        signals.push(EMBEDDED_FILES.fire("Found embedded file references in PDF"));
    }

    if text.contains("/OpenAction") || text.contains("/Launch") {
        signals.push(SUSPICIOUS_ACTIONS.fire("Found OpenAction or Launch references"));
    }

    signals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_pdf_emits_nothing() {
        let data = b"%PDF-1.4\n1 0 obj\n<< /Type /Catalog >>\nendobj\n";
        assert!(scan(data).is_empty());
    }

    #[test]
    fn test_javascript_detected() {
        let data = b"%PDF-1.4\n<< /S /JavaScript /JS (app.alert(1)) >>\n";
        let signals = scan(data);
        assert!(signals.iter().any(|s| s.id == "pdf_js_detected"));
    }

    #[test]
    fn test_open_action_detected() {
        let data = b"%PDF-1.4\n<< /OpenAction 2 0 R >>\n";
        let signals = scan(data);
        assert!(signals.iter().any(|s| s.id == "pdf_suspicious_actions"));
        let sig = signals
            .iter()
            .find(|s| s.id == "pdf_suspicious_actions")
            .unwrap();
        assert_eq!(sig.weight, 40);
        assert_eq!(sig.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_embedded_file_marker() {
        let data = b"%PDF-1.4\n<< /Type /EmbeddedFile >>\n";
        let signals = scan(data);
        assert!(signals.iter().any(|s| s.id == "pdf_embedded_files"));
    }
}
