//! Script signal extraction for JavaScript and Python sources.

use crate::core::types::{RiskLevel, Signal, SignalDef};
use regex::Regex;

/// Line length above which a line counts as suspiciously long.
const LONG_LINE_CHARS: usize = 1000;

const OBFUSCATION: SignalDef = SignalDef {
    id: "script_obfuscation",
    title: "Potential code obfuscation detected",
    weight: 50,
    why: "Obfuscated code can hide malicious functionality",
    risk_level: RiskLevel::High,
};

const LONG_LINES: SignalDef = SignalDef {
    id: "script_long_lines",
    title: "Very long lines detected",
    weight: 25,
    why: "Very long lines may indicate obfuscated or encoded content",
    risk_level: RiskLevel::Medium,
};

const BASE64: SignalDef = SignalDef {
    id: "script_base64",
    title: "Base64 encoded content detected",
    weight: 30,
    why: "Base64 encoded content may hide malicious payloads",
    risk_level: RiskLevel::Medium,
};

/// Textual scanner for script sources.
///
/// Holds the compiled base64 pattern; construct once and reuse.
pub struct ScriptScanner {
    base64: Regex,
}

impl Default for ScriptScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptScanner {
    /// Create a scanner with the built-in patterns compiled.
    pub fn new() -> Self {
        Self {
            base64: Regex::new(r"[A-Za-z0-9+/]{50,}={0,2}").expect("static base64 pattern"),
        }
    }

    /// Scan script content for obfuscation indicators.
    pub fn scan(&self, data: &[u8]) -> Vec<Signal> {
        let mut signals = Vec::new();
        let content = String::from_utf8_lossy(data);

        if content.contains("eval(") || content.contains("Function(") {
            signals.push(OBFUSCATION.fire("Found eval() or Function() calls"));
        }

        let long_lines = content
            .lines()
            .filter(|line| line.len() > LONG_LINE_CHARS)
            .count();
        if long_lines > 0 {
            signals.push(LONG_LINES.fire(format!(
                "Found {} lines longer than 1000 characters",
                long_lines
            )));
        }

        if self.base64.is_match(&content) {
            signals.push(BASE64.fire("Found potential Base64 encoded strings"));
        }

        signals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_script() {
        let scanner = ScriptScanner::new();
        let signals = scanner.scan(b"console.log('hello');\nlet x = 1;\n");
        assert!(signals.is_empty());
    }

    #[test]
    fn test_eval_flagged() {
        let scanner = ScriptScanner::new();
        let signals = scanner.scan(b"eval(atob(payload));");
        assert!(signals.iter().any(|s| s.id == "script_obfuscation"));
    }

    #[test]
    fn test_long_line_count_in_evidence() {
        let scanner = ScriptScanner::new();
        let long = "x".repeat(1500);
        let content = format!("{}\nshort\n{}\n", long, long);
        let signals = scanner.scan(content.as_bytes());
        let sig = signals.iter().find(|s| s.id == "script_long_lines").unwrap();
        assert_eq!(sig.evidence, "Found 2 lines longer than 1000 characters");
    }

    #[test]
    fn test_base64_run_flagged() {
        let scanner = ScriptScanner::new();
        let content = format!("let payload = \"{}\";", "QUJDREVGRw".repeat(10));
        let signals = scanner.scan(content.as_bytes());
        assert!(signals.iter().any(|s| s.id == "script_base64"));
    }

    #[test]
    fn test_short_base64_not_flagged() {
        let scanner = ScriptScanner::new();
        let signals = scanner.scan(b"let short = \"QUJDREVG\";");
        assert!(!signals.iter().any(|s| s.id == "script_base64"));
    }

    #[test]
    fn test_exactly_1000_char_line_not_long() {
        let scanner = ScriptScanner::new();
        let content = "y".repeat(1000);
        let signals = scanner.scan(content.as_bytes());
        assert!(!signals.iter().any(|s| s.id == "script_long_lines"));
    }
}
