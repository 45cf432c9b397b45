//! Text and JSON rendering of analysis results.

use crate::core::error::Result;
use crate::core::types::{FileAnalysisResult, Signal, UrlAnalysisResult};

/// Width of the textual risk meter.
const METER_WIDTH: usize = 20;

/// Render a file analysis result as human-readable text.
pub fn render_file_text(result: &FileAnalysisResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("File: {}\n", result.metadata.original_name));
    out.push_str(&format!(
        "Type: {} ({})\n",
        result.metadata.extension, result.metadata.mime_type
    ));
    out.push_str(&format!("Size: {} bytes\n", result.metadata.size));
    out.push_str(&format!("MD5:    {}\n", result.metadata.hashes.md5));
    out.push_str(&format!("SHA1:   {}\n", result.metadata.hashes.sha1));
    out.push_str(&format!("SHA256: {}\n", result.metadata.hashes.sha256));
    out.push('\n');
    out.push_str(&format!(
        "Risk: {} {} ({}/100)\n",
        meter(result.risk_score),
        result.risk_level,
        result.risk_score
    ));
    out.push('\n');

    render_signals(&mut out, "Signals", &result.signals);
    render_list(&mut out, "Next steps", &result.next_steps);

    out
}

/// Render a URL analysis result as human-readable text.
pub fn render_url_text(result: &UrlAnalysisResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("URL: {}\n", result.normalized_url));
    out.push_str(&format!("Domain: {}\n", result.domain));
    out.push('\n');
    out.push_str(&format!(
        "Verdict: {} (score {}/100, confidence {}%)\n",
        result.classification, result.score, result.confidence
    ));
    out.push_str(&format!("Score: {}\n", meter(result.score)));
    out.push('\n');

    render_signals(&mut out, "Reasons", &result.reasons);
    render_list(&mut out, "Tips", &result.tips);

    out
}

/// Render a file analysis result as pretty JSON.
pub fn render_file_json(result: &FileAnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Render a URL analysis result as pretty JSON.
pub fn render_url_json(result: &UrlAnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

fn meter(score: u8) -> String {
    let filled = (score as usize * METER_WIDTH) / 100;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(METER_WIDTH - filled)
    )
}

fn render_signals(out: &mut String, heading: &str, signals: &[Signal]) {
    if signals.is_empty() {
        out.push_str(&format!("{}: none\n\n", heading));
        return;
    }

    out.push_str(&format!("{}:\n", heading));
    for signal in signals {
        out.push_str(&format!(
            "  [{:+4}] {} ({})\n",
            signal.weight, signal.title, signal.risk_level
        ));
        out.push_str(&format!("         {}\n", signal.evidence));
    }
    out.push('\n');
}

fn render_list(out: &mut String, heading: &str, items: &[String]) {
    out.push_str(&format!("{}:\n", heading));
    for item in items {
        out.push_str(&format!("  - {}\n", item));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::FileAnalyzer;

    fn sample_result() -> FileAnalysisResult {
        FileAnalyzer::new()
            .analyze_bytes(b"MZ\x90\x00\x03\x00\x00\x00\x04\x00", "x.exe")
            .unwrap()
    }

    #[test]
    fn test_meter_bounds() {
        assert_eq!(meter(0), format!("[{}]", "-".repeat(20)));
        assert_eq!(meter(100), format!("[{}]", "#".repeat(20)));
        assert_eq!(meter(50), format!("[{}{}]", "#".repeat(10), "-".repeat(10)));
    }

    #[test]
    fn test_file_text_contains_verdict_and_steps() {
        let text = render_file_text(&sample_result());
        assert!(text.contains("MEDIUM"));
        assert!(text.contains("45/100"));
        assert!(text.contains("Windows executable detected"));
        assert!(text.contains("Verify the source of this executable"));
    }

    #[test]
    fn test_file_json_round_trips() {
        let json = render_file_json(&sample_result()).unwrap();
        let parsed: FileAnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.risk_score, 45);
        assert_eq!(parsed.signals.len(), 2);
    }
}
