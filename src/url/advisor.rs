//! Safety-tip generation for URL analysis results.

use crate::core::types::{Classification, Signal};

/// Generate the ordered tip list for a completed analysis.
///
/// Order is fixed: classification advice, then per-reason advice, then the
/// generic fallback only when nothing else fired. Pure over its inputs.
pub fn tips(reasons: &[Signal], classification: Classification) -> Vec<String> {
    let mut tips = Vec::new();

    if classification == Classification::Suspicious {
        tips.push("Do not enter any personal information on this site".to_string());
        tips.push("Verify the URL with the legitimate organization".to_string());
        tips.push("Check for HTTPS and valid SSL certificate".to_string());
    }

    if reasons.iter().any(|r| r.id == "no_ssl") {
        tips.push("Never enter sensitive information on HTTP sites".to_string());
    }

    if reasons.iter().any(|r| r.id == "suspicious_keywords") {
        tips.push("Be cautious of URLs containing login/verify keywords".to_string());
    }

    if reasons.iter().any(|r| r.id == "lookalike_pattern") {
        tips.push("Check the domain name carefully for typos".to_string());
    }

    if tips.is_empty() {
        tips.push("Always verify the source before entering sensitive information".to_string());
        tips.push("Use bookmarks for important sites instead of clicking links".to_string());
    }

    tips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{RiskLevel, SignalDef};

    fn reason(id: &'static str) -> Signal {
        SignalDef {
            id,
            title: "t",
            weight: 10,
            why: "w",
            risk_level: RiskLevel::Low,
        }
        .fire("e")
    }

    #[test]
    fn test_fallback_when_nothing_fired() {
        let result = tips(&[], Classification::LikelyGenuine);
        assert_eq!(
            result,
            vec![
                "Always verify the source before entering sensitive information",
                "Use bookmarks for important sites instead of clicking links"
            ]
        );
    }

    #[test]
    fn test_suspicious_classification_leads() {
        let reasons = vec![reason("no_ssl")];
        let result = tips(&reasons, Classification::Suspicious);
        assert_eq!(result[0], "Do not enter any personal information on this site");
        assert_eq!(result[3], "Never enter sensitive information on HTTP sites");
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_reason_specific_tips_without_suspicious() {
        let reasons = vec![reason("suspicious_keywords"), reason("lookalike_pattern")];
        let result = tips(&reasons, Classification::Unknown);
        assert_eq!(
            result,
            vec![
                "Be cautious of URLs containing login/verify keywords",
                "Check the domain name carefully for typos"
            ]
        );
    }

    #[test]
    fn test_idempotent() {
        let reasons = vec![reason("no_ssl")];
        let first = tips(&reasons, Classification::Suspicious);
        let second = tips(&reasons, Classification::Suspicious);
        assert_eq!(first, second);
    }
}
