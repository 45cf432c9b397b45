//! Lexical URL heuristics and the transport check.
//!
//! Everything here is computed from the URL string alone; no network
//! traffic is involved.

use crate::core::types::{RiskLevel, Signal, SignalDef, UrlMetadata};
use regex::Regex;

/// Keywords commonly abused in phishing URLs.
const SUSPICIOUS_KEYWORDS: &[&str] = &[
    "login",
    "verify",
    "update",
    "secure",
    "account",
    "banking",
    "paypal",
    "amazon",
    "google",
    "microsoft",
    "apple",
    "facebook",
];

/// TLDs disproportionately used for malicious registrations.
const SUSPICIOUS_TLDS: &[&str] = &[".tk", ".ml", ".ga", ".cf", ".gq", ".xyz", ".top", ".club"];

/// Digit-interleaving patterns typical of look-alike domains,
/// with the weight each one contributes.
const LOOKALIKE_PATTERNS: &[(&str, i32)] = &[
    (r"[0-9]+", 20),
    (r"[a-z]+[0-9]+[a-z]+", 30),
    (r"[0-9]+[a-z]+[0-9]+", 25),
];

const EXCESSIVE_SUBDOMAINS: SignalDef = SignalDef {
    id: "excessive_subdomains",
    title: "Excessive subdomains detected",
    weight: 25,
    why: "Too many subdomains may indicate a suspicious URL structure",
    risk_level: RiskLevel::Medium,
};

const SUSPICIOUS_TLD: SignalDef = SignalDef {
    id: "suspicious_tld",
    title: "Suspicious top-level domain",
    weight: 40,
    why: "This TLD is commonly used for malicious sites",
    risk_level: RiskLevel::High,
};

const KEYWORDS: SignalDef = SignalDef {
    id: "suspicious_keywords",
    title: "Suspicious keywords detected",
    weight: 30,
    why: "URL contains keywords commonly used in phishing attacks",
    risk_level: RiskLevel::Medium,
};

const PUNYCODE: SignalDef = SignalDef {
    id: "punycode_detected",
    title: "Punycode encoding detected",
    weight: 50,
    why: "Punycode can be used to create look-alike domains",
    risk_level: RiskLevel::High,
};

const NUMERIC_IP: SignalDef = SignalDef {
    id: "numeric_ip",
    title: "Numeric IP address detected",
    weight: 35,
    why: "Legitimate sites rarely use IP addresses directly",
    risk_level: RiskLevel::Medium,
};

const NO_SSL: SignalDef = SignalDef {
    id: "no_ssl",
    title: "No SSL/TLS encryption",
    weight: 60,
    why: "HTTP connections are not encrypted and can be intercepted",
    risk_level: RiskLevel::High,
};

const SSL_PRESENT: SignalDef = SignalDef {
    id: "ssl_present",
    title: "SSL/TLS encryption present",
    // Negative weight for a mitigating signal
    weight: -20,
    why: "HTTPS provides encryption and helps verify site authenticity",
    risk_level: RiskLevel::Low,
};

fn lookalike_def(weight: i32) -> SignalDef {
    SignalDef {
        id: "lookalike_pattern",
        title: "Look-alike domain pattern detected",
        weight,
        why: "Domain contains patterns commonly used in phishing",
        risk_level: RiskLevel::Medium,
    }
}

/// Lexical checker with the look-alike and IP patterns precompiled.
pub struct LexicalChecker {
    lookalike: Vec<(Regex, &'static str, i32)>,
    dotted_quad: Regex,
}

impl Default for LexicalChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl LexicalChecker {
    /// Create a checker with the built-in patterns compiled.
    pub fn new() -> Self {
        let lookalike = LOOKALIKE_PATTERNS
            .iter()
            .map(|&(source, weight)| {
                (
                    Regex::new(source).expect("static look-alike pattern"),
                    source,
                    weight,
                )
            })
            .collect();

        Self {
            lookalike,
            dotted_quad: Regex::new(r"^(\d{1,3}\.){3}\d{1,3}$").expect("static IP pattern"),
        }
    }

    /// Run all lexical rules over the URL metadata.
    pub fn check(&self, metadata: &UrlMetadata) -> Vec<Signal> {
        let mut reasons = Vec::new();
        let domain = metadata.domain.to_lowercase();
        let path = metadata.path.to_lowercase();

        if metadata.subdomain_count > 3 {
            reasons.push(EXCESSIVE_SUBDOMAINS.fire(format!(
                "{} subdomains found",
                metadata.subdomain_count
            )));
        }

        if SUSPICIOUS_TLDS.contains(&metadata.tld.as_str()) {
            reasons.push(SUSPICIOUS_TLD.fire(format!("Suspicious TLD: {}", metadata.tld)));
        }

        for (pattern, source, weight) in &self.lookalike {
            if pattern.is_match(&domain) {
                reasons.push(lookalike_def(*weight).fire(format!("Pattern matched: {}", source)));
            }
        }

        let has_keyword = SUSPICIOUS_KEYWORDS
            .iter()
            .any(|kw| domain.contains(kw) || path.contains(kw));
        if has_keyword {
            reasons.push(KEYWORDS.fire("Found suspicious keywords in URL"));
        }

        if domain.contains("xn--") {
            reasons.push(PUNYCODE.fire("Found punycode encoding in domain"));
        }

        if self.dotted_quad.is_match(&domain) {
            reasons.push(NUMERIC_IP.fire(format!("IP address: {}", domain)));
        }

        reasons
    }
}

/// Transport-level check on the URL scheme.
///
/// Plain HTTP short-circuits: the mitigating HTTPS signal is never added in
/// that branch.
pub fn transport_signals(scheme: &str) -> Vec<Signal> {
    match scheme {
        "http" => vec![NO_SSL.fire("Site uses HTTP instead of HTTPS")],
        "https" => vec![SSL_PRESENT.fire("Site uses HTTPS protocol")],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url::metadata::{extract, normalize};

    fn meta_for(input: &str) -> UrlMetadata {
        extract(&normalize(input).unwrap())
    }

    #[test]
    fn test_clean_domain_no_reasons() {
        let checker = LexicalChecker::new();
        assert!(checker.check(&meta_for("https://example.com")).is_empty());
    }

    #[test]
    fn test_excessive_subdomains() {
        let checker = LexicalChecker::new();
        let reasons = checker.check(&meta_for("https://a.b.c.d.example.com"));
        assert!(reasons.iter().any(|r| r.id == "excessive_subdomains"));
        let reason = reasons
            .iter()
            .find(|r| r.id == "excessive_subdomains")
            .unwrap();
        assert_eq!(reason.evidence, "4 subdomains found");
    }

    #[test]
    fn test_suspicious_tld() {
        let checker = LexicalChecker::new();
        let reasons = checker.check(&meta_for("https://freestuff.tk"));
        let reason = reasons.iter().find(|r| r.id == "suspicious_tld").unwrap();
        assert_eq!(reason.weight, 40);
        assert_eq!(reason.evidence, "Suspicious TLD: .tk");
    }

    #[test]
    fn test_lookalike_patterns_fire_individually() {
        let checker = LexicalChecker::new();
        // "g00gle" matches digits-only and letters-digits-letters
        let reasons = checker.check(&meta_for("https://g00gle.com"));
        let lookalikes: Vec<&Signal> = reasons
            .iter()
            .filter(|r| r.id == "lookalike_pattern")
            .collect();
        assert_eq!(lookalikes.len(), 2);
        assert_eq!(lookalikes[0].weight, 20);
        assert_eq!(lookalikes[1].weight, 30);
    }

    #[test]
    fn test_keywords_in_domain_or_path() {
        let checker = LexicalChecker::new();
        assert!(checker
            .check(&meta_for("https://paypal-support.example.com"))
            .iter()
            .any(|r| r.id == "suspicious_keywords"));
        assert!(checker
            .check(&meta_for("https://example.com/account/verify"))
            .iter()
            .any(|r| r.id == "suspicious_keywords"));
    }

    #[test]
    fn test_punycode() {
        let checker = LexicalChecker::new();
        let reasons = checker.check(&meta_for("https://xn--pple-43d.com"));
        assert!(reasons.iter().any(|r| r.id == "punycode_detected"));
    }

    #[test]
    fn test_numeric_ip_also_matches_lookalike() {
        let checker = LexicalChecker::new();
        let reasons = checker.check(&meta_for("http://192.168.1.10"));
        assert!(reasons.iter().any(|r| r.id == "numeric_ip"));
        // Digit runs in the host also trip the first look-alike pattern
        assert!(reasons.iter().any(|r| r.id == "lookalike_pattern"));
    }

    #[test]
    fn test_transport_http_short_circuits() {
        let signals = transport_signals("http");
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].id, "no_ssl");
        assert_eq!(signals[0].weight, 60);
    }

    #[test]
    fn test_transport_https_mitigates() {
        let signals = transport_signals("https");
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].id, "ssl_present");
        assert_eq!(signals[0].weight, -20);
        assert_eq!(signals[0].risk_level, RiskLevel::Low);
    }
}
