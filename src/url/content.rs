//! Fetched-content inspection.
//!
//! Fetches the page with a capped timeout and capped body size, identifying
//! as a scanner, and scans the markup as text. Scripts are never executed.
//! A timeout is itself a weak signal; any other fetch failure is logged and
//! skipped.

use crate::core::config::NetworkConfig;
use crate::core::types::{RiskLevel, Signal, SignalDef};
use regex::Regex;
use std::time::Duration;
use url::Url;

/// Hidden input count above which the page is flagged.
const HIDDEN_INPUT_LIMIT: usize = 5;

const EXTERNAL_FORM_ACTION: SignalDef = SignalDef {
    id: "external_form_action",
    title: "Form posts to external domain",
    weight: 35,
    why: "Forms posting to external domains may be phishing",
    risk_level: RiskLevel::Medium,
};

const OBFUSCATED_JS: SignalDef = SignalDef {
    id: "obfuscated_js",
    title: "Obfuscated JavaScript detected",
    weight: 40,
    why: "Obfuscated JavaScript can hide malicious functionality",
    risk_level: RiskLevel::High,
};

const MANY_HIDDEN_INPUTS: SignalDef = SignalDef {
    id: "many_hidden_inputs",
    title: "Many hidden input fields",
    weight: 25,
    why: "Excessive hidden inputs may indicate credential harvesting",
    risk_level: RiskLevel::Medium,
};

const TIMEOUT_ERROR: SignalDef = SignalDef {
    id: "timeout_error",
    title: "Content fetch timeout",
    weight: 10,
    why: "Unable to analyze page content due to timeout",
    risk_level: RiskLevel::Low,
};

/// Bounded page fetcher and markup scanner.
pub struct ContentChecker {
    client: reqwest::Client,
    timeout: Duration,
    max_bytes: u64,
    form_action: Regex,
    hidden_input: Regex,
}

impl ContentChecker {
    /// Create a checker with the configured fetch limits.
    pub fn new(config: &NetworkConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .unwrap_or_default();

        Self {
            client,
            timeout: Duration::from_secs(config.fetch_timeout_secs),
            max_bytes: config.fetch_max_bytes,
            form_action: Regex::new(r#"(?i)<form[^>]*action=["']([^"']+)["'][^>]*>"#)
                .expect("static form pattern"),
            hidden_input: Regex::new(r#"(?i)<input[^>]*type=["']hidden["'][^>]*>"#)
                .expect("static hidden-input pattern"),
        }
    }

    /// Fetch the page and scan it, absorbing every failure mode.
    pub async fn check(&self, url: &Url) -> Vec<Signal> {
        let host = url.host_str().unwrap_or("").to_string();

        match tokio::time::timeout(self.timeout, self.fetch(url)).await {
            Ok(Ok(Some(body))) => self.scan_markup(&body, &host),
            Ok(Ok(None)) => Vec::new(),
            Ok(Err(e)) if e.is_timeout() => {
                vec![TIMEOUT_ERROR.fire("Page took too long to respond")]
            }
            Ok(Err(e)) => {
                log::debug!("Content fetch failed for {}: {}", url, e);
                Vec::new()
            }
            Err(_) => vec![TIMEOUT_ERROR.fire("Page took too long to respond")],
        }
    }

    /// Fetch up to `max_bytes` of the page body.
    ///
    /// Returns `None` for non-success responses; the original analysis only
    /// inspects pages that answered OK.
    async fn fetch(&self, url: &Url) -> std::result::Result<Option<String>, reqwest::Error> {
        let mut response = self.client.get(url.as_str()).send().await?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let mut body: Vec<u8> = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            let remaining = self.max_bytes as usize - body.len();
            if chunk.len() >= remaining {
                body.extend_from_slice(&chunk[..remaining]);
                break;
            }
            body.extend_from_slice(&chunk);
        }

        Ok(Some(String::from_utf8_lossy(&body).into_owned()))
    }

    /// Scan fetched markup for phishing traits. Pure over its inputs.
    pub fn scan_markup(&self, markup: &str, host: &str) -> Vec<Signal> {
        let mut reasons = Vec::new();

        for captures in self.form_action.captures_iter(markup) {
            let action = &captures[1];
            if !action.starts_with('/') && !action.contains(host) {
                reasons.push(EXTERNAL_FORM_ACTION.fire(format!("Form action: {}", action)));
            }
        }

        if markup.contains("eval(") || markup.contains("Function(") {
            reasons.push(OBFUSCATED_JS.fire("Found eval() or Function() calls in page content"));
        }

        let hidden_count = self.hidden_input.find_iter(markup).count();
        if hidden_count > HIDDEN_INPUT_LIMIT {
            reasons.push(MANY_HIDDEN_INPUTS.fire(format!(
                "{} hidden input fields found",
                hidden_count
            )));
        }

        reasons
    }
}
