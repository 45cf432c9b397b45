//! Domain registration-age and DNS record collaborators.
//!
//! Both lookups are external services behind traits so the analyzer can be
//! exercised without network access. The built-in implementations use RDAP
//! for registration age and DNS-over-HTTPS (JSON) for record presence, each
//! with a bounded request timeout. Any lookup failure degrades to "no
//! signal" at the call site.

use crate::core::config::NetworkConfig;
use crate::core::error::{Error, Result};
use crate::core::types::{RiskLevel, Signal, SignalDef};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::time::Duration;

/// Domain age below which a registration is considered fresh, in days.
const NEW_DOMAIN_DAYS: i64 = 30;

/// Domain age above which a registration is considered established, in days.
const ESTABLISHED_DOMAIN_DAYS: i64 = 365;

const NEW_DOMAIN: SignalDef = SignalDef {
    id: "new_domain",
    title: "Recently registered domain",
    weight: 45,
    why: "New domains are commonly used in phishing attacks",
    risk_level: RiskLevel::High,
};

const ESTABLISHED_DOMAIN: SignalDef = SignalDef {
    id: "established_domain",
    title: "Established domain",
    // Negative weight for a mitigating signal
    weight: -15,
    why: "Older domains are less likely to be malicious",
    risk_level: RiskLevel::Low,
};

const NO_MX_RECORD: SignalDef = SignalDef {
    id: "no_mx_record",
    title: "No MX record found",
    weight: 20,
    why: "Legitimate domains typically have MX records for email",
    risk_level: RiskLevel::Low,
};

const NO_SPF_RECORD: SignalDef = SignalDef {
    id: "no_spf_record",
    title: "No SPF record found",
    weight: 15,
    why: "SPF records help prevent email spoofing",
    risk_level: RiskLevel::Low,
};

/// Registration-age lookup collaborator.
#[async_trait]
pub trait DomainAgeLookup: Send + Sync {
    /// Age of the domain registration in days.
    async fn age_days(&self, domain: &str) -> Result<i64>;
}

/// DNS record presence as reported by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DnsRecords {
    pub has_mx: bool,
    pub has_spf: bool,
}

/// DNS record lookup collaborator.
#[async_trait]
pub trait DnsLookup: Send + Sync {
    /// Check MX and SPF record presence for the domain.
    async fn records(&self, domain: &str) -> Result<DnsRecords>;
}

/// Convert a registration age into reasons.
pub fn age_signals(age_days: i64) -> Vec<Signal> {
    let mut reasons = Vec::new();

    if age_days < NEW_DOMAIN_DAYS {
        reasons.push(NEW_DOMAIN.fire(format!("Domain registered {} days ago", age_days)));
    } else if age_days > ESTABLISHED_DOMAIN_DAYS {
        reasons.push(ESTABLISHED_DOMAIN.fire(format!("Domain registered {} days ago", age_days)));
    }

    reasons
}

/// Convert DNS record presence into reasons.
pub fn dns_signals(records: DnsRecords) -> Vec<Signal> {
    let mut reasons = Vec::new();

    if !records.has_mx {
        reasons.push(NO_MX_RECORD.fire("No MX record found in DNS"));
    }

    if !records.has_spf {
        reasons.push(NO_SPF_RECORD.fire("No SPF record found in DNS"));
    }

    reasons
}

// ===== RDAP registration-age lookup =====

#[derive(Debug, Deserialize)]
struct RdapResponse {
    #[serde(default)]
    events: Vec<RdapEvent>,
}

#[derive(Debug, Deserialize)]
struct RdapEvent {
    #[serde(rename = "eventAction")]
    event_action: String,
    #[serde(rename = "eventDate")]
    event_date: String,
}

/// Registration-age lookup via the RDAP bootstrap service.
pub struct RdapAgeLookup {
    client: reqwest::Client,
    endpoint: String,
}

impl RdapAgeLookup {
    /// Create a lookup against the public RDAP bootstrap endpoint.
    pub fn new(config: &NetworkConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.lookup_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .unwrap_or_default();

        Self {
            client,
            endpoint: "https://rdap.org".to_string(),
        }
    }

    /// Override the RDAP endpoint (primarily for tests).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl DomainAgeLookup for RdapAgeLookup {
    async fn age_days(&self, domain: &str) -> Result<i64> {
        let url = format!("{}/domain/{}", self.endpoint, domain);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::lookup_failed("rdap", e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::lookup_failed(
                "rdap",
                format!("status {}", response.status()),
            ));
        }

        let body: RdapResponse = response
            .json()
            .await
            .map_err(|e| Error::lookup_failed("rdap", e.to_string()))?;

        let registration = body
            .events
            .iter()
            .find(|e| e.event_action == "registration")
            .ok_or_else(|| Error::lookup_failed("rdap", "no registration event".to_string()))?;

        let registered: DateTime<Utc> = registration
            .event_date
            .parse()
            .map_err(|e| Error::lookup_failed("rdap", format!("bad event date: {}", e)))?;

        Ok((Utc::now() - registered).num_days().max(0))
    }
}

// ===== DNS-over-HTTPS record lookup =====

#[derive(Debug, Deserialize)]
struct DohResponse {
    #[serde(rename = "Status")]
    status: u32,
    #[serde(rename = "Answer", default)]
    answer: Vec<DohAnswer>,
}

#[derive(Debug, Deserialize)]
struct DohAnswer {
    #[serde(rename = "type")]
    record_type: u16,
    data: String,
}

/// DNS record type codes used in the JSON answers.
const TYPE_MX: u16 = 15;
const TYPE_TXT: u16 = 16;

/// DNS record lookup via a DNS-over-HTTPS JSON resolver.
pub struct DohDnsLookup {
    client: reqwest::Client,
    endpoint: String,
}

impl DohDnsLookup {
    /// Create a lookup against the Cloudflare DoH endpoint.
    pub fn new(config: &NetworkConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.lookup_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .unwrap_or_default();

        Self {
            client,
            endpoint: "https://cloudflare-dns.com/dns-query".to_string(),
        }
    }

    /// Override the resolver endpoint (primarily for tests).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    async fn query(&self, domain: &str, record_type: &str) -> Result<DohResponse> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("name", domain), ("type", record_type)])
            .header("accept", "application/dns-json")
            .send()
            .await
            .map_err(|e| Error::lookup_failed("dns", e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::lookup_failed(
                "dns",
                format!("status {}", response.status()),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| Error::lookup_failed("dns", e.to_string()))
    }
}

#[async_trait]
impl DnsLookup for DohDnsLookup {
    async fn records(&self, domain: &str) -> Result<DnsRecords> {
        let mx = self.query(domain, "MX").await?;
        let txt = self.query(domain, "TXT").await?;

        let has_mx = mx.status == 0 && mx.answer.iter().any(|a| a.record_type == TYPE_MX);
        let has_spf = txt.status == 0
            && txt
                .answer
                .iter()
                .any(|a| a.record_type == TYPE_TXT && a.data.contains("v=spf1"));

        Ok(DnsRecords { has_mx, has_spf })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_domain_flagged() {
        let reasons = age_signals(12);
        assert_eq!(reasons.len(), 1);
        assert_eq!(reasons[0].id, "new_domain");
        assert_eq!(reasons[0].weight, 45);
        assert_eq!(reasons[0].evidence, "Domain registered 12 days ago");
    }

    #[test]
    fn test_established_domain_mitigates() {
        let reasons = age_signals(2000);
        assert_eq!(reasons.len(), 1);
        assert_eq!(reasons[0].id, "established_domain");
        assert_eq!(reasons[0].weight, -15);
    }

    #[test]
    fn test_middle_aged_domain_is_silent() {
        assert!(age_signals(30).is_empty());
        assert!(age_signals(180).is_empty());
        assert!(age_signals(365).is_empty());
    }

    #[test]
    fn test_missing_records_flagged() {
        let reasons = dns_signals(DnsRecords {
            has_mx: false,
            has_spf: false,
        });
        let ids: Vec<&str> = reasons.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["no_mx_record", "no_spf_record"]);
    }

    #[test]
    fn test_present_records_are_silent() {
        assert!(dns_signals(DnsRecords {
            has_mx: true,
            has_spf: true,
        })
        .is_empty());
    }

    #[test]
    fn test_doh_answer_parsing() {
        let json = r#"{"Status":0,"Answer":[{"name":"example.com","type":15,"TTL":300,"data":"10 mail.example.com."}]}"#;
        let parsed: DohResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.status, 0);
        assert_eq!(parsed.answer.len(), 1);
        assert_eq!(parsed.answer[0].record_type, TYPE_MX);
    }

    #[test]
    fn test_rdap_event_parsing() {
        let json = r#"{"events":[{"eventAction":"registration","eventDate":"1995-08-14T04:00:00Z"}]}"#;
        let parsed: RdapResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.events[0].event_action, "registration");
    }
}
