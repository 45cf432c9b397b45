//! URL analysis: normalization, lexical heuristics, network checks,
//! scoring, classification, and tips.

pub mod advisor;
pub mod content;
pub mod heuristics;
pub mod lookups;
pub mod metadata;
pub mod scoring;

pub use lookups::{DnsLookup, DnsRecords, DohDnsLookup, DomainAgeLookup, RdapAgeLookup};

use crate::core::config::NetworkConfig;
use crate::core::error::{Error, Result};
use crate::core::types::{Signal, UrlAnalysisResult};
use crate::url::content::ContentChecker;
use crate::url::heuristics::{transport_signals, LexicalChecker};
use std::time::Duration;

/// URL analysis orchestrator.
///
/// Checks run in a fixed order (lexical, transport, domain age, DNS,
/// content) so reason ordering is deterministic. Each network step owns a
/// bounded timeout and degrades to "no reason" on failure or expiry; the
/// only caller-facing failure is an unparseable URL.
pub struct UrlAnalyzer {
    lexical: LexicalChecker,
    content: ContentChecker,
    age_lookup: Option<Box<dyn DomainAgeLookup>>,
    dns_lookup: Option<Box<dyn DnsLookup>>,
    lookup_timeout: Duration,
    fetch_content: bool,
}

impl Default for UrlAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlAnalyzer {
    /// Create an analyzer with default network settings.
    pub fn new() -> Self {
        Self::with_config(&NetworkConfig::default())
    }

    /// Create an analyzer with the given network settings.
    pub fn with_config(config: &NetworkConfig) -> Self {
        Self {
            lexical: LexicalChecker::new(),
            content: ContentChecker::new(config),
            age_lookup: Some(Box::new(RdapAgeLookup::new(config))),
            dns_lookup: Some(Box::new(DohDnsLookup::new(config))),
            lookup_timeout: Duration::from_secs(config.lookup_timeout_secs),
            fetch_content: true,
        }
    }

    /// Create an analyzer that runs only the lexical and transport checks.
    ///
    /// No network traffic is generated; results are fully deterministic.
    pub fn offline(config: &NetworkConfig) -> Self {
        Self {
            lexical: LexicalChecker::new(),
            content: ContentChecker::new(config),
            age_lookup: None,
            dns_lookup: None,
            lookup_timeout: Duration::from_secs(config.lookup_timeout_secs),
            fetch_content: false,
        }
    }

    /// Replace the domain-age collaborator.
    pub fn with_age_lookup(mut self, lookup: Box<dyn DomainAgeLookup>) -> Self {
        self.age_lookup = Some(lookup);
        self
    }

    /// Replace the DNS collaborator.
    pub fn with_dns_lookup(mut self, lookup: Box<dyn DnsLookup>) -> Self {
        self.dns_lookup = Some(lookup);
        self
    }

    /// Disable the page content fetch.
    pub fn without_fetch(mut self) -> Self {
        self.fetch_content = false;
        self
    }

    /// Analyze a URL string.
    pub async fn analyze_url(&self, input: &str) -> Result<UrlAnalysisResult> {
        let url = metadata::normalize(input)?;
        let meta = metadata::extract(&url);
        let domain = meta.domain.clone();

        let mut reasons: Vec<Signal> = Vec::new();
        reasons.extend(self.lexical.check(&meta));
        reasons.extend(transport_signals(url.scheme()));

        if let Some(lookup) = &self.age_lookup {
            match tokio::time::timeout(self.lookup_timeout, lookup.age_days(&domain)).await {
                Ok(Ok(age)) => reasons.extend(lookups::age_signals(age)),
                Ok(Err(e)) => log::debug!("Domain age lookup skipped for {}: {}", domain, e),
                Err(_) => {
                    let err = Error::lookup_timeout("domain-age", self.lookup_timeout.as_secs());
                    log::debug!("{} for {}", err, domain);
                }
            }
        }

        if let Some(lookup) = &self.dns_lookup {
            match tokio::time::timeout(self.lookup_timeout, lookup.records(&domain)).await {
                Ok(Ok(records)) => reasons.extend(lookups::dns_signals(records)),
                Ok(Err(e)) => log::debug!("DNS lookup skipped for {}: {}", domain, e),
                Err(_) => {
                    let err = Error::lookup_timeout("dns", self.lookup_timeout.as_secs());
                    log::debug!("{} for {}", err, domain);
                }
            }
        }

        if self.fetch_content {
            reasons.extend(self.content.check(&url).await);
        }

        let score = scoring::score(&reasons);
        let confidence = scoring::confidence(&reasons);
        let classification = scoring::classify(score, confidence);
        let tips = advisor::tips(&reasons, classification);

        log::debug!(
            "URL {} scored {} ({}) with {} reason(s)",
            url,
            score,
            classification,
            reasons.len()
        );

        Ok(UrlAnalysisResult {
            normalized_url: url.to_string(),
            domain,
            classification,
            confidence,
            score,
            reasons,
            metadata: meta,
            tips,
        })
    }
}
