//! Core type definitions used throughout SafeSight.

use serde::{Deserialize, Serialize};

/// Qualitative risk tier of a signal or an overall file verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    /// Low risk - nothing beyond routine caution
    Low,
    /// Medium risk - suspicious traits present
    Medium,
    /// High risk - likely dangerous
    High,
    /// Critical risk - strong indicators of danger
    Critical,
}

impl RiskLevel {
    /// Map a normalized risk score (0-100) onto a level.
    ///
    /// Thresholds, evaluated high to low: 80 / 60 / 30.
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 80 => RiskLevel::Critical,
            s if s >= 60 => RiskLevel::High,
            s if s >= 30 => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }

    /// Get string representation matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Discrete outcome of a URL analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    /// Signals point away from phishing
    LikelyGenuine,
    /// Signals point toward phishing or abuse
    Suspicious,
    /// Not enough evidence either way
    Unknown,
}

impl Classification {
    /// Get string representation matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::LikelyGenuine => "LIKELY_GENUINE",
            Classification::Suspicious => "SUSPICIOUS",
            Classification::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Static definition of a heuristic rule.
///
/// Rules are data: the id, title, weight, and rationale never vary between
/// firings. Only the evidence string is computed at detection time.
#[derive(Debug, Clone, Copy)]
pub struct SignalDef {
    /// Stable string key for the rule
    pub id: &'static str,
    /// Short human label
    pub title: &'static str,
    /// Signed contribution to the aggregate score; negative mitigates
    pub weight: i32,
    /// Static rationale tied to the rule
    pub why: &'static str,
    /// Qualitative tier, independent of the numeric weight
    pub risk_level: RiskLevel,
}

impl SignalDef {
    /// Fire the rule with the observed evidence, producing an immutable Signal.
    pub fn fire(&self, evidence: impl Into<String>) -> Signal {
        Signal {
            id: self.id.to_string(),
            title: self.title.to_string(),
            weight: self.weight,
            why: self.why.to_string(),
            evidence: evidence.into(),
            risk_level: self.risk_level,
        }
    }
}

/// One fired heuristic rule.
///
/// Immutable once created; never mutated after being appended to a result.
/// The URL domain calls these "reasons" but the shape is identical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    /// Stable rule key (e.g. `executable_pe_header`)
    pub id: String,
    /// Short human label
    pub title: String,
    /// Signed weight; positive increases suspicion, negative mitigates
    pub weight: i32,
    /// Static rationale for why this rule matters
    pub why: String,
    /// What was actually observed (may embed counts, substrings, sizes)
    pub evidence: String,
    /// Qualitative risk tier for this signal
    #[serde(rename = "riskLevel")]
    pub risk_level: RiskLevel,
}

/// Hash digest triple computed over the full byte stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHashes {
    pub md5: String,
    pub sha1: String,
    pub sha256: String,
}

/// Metadata extracted from an analyzed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileMetadata {
    /// Declared file name as given by the caller
    #[serde(rename = "originalName")]
    pub original_name: String,
    /// File size in bytes
    pub size: u64,
    /// MIME type mapped from the extension
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    /// Lower-cased extension including the leading dot
    pub extension: String,
    /// MD5 / SHA1 / SHA256 digests
    pub hashes: FileHashes,
}

/// Complete result of a file analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileAnalysisResult {
    /// Normalized risk score, 0-100
    #[serde(rename = "riskScore")]
    pub risk_score: u8,
    /// Discrete risk level derived from the score
    #[serde(rename = "riskLevel")]
    pub risk_level: RiskLevel,
    /// Fired signals in extractor order
    pub signals: Vec<Signal>,
    /// File metadata including the hash triple
    pub metadata: FileMetadata,
    /// Ordered recommended next steps
    #[serde(rename = "nextSteps")]
    pub next_steps: Vec<String>,
}

/// Metadata extracted from a normalized URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlMetadata {
    /// Host part of the URL
    pub domain: String,
    /// Last dot-label with leading dot (e.g. `.com`)
    pub tld: String,
    /// Number of labels before the registrable domain, clamped to >= 0
    #[serde(rename = "subdomainCount")]
    pub subdomain_count: u32,
    /// URL path
    pub path: String,
    /// Names of the query parameters that survived normalization
    #[serde(rename = "queryParams")]
    pub query_params: Vec<String>,
    /// Scheme with trailing colon (e.g. `https:`)
    pub protocol: String,
}

/// Complete result of a URL analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlAnalysisResult {
    /// URL after scheme normalization and tracking-parameter stripping
    #[serde(rename = "normalizedUrl")]
    pub normalized_url: String,
    /// Host part of the normalized URL
    pub domain: String,
    /// Discrete classification outcome
    pub classification: Classification,
    /// How much evidence backs the classification, 0-100
    pub confidence: u8,
    /// Normalized suspicion score, 0-100
    pub score: u8,
    /// Fired reasons in check order
    pub reasons: Vec<Signal>,
    /// URL metadata
    pub metadata: UrlMetadata,
    /// Ordered safety tips
    pub tips: Vec<String>,
}
