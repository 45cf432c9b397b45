//! Scoring, confidence, and classification for URL analysis.
//!
//! The score is the signed weight sum over the absolute weight sum, scaled
//! to 0-100: mitigating reasons pull it down, and a URL with only negative
//! evidence clamps to 0. Confidence grows with the number and strength of
//! reasons, independent of their sign.

use crate::core::types::{Classification, Signal};

/// Absolute weight at or above which a reason counts as strong.
const STRONG_WEIGHT: i32 = 40;

/// Compute the normalized suspicion score (0-100).
pub fn score(reasons: &[Signal]) -> u8 {
    let total: i32 = reasons.iter().map(|r| r.weight).sum();
    let total_abs: i32 = reasons.iter().map(|r| r.weight.abs()).sum();

    if total_abs == 0 {
        return 0;
    }

    let normalized = (f64::from(total) / f64::from(total_abs)) * 100.0;
    normalized.round().clamp(0.0, 100.0) as u8
}

/// Compute the confidence (0-100) backing the classification.
///
/// With zero reasons this is a flat 50: an unknown midpoint, not zero.
pub fn confidence(reasons: &[Signal]) -> u8 {
    if reasons.is_empty() {
        return 50;
    }

    let strong = reasons
        .iter()
        .filter(|r| r.weight.abs() >= STRONG_WEIGHT)
        .count();
    let raw = 50 + strong * 10 + reasons.len() * 5;
    raw.min(95) as u8
}

/// Map score and confidence onto the discrete classification.
///
/// Low confidence overrides the score entirely; once confidence clears 30,
/// the 31-59 score band stays UNKNOWN.
pub fn classify(score: u8, confidence: u8) -> Classification {
    if confidence < 30 {
        return Classification::Unknown;
    }

    if score <= 30 {
        Classification::LikelyGenuine
    } else if score >= 60 {
        Classification::Suspicious
    } else {
        Classification::Unknown
    }
}
