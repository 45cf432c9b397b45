//! Risk scoring for file analysis.
//!
//! The score is the average weight of the fired signals: the weight sum is
//! divided by `count * 100` and rescaled to 0-100. A lone high-weight
//! signal therefore scores higher than a crowd of weak ones. Rounding
//! happens before the cap at 100.

use crate::core::types::{RiskLevel, Signal};

/// Compute the normalized risk score (0-100) for a set of fired signals.
pub fn risk_score(signals: &[Signal]) -> u8 {
    if signals.is_empty() {
        return 0;
    }

    let total: i32 = signals.iter().map(|s| s.weight).sum();
    let max_possible = (signals.len() * 100) as f64;
    let normalized = (f64::from(total) / max_possible) * 100.0;

    normalized.round().clamp(0.0, 100.0) as u8
}

/// Map a risk score onto the discrete risk level.
pub fn risk_level(score: u8) -> RiskLevel {
    RiskLevel::from_score(score)
}
