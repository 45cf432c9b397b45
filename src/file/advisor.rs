//! Next-step recommendations for file analysis results.

use crate::core::types::{RiskLevel, Signal};

/// Generate the ordered next-step list for a completed analysis.
///
/// Order is fixed: risk-tier advice, then macro advice, then executable
/// advice, then the generic fallback only when nothing else fired. Pure
/// over its inputs, so repeated calls yield identical lists.
pub fn next_steps(signals: &[Signal], risk_level: RiskLevel) -> Vec<String> {
    let mut steps = Vec::new();

    if risk_level == RiskLevel::Critical || risk_level == RiskLevel::High {
        steps.push("Do not open or execute this file".to_string());
        steps.push("Consider quarantining the file".to_string());
        steps.push("Run additional antivirus scans".to_string());
    }

    if signals.iter().any(|s| s.id.contains("macro")) {
        steps.push("Disable macros in Office applications".to_string());
        steps.push("Use Office Protected View".to_string());
    }

    if signals.iter().any(|s| s.id.contains("executable")) {
        steps.push("Verify the source of this executable".to_string());
        steps.push("Check file signature and publisher".to_string());
    }

    if steps.is_empty() {
        steps.push("File appears safe, but always verify the source".to_string());
        steps.push("Keep your antivirus software updated".to_string());
    }

    steps
}
