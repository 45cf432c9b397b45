//! Executable signal extraction for exe, dll, and msi files.

use crate::core::types::{RiskLevel, Signal, SignalDef};

/// Size below which an executable is suspiciously small.
const SMALL_EXECUTABLE_BYTES: usize = 1024;

const PE_HEADER: SignalDef = SignalDef {
    id: "executable_pe_header",
    title: "Windows executable detected",
    weight: 70,
    why: "Executable files can contain malicious code",
    risk_level: RiskLevel::High,
};

const SMALL_SIZE: SignalDef = SignalDef {
    id: "executable_small_size",
    title: "Unusually small executable",
    weight: 20,
    why: "Very small executables may be suspicious",
    risk_level: RiskLevel::Low,
};

/// Scan executable bytes for the PE header and an implausibly small size.
pub fn scan(data: &[u8]) -> Vec<Signal> {
    let mut signals = Vec::new();

    if data.len() >= 2 && data[0] == 0x4D && data[1] == 0x5A {
        signals.push(PE_HEADER.fire("Found PE header (MZ signature)"));
    }

    if data.len() < SMALL_EXECUTABLE_BYTES {
        signals.push(SMALL_SIZE.fire(format!("File size: {} bytes", data.len())));
    }

    signals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pe_header_and_small_size() {
        // 10-byte MZ stub fires both rules
        let data = b"MZ\x90\x00\x03\x00\x00\x00\x04\x00";
        let signals = scan(data);
        let ids: Vec<&str> = signals.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["executable_pe_header", "executable_small_size"]);
        assert_eq!(signals[0].weight, 70);
        assert_eq!(signals[1].weight, 20);
    }

    #[test]
    fn test_large_pe_only_header() {
        let mut data = vec![0x4D, 0x5A];
        data.extend(std::iter::repeat(0u8).take(4096));
        let signals = scan(&data);
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].id, "executable_pe_header");
    }

    #[test]
    fn test_non_pe_small_file() {
        let signals = scan(b"not an executable");
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].id, "executable_small_size");
    }
}
