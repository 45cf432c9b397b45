//! Image signal extraction.
//!
//! Only JPEG data (FF D8 marker) is inspected, and only for GPS EXIF
//! fields. Most images carry no EXIF at all, so a parse failure is the
//! normal case and produces no signal.

use crate::core::types::{RiskLevel, Signal, SignalDef};
use exif::{In, Reader, Tag};
use std::io::Cursor;

const GPS_DATA: SignalDef = SignalDef {
    id: "image_gps_data",
    title: "GPS location data found",
    weight: 10,
    why: "Images with GPS data may reveal location information",
    risk_level: RiskLevel::Low,
};

/// Scan image bytes for embedded GPS coordinates.
pub fn scan(data: &[u8]) -> Vec<Signal> {
    let mut signals = Vec::new();

    if data.len() < 2 || data[0] != 0xFF || data[1] != 0xD8 {
        return signals;
    }

    let mut cursor = Cursor::new(data);
    match Reader::new().read_from_container(&mut cursor) {
        Ok(meta) => {
            let has_gps = meta.get_field(Tag::GPSLatitude, In::PRIMARY).is_some()
                || meta.get_field(Tag::GPSLongitude, In::PRIMARY).is_some();
            if has_gps {
                signals.push(GPS_DATA.fire("Found GPS coordinates in EXIF data"));
            }
        }
        Err(e) => {
            // No EXIF segment is expected for many images
            log::debug!("EXIF parse skipped: {}", e);
        }
    }

    signals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_bytes_ignored() {
        let data = b"\x89PNG\r\n\x1a\n";
        assert!(scan(data).is_empty());
    }

    #[test]
    fn test_jpeg_without_exif_is_benign() {
        // JPEG marker followed by garbage: parse fails, no signal, no panic
        let data = b"\xff\xd8\xff\xe0\x00\x10JFIF\x00";
        assert!(scan(data).is_empty());
    }

    #[test]
    fn test_truncated_input() {
        assert!(scan(b"\xff").is_empty());
        assert!(scan(b"").is_empty());
    }
}
