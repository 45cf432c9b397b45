//! Extension-based MIME type mapping.

/// Map a lower-cased extension (with leading dot) to a MIME type string.
///
/// Unknown extensions fall back to `application/octet-stream`.
pub fn mime_for_extension(extension: &str) -> &'static str {
    match extension {
        ".pdf" => "application/pdf",
        ".docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        ".docm" => "application/vnd.ms-word.document.macroEnabled.12",
        ".xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        ".xlsm" => "application/vnd.ms-excel.sheet.macroEnabled.12",
        ".pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        ".zip" => "application/zip",
        ".rar" => "application/vnd.rar",
        ".7z" => "application/x-7z-compressed",
        ".js" => "text/javascript",
        ".py" => "text/x-python",
        ".jar" => "application/java-archive",
        ".apk" => "application/vnd.android.package-archive",
        ".png" => "image/png",
        ".jpg" | ".jpeg" => "image/jpeg",
        ".gif" => "image/gif",
        ".txt" => "text/plain",
        ".exe" | ".dll" => "application/vnd.microsoft.portable-executable",
        ".msi" => "application/x-msi",
        ".deb" => "application/vnd.debian.binary-package",
        ".rpm" => "application/x-rpm",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(mime_for_extension(".pdf"), "application/pdf");
        assert_eq!(mime_for_extension(".jpg"), "image/jpeg");
        assert_eq!(mime_for_extension(".jpeg"), "image/jpeg");
        assert_eq!(
            mime_for_extension(".exe"),
            "application/vnd.microsoft.portable-executable"
        );
    }

    #[test]
    fn test_unknown_extension_falls_back() {
        assert_eq!(mime_for_extension(".weird"), "application/octet-stream");
    }
}
