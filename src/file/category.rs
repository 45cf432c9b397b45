//! File category dispatch by declared extension.

/// Extensions accepted for analysis, lower-cased with leading dot.
pub const ALLOWED_EXTENSIONS: &[&str] = &[
    ".pdf", ".docx", ".xlsx", ".pptx", ".zip", ".rar", ".7z", ".js", ".py", ".jar", ".apk",
    ".png", ".jpg", ".jpeg", ".gif", ".txt", ".exe", ".dll", ".msi", ".deb", ".rpm", ".docm",
    ".xlsm",
];

/// Category a file is routed to for signal extraction.
///
/// Dispatch is strictly by declared extension, not sniffed content: the
/// question being answered is "what does this file claim to be, and does its
/// content look dangerous for that claim".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileCategory {
    /// PDF document
    Pdf,
    /// Office document (modern XML formats, with or without macros)
    Office,
    /// Compressed archive
    Archive,
    /// Script source (JavaScript, Python)
    Script,
    /// Windows executable, library, or installer
    Executable,
    /// Android package
    Apk,
    /// Java archive
    Jar,
    /// Raster image
    Image,
    /// Plain text
    Text,
    /// Linux software package
    Package,
}

impl FileCategory {
    /// Resolve a category from a lower-cased extension with leading dot.
    ///
    /// Returns `None` for extensions outside the allowed set.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            ".pdf" => Some(FileCategory::Pdf),
            ".docx" | ".docm" | ".xlsx" | ".xlsm" | ".pptx" => Some(FileCategory::Office),
            ".zip" | ".rar" | ".7z" => Some(FileCategory::Archive),
            ".js" | ".py" => Some(FileCategory::Script),
            ".exe" | ".dll" | ".msi" => Some(FileCategory::Executable),
            ".apk" => Some(FileCategory::Apk),
            ".jar" => Some(FileCategory::Jar),
            ".png" | ".jpg" | ".jpeg" | ".gif" => Some(FileCategory::Image),
            ".txt" => Some(FileCategory::Text),
            ".deb" | ".rpm" => Some(FileCategory::Package),
            _ => None,
        }
    }

    /// Whether any extraction rules exist for this category.
    ///
    /// Text and package files are accepted but carry no rules; they analyze
    /// to an empty signal list.
    pub fn has_rules(&self) -> bool {
        !matches!(self, FileCategory::Text | FileCategory::Package)
    }
}

impl std::fmt::Display for FileCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileCategory::Pdf => write!(f, "PDF Document"),
            FileCategory::Office => write!(f, "Office Document"),
            FileCategory::Archive => write!(f, "Archive"),
            FileCategory::Script => write!(f, "Script"),
            FileCategory::Executable => write!(f, "Executable"),
            FileCategory::Apk => write!(f, "Android Package"),
            FileCategory::Jar => write!(f, "Java Archive"),
            FileCategory::Image => write!(f, "Image"),
            FileCategory::Text => write!(f, "Plain Text"),
            FileCategory::Package => write!(f, "Software Package"),
        }
    }
}

/// Extract the lower-cased extension (with leading dot) from a declared name.
///
/// Returns an empty string when the name has no dot.
pub fn extension_of(declared_name: &str) -> String {
    match declared_name.rfind('.') {
        Some(idx) => declared_name[idx..].to_lowercase(),
        None => String::new(),
    }
}
