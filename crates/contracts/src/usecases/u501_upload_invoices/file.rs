use serde::{Deserialize, Serialize};
use std::fmt;

pub const JSON_MIME: &str = "application/json";

/// Identity of an uploaded file within one dialog session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileKey {
    pub name: String,
    pub size: u64,
    /// Milliseconds since the Unix epoch
    pub last_modified: i64,
}

impl FileKey {
    pub fn new(name: impl Into<String>, size: u64, last_modified: i64) -> Self {
        Self {
            name: name.into(),
            size,
            last_modified,
        }
    }
}

impl fmt::Display for FileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.name, self.last_modified, self.size)
    }
}

/// How the files reached the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSource {
    /// File picker; its `accept` attribute already asks for JSON
    Picker,
    /// Drag and drop onto the drop zone; anything can arrive
    Drop,
}

/// A file whose content has been read, ready to be parsed
#[derive(Debug, Clone, PartialEq)]
pub struct IncomingFile {
    pub key: FileKey,
    pub mime_type: String,
    pub content: String,
}

impl IncomingFile {
    pub fn name(&self) -> &str {
        &self.key.name
    }

    pub fn is_json(&self) -> bool {
        is_json_file(&self.key.name, &self.mime_type)
    }
}

/// JSON by media type or by `.json` extension
pub fn is_json_file(name: &str, mime_type: &str) -> bool {
    mime_type == JSON_MIME || name.to_lowercase().ends_with(".json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_json_file() {
        assert!(is_json_file("batch.json", ""));
        assert!(is_json_file("BATCH.JSON", "application/octet-stream"));
        assert!(is_json_file("export", "application/json"));
        assert!(!is_json_file("invoices.csv", "text/csv"));
        assert!(!is_json_file("notes.json.txt", "text/plain"));
    }

    #[test]
    fn test_key_display() {
        let key = FileKey::new("a.json", 120, 1_700_000_000_000);
        assert_eq!(key.to_string(), "a.json-1700000000000-120");
    }
}
