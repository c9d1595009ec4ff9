//! State of one upload-dialog session
//!
//! `Empty → Parsing → Ready → Uploading → Closed`, falling back from
//! `Uploading` to `Ready` when the upload fails so the user can retry.
//! The file set is frozen while a batch is being parsed or sent.

use super::file::{FileKey, FileSource, IncomingFile};
use crate::domain::a002_invoice::{parse_invoice_file, PreviewRow};
use crate::shared::error::{ParseError, UploadError, ValidationError};
use crate::shared::i18n::MessageKey;
use serde_json::Value;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadPhase {
    #[default]
    Empty,
    Parsing,
    Ready,
    Uploading,
    Closed,
}

/// The single error line shown inside the dialog
#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    Parse(ParseError),
    Validation(ValidationError),
    Upload(UploadError),
}

impl SessionError {
    pub fn message_key(&self) -> MessageKey {
        match self {
            SessionError::Parse(e) => e.message_key(),
            SessionError::Validation(e) => e.message_key(),
            SessionError::Upload(e) => e.message_key(),
        }
    }
}

/// One accepted file with its preview
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFile {
    pub key: FileKey,
    pub rows: Vec<PreviewRow>,
    pub records: Vec<Value>,
    pub expanded: bool,
}

impl ParsedFile {
    pub fn name(&self) -> &str {
        &self.key.name
    }
}

/// What happened to each file of one `add_files` call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddFilesReport {
    pub added: Vec<FileKey>,
    /// Already in the session
    pub duplicates: Vec<FileKey>,
    /// Dropped files that are not JSON
    pub ignored: Vec<FileKey>,
    pub failed: Vec<ParseError>,
    /// Arrived while an upload was in flight
    pub rejected: Vec<FileKey>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadSession {
    files: Vec<ParsedFile>,
    error: Option<SessionError>,
    phase: UploadPhase,
}

impl UploadSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[ParsedFile] {
        &self.files
    }

    pub fn error(&self) -> Option<&SessionError> {
        self.error.as_ref()
    }

    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, UploadPhase::Parsing | UploadPhase::Uploading)
    }

    pub fn contains_key(&self, key: &FileKey) -> bool {
        self.files.iter().any(|f| &f.key == key)
    }

    /// Whether a file is worth reading before `add_files`
    pub fn accepts(&self, source: FileSource, key: &FileKey, mime_type: &str) -> bool {
        let json_ok = match source {
            FileSource::Picker => true,
            FileSource::Drop => super::file::is_json_file(&key.name, mime_type),
        };
        json_ok && !self.is_busy() && !self.contains_key(key)
    }

    /// Returns `false` (and changes nothing) while another batch is in flight
    pub fn begin_parsing(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.phase = UploadPhase::Parsing;
        self.error = None;
        true
    }

    /// Parse and add files in order.
    ///
    /// Duplicates are skipped silently. A file that fails to parse is left out
    /// and recorded as the session error; the remaining files are still added.
    /// Nothing is added while an upload is in flight.
    pub fn add_files(&mut self, source: FileSource, files: Vec<IncomingFile>) -> AddFilesReport {
        let mut report = AddFilesReport::default();
        if self.phase == UploadPhase::Uploading {
            report.rejected = files.into_iter().map(|f| f.key).collect();
            return report;
        }
        let mut seen: HashSet<FileKey> = self.files.iter().map(|f| f.key.clone()).collect();

        for file in files {
            if source == FileSource::Drop && !file.is_json() {
                report.ignored.push(file.key);
                continue;
            }
            if seen.contains(&file.key) {
                report.duplicates.push(file.key);
                continue;
            }

            match parse_invoice_file(file.name(), &file.content) {
                Ok(parsed) => {
                    seen.insert(file.key.clone());
                    report.added.push(file.key.clone());
                    self.files.push(ParsedFile {
                        key: file.key,
                        rows: parsed.rows,
                        records: parsed.records,
                        expanded: false,
                    });
                }
                Err(e) => {
                    self.error = Some(SessionError::Parse(e.clone()));
                    report.failed.push(e);
                }
            }
        }

        self.phase = self.settled_phase();
        report
    }

    pub fn toggle_expanded(&mut self, key: &FileKey) {
        if let Some(file) = self.files.iter_mut().find(|f| &f.key == key) {
            file.expanded = !file.expanded;
        }
    }

    pub fn remove_file(&mut self, key: &FileKey) -> bool {
        if self.phase == UploadPhase::Uploading {
            return false;
        }
        let before = self.files.len();
        self.files.retain(|f| &f.key != key);
        if !self.is_busy() {
            self.phase = self.settled_phase();
        }
        self.files.len() != before
    }

    /// Raw records of every file in arrival order, or a validation error when
    /// there is nothing to send
    pub fn begin_upload(&mut self) -> Result<Vec<Value>, ValidationError> {
        if self.is_busy() {
            return Err(ValidationError::Busy);
        }
        if self.files.is_empty() {
            self.error = Some(SessionError::Validation(ValidationError::NoFiles));
            return Err(ValidationError::NoFiles);
        }

        self.phase = UploadPhase::Uploading;
        self.error = None;
        Ok(self
            .files
            .iter()
            .flat_map(|f| f.records.iter().cloned())
            .collect())
    }

    /// Returns `true` when the dialog should close
    pub fn finish_upload(&mut self, result: Result<(), UploadError>) -> bool {
        match result {
            Ok(()) => {
                self.close();
                true
            }
            Err(e) => {
                self.error = Some(SessionError::Upload(e));
                self.phase = self.settled_phase();
                false
            }
        }
    }

    /// Discard everything
    pub fn close(&mut self) {
        self.files.clear();
        self.error = None;
        self.phase = UploadPhase::Closed;
    }

    fn settled_phase(&self) -> UploadPhase {
        if self.files.is_empty() {
            UploadPhase::Empty
        } else {
            UploadPhase::Ready
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(id: &str) -> Value {
        json!({
            "id": id,
            "shipment": {
                "id": format!("shp-{id}"),
                "createdAt": "2025-10-09T08:00:00Z",
                "trackingNumber": format!("TRK-{id}"),
                "company": { "id": "c-1", "name": "Acme" },
                "provider": "DPD",
                "mode": "EXPORT",
                "originCountry": "CZ",
                "destinationCountry": "SK"
            },
            "invoicedPrice": 10,
            "invoicedWeight": 1
        })
    }

    fn file(name: &str, size: u64, content: String) -> IncomingFile {
        IncomingFile {
            key: FileKey::new(name, size, 1_700_000_000_000),
            mime_type: "application/json".to_string(),
            content,
        }
    }

    fn batch(ids: &[&str]) -> String {
        Value::Array(ids.iter().map(|id| record(id)).collect()).to_string()
    }

    #[test]
    fn test_duplicate_file_is_noop() {
        let mut session = UploadSession::new();
        session.add_files(FileSource::Picker, vec![file("a.json", 10, batch(&["1"]))]);
        assert_eq!(session.files().len(), 1);

        let report =
            session.add_files(FileSource::Picker, vec![file("a.json", 10, batch(&["1"]))]);
        assert_eq!(session.files().len(), 1);
        assert_eq!(report.duplicates.len(), 1);
        assert!(session.error().is_none());

        // same name, different size is a different file
        session.add_files(FileSource::Picker, vec![file("a.json", 11, batch(&["2"]))]);
        assert_eq!(session.files().len(), 2);
    }

    #[test]
    fn test_duplicates_within_one_batch() {
        let mut session = UploadSession::new();
        let report = session.add_files(
            FileSource::Drop,
            vec![
                file("a.json", 10, batch(&["1"])),
                file("a.json", 10, batch(&["1"])),
            ],
        );
        assert_eq!(report.added.len(), 1);
        assert_eq!(report.duplicates.len(), 1);
        assert_eq!(session.files().len(), 1);
    }

    #[test]
    fn test_valid_and_malformed_file() {
        let mut session = UploadSession::new();
        session.begin_parsing();
        assert!(session.is_busy());

        let report = session.add_files(
            FileSource::Picker,
            vec![
                file("good.json", 100, batch(&["1", "2", "3"])),
                file("bad.json", 5, "{ oops".to_string()),
            ],
        );

        assert_eq!(report.added.len(), 1);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(session.files().len(), 1);
        assert_eq!(session.files()[0].rows.len(), 3);
        assert_eq!(session.phase(), UploadPhase::Ready);
        let err = session.error().unwrap();
        assert_eq!(err.message_key(), MessageKey::InvalidJson);

        let records = session.begin_upload().unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["id"], "1");
        assert_eq!(records[2]["id"], "3");
    }

    #[test]
    fn test_parse_failure_does_not_block_later_files() {
        let mut session = UploadSession::new();
        session.add_files(
            FileSource::Picker,
            vec![
                file("bad.json", 5, "[1, 2".to_string()),
                file("good.json", 100, batch(&["1"])),
            ],
        );
        assert_eq!(session.files().len(), 1);
        assert_eq!(session.files()[0].name(), "good.json");
        assert!(session.error().is_some());
    }

    #[test]
    fn test_drop_ignores_non_json() {
        let mut session = UploadSession::new();
        let mut csv = file("invoices.csv", 10, "a,b".to_string());
        csv.mime_type = "text/csv".to_string();

        let report = session.add_files(FileSource::Drop, vec![csv.clone()]);
        assert_eq!(report.ignored.len(), 1);
        assert!(session.is_empty());
        assert_eq!(session.phase(), UploadPhase::Empty);
        assert!(!session.accepts(FileSource::Drop, &csv.key, &csv.mime_type));
        assert!(session.accepts(FileSource::Picker, &csv.key, &csv.mime_type));
    }

    #[test]
    fn test_confirm_without_files() {
        let mut session = UploadSession::new();
        assert_eq!(session.begin_upload(), Err(ValidationError::NoFiles));
        assert_eq!(
            session.error(),
            Some(&SessionError::Validation(ValidationError::NoFiles))
        );
        assert_eq!(session.phase(), UploadPhase::Empty);
    }

    #[test]
    fn test_records_concatenate_in_arrival_order() {
        let mut session = UploadSession::new();
        session.add_files(FileSource::Picker, vec![file("a.json", 1, batch(&["a1", "a2"]))]);
        session.add_files(FileSource::Picker, vec![file("b.json", 2, record("b1").to_string())]);

        let ids: Vec<_> = session
            .begin_upload()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, ["a1", "a2", "b1"]);
        assert_eq!(session.phase(), UploadPhase::Uploading);
    }

    #[test]
    fn test_upload_failure_keeps_files() {
        let mut session = UploadSession::new();
        session.add_files(FileSource::Picker, vec![file("a.json", 1, batch(&["1"]))]);
        session.begin_upload().unwrap();

        let closed = session.finish_upload(Err(UploadError::Status {
            status: 500,
            body: "boom".to_string(),
        }));
        assert!(!closed);
        assert_eq!(session.files().len(), 1);
        assert_eq!(session.phase(), UploadPhase::Ready);
        assert_eq!(session.error().unwrap().message_key(), MessageKey::ErrorUpload);
        assert!(!session.is_busy());
    }

    #[test]
    fn test_upload_success_clears_session() {
        let mut session = UploadSession::new();
        session.add_files(FileSource::Picker, vec![file("a.json", 1, batch(&["1"]))]);
        session.begin_upload().unwrap();

        assert!(session.finish_upload(Ok(())));
        assert!(session.is_empty());
        assert!(session.error().is_none());
        assert_eq!(session.phase(), UploadPhase::Closed);
    }

    #[test]
    fn test_toggle_and_remove() {
        let mut session = UploadSession::new();
        session.add_files(
            FileSource::Picker,
            vec![
                file("a.json", 1, batch(&["1"])),
                file("b.json", 2, batch(&["2"])),
            ],
        );
        let a = session.files()[0].key.clone();

        session.toggle_expanded(&a);
        assert!(session.files()[0].expanded);
        assert!(!session.files()[1].expanded);
        session.toggle_expanded(&a);
        assert!(!session.files()[0].expanded);

        assert!(session.remove_file(&a));
        assert!(!session.remove_file(&a));
        assert_eq!(session.files().len(), 1);
        assert_eq!(session.files()[0].name(), "b.json");

        let b = session.files()[0].key.clone();
        session.remove_file(&b);
        assert_eq!(session.phase(), UploadPhase::Empty);
    }

    #[test]
    fn test_files_frozen_while_uploading() {
        let mut session = UploadSession::new();
        session.add_files(FileSource::Picker, vec![file("a.json", 1, batch(&["a1"]))]);
        let sent = session.begin_upload().unwrap();
        assert_eq!(sent.len(), 1);

        let late = file("b.json", 2, batch(&["b1"]));
        assert!(!session.accepts(FileSource::Drop, &late.key, &late.mime_type));
        assert!(!session.begin_parsing());

        let report = session.add_files(FileSource::Drop, vec![late.clone()]);
        assert_eq!(report.rejected, vec![late.key.clone()]);
        assert!(report.added.is_empty());
        assert_eq!(session.files().len(), 1);
        assert_eq!(session.phase(), UploadPhase::Uploading);

        let a = session.files()[0].key.clone();
        assert!(!session.remove_file(&a));

        // a second confirm cannot start an overlapping upload
        assert_eq!(session.begin_upload(), Err(ValidationError::Busy));
        assert!(session.error().is_none());

        assert!(session.finish_upload(Ok(())));
        assert_eq!(session.phase(), UploadPhase::Closed);
    }

    #[test]
    fn test_second_batch_waits_for_parsing() {
        let mut session = UploadSession::new();
        assert!(session.begin_parsing());
        let key = FileKey::new("b.json", 2, 0);
        assert!(!session.accepts(FileSource::Picker, &key, "application/json"));
        assert!(!session.begin_parsing());

        session.add_files(FileSource::Picker, vec![file("a.json", 1, batch(&["1"]))]);
        assert_eq!(session.phase(), UploadPhase::Ready);
        assert!(session.accepts(FileSource::Picker, &key, "application/json"));
    }
}
