pub mod file;
pub mod session;

pub use file::{is_json_file, FileKey, FileSource, IncomingFile, JSON_MIME};
pub use session::{AddFilesReport, ParsedFile, SessionError, UploadPhase, UploadSession};
