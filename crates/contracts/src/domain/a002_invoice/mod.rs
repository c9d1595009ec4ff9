pub mod preview;
pub mod record;

pub use preview::{parse_invoice_file, ParsedInvoices, PreviewRow};
pub use record::{Field, InvoiceRecordDraft, InvoiceUploadRecord, UploadCompany, UploadShipment};
