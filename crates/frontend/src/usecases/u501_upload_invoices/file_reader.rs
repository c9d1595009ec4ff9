use contracts::usecases::u501_upload_invoices::{FileKey, IncomingFile};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileList};

pub fn files_from_list(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

pub fn file_key(file: &File) -> FileKey {
    FileKey::new(file.name(), file.size() as u64, file.last_modified() as i64)
}

/// Read the whole file as UTF-8 text
pub async fn read_file(file: &File) -> Result<IncomingFile, String> {
    let text = JsFuture::from(file.text())
        .await
        .map_err(|e| format!("Failed to read {}: {:?}", file.name(), e))?;
    let content = text
        .as_string()
        .ok_or_else(|| format!("Failed to read {}: not text", file.name()))?;

    Ok(IncomingFile {
        key: file_key(file),
        mime_type: file.type_(),
        content,
    })
}
