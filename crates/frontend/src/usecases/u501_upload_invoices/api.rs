use contracts::shared::error::UploadError;
use gloo_net::http::Request;
use serde_json::Value;

use crate::shared::api_utils::api_url;

/// Submit the raw records of every file as one JSON array
pub async fn upload_invoices(records: &[Value]) -> Result<(), UploadError> {
    let response = Request::post(&api_url("/api/invoices/upload"))
        .json(&records)
        .map_err(|e| UploadError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| UploadError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(UploadError::Status { status, body });
    }

    Ok(())
}
