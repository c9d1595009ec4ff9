use contracts::domain::a001_shipment::{
    ShipmentHistoryResponse, ShipmentListQuery, ShipmentListResponse,
};
use contracts::shared::error::FetchError;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::shared::api_utils::{api_url, api_url_with_query};

/// Fetch one page of shipments
pub async fn fetch_shipments(
    query: &ShipmentListQuery,
) -> Result<ShipmentListResponse, FetchError> {
    let qs = query
        .to_query_string()
        .map_err(|e| FetchError::Encode(e.to_string()))?;
    get_json(&api_url_with_query("/api/shipments", &qs)).await
}

/// Fetch every invoice uploaded for a shipment
pub async fn fetch_shipment_history(id: &str) -> Result<ShipmentHistoryResponse, FetchError> {
    let path = format!("/api/shipments/{}/history", urlencoding::encode(id));
    get_json(&api_url(&path)).await
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}
