//! Wire format of the remote stock endpoint.
//!
//! The endpoint answers a page query with an envelope carrying a `success`
//! flag, optional `errorDetails` and a `result` block. Decoding is
//! transport-agnostic: whoever owns the HTTP client hands the body here and
//! gets a [`Page`] or a flat [`FetchError`] back.

use serde::{Deserialize, Serialize};

use crate::domain::{Page, StockItem};
use crate::fetch::FetchError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockPageRequest {
    pub page_num: u32,
    pub page_size: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockPageResponse {
    #[serde(default)]
    pub error_details: Option<String>,
    #[serde(default)]
    pub result: Option<StockPageResult>,
    pub success: bool,
    #[serde(default)]
    pub trace_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockPageResult {
    #[serde(default)]
    pub message: String,
    pub page_num: u32,
    pub page_size: u32,
    pub stocks: Vec<WireStockItem>,
    pub total: u32,
}

/// Item as it appears on the wire. Older deployments of the endpoint omit
/// `id` and identify items by name only; in that case the name doubles as
/// the identity so such payloads still decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireStockItem {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub price: i64,
}

impl From<WireStockItem> for StockItem {
    fn from(wire: WireStockItem) -> Self {
        let id = wire.id.unwrap_or_else(|| wire.name.clone());
        StockItem {
            id,
            name: wire.name,
            unit_price_minor: wire.price,
        }
    }
}

/// Decodes one response body into a [`Page`].
///
/// Malformed JSON, a declared failure (`success: false`) and a missing
/// result block all map to the same flat error the paging state surfaces.
pub fn decode_stock_page(body: &str) -> Result<Page, FetchError> {
    let response: StockPageResponse =
        serde_json::from_str(body).map_err(|e| FetchError::new(e.to_string()))?;

    if !response.success {
        let message = response
            .error_details
            .unwrap_or_else(|| "Unknown error".to_string());
        return Err(FetchError::new(message));
    }

    let result = response
        .result
        .ok_or_else(|| FetchError::new("Unknown error"))?;

    let items = result.stocks.into_iter().map(StockItem::from).collect();
    Ok(Page::new(items, result.total))
}
