use async_trait::async_trait;

use crate::clients::CatalogClient;
use crate::domain::Page;
use crate::fetch::{FetchError, PageFetcher};

/// [`PageFetcher`] backed by the local catalog actor, so the inventory
/// screen can page without any remote endpoint. Catalog failures collapse
/// to the flat fetch error like any other fetch origin.
pub struct CatalogFetcher {
    client: CatalogClient,
}

impl CatalogFetcher {
    pub fn new(client: CatalogClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for CatalogFetcher {
    async fn fetch_page(&self, page_number: u32, page_size: u32) -> Result<Page, FetchError> {
        self.client
            .list_page(page_number, page_size)
            .await
            .map_err(|e| FetchError::new(e.to_string()))
    }
}
