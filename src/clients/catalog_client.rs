use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::catalog::{CatalogError, ProductCreate, ProductPatch, StockAction, StockActionResult};
use crate::domain::{Page, Product};
use crate::impl_basic_client;

/// Client for the catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(CatalogClient, Product, CatalogError, product);

impl CatalogClient {
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<String, CatalogError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(CatalogError::from)
    }

    #[instrument(skip(self, patch))]
    #[allow(dead_code)]
    pub async fn update_product(
        &self,
        id: String,
        patch: ProductPatch,
    ) -> Result<Product, CatalogError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(CatalogError::from)
    }

    #[instrument(skip(self))]
    #[allow(dead_code)]
    pub async fn check_stock(&self, id: String) -> Result<u32, CatalogError> {
        debug!("Sending request");
        match self.inner.perform_action(id, StockAction::CheckStock).await {
            Ok(StockActionResult::StockLevel(level)) => Ok(level),
            Ok(other) => Err(CatalogError::ActorCommunication(format!(
                "unexpected result: {other:?}"
            ))),
            Err(e) => Err(CatalogError::from(e)),
        }
    }

    /// Applies a signed stock delta; returns the level after adjustment.
    /// A delta that would drain past zero is rejected by the entity.
    #[instrument(skip(self))]
    pub async fn adjust_stock(&self, id: String, delta: i32) -> Result<u32, CatalogError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, StockAction::AdjustStock(delta))
            .await
        {
            Ok(StockActionResult::Adjusted(level)) => Ok(level),
            Ok(other) => Err(CatalogError::ActorCommunication(format!(
                "unexpected result: {other:?}"
            ))),
            Err(e) => Err(CatalogError::from(e)),
        }
    }

    /// Seeds the catalog, but only when it is empty; returns how many
    /// products were created. Meant for first-launch bootstrapping.
    #[instrument(skip(self, seed), fields(candidates = seed.len()))]
    pub async fn seed_if_empty(&self, seed: Vec<ProductCreate>) -> Result<usize, CatalogError> {
        let existing = self.inner.list().await.map_err(CatalogError::from)?;
        if !existing.is_empty() {
            debug!(existing = existing.len(), "catalog already populated");
            return Ok(0);
        }
        let mut created = 0;
        for params in seed {
            self.inner.create(params).await.map_err(CatalogError::from)?;
            created += 1;
        }
        Ok(created)
    }

    /// One name-ordered page of the active products, 1-based page numbers.
    /// The whole page is derived from a single store snapshot, so an
    /// in-between write cannot tear it.
    #[instrument(skip(self))]
    pub async fn list_page(&self, page_number: u32, page_size: u32) -> Result<Page, CatalogError> {
        debug!("Sending request");
        let mut products = self.inner.list().await.map_err(CatalogError::from)?;
        products.retain(|p| p.is_active);
        products.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));

        let total = products.len() as u32;
        let start = page_number.saturating_sub(1) as usize * page_size as usize;
        let items = products
            .iter()
            .skip(start)
            .take(page_size as usize)
            .map(Product::as_stock_item)
            .collect();
        Ok(Page::new(items, total))
    }
}
