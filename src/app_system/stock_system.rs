use std::sync::Arc;

use tracing::{error, info};
use uuid::Uuid;

use crate::actor_framework::ResourceActor;
use crate::catalog::CatalogFetcher;
use crate::clients::{CatalogClient, InventoryClient};
use crate::domain::Product;
use crate::inventory::InventoryService;

const ACTOR_BUFFER_SIZE: usize = 32;

/// The assembled application: catalog actor plus inventory actor, wired so
/// the inventory pages out of the local catalog.
///
/// Responsible for starting the actors, injecting their dependencies and
/// shutting everything down in order.
pub struct StockSystem {
    pub catalog_client: CatalogClient,
    pub inventory_client: InventoryClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StockSystem {
    pub fn new(page_size: u32) -> Self {
        // Catalog actor with server-style generated ids.
        let next_product_id = || Uuid::new_v4().to_string();
        let (catalog_actor, catalog_resource_client) =
            ResourceActor::<Product>::new(ACTOR_BUFFER_SIZE, next_product_id);
        let catalog_client = CatalogClient::new(catalog_resource_client);
        let catalog_handle = tokio::spawn(catalog_actor.run());

        // Inventory actor paging out of the catalog.
        let fetcher = Arc::new(CatalogFetcher::new(catalog_client.clone()));
        let (inventory_service, inventory_client) =
            InventoryService::new(ACTOR_BUFFER_SIZE, fetcher, page_size);
        let inventory_handle = tokio::spawn(inventory_service.run());

        Self {
            catalog_client,
            inventory_client,
            handles: vec![inventory_handle, catalog_handle],
        }
    }

    /// Stops the inventory actor first (it holds a catalog client through
    /// its fetcher), then lets the catalog actor drain and exit once every
    /// client handle is gone.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        self.inventory_client
            .shutdown()
            .await
            .map_err(|e| e.to_string())?;

        drop(self.inventory_client);
        drop(self.catalog_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {e:?}"));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
