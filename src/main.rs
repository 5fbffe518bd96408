mod actor_framework;
mod app_system;
mod cart;
mod catalog;
mod clients;
mod domain;
mod fetch;
mod inventory;
mod paging;

#[cfg(test)]
mod mock_framework;

use tracing::{error, info, warn, Instrument};

use crate::app_system::{setup_tracing, StockSystem};
use crate::catalog::ProductCreate;
use crate::clients::InventoryClient;
use crate::domain::StockItem;

const PAGE_SIZE: u32 = 2;

fn seed_products() -> Vec<ProductCreate> {
    let product = |sku: &str, name: &str, variant: Option<&str>, price: i64, qty: u32| ProductCreate {
        sku: sku.to_string(),
        name: name.to_string(),
        variant: variant.map(str::to_string),
        unit_price_minor: price,
        unit_cost_minor: Some(price / 2),
        stock_qty: qty,
        min_stock: 2,
    };

    vec![
        product("BP-GOLD-10", "Propolis Gold", Some("10ml"), 250_000, 12),
        product("BP-SILVER-6", "Propolis Silver", Some("6ml"), 150_000, 3),
        product("BP-RAW-100", "Raw Propolis", Some("100g"), 90_000, 8),
        product("BP-CAPS-60", "Propolis Capsules", Some("60 pcs"), 180_000, 15),
        product("BP-DROP-30", "Propolis Drops", Some("30ml"), 120_000, 9),
    ]
}

/// Pages the full listing in, the way the list screen would while the user
/// scrolls: whenever the bottom of the loaded list comes into view, ask
/// for more.
async fn drain_inventory(client: &InventoryClient, refresh: bool) -> Result<Vec<StockItem>, String> {
    let mut rx = client.watch();
    // Mark whatever is already published as seen; the loop below must only
    // react to states produced by this load.
    rx.borrow_and_update();
    client.load(refresh).await.map_err(|e| e.to_string())?;

    loop {
        rx.changed().await.map_err(|e| e.to_string())?;
        let snapshot = rx.borrow_and_update().clone();
        if snapshot.paging.is_loading {
            continue;
        }
        if let Some(err) = &snapshot.paging.error {
            error!(error = %err, "Inventory load failed");
            return Err(err.clone());
        }

        let last_visible = snapshot.paging.items.len().saturating_sub(1);
        if snapshot.paging.near_list_end(last_visible) {
            client.load_more().await.map_err(|e| e.to_string())?;
        } else if !snapshot.paging.has_more {
            info!(
                loaded = snapshot.paging.items.len(),
                total = snapshot.paging.total_count,
                "Inventory fully loaded"
            );
            return Ok(snapshot.paging.items);
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting stock application");

    let system = StockSystem::new(PAGE_SIZE);

    let span = tracing::info_span!("catalog_seeding");
    async {
        let seeded = system
            .catalog_client
            .seed_if_empty(seed_products())
            .await
            .map_err(|e| e.to_string())?;
        info!(seeded, "Catalog ready");
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("inventory_paging");
    let items = drain_inventory(&system.inventory_client, true)
        .instrument(span)
        .await?;

    // Run one sale over the loaded listing.
    let span = tracing::info_span!("sale_session");
    async {
        let client = &system.inventory_client;
        client.toggle_sale_mode().await.map_err(|e| e.to_string())?;

        let gold = items
            .iter()
            .find(|i| i.name == "Propolis Gold")
            .ok_or("Propolis Gold missing from listing")?
            .clone();
        let silver = items
            .iter()
            .find(|i| i.name == "Propolis Silver")
            .ok_or("Propolis Silver missing from listing")?
            .clone();

        client.add_to_cart(gold.clone()).await.map_err(|e| e.to_string())?;
        client.add_to_cart(gold.clone()).await.map_err(|e| e.to_string())?;
        client.add_to_cart(silver.clone()).await.map_err(|e| e.to_string())?;
        client
            .remove_from_cart(gold.clone())
            .await
            .map_err(|e| e.to_string())?;
        client
            .set_quantity(silver.clone(), 2)
            .await
            .map_err(|e| e.to_string())?;

        let totals = client.totals().await.map_err(|e| e.to_string())?;
        info!(
            items = totals.item_count,
            total_minor = totals.price_minor,
            "Cart ready for checkout"
        );

        // Record the sale as stock adjustments against the catalog.
        let snapshot = client.snapshot().await.map_err(|e| e.to_string())?;
        for entry in snapshot.cart.entries.values() {
            let remaining = system
                .catalog_client
                .adjust_stock(entry.item_id.clone(), -(entry.quantity as i32))
                .await
                .map_err(|e| e.to_string())?;
            info!(item_id = %entry.item_id, sold = entry.quantity, remaining, "Stock adjusted");

            let product = system
                .catalog_client
                .get_product(entry.item_id.clone())
                .await
                .map_err(|e| e.to_string())?
                .ok_or_else(|| format!("product disappeared: {}", entry.item_id))?;
            if product.is_low_stock() {
                warn!(sku = %product.sku, stock = product.stock_qty, "Product below restock floor");
            }
        }

        // Closing the sale clears the cart.
        client.toggle_sale_mode().await.map_err(|e| e.to_string())?;
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    // New stock arrives; a refresh picks it up from page 1.
    let span = tracing::info_span!("stock_intake");
    async {
        system
            .catalog_client
            .create_product(ProductCreate {
                sku: "BP-SPRAY-20".to_string(),
                name: "Propolis Spray".to_string(),
                variant: Some("20ml".to_string()),
                unit_price_minor: 135_000,
                unit_cost_minor: Some(60_000),
                stock_qty: 10,
                min_stock: 2,
            })
            .await
            .map_err(|e| e.to_string())?;

        let refreshed = drain_inventory(&system.inventory_client, true).await?;
        info!(listed = refreshed.len(), "Listing refreshed after intake");
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
