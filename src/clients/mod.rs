//! Client handles for the actor services.

pub mod macros;

mod catalog_client;
mod inventory_client;

pub use catalog_client::CatalogClient;
pub use inventory_client::InventoryClient;
