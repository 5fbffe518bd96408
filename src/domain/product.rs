use super::StockItem;

/// A catalog product with stock bookkeeping fields.
///
/// This is the richer record managed by the catalog service; the inventory
/// list and cart only see its [`StockItem`] projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: String,
    pub sku: String,
    pub name: String,
    #[allow(dead_code)]
    pub variant: Option<String>,
    pub unit_price_minor: i64,
    #[allow(dead_code)]
    pub unit_cost_minor: Option<i64>,
    pub stock_qty: u32,
    pub min_stock: u32,
    pub is_active: bool,
}

impl Product {
    /// Projects the product onto the lightweight item shape used by the
    /// paging list and the cart.
    pub fn as_stock_item(&self) -> StockItem {
        StockItem {
            id: self.id.clone(),
            name: self.name.clone(),
            unit_price_minor: self.unit_price_minor,
        }
    }

    /// True when the stock level has fallen to or below the restock floor.
    pub fn is_low_stock(&self) -> bool {
        self.stock_qty <= self.min_stock
    }
}
