/// Parameters for creating a catalog product. The id is minted by the
/// catalog actor, never supplied by the caller.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub sku: String,
    pub name: String,
    pub variant: Option<String>,
    pub unit_price_minor: i64,
    pub unit_cost_minor: Option<i64>,
    pub stock_qty: u32,
    pub min_stock: u32,
}

/// Partial update for a product; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub variant: Option<Option<String>>,
    pub unit_price_minor: Option<i64>,
    pub unit_cost_minor: Option<Option<i64>>,
    pub min_stock: Option<u32>,
    pub is_active: Option<bool>,
}
