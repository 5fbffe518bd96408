/// A sellable item as seen by the inventory list and the sale cart.
///
/// Prices are carried in integer minor units (e.g. cents, rupiah) so that
/// cart totals never touch floating point. The `id` is the identity used
/// for cart merges and catalog lookups; display names are not identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockItem {
    pub id: String,
    pub name: String,
    pub unit_price_minor: i64,
}

impl StockItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, unit_price_minor: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price_minor,
        }
    }
}
