/// Stock-level operations on a single product, beyond plain CRUD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Applies a signed delta to the stock level. Rejected when the result
    /// would be negative, leaving the level unchanged.
    AdjustStock(i32),
}

/// Results of [`StockAction`]s, variant for variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockActionResult {
    /// Stock level read by `CheckStock`.
    StockLevel(u32),
    /// Stock level after a successful `AdjustStock`.
    Adjusted(u32),
}
