use super::StockItem;

/// One fetched page of the inventory listing.
///
/// `total_count` is the service-reported size of the whole listing, not of
/// this page. A page is "short" (fewer items than the requested page size)
/// exactly when it is the last one; that short page is the only
/// end-of-list signal the paging protocol carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub items: Vec<StockItem>,
    pub total_count: u32,
}

impl Page {
    pub fn new(items: Vec<StockItem>, total_count: u32) -> Self {
        Self { items, total_count }
    }
}
