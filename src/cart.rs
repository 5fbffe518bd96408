//! The in-progress sale selection.
//!
//! [`CartLedger`] keeps a quantity per item identity and derives totals on
//! demand. It stays valid when the catalog changes underneath it: an entry
//! whose identity no longer resolves simply prices at zero instead of
//! failing. All operations are total; the ledger has no error channel.

use std::collections::HashMap;

use crate::domain::StockItem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    pub item_id: String,
    pub quantity: u32,
}

/// Snapshot of the cart. Entries never carry a quantity of zero; removing
/// the last unit deletes the entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartState {
    pub entries: HashMap<String, CartEntry>,
    pub sale_mode_active: bool,
}

/// Derived cart totals, priced in minor units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartTotals {
    pub item_count: u64,
    pub price_minor: i64,
}

#[derive(Default)]
pub struct CartLedger {
    state: CartState,
}

impl CartLedger {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn snapshot(&self) -> CartState {
        self.state.clone()
    }

    pub fn is_sale_mode_active(&self) -> bool {
        self.state.sale_mode_active
    }

    /// Flips sale mode. Leaving sale mode clears the cart: the selection is
    /// scoped to a single sale session.
    pub fn toggle_sale_mode(&mut self) {
        if self.state.sale_mode_active {
            self.state.entries.clear();
        }
        self.state.sale_mode_active = !self.state.sale_mode_active;
    }

    /// Adds one unit of `item`, creating the entry at quantity 1.
    pub fn add(&mut self, item: &StockItem) {
        self.state
            .entries
            .entry(item.id.clone())
            .and_modify(|entry| entry.quantity += 1)
            .or_insert_with(|| CartEntry {
                item_id: item.id.clone(),
                quantity: 1,
            });
    }

    /// Removes one unit of `item`; the entry is deleted when it hits zero.
    /// Absent identities are a no-op, not an error.
    pub fn remove(&mut self, item: &StockItem) {
        if let Some(entry) = self.state.entries.get_mut(&item.id) {
            if entry.quantity > 1 {
                entry.quantity -= 1;
            } else {
                self.state.entries.remove(&item.id);
            }
        }
    }

    /// Sets the entry to exactly `quantity`. Zero and negative inputs both
    /// delete the entry.
    pub fn set_quantity(&mut self, item: &StockItem, quantity: i64) {
        if quantity > 0 {
            self.state.entries.insert(
                item.id.clone(),
                CartEntry {
                    item_id: item.id.clone(),
                    quantity: u32::try_from(quantity).unwrap_or(u32::MAX),
                },
            );
        } else {
            self.state.entries.remove(&item.id);
        }
    }

    pub fn total_item_count(&self) -> u64 {
        self.state
            .entries
            .values()
            .map(|entry| u64::from(entry.quantity))
            .sum()
    }

    /// Sums `quantity x unit price` over the entries, resolving prices by
    /// identity against `catalog`. Identities with no match contribute
    /// zero.
    pub fn total_price(&self, catalog: &[StockItem]) -> i64 {
        self.state
            .entries
            .values()
            .map(|entry| {
                catalog
                    .iter()
                    .find(|item| item.id == entry.item_id)
                    .map_or(0, |item| item.unit_price_minor * i64::from(entry.quantity))
            })
            .sum()
    }

    pub fn totals(&self, catalog: &[StockItem]) -> CartTotals {
        CartTotals {
            item_count: self.total_item_count(),
            price_minor: self.total_price(catalog),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: i64) -> StockItem {
        StockItem::new(id, format!("Item {id}"), price)
    }

    #[test]
    fn add_then_remove_restores_prior_state() {
        let mut cart = CartLedger::new();
        let a = item("a", 100);

        let before = cart.snapshot();
        cart.add(&a);
        cart.remove(&a);
        assert_eq!(cart.snapshot(), before);

        cart.add(&a);
        cart.add(&a);
        let with_two = cart.snapshot();
        cart.add(&a);
        cart.remove(&a);
        assert_eq!(cart.snapshot(), with_two);
    }

    #[test]
    fn remove_on_absent_identity_is_a_no_op() {
        let mut cart = CartLedger::new();
        cart.remove(&item("ghost", 5));
        assert!(cart.state().entries.is_empty());
    }

    #[test]
    fn set_quantity_zero_and_negative_both_delete() {
        let mut cart = CartLedger::new();
        let a = item("a", 100);

        cart.set_quantity(&a, 4);
        assert_eq!(cart.state().entries["a"].quantity, 4);

        cart.set_quantity(&a, 0);
        assert!(!cart.state().entries.contains_key("a"));

        cart.set_quantity(&a, 3);
        cart.set_quantity(&a, -5);
        assert!(!cart.state().entries.contains_key("a"));
    }

    #[test]
    fn set_quantity_replaces_rather_than_increments() {
        let mut cart = CartLedger::new();
        let a = item("a", 100);

        cart.add(&a);
        cart.add(&a);
        cart.set_quantity(&a, 7);
        assert_eq!(cart.state().entries["a"].quantity, 7);
    }

    #[test]
    fn total_item_count_survives_interleavings() {
        let mut cart = CartLedger::new();
        let a = item("a", 10);
        let b = item("b", 20);

        cart.add(&a);
        cart.add(&b);
        cart.add(&a);
        cart.set_quantity(&b, 5);
        cart.remove(&a);
        cart.add(&b);

        // a: 1, b: 6
        assert_eq!(cart.total_item_count(), 7);
    }

    #[test]
    fn toggling_sale_mode_off_clears_entries() {
        let mut cart = CartLedger::new();
        let a = item("a", 10);

        cart.toggle_sale_mode();
        assert!(cart.is_sale_mode_active());
        cart.add(&a);

        cart.toggle_sale_mode();
        assert!(!cart.is_sale_mode_active());
        assert!(cart.state().entries.is_empty());

        // Toggling twice restores the flag but not the cart.
        cart.toggle_sale_mode();
        assert!(cart.is_sale_mode_active());
        assert!(cart.state().entries.is_empty());
    }

    #[test]
    fn totals_price_against_the_catalog() {
        let mut cart = CartLedger::new();
        let a = item("a", 10);
        let catalog = vec![a.clone(), item("b", 20)];

        cart.add(&a);
        cart.add(&a);
        cart.remove(&a);

        assert_eq!(cart.state().entries["a"].quantity, 1);
        assert_eq!(cart.total_item_count(), 1);
        assert_eq!(cart.total_price(&catalog), 10);
    }

    #[test]
    fn stale_identity_prices_at_zero() {
        let mut cart = CartLedger::new();
        let gone = item("gone", 999);
        let kept = item("kept", 40);
        let catalog = vec![kept.clone()];

        cart.add(&gone);
        cart.set_quantity(&kept, 2);

        let totals = cart.totals(&catalog);
        assert_eq!(totals.item_count, 3);
        assert_eq!(totals.price_minor, 80);
    }
}
