use super::{ProductCreate, ProductPatch, StockAction, StockActionResult};
use crate::actor_framework::Entity;
use crate::domain::Product;

impl Entity for Product {
    type Id = String;
    type CreateParams = ProductCreate;
    type Patch = ProductPatch;
    type Action = StockAction;
    type ActionResult = StockActionResult;

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create(id: String, params: ProductCreate) -> Result<Self, String> {
        if params.name.trim().is_empty() {
            return Err("product name must not be empty".to_string());
        }
        if params.unit_price_minor < 0 {
            return Err(format!(
                "unit price must not be negative: {}",
                params.unit_price_minor
            ));
        }
        Ok(Self {
            id,
            sku: params.sku,
            name: params.name,
            variant: params.variant,
            unit_price_minor: params.unit_price_minor,
            unit_cost_minor: params.unit_cost_minor,
            stock_qty: params.stock_qty,
            min_stock: params.min_stock,
            is_active: true,
        })
    }

    fn on_update(&mut self, patch: ProductPatch) -> Result<(), String> {
        if let Some(name) = patch.name {
            if name.trim().is_empty() {
                return Err("product name must not be empty".to_string());
            }
            self.name = name;
        }
        if let Some(variant) = patch.variant {
            self.variant = variant;
        }
        if let Some(price) = patch.unit_price_minor {
            if price < 0 {
                return Err(format!("unit price must not be negative: {price}"));
            }
            self.unit_price_minor = price;
        }
        if let Some(cost) = patch.unit_cost_minor {
            self.unit_cost_minor = cost;
        }
        if let Some(min_stock) = patch.min_stock {
            self.min_stock = min_stock;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        Ok(())
    }

    /// Stock levels never go negative: an adjustment that would drain past
    /// zero is rejected wholesale.
    fn handle_action(&mut self, action: StockAction) -> Result<StockActionResult, String> {
        match action {
            StockAction::CheckStock => Ok(StockActionResult::StockLevel(self.stock_qty)),
            StockAction::AdjustStock(delta) => {
                let adjusted = i64::from(self.stock_qty) + i64::from(delta);
                if adjusted < 0 {
                    return Err(format!(
                        "insufficient stock: {} available, {} requested",
                        self.stock_qty, -delta
                    ));
                }
                self.stock_qty = adjusted as u32;
                Ok(StockActionResult::Adjusted(self.stock_qty))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_create() -> ProductCreate {
        ProductCreate {
            sku: "BP-GOLD-10".to_string(),
            name: "British Propolis Gold".to_string(),
            variant: Some("10ml".to_string()),
            unit_price_minor: 250_000,
            unit_cost_minor: Some(120_000),
            stock_qty: 8,
            min_stock: 2,
        }
    }

    #[test]
    fn creation_validates_name_and_price() {
        let product = Product::from_create("p1".to_string(), base_create()).unwrap();
        assert!(product.is_active);
        assert_eq!(product.stock_qty, 8);

        let mut nameless = base_create();
        nameless.name = "  ".to_string();
        assert!(Product::from_create("p2".to_string(), nameless).is_err());

        let mut negative = base_create();
        negative.unit_price_minor = -1;
        assert!(Product::from_create("p3".to_string(), negative).is_err());
    }

    #[test]
    fn patch_updates_only_supplied_fields() {
        let mut product = Product::from_create("p1".to_string(), base_create()).unwrap();

        product
            .on_update(ProductPatch {
                unit_price_minor: Some(275_000),
                is_active: Some(false),
                ..ProductPatch::default()
            })
            .unwrap();

        assert_eq!(product.unit_price_minor, 275_000);
        assert!(!product.is_active);
        assert_eq!(product.name, "British Propolis Gold");
        assert_eq!(product.variant.as_deref(), Some("10ml"));
    }

    #[test]
    fn adjust_stock_rejects_going_negative() {
        let mut product = Product::from_create("p1".to_string(), base_create()).unwrap();

        assert_eq!(
            product.handle_action(StockAction::AdjustStock(-3)).unwrap(),
            StockActionResult::Adjusted(5)
        );
        assert!(product.handle_action(StockAction::AdjustStock(-6)).is_err());
        assert_eq!(product.stock_qty, 5);
        assert_eq!(
            product.handle_action(StockAction::CheckStock).unwrap(),
            StockActionResult::StockLevel(5)
        );
    }

    #[test]
    fn low_stock_flag_tracks_the_floor() {
        let mut product = Product::from_create("p1".to_string(), base_create()).unwrap();
        assert!(!product.is_low_stock());
        product.handle_action(StockAction::AdjustStock(-6)).unwrap();
        assert!(product.is_low_stock());
    }
}
