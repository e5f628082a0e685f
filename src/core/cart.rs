use crate::core::catalog::MenuCatalog;
use crate::core::render;
use crate::domain::model::CartLineItem;

/// Ordered collection of cart entries. Duplicates of the same dish are
/// independent entries; insertion order is preserved.
#[derive(Debug, Default, Clone)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    fn push(&mut self, item: CartLineItem) {
        self.items.push(item);
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

/// Per-session cart operations over a shared catalog. One `CartLedger` per
/// active session keeps the single-writer rule enforced by `&mut self`
/// instead of a process-wide lock.
#[derive(Debug)]
pub struct CartLedger<'a> {
    catalog: &'a MenuCatalog,
    cart: Cart,
}

impl<'a> CartLedger<'a> {
    pub fn new(catalog: &'a MenuCatalog) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
        }
    }

    /// Adds the named dish to the cart and returns the updated cart summary.
    ///
    /// Failure paths return a fixed message and leave the cart untouched:
    /// no selection when `dish_name` is `None` or empty, not-found when the
    /// name is not in the catalog.
    pub fn add_to_cart(&mut self, dish_name: Option<&str>) -> String {
        let name = match dish_name {
            Some(name) if !name.is_empty() => name,
            _ => return render::NO_SELECTION_MSG.to_string(),
        };

        let dish = match self.catalog.find_by_name(name) {
            Some(dish) => dish,
            None => return render::DISH_NOT_FOUND_MSG.to_string(),
        };

        self.cart.push(CartLineItem::from_dish(dish));
        tracing::debug!("Added '{}' to cart ({} entries)", name, self.cart.len());

        render::cart_summary(self.cart.items())
    }

    /// Empties the cart unconditionally. Clearing an already-empty cart is a
    /// no-op that still succeeds.
    pub fn clear_cart(&mut self) -> String {
        self.cart.clear();
        render::EMPTY_CART_MSG.to_string()
    }

    /// Current cart rendering without mutation, for display on demand.
    pub fn summary(&self) -> String {
        if self.cart.is_empty() {
            render::EMPTY_CART_MSG.to_string()
        } else {
            render::cart_summary(self.cart.items())
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }
}
