use bigdecimal::{BigDecimal, Zero};
use munchings_menu_service::MenuItem;

use crate::models::OrderLineItem;
use crate::money::Totals;

pub const MIN_QUANTITY: u32 = 1;

#[derive(Clone, Debug, PartialEq)]
pub struct CartLine {
    pub item: MenuItem,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> BigDecimal {
        &self.item.price * BigDecimal::from(self.quantity)
    }
}

/// The dishes a table has picked but not yet submitted.
#[derive(Clone, Debug, Default)]
pub struct Cart {
    table_number: Option<String>,
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_table(table_number: impl Into<String>) -> Self {
        Self {
            table_number: Some(table_number.into()),
            lines: Vec::new(),
        }
    }

    /// Adds one of `item`, returning the line's new quantity.
    pub fn add_item(&mut self, item: &MenuItem) -> u32 {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item.id == item.id) {
            line.quantity = line.quantity.saturating_add(1);
            return line.quantity;
        }
        self.lines.push(CartLine {
            item: item.clone(),
            quantity: MIN_QUANTITY,
        });
        MIN_QUANTITY
    }

    pub fn update_quantity(&mut self, item_id: &str, quantity: u32) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item.id == item_id) {
            line.quantity = quantity.max(MIN_QUANTITY);
        }
    }

    pub fn remove_item(&mut self, item_id: &str) {
        self.lines.retain(|l| l.item.id != item_id);
    }

    /// Empties the cart. The table binding survives.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn set_table_number(&mut self, table_number: impl Into<String>) {
        self.table_number = Some(table_number.into());
    }

    pub fn table_number(&self) -> Option<&str> {
        self.table_number.as_deref()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn subtotal(&self) -> BigDecimal {
        self.lines
            .iter()
            .fold(BigDecimal::zero(), |acc, line| acc + line.line_total())
    }

    pub fn totals(&self) -> Totals {
        Totals::from_subtotal(self.subtotal())
    }

    pub fn order_lines(&self) -> Vec<OrderLineItem> {
        self.lines
            .iter()
            .map(|line| OrderLineItem {
                menu_item_id: line.item.id.clone(),
                name: line.item.name.clone(),
                price: line.item.price.clone(),
                quantity: line.quantity,
            })
            .collect()
    }
}
