use anyhow::bail;
use munchings_admin::{format, Notice};
use munchings_common::status::describe;
use munchings_common::sync::LiveRecords;
use munchings_menu_service::MenuItem;
use munchings_order_service::{Cart, Order, OrderService};
use tracing::debug;

use super::{backend_with_menu, noticed};

pub async fn main(table: String, items: Vec<String>, note: Option<String>) -> anyhow::Result<()> {
    let backend = backend_with_menu().await?;
    let menu = LiveRecords::<MenuItem>::subscribe(backend.as_ref()).records();
    let orders = LiveRecords::<Order>::subscribe(backend.as_ref());

    let mut cart = Cart::for_table(table);
    for wanted in &items {
        let Some(item) = menu
            .iter()
            .find(|i| i.name.eq_ignore_ascii_case(wanted.trim()))
        else {
            bail!("`{}` is not on the menu", wanted);
        };
        let quantity = cart.add_item(item);
        println!("{}", Notice::added_to_cart(&item.name, quantity));
    }
    debug!(lines = cart.lines().len(), count = cart.item_count(), "cart ready");

    let totals = cart.totals();
    for line in cart.lines() {
        println!(
            "  {} x{}  {}",
            line.item.name,
            line.quantity,
            format::money(&line.line_total())
        );
    }
    println!("  Subtotal {}", format::money(&totals.subtotal));
    println!("  Tax (8%) {}", format::money(&totals.tax));
    println!("  Total    {}", format::money(&totals.total));

    let service = OrderService::new(backend.clone());
    let id = service
        .place_order(&mut cart, note)
        .await
        .map_err(noticed)?;

    if let Some(order) = orders.find(&id) {
        let status = describe(order.status.as_str());
        println!(
            "{}",
            Notice::success(format!(
                "Order {} for table {} placed ({})",
                order.id, order.table_number, status.label
            ))
        );
    }
    Ok(())
}
