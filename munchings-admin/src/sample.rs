use bigdecimal::{BigDecimal, Zero};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use munchings_common::sync::record::to_document;
use munchings_common::sync::{Record, SyncAdapter};
use munchings_common::PersistenceError;
use munchings_order_service::{Order, OrderLineItem, OrderStatus, Totals};
use munchings_reservation_service::{Reservation, ReservationStatus};
use serde::Serialize;
use tracing::info;

fn created(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .unwrap_or_default()
}

fn on(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at(h: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, min, 0).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn reservation(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    date: NaiveDate,
    time: NaiveTime,
    guests: u32,
    special_requests: Option<&str>,
    status: ReservationStatus,
    created_at: DateTime<Utc>,
) -> Reservation {
    Reservation {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        date,
        time,
        guests,
        special_requests: special_requests.map(str::to_string),
        status,
        created_at,
    }
}

fn line(menu_item_id: &str, name: &str, cents: i64, quantity: u32) -> OrderLineItem {
    OrderLineItem {
        menu_item_id: menu_item_id.to_string(),
        name: name.to_string(),
        price: BigDecimal::new(cents.into(), 2),
        quantity,
    }
}

fn order(
    id: &str,
    table_number: &str,
    items: Vec<OrderLineItem>,
    special_instructions: Option<&str>,
    status: OrderStatus,
    created_at: DateTime<Utc>,
) -> Order {
    let subtotal = items.iter().fold(BigDecimal::zero(), |acc, i| {
        acc + &i.price * BigDecimal::from(i.quantity)
    });
    let totals = Totals::from_subtotal(subtotal);
    Order {
        id: id.to_string(),
        table_number: table_number.to_string(),
        items,
        special_instructions: special_instructions.map(str::to_string),
        subtotal: totals.subtotal,
        tax: totals.tax,
        total: totals.total,
        status,
        created_at,
    }
}

pub fn sample_reservations() -> Vec<Reservation> {
    vec![
        reservation(
            "1",
            "John Smith",
            "john@example.com",
            "(555) 123-4567",
            on(2025, 6, 15),
            at(19, 0),
            4,
            None,
            ReservationStatus::Confirmed,
            created(2025, 6, 10, 14, 30),
        ),
        reservation(
            "2",
            "Emily Johnson",
            "emily@example.com",
            "(555) 987-6543",
            on(2025, 6, 16),
            at(18, 30),
            2,
            Some("Window seat preferred"),
            ReservationStatus::Pending,
            created(2025, 6, 11, 9, 15),
        ),
        reservation(
            "3",
            "Michael Brown",
            "michael@example.com",
            "(555) 456-7890",
            on(2025, 6, 16),
            at(20, 0),
            6,
            Some("Celebrating a birthday"),
            ReservationStatus::Pending,
            created(2025, 6, 11, 10, 45),
        ),
    ]
}

pub fn sample_orders() -> Vec<Order> {
    vec![
        order(
            "1",
            "12",
            vec![
                line("1", "Prime Ribeye Steak", 3299, 2),
                line("4", "Caprese Salad", 1499, 1),
            ],
            None,
            OrderStatus::Preparing,
            created(2025, 6, 15, 18, 30),
        ),
        order(
            "2",
            "8",
            vec![
                line("2", "Seafood Linguine", 2899, 1),
                line("6", "Crispy Calamari", 1699, 1),
                line("8", "Tiramisu", 1199, 2),
            ],
            Some("No garlic in the linguine please"),
            OrderStatus::New,
            created(2025, 6, 15, 19, 15),
        ),
    ]
}

/// Stores a record as a fresh document; the backend assigns a new id.
async fn store<T: Record + Serialize>(
    adapter: &dyn SyncAdapter,
    record: &T,
) -> Result<String, PersistenceError> {
    let mut document = to_document(record)?;
    document.remove("id");
    adapter.create(T::COLLECTION, document).await
}

/// Writes the demo reservations and orders through the adapter.
pub async fn load_sample_data(adapter: &dyn SyncAdapter) -> Result<usize, PersistenceError> {
    let mut count = 0;
    for reservation in sample_reservations() {
        store(adapter, &reservation).await?;
        count += 1;
    }
    for order in sample_orders() {
        store(adapter, &order).await?;
        count += 1;
    }
    info!(count, "sample dashboard data loaded");
    Ok(count)
}
