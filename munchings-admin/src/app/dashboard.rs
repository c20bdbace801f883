use munchings_admin::sample::load_sample_data;
use munchings_admin::{format, AdminSession, Config, Notice};
use munchings_auth_service::admin::create_admin;
use munchings_auth_service::{Credentials, IdentityProvider, MemoryIdentityProvider};
use munchings_common::status::describe;
use munchings_reservation_service::models::slot_time;
use munchings_reservation_service::{ReservationAction, ReservationSort, ReservationStatus};
use tracing::info;

use super::{backend_with_menu, noticed};

fn print_dashboard(
    session: &AdminSession,
    status: Option<ReservationStatus>,
    sort: ReservationSort,
) {
    let stats = session.stats();
    println!(
        "Pending reservations: {}  Confirmed reservations: {}  New orders: {}  Completed orders: {}",
        stats.pending_reservations,
        stats.confirmed_reservations,
        stats.new_orders,
        stats.completed_orders
    );

    println!("\nReservations");
    let shown = session.reservations_by(status, sort);
    if shown.is_empty() {
        println!("  No reservations found.");
    }
    for r in shown {
        let status = describe(r.status.as_str());
        println!(
            "  {:<16} {:>2} guests  {} at {}  [{} / {}]",
            r.name,
            r.guests,
            format::date(&r.date),
            slot_time::format(&r.time),
            status.label,
            status.tone.color()
        );
    }

    println!("\nOrders");
    for o in session.orders() {
        let status = describe(o.status.as_str());
        println!(
            "  Table {:<3} {} items  {}  {}  [{} / {}]",
            o.table_number,
            o.item_count(),
            format::money(&o.total),
            format::timestamp(&o.created_at),
            status.label,
            status.tone.color()
        );
    }

    println!("\nMenu: {} items", session.menu().len());
}

async fn advance_all(session: &AdminSession) {
    for r in session.reservations() {
        let Some(action) = r
            .status
            .available_actions()
            .into_iter()
            .find(|a| *a != ReservationAction::Cancel)
        else {
            continue;
        };
        let notice = match session.reservation_action(&r.id, action).await {
            Ok(status) => Notice::success(format!("Reservation for {} is now {}", r.name, status)),
            Err(err) => Notice::from(&err),
        };
        println!("{}", notice);
    }
    for o in session.orders() {
        let Some(action) = o.status.available_actions().into_iter().next() else {
            continue;
        };
        let notice = match session.order_action(&o.id, action).await {
            Ok(status) => Notice::success(format!(
                "{}: table {} is now {}",
                action.label(),
                o.table_number,
                status
            )),
            Err(err) => Notice::from(&err),
        };
        println!("{}", notice);
    }
}

pub async fn main(
    advance: bool,
    status: Option<ReservationStatus>,
    sort: ReservationSort,
) -> anyhow::Result<()> {
    let config = Config::from_env();
    let secret_key = config.secret_key().map_err(noticed)?;
    let password = config.admin_password().map_err(noticed)?;

    let backend = backend_with_menu().await?;
    load_sample_data(backend.as_ref()).await.map_err(noticed)?;

    let identity = MemoryIdentityProvider::new(secret_key);
    create_admin(&identity, backend.as_ref(), &config.admin_email, password)
        .await
        .map_err(noticed)?;
    identity
        .sign_in(&Credentials::new(config.admin_email.as_str(), password))
        .await
        .map_err(noticed)?;

    let session = AdminSession::open(backend.clone(), &identity).map_err(noticed)?;
    println!("{}", Notice::info(format!("Signed in as {}", session.user().email)));
    print_dashboard(&session, status, sort);

    if advance {
        println!();
        advance_all(&session).await;
        println!();
        print_dashboard(&session, status, sort);
    }

    info!(stats = ?session.stats(), "dashboard closed");

    drop(session);
    identity.sign_out().await.map_err(noticed)?;
    Ok(())
}
