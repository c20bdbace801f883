use chrono::{Local, NaiveTime};
use munchings_admin::{format, Notice};
use munchings_common::sync::MemoryBackend;
use munchings_reservation_service::models::slot_time;
use munchings_reservation_service::{time_slots, BookingForm, ReservationService};
use std::sync::Arc;

use super::noticed;

pub fn parse_time(value: &str) -> Result<NaiveTime, String> {
    slot_time::parse(value).ok_or_else(|| {
        let slots = time_slots()
            .iter()
            .map(slot_time::format)
            .collect::<Vec<_>>();
        format!("expected one of: {}", slots.join(", "))
    })
}

pub async fn main(form: BookingForm) -> anyhow::Result<()> {
    let backend = Arc::new(MemoryBackend::new());
    let service = ReservationService::new(backend);

    let today = Local::now().date_naive();
    let summary = (form.name.clone(), form.email.clone(), form.date, form.time, form.guests);
    service.book(form, today).await.map_err(noticed)?;

    let (name, email, date, time, guests) = summary;
    println!("{}", Notice::success("Reservation Confirmed!"));
    println!(
        "Thank you for booking a table with us, {}. We've sent a confirmation email to {}.",
        name.trim(),
        email.trim()
    );
    if let (Some(date), Some(time)) = (date, time) {
        println!("  Date:   {}", format::long_date(&date));
        println!("  Time:   {}", slot_time::format(&time));
    }
    println!("  Guests: {}", guests);
    Ok(())
}
