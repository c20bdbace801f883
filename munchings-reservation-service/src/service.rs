use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use munchings_common::sync::record::to_document;
use munchings_common::sync::{Collection, SyncAdapter};
use munchings_common::{PersistenceError, TransitionError, ValidationError};
use thiserror::Error;
use tracing::{info, warn};

use crate::booking::BookingForm;
use crate::models::{Reservation, ReservationAction, ReservationStatus};

#[derive(Error, Debug)]
pub enum BookingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Failed to submit reservation. Please try again.")]
    Persistence(#[from] PersistenceError),
}

#[derive(Clone)]
pub struct ReservationService {
    adapter: Arc<dyn SyncAdapter>,
}

impl ReservationService {
    pub fn new(adapter: Arc<dyn SyncAdapter>) -> Self {
        Self { adapter }
    }

    pub async fn book(&self, form: BookingForm, today: NaiveDate) -> Result<String, BookingError> {
        let reservation = form.into_reservation(today, Utc::now())?;
        let id = self
            .adapter
            .create(Collection::Reservations, to_document(&reservation)?)
            .await
            .inspect_err(|err| warn!(name = %reservation.name, "reservation failed: {}", err))?;
        info!(
            %id,
            date = %reservation.date,
            guests = reservation.guests,
            "reservation requested"
        );
        Ok(id)
    }

    pub async fn transition(
        &self,
        reservation: &Reservation,
        action: ReservationAction,
    ) -> Result<ReservationStatus, TransitionError> {
        self.set_status(reservation, action.target()).await
    }

    /// Writes `target` if the reservation, as last seen, may move there.
    pub async fn set_status(
        &self,
        reservation: &Reservation,
        target: ReservationStatus,
    ) -> Result<ReservationStatus, TransitionError> {
        let status = reservation.status.transition_to(target)?;
        self.adapter
            .update_status(Collection::Reservations, &reservation.id, status.as_str())
            .await?;
        info!(
            id = %reservation.id,
            from = %reservation.status,
            to = %status,
            "reservation status updated"
        );
        Ok(status)
    }
}
