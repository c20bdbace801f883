pub mod booking;
pub mod models;
pub mod service;

pub use booking::{time_slots, BookingForm, MAX_GUESTS, MIN_GUESTS};
pub use models::{
    filter_by_status, sort_reservations, NewReservation, Reservation, ReservationAction,
    ReservationSort, ReservationStatus,
};
pub use service::{BookingError, ReservationService};
