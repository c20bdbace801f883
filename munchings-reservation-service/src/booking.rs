use chrono::{DateTime, Months, NaiveDate, NaiveTime, Timelike, Utc};
use munchings_common::{ValidationError, Validator};

use crate::models::{NewReservation, ReservationStatus};

pub const MIN_GUESTS: u32 = 1;
/// Larger parties have to call the restaurant.
pub const MAX_GUESTS: u32 = 10;
pub const BOOKING_HORIZON_MONTHS: u32 = 6;

const FIRST_SEATING_HOUR: u32 = 11;
const LAST_SEATING_HOUR: u32 = 22;

/// Half-hour seatings from 11:00 AM to 10:30 PM.
pub fn time_slots() -> Vec<NaiveTime> {
    (FIRST_SEATING_HOUR..=LAST_SEATING_HOUR)
        .flat_map(|hour| [0, 30].into_iter().map(move |minute| (hour, minute)))
        .filter_map(|(hour, minute)| NaiveTime::from_hms_opt(hour, minute, 0))
        .collect()
}

fn is_slot(time: &NaiveTime) -> bool {
    (FIRST_SEATING_HOUR..=LAST_SEATING_HOUR).contains(&time.hour())
        && (time.minute() == 0 || time.minute() == 30)
        && time.second() == 0
}

fn looks_like_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty() && !host.is_empty() && !tld.is_empty() && !domain.contains('@')
}

/// The table booking form as a guest fills it in.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub guests: u32,
    pub special_requests: String,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            date: None,
            time: None,
            guests: 2,
            special_requests: String::new(),
        }
    }
}

impl BookingForm {
    pub fn validate(&self, today: NaiveDate) -> Result<(), ValidationError> {
        let mut validator = Validator::new();
        validator
            .require(&self.name, "name", "Name")
            .require(&self.email, "email", "Email")
            .require(&self.phone, "phone", "Phone");
        if !self.email.trim().is_empty() {
            validator.check(
                looks_like_email(&self.email),
                "email",
                "Please enter a valid email address",
            );
        }

        match self.date {
            None => {
                validator.check(false, "date", "Date is required");
            }
            Some(date) => {
                let horizon = today.checked_add_months(Months::new(BOOKING_HORIZON_MONTHS));
                validator
                    .check(date >= today, "date", "Date cannot be in the past")
                    .check(
                        horizon.map_or(false, |h| date <= h),
                        "date",
                        "Reservations can be made up to 6 months in advance",
                    );
            }
        }

        match self.time {
            None => {
                validator.check(false, "time", "Time is required");
            }
            Some(time) => {
                validator.check(
                    is_slot(&time),
                    "time",
                    "Please choose a time between 11:00 AM and 10:30 PM",
                );
            }
        }

        validator
            .check(
                (MIN_GUESTS..=MAX_GUESTS).contains(&self.guests),
                "guests",
                format!(
                    "Party size must be between {} and {}. For larger parties please call us.",
                    MIN_GUESTS, MAX_GUESTS
                ),
            )
            .finish()
    }

    /// Validates the form and builds the pending reservation to store.
    pub fn into_reservation(
        self,
        today: NaiveDate,
        created_at: DateTime<Utc>,
    ) -> Result<NewReservation, ValidationError> {
        self.validate(today)?;
        let (Some(date), Some(time)) = (self.date, self.time) else {
            return Err(ValidationError::single("date", "Date is required"));
        };
        let special_requests = Some(self.special_requests.trim().to_string()).filter(|s| !s.is_empty());
        Ok(NewReservation {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            date,
            time,
            guests: self.guests,
            special_requests,
            status: ReservationStatus::INITIAL,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    fn form() -> BookingForm {
        BookingForm {
            name: "John Smith".to_string(),
            email: "john@example.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 15),
            time: NaiveTime::from_hms_opt(19, 0, 0),
            guests: 4,
            special_requests: String::new(),
        }
    }

    #[test]
    fn test_time_slots_cover_service_hours() {
        let slots = time_slots();
        assert_eq!(slots.len(), 24);
        assert_eq!(slots.first(), NaiveTime::from_hms_opt(11, 0, 0).as_ref());
        assert_eq!(slots.last(), NaiveTime::from_hms_opt(22, 30, 0).as_ref());
        assert!(slots.iter().all(is_slot));
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(form().validate(today()).is_ok());
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let err = BookingForm::default().validate(today()).unwrap_err();
        for field in ["name", "email", "phone", "date", "time"] {
            assert!(err.field(field).is_some(), "missing error for {}", field);
        }
        assert!(err.field("guests").is_none());
    }

    #[test]
    fn test_email_shape() {
        for email in ["john", "john@", "@example.com", "john@example", "jo hn@example.com"] {
            let form = BookingForm {
                email: email.to_string(),
                ..form()
            };
            let err = form.validate(today()).unwrap_err();
            assert_eq!(
                err.field("email").unwrap().message,
                "Please enter a valid email address"
            );
        }
    }

    #[test]
    fn test_date_window() {
        let past = BookingForm {
            date: NaiveDate::from_ymd_opt(2025, 6, 9),
            ..form()
        };
        assert!(past.validate(today()).unwrap_err().field("date").is_some());

        let same_day = BookingForm {
            date: Some(today()),
            ..form()
        };
        assert!(same_day.validate(today()).is_ok());

        let edge = BookingForm {
            date: NaiveDate::from_ymd_opt(2025, 12, 10),
            ..form()
        };
        assert!(edge.validate(today()).is_ok());

        let too_far = BookingForm {
            date: NaiveDate::from_ymd_opt(2025, 12, 11),
            ..form()
        };
        assert!(too_far.validate(today()).unwrap_err().field("date").is_some());
    }

    #[test]
    fn test_time_must_be_a_seating() {
        for time in [
            NaiveTime::from_hms_opt(10, 30, 0),
            NaiveTime::from_hms_opt(19, 15, 0),
            NaiveTime::from_hms_opt(23, 0, 0),
        ] {
            let form = BookingForm { time, ..form() };
            assert!(form.validate(today()).unwrap_err().field("time").is_some());
        }
    }

    #[test]
    fn test_party_size_bounds() {
        for guests in [0, 11] {
            let form = BookingForm { guests, ..form() };
            assert!(form.validate(today()).unwrap_err().field("guests").is_some());
        }
        for guests in [1, 10] {
            let form = BookingForm { guests, ..form() };
            assert!(form.validate(today()).is_ok());
        }
    }

    #[test]
    fn test_into_reservation_starts_pending_and_trims() {
        let form = BookingForm {
            name: "  Emily Johnson ".to_string(),
            special_requests: "   ".to_string(),
            ..form()
        };
        let reservation = form.into_reservation(today(), Utc::now()).unwrap();
        assert_eq!(reservation.status, ReservationStatus::Pending);
        assert_eq!(reservation.name, "Emily Johnson");
        assert_eq!(reservation.special_requests, None);
    }
}
