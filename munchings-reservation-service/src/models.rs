use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use munchings_common::sync::{Collection, Record};
use munchings_common::IllegalTransition;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Eq, Copy, Clone, Debug)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum ReservationAction {
    Confirm,
    Cancel,
    Complete,
}

impl ReservationAction {
    pub fn target(&self) -> ReservationStatus {
        match self {
            ReservationAction::Confirm => ReservationStatus::Confirmed,
            ReservationAction::Cancel => ReservationStatus::Cancelled,
            ReservationAction::Complete => ReservationStatus::Completed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReservationAction::Confirm => "Confirm",
            ReservationAction::Cancel => "Cancel",
            ReservationAction::Complete => "Complete",
        }
    }
}

impl ReservationStatus {
    pub const INITIAL: ReservationStatus = ReservationStatus::Pending;

    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Cancelled => "cancelled",
            ReservationStatus::Completed => "completed",
        }
    }

    pub fn can_transition_to(&self, target: ReservationStatus) -> bool {
        use ReservationStatus::*;
        matches!(
            (self, target),
            (Pending, Confirmed) | (Pending, Cancelled) | (Confirmed, Completed) | (Confirmed, Cancelled)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ReservationStatus::Cancelled | ReservationStatus::Completed
        )
    }

    pub fn transition_to(
        &self,
        target: ReservationStatus,
    ) -> Result<ReservationStatus, IllegalTransition> {
        if !self.can_transition_to(target) {
            return Err(IllegalTransition {
                from: self.as_str(),
                to: target.as_str(),
            });
        }
        Ok(target)
    }

    pub fn apply(&self, action: ReservationAction) -> Result<ReservationStatus, IllegalTransition> {
        self.transition_to(action.target())
    }

    pub fn available_actions(&self) -> Vec<ReservationAction> {
        [
            ReservationAction::Confirm,
            ReservationAction::Cancel,
            ReservationAction::Complete,
        ]
        .into_iter()
        .filter(|a| self.can_transition_to(a.target()))
        .collect()
    }
}

impl Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ReservationStatus::Pending),
            "confirmed" => Ok(ReservationStatus::Confirmed),
            "cancelled" => Ok(ReservationStatus::Cancelled),
            "completed" => Ok(ReservationStatus::Completed),
            _ => Err(format!("Unrecognized reservation status `{}`", s)),
        }
    }
}

/// Booking times are stored the way guests pick them, e.g. `7:00 PM`.
pub mod slot_time {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const DISPLAY_FORMAT: &str = "%-I:%M %p";
    const ACCEPTED_FORMATS: [&str; 3] = ["%I:%M %p", "%H:%M", "%H:%M:%S"];

    pub fn format(time: &NaiveTime) -> String {
        time.format(DISPLAY_FORMAT).to_string()
    }

    pub fn parse(value: &str) -> Option<NaiveTime> {
        let value = value.trim();
        ACCEPTED_FORMATS
            .iter()
            .find_map(|f| NaiveTime::parse_from_str(value, f).ok())
    }

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let value = String::deserialize(deserializer)?;
        parse(&value).ok_or_else(|| de::Error::custom(format!("invalid time `{}`", value)))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    #[serde(with = "slot_time")]
    pub time: NaiveTime,
    pub guests: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

impl Record for Reservation {
    const COLLECTION: Collection = Collection::Reservations;

    fn id(&self) -> &str {
        &self.id
    }

    fn sort(records: &mut [Self]) {
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    }
}

/// Ordering for the admin reservation list. Both orders put the latest first.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
pub enum ReservationSort {
    /// Booked date and time.
    ReservationDate,
    #[default]
    CreatedAt,
}

impl FromStr for ReservationSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(ReservationSort::ReservationDate),
            "created" | "createdAt" => Ok(ReservationSort::CreatedAt),
            _ => Err(format!("Unrecognized reservation sort `{}`", s)),
        }
    }
}

/// `None` keeps every reservation ("all").
pub fn filter_by_status(
    reservations: &[Reservation],
    status: Option<ReservationStatus>,
) -> Vec<&Reservation> {
    reservations
        .iter()
        .filter(|r| status.map_or(true, |s| r.status == s))
        .collect()
}

pub fn sort_reservations(reservations: &mut [Reservation], sort: ReservationSort) {
    match sort {
        ReservationSort::ReservationDate => {
            reservations.sort_by(|a, b| (b.date, b.time).cmp(&(a.date, a.time)))
        }
        ReservationSort::CreatedAt => Reservation::sort(reservations),
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewReservation {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    #[serde(with = "slot_time")]
    pub time: NaiveTime,
    pub guests: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_confirm_then_complete() {
        let status = ReservationStatus::INITIAL;
        let status = status.apply(ReservationAction::Confirm).unwrap();
        assert_eq!(status, ReservationStatus::Confirmed);
        let status = status.apply(ReservationAction::Complete).unwrap();
        assert_eq!(status, ReservationStatus::Completed);
        assert!(status.is_terminal());
    }

    #[test]
    fn test_cancel_from_pending_or_confirmed() {
        assert_eq!(
            ReservationStatus::Pending
                .apply(ReservationAction::Cancel)
                .unwrap(),
            ReservationStatus::Cancelled
        );
        assert_eq!(
            ReservationStatus::Confirmed
                .apply(ReservationAction::Cancel)
                .unwrap(),
            ReservationStatus::Cancelled
        );
    }

    #[test]
    fn test_terminal_states_reject_everything() {
        for status in [ReservationStatus::Cancelled, ReservationStatus::Completed] {
            assert!(status.available_actions().is_empty());
            assert!(status.apply(ReservationAction::Confirm).is_err());
        }
        assert!(ReservationStatus::Pending
            .apply(ReservationAction::Complete)
            .is_err());
        assert!(ReservationStatus::Confirmed
            .transition_to(ReservationStatus::Pending)
            .is_err());
    }

    #[test]
    fn test_available_actions() {
        assert_eq!(
            ReservationStatus::Pending.available_actions(),
            vec![ReservationAction::Confirm, ReservationAction::Cancel]
        );
        assert_eq!(
            ReservationStatus::Confirmed.available_actions(),
            vec![ReservationAction::Cancel, ReservationAction::Complete]
        );
    }

    #[test]
    fn test_reads_stored_booking_document() {
        let reservation: Reservation = serde_json::from_value(json!({
            "id": "r1",
            "name": "Emily Johnson",
            "email": "emily@example.com",
            "phone": "(555) 987-6543",
            "date": "2025-06-16",
            "time": "6:30 PM",
            "guests": 2,
            "specialRequests": "Window seat preferred",
            "status": "pending",
            "createdAt": "2025-06-11T09:15:00Z",
        }))
        .unwrap();

        assert_eq!(reservation.time, NaiveTime::from_hms_opt(18, 30, 0).unwrap());
        assert_eq!(reservation.date, NaiveDate::from_ymd_opt(2025, 6, 16).unwrap());
        assert_eq!(reservation.status, ReservationStatus::Pending);

        let value = serde_json::to_value(&reservation).unwrap();
        assert_eq!(value["time"], json!("6:30 PM"));
        assert_eq!(value["specialRequests"], json!("Window seat preferred"));
    }

    fn booked(
        id: &str,
        date: (i32, u32, u32),
        hour: u32,
        status: ReservationStatus,
        created: u32,
    ) -> Reservation {
        Reservation {
            id: id.to_string(),
            name: format!("Guest {}", id),
            email: "guest@example.com".to_string(),
            phone: "(555) 000-0000".to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            guests: 2,
            special_requests: None,
            status,
            created_at: DateTime::<Utc>::from_timestamp(i64::from(created) * 3600, 0).unwrap(),
        }
    }

    fn ids(reservations: &[Reservation]) -> Vec<&str> {
        reservations.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_filter_by_status() {
        let reservations = vec![
            booked("1", (2025, 6, 15), 19, ReservationStatus::Confirmed, 1),
            booked("2", (2025, 6, 16), 18, ReservationStatus::Pending, 2),
            booked("3", (2025, 6, 16), 20, ReservationStatus::Pending, 3),
            booked("4", (2025, 6, 14), 12, ReservationStatus::Cancelled, 4),
        ];
        assert_eq!(filter_by_status(&reservations, None).len(), 4);
        let pending = filter_by_status(&reservations, Some(ReservationStatus::Pending));
        assert_eq!(
            pending.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            vec!["2", "3"]
        );
        assert!(filter_by_status(&reservations, Some(ReservationStatus::Completed)).is_empty());
    }

    #[test]
    fn test_sort_by_booked_slot_or_creation() {
        let mut reservations = vec![
            booked("early-slot-late-booking", (2025, 6, 14), 12, ReservationStatus::Pending, 9),
            booked("late-slot", (2025, 6, 16), 20, ReservationStatus::Pending, 1),
            booked("same-day-earlier", (2025, 6, 16), 18, ReservationStatus::Pending, 2),
        ];

        sort_reservations(&mut reservations, ReservationSort::ReservationDate);
        assert_eq!(
            ids(&reservations),
            vec!["late-slot", "same-day-earlier", "early-slot-late-booking"]
        );

        sort_reservations(&mut reservations, ReservationSort::CreatedAt);
        assert_eq!(
            ids(&reservations),
            vec!["early-slot-late-booking", "same-day-earlier", "late-slot"]
        );
    }

    #[test]
    fn test_sort_names() {
        assert_eq!(
            "date".parse::<ReservationSort>().unwrap(),
            ReservationSort::ReservationDate
        );
        assert_eq!(
            "created".parse::<ReservationSort>().unwrap(),
            ReservationSort::CreatedAt
        );
        assert_eq!(ReservationSort::default(), ReservationSort::CreatedAt);
        assert!("guests".parse::<ReservationSort>().is_err());
    }

    #[test]
    fn test_slot_time_accepts_24_hour_input() {
        assert_eq!(
            slot_time::parse("19:00"),
            NaiveTime::from_hms_opt(19, 0, 0)
        );
        assert_eq!(
            slot_time::parse("11:30 AM"),
            NaiveTime::from_hms_opt(11, 30, 0)
        );
        assert_eq!(slot_time::parse("teatime"), None);
    }
}
