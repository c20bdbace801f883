use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use munchings_order_service::money::round_money;

/// `June 15, 2025`
pub fn date(date: &NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// `Sunday, June 15, 2025`
pub fn long_date(date: &NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

pub fn timestamp(at: &DateTime<Utc>) -> String {
    at.format("%B %-d, %Y, %I:%M %p").to_string()
}

pub fn money(amount: &BigDecimal) -> String {
    format!("${}", round_money(amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_formats() {
        let day = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(date(&day), "June 15, 2025");
        assert_eq!(long_date(&day), "Sunday, June 15, 2025");

        let at = Utc.with_ymd_and_hms(2025, 6, 15, 18, 30, 0).unwrap();
        assert_eq!(timestamp(&at), "June 15, 2025, 06:30 PM");

        assert_eq!(money(&BigDecimal::new(3299.into(), 2)), "$32.99");
        assert_eq!(money(&BigDecimal::from(5)), "$5.00");
    }
}
