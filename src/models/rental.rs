//! Rental model, the immutable catalog snapshots it embeds, and the fee rule

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::AppError;

/// Movie fields captured into a rental at creation time. Never re-derived
/// from the live catalog record, so the price at rental time is preserved.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MovieSnapshot {
    pub id: i32,
    pub title: String,
    pub daily_rental_rate: f64,
}

/// Customer fields captured into a rental at creation time
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomerSnapshot {
    pub id: i32,
    pub name: String,
}

/// Rental ledger entry. Open while `date_returned` and `rental_fee` are both
/// absent, finalized once both are set; no other combination is valid.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Rental {
    pub id: i32,
    pub movie: MovieSnapshot,
    pub customer: CustomerSnapshot,
    pub date_out: DateTime<Utc>,
    pub date_returned: Option<DateTime<Utc>>,
    pub rental_fee: Option<f64>,
}

impl Rental {
    pub fn is_finalized(&self) -> bool {
        self.date_returned.is_some() && self.rental_fee.is_some()
    }

    /// Close the rental: stamp the return time and compute the fee from the
    /// whole days elapsed and the rate snapshotted at rental time.
    pub fn finalize(&mut self, returned_at: DateTime<Utc>) -> f64 {
        let days = elapsed_days(self.date_out, returned_at);
        let fee = days as f64 * self.movie.daily_rental_rate;
        self.date_returned = Some(returned_at);
        self.rental_fee = Some(fee);
        fee
    }
}

/// Whole days elapsed between two instants, at calendar-day granularity:
/// both sides are truncated to the start of their UTC day before
/// differencing. A rental taken at 23:00 and returned at 01:00 the next day
/// counts as 1 day; a same-day return counts as 0 and owes no fee.
pub fn elapsed_days(date_out: DateTime<Utc>, returned_at: DateTime<Utc>) -> i64 {
    returned_at
        .date_naive()
        .signed_duration_since(date_out.date_naive())
        .num_days()
}

/// Internal row structure for the rentals table (snapshots flattened)
#[derive(Debug, Clone, FromRow)]
pub struct RentalRow {
    pub id: i32,
    pub movie_id: i32,
    pub movie_title: String,
    pub movie_daily_rental_rate: f64,
    pub customer_id: i32,
    pub customer_name: String,
    pub date_out: DateTime<Utc>,
    pub date_returned: Option<DateTime<Utc>>,
    pub rental_fee: Option<f64>,
}

impl TryFrom<RentalRow> for Rental {
    type Error = AppError;

    /// A row with exactly one of `date_returned`/`rental_fee` set is
    /// inconsistent state and must not surface as a Rental.
    fn try_from(row: RentalRow) -> Result<Self, Self::Error> {
        if row.date_returned.is_some() != row.rental_fee.is_some() {
            return Err(AppError::BadRequest(format!(
                "Rental {} is partially finalized",
                row.id
            )));
        }
        Ok(Rental {
            id: row.id,
            movie: MovieSnapshot {
                id: row.movie_id,
                title: row.movie_title,
                daily_rental_rate: row.movie_daily_rental_rate,
            },
            customer: CustomerSnapshot {
                id: row.customer_id,
                name: row.customer_name,
            },
            date_out: row.date_out,
            date_returned: row.date_returned,
            rental_fee: row.rental_fee,
        })
    }
}

/// Request body shared by rental creation and return finalization
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RentalRequest {
    #[validate(range(min = 1, message = "customer_id is required"))]
    pub customer_id: i32,
    #[validate(range(min = 1, message = "movie_id is required"))]
    pub movie_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn open_rental(date_out: DateTime<Utc>, rate: f64) -> Rental {
        Rental {
            id: 1,
            movie: MovieSnapshot {
                id: 7,
                title: "Alien".to_string(),
                daily_rental_rate: rate,
            },
            customer: CustomerSnapshot {
                id: 3,
                name: "Ripley".to_string(),
            },
            date_out,
            date_returned: None,
            rental_fee: None,
        }
    }

    #[test]
    fn same_day_return_counts_zero_days() {
        let out = Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap();
        let back = Utc.with_ymd_and_hms(2024, 3, 10, 21, 30, 0).unwrap();
        assert_eq!(elapsed_days(out, back), 0);
    }

    #[test]
    fn midnight_crossing_counts_one_day() {
        let out = Utc.with_ymd_and_hms(2024, 3, 10, 23, 0, 0).unwrap();
        let back = Utc.with_ymd_and_hms(2024, 3, 11, 1, 0, 0).unwrap();
        assert_eq!(elapsed_days(out, back), 1);
    }

    #[test]
    fn seven_day_rental_at_two_per_day_owes_fourteen() {
        let out = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let back = Utc.with_ymd_and_hms(2024, 3, 8, 12, 0, 0).unwrap();
        let mut rental = open_rental(out, 2.0);
        let fee = rental.finalize(back);
        assert_eq!(fee, 14.0);
        assert_eq!(rental.rental_fee, Some(14.0));
        assert_eq!(rental.date_returned, Some(back));
        assert!(rental.is_finalized());
    }

    #[test]
    fn same_day_return_owes_nothing() {
        let out = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let back = Utc.with_ymd_and_hms(2024, 3, 1, 19, 0, 0).unwrap();
        let mut rental = open_rental(out, 2.0);
        assert_eq!(rental.finalize(back), 0.0);
    }

    #[test]
    fn open_rental_is_not_finalized() {
        let out = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        assert!(!open_rental(out, 1.0).is_finalized());
    }

    #[test]
    fn partially_finalized_row_is_rejected() {
        let row = RentalRow {
            id: 9,
            movie_id: 1,
            movie_title: "Alien".to_string(),
            movie_daily_rental_rate: 1.0,
            customer_id: 2,
            customer_name: "Ripley".to_string(),
            date_out: Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap(),
            date_returned: Some(Utc.with_ymd_and_hms(2024, 3, 2, 8, 0, 0).unwrap()),
            rental_fee: None,
        };
        assert!(matches!(
            Rental::try_from(row),
            Err(AppError::BadRequest(_))
        ));
    }
}
