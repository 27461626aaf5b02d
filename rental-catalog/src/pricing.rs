use chrono::{Days, NaiveDate};
use serde::Serialize;

/// Longest rental a single selection may book.
pub const MAX_RENTAL_DAYS: u32 = 365;

/// Inclusive rental window: a one-day rental starts and ends on the same date.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RentalPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days: u32,
}

/// Flat daily-rate pricing. No demand, season or bundle adjustments.
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingEngine;

impl PricingEngine {
    pub fn new() -> Self {
        Self
    }

    /// `daily_price * days`, saturating instead of overflowing.
    pub fn subtotal(&self, daily_price: i64, days: u32) -> i64 {
        daily_price.saturating_mul(i64::from(days))
    }

    /// Last rental day, `start + days - 1`. Zero days is treated like one.
    pub fn end_date(&self, start: NaiveDate, days: u32) -> NaiveDate {
        let offset = u64::from(days.saturating_sub(1));
        start.checked_add_days(Days::new(offset)).unwrap_or(NaiveDate::MAX)
    }

    pub fn period(&self, start: NaiveDate, days: u32) -> RentalPeriod {
        RentalPeriod {
            start,
            end: self.end_date(start, days),
            days,
        }
    }

    pub fn total<I>(&self, subtotals: I) -> i64
    where
        I: IntoIterator<Item = i64>,
    {
        subtotals.into_iter().fold(0, i64::saturating_add)
    }
}
