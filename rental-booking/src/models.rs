use chrono::NaiveDate;
use rental_catalog::{CatalogEntry, CatalogId, PricingEngine};
use serde::{Deserialize, Serialize};

/// One chosen vehicle plus its rental window.
///
/// `name` and `price` are snapshots of the catalog entry so stored bookings
/// render without a catalog lookup. Field aliases accept records written by
/// the browser storefront (`type`, `duration`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    #[serde(alias = "type")]
    pub catalog_id: CatalogId,
    pub name: String,
    pub price: i64,
    #[serde(with = "rental_core::iso_date", default)]
    pub start_date: Option<NaiveDate>,
    #[serde(alias = "duration")]
    pub duration_days: u32,
    pub subtotal: i64,
}

impl Selection {
    pub fn new(entry: &CatalogEntry, start_date: Option<NaiveDate>, duration_days: u32) -> Self {
        Self {
            catalog_id: entry.id,
            name: entry.display_name.to_string(),
            price: entry.daily_price,
            start_date,
            duration_days,
            subtotal: PricingEngine::new().subtotal(entry.daily_price, duration_days),
        }
    }
}

/// A persisted booking.
///
/// `createdAtISO`/`createdAtDisplay` were `timestamp`/`createdAt` in the
/// storefront's records; the old names are still read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub customer_name: String,
    pub cars: Vec<Selection>,
    pub total: i64,
    #[serde(rename = "createdAtISO", alias = "timestamp")]
    pub created_at_iso: String,
    #[serde(rename = "createdAtDisplay", alias = "createdAt")]
    pub created_at_display: String,
}
