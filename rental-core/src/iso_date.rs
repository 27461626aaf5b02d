//! Serde adapter for optional `YYYY-MM-DD` dates.
//!
//! A missing date is written as `""`. Empty strings and `null` read back as
//! `None`, which is how the browser storefront stored an unset date input.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(d) => serializer.serialize_str(&crate::format::format_iso_date(*d)),
        None => serializer.serialize_str(""),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
