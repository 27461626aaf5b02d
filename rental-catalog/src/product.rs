use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Vehicles offered by the storefront
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CatalogId {
    Avanza,
    Innova,
    Hrv,
    Sigra,
}

impl CatalogId {
    pub const ALL: [CatalogId; 4] = [
        CatalogId::Avanza,
        CatalogId::Innova,
        CatalogId::Hrv,
        CatalogId::Sigra,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogId::Avanza => "avanza",
            CatalogId::Innova => "innova",
            CatalogId::Hrv => "hrv",
            CatalogId::Sigra => "sigra",
        }
    }
}

impl fmt::Display for CatalogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for CatalogId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        CatalogId::ALL
            .into_iter()
            .find(|id| id.as_str() == wanted)
            .ok_or_else(|| CatalogError::UnknownVehicle(s.to_string()))
    }
}

/// A rentable vehicle and its daily rate in whole Rupiah
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: CatalogId,
    pub display_name: &'static str,
    pub daily_price: i64,
}

const ENTRIES: [CatalogEntry; 4] = [
    CatalogEntry { id: CatalogId::Avanza, display_name: "Toyota Avanza", daily_price: 500_000 },
    CatalogEntry { id: CatalogId::Innova, display_name: "Toyota Kijang Innova", daily_price: 700_000 },
    CatalogEntry { id: CatalogId::Hrv, display_name: "Honda HRV", daily_price: 600_000 },
    CatalogEntry { id: CatalogId::Sigra, display_name: "Daihatsu Sigra", daily_price: 450_000 },
];

/// The fixed, build-time vehicle list.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    pub fn entries(&self) -> &'static [CatalogEntry] {
        &ENTRIES
    }

    pub fn get(&self, id: CatalogId) -> &'static CatalogEntry {
        // ENTRIES is declared in discriminant order
        &ENTRIES[id as usize]
    }

    pub fn lookup(&self, raw_id: &str) -> Result<&'static CatalogEntry, CatalogError> {
        raw_id.parse().map(|id| self.get(id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Unknown vehicle: {0}")]
    UnknownVehicle(String),
}
