use chrono::NaiveDate;
use rental_catalog::{Catalog, CatalogId};
use rental_core::format::format_iso_date;
use std::collections::BTreeMap;

use crate::models::Selection;

/// Raw state of one vehicle's controls, as the presentation layer holds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarInput {
    pub selected: bool,
    pub start_date: String,
    pub duration: String,
}

impl CarInput {
    fn blank(today: NaiveDate) -> Self {
        Self {
            selected: false,
            start_date: format_iso_date(today),
            duration: "1".to_string(),
        }
    }
}

/// Typed form state: the customer name plus one input per catalog vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingForm {
    pub customer_name: String,
    cars: BTreeMap<CatalogId, CarInput>,
}

impl BookingForm {
    /// Nothing selected, every date set to `today`, every duration 1.
    pub fn new(today: NaiveDate) -> Self {
        let cars = CatalogId::ALL
            .into_iter()
            .map(|id| (id, CarInput::blank(today)))
            .collect();
        Self {
            customer_name: String::new(),
            cars,
        }
    }

    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }

    pub fn car(&self, id: CatalogId) -> Option<&CarInput> {
        self.cars.get(&id)
    }

    fn car_mut(&mut self, id: CatalogId) -> &mut CarInput {
        self.cars.entry(id).or_insert_with(|| CarInput {
            selected: false,
            start_date: String::new(),
            duration: "1".to_string(),
        })
    }

    pub fn select(&mut self, id: CatalogId) {
        self.car_mut(id).selected = true;
    }

    pub fn deselect(&mut self, id: CatalogId) {
        self.car_mut(id).selected = false;
    }

    pub fn set_start_date(&mut self, id: CatalogId, start_date: impl Into<String>) {
        self.car_mut(id).start_date = start_date.into();
    }

    /// Values below 1 are replaced with `"1"`; other text is kept as typed.
    pub fn set_duration(&mut self, id: CatalogId, duration: impl Into<String>) {
        let raw = duration.into();
        let below_floor = matches!(leading_int(&raw), Some(n) if n < 1);
        self.car_mut(id).duration = if below_floor { "1".to_string() } else { raw };
    }

    /// Reads the active vehicles into selections, in catalog order.
    pub fn selections(&self, catalog: &Catalog) -> Vec<Selection> {
        self.cars
            .iter()
            .filter(|(_, input)| input.selected)
            .map(|(id, input)| {
                Selection::new(
                    catalog.get(*id),
                    parse_start_date(&input.start_date),
                    parse_duration(&input.duration),
                )
            })
            .collect()
    }
}

/// Empty or malformed text is a missing date.
pub fn parse_start_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Leading integer of `raw`, 1 when absent or non-numeric, never below 1.
pub fn parse_duration(raw: &str) -> u32 {
    match leading_int(raw) {
        Some(n) if n >= 1 => u32::try_from(n).unwrap_or(u32::MAX),
        _ => 1,
    }
}

// "3 hari" -> 3, "2.5" -> 2, "-4" -> -4, "abc" -> None
fn leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_new_form_defaults() {
        let form = BookingForm::new(today());
        for id in CatalogId::ALL {
            let car = form.car(id).unwrap();
            assert!(!car.selected);
            assert_eq!(car.start_date, "2024-01-01");
            assert_eq!(car.duration, "1");
        }
        assert!(form.selections(&Catalog).is_empty());
    }

    #[test]
    fn test_inactive_cars_are_excluded() {
        let mut form = BookingForm::new(today());
        form.select(CatalogId::Sigra);
        form.set_duration(CatalogId::Avanza, "5");

        let selections = form.selections(&Catalog);
        assert_eq!(selections.len(), 1);
        assert_eq!(selections[0].catalog_id, CatalogId::Sigra);
    }

    #[test]
    fn test_selections_follow_catalog_order() {
        let mut form = BookingForm::new(today());
        form.select(CatalogId::Sigra);
        form.select(CatalogId::Avanza);

        let ids: Vec<_> = form.selections(&Catalog).iter().map(|s| s.catalog_id).collect();
        assert_eq!(ids, vec![CatalogId::Avanza, CatalogId::Sigra]);
    }

    #[test]
    fn test_duration_zero_becomes_one() {
        let mut form = BookingForm::new(today());
        form.select(CatalogId::Hrv);
        form.set_duration(CatalogId::Hrv, "0");
        assert_eq!(form.car(CatalogId::Hrv).unwrap().duration, "1");

        let selections = form.selections(&Catalog);
        assert_eq!(selections[0].duration_days, 1);
        assert_eq!(selections[0].subtotal, 600_000);
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration(""), 1);
        assert_eq!(parse_duration("abc"), 1);
        assert_eq!(parse_duration("0"), 1);
        assert_eq!(parse_duration("-3"), 1);
        assert_eq!(parse_duration("4"), 4);
        assert_eq!(parse_duration(" 2.5"), 2);
        assert_eq!(parse_duration("7 hari"), 7);
    }

    #[test]
    fn test_blank_or_bad_date_is_missing() {
        let mut form = BookingForm::new(today());
        form.select(CatalogId::Avanza);
        form.set_start_date(CatalogId::Avanza, "");
        assert_eq!(form.selections(&Catalog)[0].start_date, None);

        form.set_start_date(CatalogId::Avanza, "2024-13-40");
        assert_eq!(form.selections(&Catalog)[0].start_date, None);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = BookingForm::new(today());
        form.customer_name = "Budi".to_string();
        form.select(CatalogId::Innova);
        form.set_duration(CatalogId::Innova, "3");

        let tomorrow = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        form.reset(tomorrow);
        assert_eq!(form, BookingForm::new(tomorrow));
    }
}
