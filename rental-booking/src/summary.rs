use rental_catalog::{PricingEngine, RentalPeriod, MAX_RENTAL_DAYS};
use rental_core::ValidationError;
use serde::Serialize;
use tracing::debug;

use crate::models::Selection;

/// One priced line of the preview.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryLine {
    pub selection: Selection,
    pub period: RentalPeriod,
}

/// Render-only price preview. Computing it never touches storage.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub customer_name: String,
    pub lines: Vec<SummaryLine>,
    pub total: i64,
}

/// Checks run in order; the first failure is returned.
pub fn validate(customer_name: &str, selections: &[Selection]) -> Result<(), ValidationError> {
    if customer_name.trim().is_empty() {
        return Err(ValidationError::MissingCustomerName);
    }
    if selections.is_empty() {
        return Err(ValidationError::NoCarSelected);
    }
    for selection in selections {
        if selection.start_date.is_none() {
            return Err(ValidationError::MissingStartDate { car: selection.name.clone() });
        }
        if selection.duration_days < 1 {
            return Err(ValidationError::InvalidDuration { car: selection.name.clone() });
        }
        if selection.duration_days > MAX_RENTAL_DAYS {
            return Err(ValidationError::DurationTooLong {
                car: selection.name.clone(),
                max: MAX_RENTAL_DAYS,
            });
        }
    }
    Ok(())
}

/// Validates and prices `selections`.
///
/// Subtotals are recomputed from each selection's daily price, so a stale
/// `subtotal` on the input is ignored.
pub fn compute_total(customer_name: &str, selections: &[Selection]) -> Result<Summary, ValidationError> {
    validate(customer_name, selections)?;

    let engine = PricingEngine::new();
    let lines: Vec<SummaryLine> = selections
        .iter()
        .filter_map(|selection| {
            let start = selection.start_date?;
            let mut selection = selection.clone();
            selection.subtotal = engine.subtotal(selection.price, selection.duration_days);
            let period = engine.period(start, selection.duration_days);
            Some(SummaryLine { selection, period })
        })
        .collect();
    let total = engine.total(lines.iter().map(|line| line.selection.subtotal));

    debug!("Computed summary: {} car(s), total {}", lines.len(), total);

    Ok(Summary {
        customer_name: customer_name.trim().to_string(),
        lines,
        total,
    })
}
