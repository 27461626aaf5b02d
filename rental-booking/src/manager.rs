use chrono::NaiveDate;
use rental_catalog::Catalog;
use rental_core::format::format_timestamp;
use rental_core::identity::{generate_booking_id, iso_timestamp};
use rental_core::{Clock, Storage, StorageError, SystemClock, ValidationError};
use tracing::{info, warn};

use crate::form::BookingForm;
use crate::models::{Booking, Selection};
use crate::summary::{compute_total, validate, Summary};

pub const DELETE_CONFIRMATION: &str = "Apakah Anda yakin ingin menghapus pemesanan ini?";

/// Asks the user before a destructive action.
pub trait Confirmation {
    fn confirm(&self, question: &str) -> bool;
}

impl<F> Confirmation for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, question: &str) -> bool {
        self(question)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user said no; storage was not touched.
    Declined,
    Deleted { removed: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Save reports every validation failure with one message.
    #[error("Silakan lengkapi data pemesanan terlebih dahulu!")]
    Incomplete(#[source] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Owns the booking list stored behind `S`.
///
/// Every mutation is a whole-list read, modify, rewrite.
pub struct BookingManager<S, C = SystemClock> {
    storage: S,
    clock: C,
    catalog: Catalog,
}

impl<S: Storage> BookingManager<S, SystemClock> {
    pub fn new(storage: S) -> Self {
        Self::with_clock(storage, SystemClock)
    }
}

impl<S: Storage, C: Clock> BookingManager<S, C> {
    pub fn with_clock(storage: S, clock: C) -> Self {
        Self {
            storage,
            clock,
            catalog: Catalog,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Fresh form with every date defaulted to today.
    pub fn new_form(&self) -> BookingForm {
        BookingForm::new(self.today())
    }

    pub fn calculate_total(&self, form: &BookingForm) -> Result<Summary, ValidationError> {
        compute_total(&form.customer_name, &form.selections(&self.catalog))
    }

    /// Validates, stamps and appends a booking.
    pub fn save(&mut self, customer_name: &str, selections: Vec<Selection>) -> Result<Booking, BookingError> {
        validate(customer_name, &selections).map_err(BookingError::Incomplete)?;
        let summary = compute_total(customer_name, &selections)?;

        let now = self.clock.now();
        let booking = Booking {
            id: generate_booking_id(&now),
            customer_name: summary.customer_name,
            cars: summary.lines.into_iter().map(|line| line.selection).collect(),
            total: summary.total,
            created_at_iso: iso_timestamp(&now),
            created_at_display: format_timestamp(&now),
        };

        let mut bookings = self.load()?;
        bookings.push(booking.clone());
        self.write_all(&bookings)?;

        info!("Booking saved: {} ({} car(s), total {})", booking.id, booking.cars.len(), booking.total);
        Ok(booking)
    }

    /// Saves the form's booking and resets the form on success.
    pub fn save_booking(&mut self, form: &mut BookingForm) -> Result<Booking, BookingError> {
        let selections = form.selections(&self.catalog);
        let booking = self.save(&form.customer_name, selections)?;
        form.reset(self.today());
        Ok(booking)
    }

    /// Stored bookings in insertion order.
    ///
    /// Missing, unreadable or corrupt storage reads as an empty list.
    pub fn list_bookings(&self) -> Vec<Booking> {
        self.load().unwrap_or_else(|e| {
            warn!("Failed to read bookings, treating as empty: {}", e);
            Vec::new()
        })
    }

    /// Full stored list for a read-modify-write.
    ///
    /// Absent or undecodable data is an empty list. A failed read is an error,
    /// so a mutation never rewrites storage it could not see.
    fn load(&self) -> Result<Vec<Booking>, BookingError> {
        let bytes = match self.storage.read()? {
            Some(bytes) => bytes,
            None => return Ok(Vec::new()),
        };

        Ok(serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            warn!("Stored bookings are not valid, treating as empty: {}", e);
            Vec::new()
        }))
    }

    /// Display order: most recently saved first.
    pub fn recent_bookings(&self) -> Vec<Booking> {
        let mut bookings = self.list_bookings();
        bookings.reverse();
        bookings
    }

    /// Removes every booking with `id` once the user confirms.
    pub fn delete_booking(
        &mut self,
        id: &str,
        confirmation: &dyn Confirmation,
    ) -> Result<DeleteOutcome, BookingError> {
        if !confirmation.confirm(DELETE_CONFIRMATION) {
            return Ok(DeleteOutcome::Declined);
        }

        let mut bookings = self.load()?;
        let before = bookings.len();
        bookings.retain(|booking| booking.id != id);
        let removed = before - bookings.len();
        self.write_all(&bookings)?;

        info!("Booking deleted: {} ({} record(s))", id, removed);
        Ok(DeleteOutcome::Deleted { removed })
    }

    fn write_all(&mut self, bookings: &[Booking]) -> Result<(), BookingError> {
        let bytes = serde_json::to_vec(bookings).map_err(StorageError::from)?;
        self.storage.write(&bytes)?;
        Ok(())
    }
}
