pub mod models;
pub mod form;
pub mod summary;
pub mod manager;

pub use models::{Booking, Selection};
pub use form::{BookingForm, CarInput};
pub use summary::{compute_total, Summary, SummaryLine};
pub use manager::{BookingError, BookingManager, Confirmation, DeleteOutcome};
