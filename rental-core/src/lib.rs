pub mod storage;
pub mod clock;
pub mod identity;
pub mod format;
pub mod iso_date;

pub use clock::{Clock, FixedClock, SystemClock};
pub use storage::Storage;

/// Form field the presentation layer should return focus to after an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusField {
    CustomerName,
}

/// Input errors raised while checking a booking form.
///
/// Messages are user-facing and written in Indonesian, the storefront's
/// only locale.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Silakan masukkan nama pelanggan terlebih dahulu!")]
    MissingCustomerName,
    #[error("Silakan pilih minimal satu mobil!")]
    NoCarSelected,
    #[error("Silakan pilih tanggal mulai untuk {car}!")]
    MissingStartDate { car: String },
    #[error("Durasi sewa untuk {car} minimal 1 hari!")]
    InvalidDuration { car: String },
    #[error("Durasi sewa untuk {car} maksimal {max} hari!")]
    DurationTooLong { car: String, max: u32 },
}

impl ValidationError {
    pub fn focus(&self) -> Option<FocusField> {
        match self {
            ValidationError::MissingCustomerName => Some(FocusField::CustomerName),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_car() {
        let err = ValidationError::MissingStartDate { car: "Honda HRV".to_string() };
        assert_eq!(err.to_string(), "Silakan pilih tanggal mulai untuk Honda HRV!");

        let err = ValidationError::InvalidDuration { car: "Daihatsu Sigra".to_string() };
        assert_eq!(err.to_string(), "Durasi sewa untuk Daihatsu Sigra minimal 1 hari!");

        let err = ValidationError::DurationTooLong { car: "Toyota Innova".to_string(), max: 365 };
        assert_eq!(err.to_string(), "Durasi sewa untuk Toyota Innova maksimal 365 hari!");
    }

    #[test]
    fn test_only_missing_name_requests_focus() {
        assert_eq!(ValidationError::MissingCustomerName.focus(), Some(FocusField::CustomerName));
        assert_eq!(ValidationError::NoCarSelected.focus(), None);
    }
}
