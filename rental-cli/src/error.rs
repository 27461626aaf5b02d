use rental_booking::BookingError;
use rental_core::{FocusField, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation {
        message: String,
        focus: Option<FocusField>,
    },
    #[error("Gagal mengakses data pemesanan: {0}")]
    Storage(String),
    #[error("Konfigurasi tidak valid: {0}")]
    Config(String),
    #[error("Input tidak valid: {0}")]
    Usage(String),
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl AppError {
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Validation { .. } | AppError::Usage(_) => 2,
            _ => 1,
        }
    }

    /// Exit code plus the line to show the user.
    pub fn into_report(self) -> (u8, String) {
        let code = self.exit_code();
        let message = match &self {
            AppError::Anyhow(err) => {
                tracing::error!("Internal error: {:?}", err);
                "Terjadi kesalahan internal".to_string()
            }
            AppError::Storage(msg) => {
                tracing::error!("Storage error: {}", msg);
                self.to_string()
            }
            AppError::Validation { message, focus: Some(FocusField::CustomerName) } => {
                format!("{} (--name)", message)
            }
            _ => self.to_string(),
        };
        (code, message)
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation {
            focus: err.focus(),
            message: err.to_string(),
        }
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        let message = err.to_string();
        match err {
            BookingError::Validation(e) => e.into(),
            BookingError::Incomplete(e) => AppError::Validation {
                focus: e.focus(),
                message,
            },
            BookingError::Storage(_) => AppError::Storage(message),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Anyhow(err.into())
    }
}
