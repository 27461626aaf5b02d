pub mod cli;
pub mod error;
pub mod prompt;
pub mod render;

use rental_booking::{BookingManager, Confirmation, DeleteOutcome};
use rental_core::identity::is_booking_id;
use rental_core::{Clock, Storage};
use rental_store::app_config::StorageConfig;
use rental_store::FileStorage;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

pub use cli::{Cli, Command};
pub use error::AppError;

/// `--data-dir` wins over `storage.data_dir`.
pub fn resolve_data_dir(flag: Option<&Path>, config: &StorageConfig) -> PathBuf {
    flag.map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&config.data_dir))
}

pub fn open_storage(flag: Option<&Path>, config: &StorageConfig) -> FileStorage {
    FileStorage::new(resolve_data_dir(flag, config), &config.key)
}

/// Runs one command against `manager`, writing user-facing text to `out`.
///
/// `confirmation` is consulted by `delete` unless `--yes` was given.
pub fn run<S, C>(
    command: Command,
    manager: &mut BookingManager<S, C>,
    confirmation: &dyn Confirmation,
    out: &mut dyn Write,
) -> Result<(), AppError>
where
    S: Storage,
    C: Clock,
{
    match command {
        Command::Catalog => {
            render::render_catalog(out, manager.catalog().entries())?;
        }
        Command::Calculate(args) => {
            let form = args.to_form(manager.today());
            let summary = manager.calculate_total(&form)?;
            render::render_summary(out, &summary)?;
        }
        Command::Save(args) => {
            let mut form = args.to_form(manager.today());
            let booking = manager.save_booking(&mut form)?;
            writeln!(out, "{} (#{})", render::SAVED, booking.id)?;
            writeln!(out)?;
            render::render_bookings(out, &manager.recent_bookings())?;
        }
        Command::List => {
            render::render_bookings(out, &manager.recent_bookings())?;
        }
        Command::Delete { id, yes } => {
            if !is_booking_id(&id) {
                return Err(AppError::Usage(format!(
                    "nomor pemesanan harus berupa BK diikuti 8 angka, bukan {:?}",
                    id
                )));
            }

            let confirmation: &dyn Confirmation = if yes { &prompt::AssumeYes } else { confirmation };
            match manager.delete_booking(&id, confirmation)? {
                DeleteOutcome::Declined => {
                    writeln!(out, "{}", render::DELETE_DECLINED)?;
                }
                DeleteOutcome::Deleted { removed } => {
                    if removed == 0 {
                        warn!("No booking with id {}", id);
                    }
                    writeln!(out, "{}", render::DELETED)?;
                    writeln!(out)?;
                    render::render_bookings(out, &manager.recent_bookings())?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_config() -> StorageConfig {
        StorageConfig {
            data_dir: "from-config".to_string(),
            key: "carRentalBookings".to_string(),
        }
    }

    #[test]
    fn test_data_dir_flag_overrides_config() {
        let config = storage_config();
        assert_eq!(resolve_data_dir(None, &config), PathBuf::from("from-config"));
        assert_eq!(
            resolve_data_dir(Some(Path::new("/tmp/override")), &config),
            PathBuf::from("/tmp/override")
        );

        let storage = open_storage(Some(Path::new("/tmp/override")), &config);
        assert_eq!(storage.path(), Path::new("/tmp/override/carRentalBookings.json"));
    }
}
