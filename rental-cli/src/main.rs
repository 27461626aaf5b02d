use clap::Parser;
use rental_booking::BookingManager;
use rental_cli::{open_storage, prompt::LinePrompt, run, AppError, Cli};
use rental_store::app_config::Config;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match try_main(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let (code, message) = err.into_report();
            eprintln!("{}", message);
            ExitCode::from(code)
        }
    }
}

fn try_main(cli: Cli) -> Result<(), AppError> {
    let config = Config::load().map_err(|e| AppError::Config(e.to_string()))?;

    // stdout carries the rendered output, logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let storage = open_storage(cli.data_dir.as_deref(), &config.storage);
    tracing::debug!("Using bookings file {:?}", storage.path());

    let mut manager = BookingManager::new(storage);
    let prompt = LinePrompt::new(std::io::stdin().lock(), std::io::stderr());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    run(cli.command, &mut manager, &prompt, &mut out)
}
