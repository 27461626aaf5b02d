use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use rental_booking::BookingForm;
use rental_catalog::CatalogId;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "rental", version, about = "Car rental booking calculator")]
pub struct Cli {
    /// Directory holding the bookings file (overrides storage.data_dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the vehicles and their daily prices
    Catalog,
    /// Show the price summary without saving
    Calculate(FormArgs),
    /// Save a booking
    Save(FormArgs),
    /// List saved bookings, newest first
    List,
    /// Delete a booking by id
    Delete {
        id: String,
        /// Skip the confirmation question
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Debug, Clone, Args)]
pub struct FormArgs {
    /// Customer name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Vehicle as ID[:YYYY-MM-DD[:DAYS]]; the date defaults to today, DAYS to 1
    #[arg(long = "car", value_parser = parse_car_arg)]
    pub cars: Vec<CarArg>,
}

/// One `--car` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarArg {
    pub id: CatalogId,
    /// `None` when omitted, `Some("")` when given empty.
    pub start_date: Option<String>,
    pub duration: Option<String>,
}

pub fn parse_car_arg(raw: &str) -> Result<CarArg, String> {
    let mut parts = raw.splitn(3, ':');
    let id = parts
        .next()
        .unwrap_or_default()
        .parse::<CatalogId>()
        .map_err(|e| e.to_string())?;

    Ok(CarArg {
        id,
        start_date: parts.next().map(str::to_string),
        duration: parts.next().map(str::to_string),
    })
}

impl FormArgs {
    /// Fills a fresh form the way a user would fill the storefront page.
    pub fn to_form(&self, today: NaiveDate) -> BookingForm {
        let mut form = BookingForm::new(today);
        form.customer_name = self.name.clone();
        for car in &self.cars {
            form.select(car.id);
            if let Some(start_date) = &car.start_date {
                form.set_start_date(car.id, start_date.as_str());
            }
            if let Some(duration) = &car.duration {
                form.set_duration(car.id, duration.as_str());
            }
        }
        form
    }
}
