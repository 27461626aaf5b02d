//! Indonesian text rendering of summaries, bookings and the catalog.

use rental_booking::{Booking, Summary};
use rental_catalog::CatalogEntry;
use rental_core::format::{format_currency, format_long_date};
use std::io::{self, Write};

pub const NO_BOOKINGS: &str = "Belum ada pemesanan";
pub const SAVED: &str = "Pemesanan berhasil disimpan!";
pub const DELETED: &str = "Pemesanan berhasil dihapus!";
pub const DELETE_DECLINED: &str = "Penghapusan dibatalkan.";

pub fn render_catalog(out: &mut dyn Write, entries: &[CatalogEntry]) -> io::Result<()> {
    for entry in entries {
        writeln!(
            out,
            "{:<8} {:<22} {} / hari",
            entry.id,
            entry.display_name,
            format_currency(entry.daily_price)
        )?;
    }
    Ok(())
}

pub fn render_summary(out: &mut dyn Write, summary: &Summary) -> io::Result<()> {
    writeln!(out, "Pelanggan: {}", summary.customer_name)?;

    for line in &summary.lines {
        let car = &line.selection;
        writeln!(out)?;
        writeln!(out, "{}", car.name)?;
        writeln!(
            out,
            "  Tanggal: {} - {}",
            format_long_date(line.period.start),
            format_long_date(line.period.end)
        )?;
        writeln!(out, "  Durasi: {} hari", car.duration_days)?;
        writeln!(out, "  Harga per hari: {}", format_currency(car.price))?;
        writeln!(out, "  Subtotal: {}", format_currency(car.subtotal))?;
    }

    writeln!(out)?;
    writeln!(out, "Total: {}", format_currency(summary.total))
}

/// Bookings in the order given; callers pass newest first.
pub fn render_bookings(out: &mut dyn Write, bookings: &[Booking]) -> io::Result<()> {
    if bookings.is_empty() {
        return writeln!(out, "{}", NO_BOOKINGS);
    }

    for (i, booking) in bookings.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "Pemesanan #{}", booking.id)?;
        writeln!(out, "  Pelanggan: {}", booking.customer_name)?;
        writeln!(out, "  Dibuat: {}", booking.created_at_display)?;
        for car in &booking.cars {
            // storefront records may carry an empty date
            let start = car.start_date.map(format_long_date).unwrap_or_else(|| "-".to_string());
            writeln!(
                out,
                "  - {} - {} ({} hari) - {}",
                car.name,
                start,
                car.duration_days,
                format_currency(car.subtotal)
            )?;
        }
        writeln!(out, "  Total: {}", format_currency(booking.total))?;
    }
    Ok(())
}
