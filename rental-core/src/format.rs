//! Fixed id-ID (Indonesian) rendering of money and dates.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Weekday};

const WEEKDAYS: [&str; 7] = ["Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu"];

const MONTHS: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni",
    "Juli", "Agustus", "September", "Oktober", "November", "Desember",
];

/// Rupiah with `.` grouping and no fraction digits, e.g. `Rp 1.500.000`.
///
/// The space after `Rp` is a non-breaking space (U+00A0).
pub fn format_currency(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0 { "-" } else { "" };
    format!("{}Rp\u{a0}{}", sign, grouped)
}

fn weekday_name(day: Weekday) -> &'static str {
    WEEKDAYS[day.num_days_from_monday() as usize]
}

fn month_name(date: &NaiveDate) -> &'static str {
    MONTHS[date.month0() as usize]
}

/// Long display form, e.g. `Senin, 1 Januari 2024`.
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{}, {} {} {}",
        weekday_name(date.weekday()),
        date.day(),
        month_name(&date),
        date.year()
    )
}

/// `YYYY-MM-DD`, the form used for storage and date inputs.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Short local date-time, e.g. `1/1/2024, 10.30.00`.
pub fn format_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.format("%-d/%-m/%Y, %H.%M.%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(0), "Rp\u{a0}0");
        assert_eq!(format_currency(500), "Rp\u{a0}500");
        assert_eq!(format_currency(450_000), "Rp\u{a0}450.000");
        assert_eq!(format_currency(2_100_000), "Rp\u{a0}2.100.000");
        assert_eq!(format_currency(-1_000), "-Rp\u{a0}1.000");
    }

    #[test]
    fn test_long_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(format_long_date(date), "Senin, 1 Januari 2024");

        let date = NaiveDate::from_ymd_opt(2024, 8, 17).unwrap();
        assert_eq!(format_long_date(date), "Sabtu, 17 Agustus 2024");
    }

    #[test]
    fn test_timestamp_short_form() {
        let at = DateTime::parse_from_rfc3339("2024-01-01T10:30:05+07:00").unwrap();
        assert_eq!(format_timestamp(&at), "1/1/2024, 10.30.05");
    }
}
