use chrono::{DateTime, SecondsFormat, TimeZone, Utc};

pub const BOOKING_ID_PREFIX: &str = "BK";

const ID_DIGITS_MODULUS: i64 = 100_000_000;

/// Builds a booking id from the trailing 8 digits of the millisecond timestamp.
///
/// Two bookings saved in the same millisecond, or exactly 10^8 ms (~27.8 hours)
/// apart, get the same id. Storage is a plain list, so both records are kept.
pub fn generate_booking_id<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    let suffix = now.timestamp_millis().rem_euclid(ID_DIGITS_MODULUS);
    format!("{}{:08}", BOOKING_ID_PREFIX, suffix)
}

/// Whether `id` has the `BK` + 8 digits shape.
pub fn is_booking_id(id: &str) -> bool {
    match id.strip_prefix(BOOKING_ID_PREFIX) {
        Some(digits) => digits.len() == 8 && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

/// UTC instant with millisecond precision and a `Z` suffix.
pub fn iso_timestamp<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    now.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_id_uses_trailing_digits() {
        let now = DateTime::from_timestamp_millis(1_704_079_800_123).unwrap();
        assert_eq!(generate_booking_id(&now), "BK79800123");
        assert!(is_booking_id(&generate_booking_id(&now)));
    }

    #[test]
    fn test_id_keeps_leading_zeros() {
        let now = DateTime::from_timestamp_millis(1_700_000_000_042).unwrap();
        assert_eq!(generate_booking_id(&now), "BK00000042");
    }

    #[test]
    fn test_ids_collide_one_window_apart() {
        let a = DateTime::from_timestamp_millis(1_704_079_800_123).unwrap();
        let b = DateTime::from_timestamp_millis(1_704_079_800_123 + ID_DIGITS_MODULUS).unwrap();
        assert_eq!(generate_booking_id(&a), generate_booking_id(&b));
    }

    #[test]
    fn test_is_booking_id_rejects_other_shapes() {
        assert!(!is_booking_id("BK1234567"));
        assert!(!is_booking_id("XX12345678"));
        assert!(!is_booking_id("BK1234567a"));
    }

    #[test]
    fn test_iso_timestamp_is_utc_millis() {
        let now = DateTime::parse_from_rfc3339("2024-01-01T10:30:00.5+07:00").unwrap();
        assert_eq!(iso_timestamp(&now), "2024-01-01T03:30:00.500Z");
    }
}
