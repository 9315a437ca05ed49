pub use time::Date;
use time::UtcOffset;

// UtcOffset::current_local_offset returns an error on multi-threaded
// Linux unless the unsound feature escape hatch is enabled. UTC
// timestamps on diagnostic output are the fallback.
pub fn local_utc_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}

// Used by tests throughout the crate
pub mod pub_testlib {
    use time::{Date, Duration, Month};

    pub fn doy_date(year: u32, day: i64) -> Date {
        Date::from_calendar_date(year as i32, Month::January, 1)
            .unwrap()
            .saturating_add(Duration::days(day))
    }
}

#[cfg(test)]
mod tests {
    use time::{Date, Month};

    use super::pub_testlib::doy_date;

    #[test]
    fn test_doy_date() {
        assert_eq!(
            doy_date(2024, 0),
            Date::from_calendar_date(2024, Month::January, 1).unwrap()
        );
        assert_eq!(
            doy_date(2024, 31),
            Date::from_calendar_date(2024, Month::February, 1).unwrap()
        );
    }
}
