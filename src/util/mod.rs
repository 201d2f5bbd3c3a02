use chrono::{NaiveDate, NaiveDateTime};

pub mod logging;

// Formats seen across API responses and exports. Date-only rows parse to
// midnight so the calendar-date views still work.
const START_DATE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%SZ", "%Y-%m-%d %H:%M:%S"];

pub struct DateTimeUtils {}

impl DateTimeUtils {
    pub fn parse_start_date(raw: &str) -> Option<NaiveDateTime> {
        let trimmed = raw.trim();

        for format in START_DATE_FORMATS {
            if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Some(parsed);
            }
        }

        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    }
}
