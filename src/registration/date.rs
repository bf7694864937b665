use chrono::DateTime;
use chrono_tz::America::Santiago;

const CARD_DATE_FORMAT: &str = "%d-%m-%Y, %H:%M:%S";
pub const UNKNOWN_DATE: &str = "N/A";

/// Renders an RFC 3339 timestamp (`2025-08-10T01:59:43.800Z`) as `DD-MM-YYYY, HH:MM:SS` in
/// Santiago local time (UTC-4 in winter, UTC-3 in summer). Anything that can not be parsed
/// gives `N/A`.
pub fn format_card_date(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return UNKNOWN_DATE.to_string();
    };
    match DateTime::parse_from_rfc3339(raw) {
        Ok(date) => date
            .with_timezone(&Santiago)
            .format(CARD_DATE_FORMAT)
            .to_string(),
        Err(_) => UNKNOWN_DATE.to_string(),
    }
}
