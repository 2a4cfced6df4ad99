use crate::model::{Error, Result};
use chrono::{DateTime, Local, Utc};

pub fn human_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = seconds % 3600 / 60;
    let seconds = seconds % 60;
    format!("{hours}h {minutes}m {seconds}s")
}

/// Estimate over spent, in whole percent. Nothing spent gives 0.
pub fn ratio(estimate: u64, spent: u64) -> u64 {
    if spent == 0 {
        return 0;
    }
    estimate * 100 / spent
}

pub fn start_of_today() -> Result<DateTime<Utc>> {
    Local::now()
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .and_then(|midnight| midnight.and_local_timezone(Local).earliest())
        .map(|midnight| midnight.with_timezone(&Utc))
        .ok_or_else(|| Error::Config("local midnight does not exist today".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_hours_minutes_seconds() {
        assert_eq!(human_duration(0), "0h 0m 0s");
        assert_eq!(human_duration(5400), "1h 30m 0s");
        assert_eq!(human_duration(90_061), "25h 1m 1s");
    }

    #[test]
    fn ratio_is_floored_percent() {
        assert_eq!(ratio(3600, 1800), 200);
        assert_eq!(ratio(1000, 3000), 33);
        assert_eq!(ratio(3600, 0), 0);
    }

    #[test]
    fn today_starts_in_the_past() {
        assert!(start_of_today().unwrap() <= Utc::now());
    }
}
