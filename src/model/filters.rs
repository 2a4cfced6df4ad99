use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssuesFilters {
    pub labels: Vec<String>,
    pub just_closed: bool,
    pub milestone: Option<String>,
    pub verbose: bool,
    pub username: Option<String>,
    pub closed_after: Option<DateTime<Utc>>,
    pub closed_before: Option<DateTime<Utc>>,
}

impl IssuesFilters {
    /// Inclusive on both ends. Items that never finished always pass.
    pub fn in_window(&self, finished_at: Option<&DateTime<Utc>>) -> bool {
        let Some(finished_at) = finished_at else {
            return true;
        };
        let after = self.closed_after.map_or(true, |after| *finished_at >= after);
        let before = self.closed_before.map_or(true, |before| *finished_at <= before);
        after && before
    }
}

/// Accepts RFC 3339 timestamps or plain `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_datetime(value: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Ok(datetime.with_timezone(&Utc));
    }
    let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") else {
        return Err(format!("Not a valid date time: {}", value));
    };
    date.and_hms_opt(0, 0, 0)
        .map(|datetime| datetime.and_utc())
        .ok_or_else(|| format!("Not a valid date time: {}", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn window() -> IssuesFilters {
        IssuesFilters {
            closed_after: Some(Utc.with_ymd_and_hms(2021, 3, 1, 0, 0, 0).unwrap()),
            closed_before: Some(Utc.with_ymd_and_hms(2021, 3, 31, 23, 59, 59).unwrap()),
            ..IssuesFilters::default()
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        let filters = window();
        let after = filters.closed_after.unwrap();
        let before = filters.closed_before.unwrap();
        assert!(filters.in_window(Some(&after)));
        assert!(filters.in_window(Some(&before)));
    }

    #[test]
    fn one_second_outside_is_excluded() {
        let filters = window();
        let early = filters.closed_after.unwrap() - Duration::seconds(1);
        let late = filters.closed_before.unwrap() + Duration::seconds(1);
        assert!(!filters.in_window(Some(&early)));
        assert!(!filters.in_window(Some(&late)));
    }

    #[test]
    fn unfinished_items_bypass_the_window() {
        assert!(window().in_window(None));
    }

    #[test]
    fn open_ended_window() {
        let filters = IssuesFilters {
            closed_after: Some(Utc.with_ymd_and_hms(2021, 3, 1, 0, 0, 0).unwrap()),
            ..IssuesFilters::default()
        };
        let far_future = Utc.with_ymd_and_hms(2099, 1, 1, 0, 0, 0).unwrap();
        assert!(filters.in_window(Some(&far_future)));
    }

    #[test]
    fn parses_dates_and_timestamps() {
        assert_eq!(
            parse_datetime("2021-03-01").unwrap(),
            Utc.with_ymd_and_hms(2021, 3, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            parse_datetime("2021-03-01T12:30:00+02:00").unwrap(),
            Utc.with_ymd_and_hms(2021, 3, 1, 10, 30, 0).unwrap()
        );
        assert!(parse_datetime("March 1st").is_err());
    }
}
