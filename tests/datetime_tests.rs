use chrono::{Datelike, Timelike, Utc};
use gym_log_bot::utils::datetime::*;

#[cfg(test)]
mod datetime_tests {
    use super::*;

    #[test]
    fn test_parse_explicit_date() {
        let date = parse_training_date("2024-03-15").unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 3);
        assert_eq!(date.day(), 15);
        assert_eq!(date.hour(), 0);
        assert_eq!(date.minute(), 0);
    }

    #[test]
    fn test_parse_today_keyword() {
        for input in ["today", "Today", "TODAY", " today "] {
            let date = parse_training_date(input).unwrap();
            let now = Utc::now();
            assert_eq!(date.date_naive(), now.date_naive(), "Input: {:?}", input);
            assert_eq!(date.hour(), 0);
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["yesterday", "15-03-2024", "2024/03/15", "2024-13-01", ""] {
            assert!(
                parse_training_date(input).is_err(),
                "Should reject: {:?}",
                input
            );
        }
    }

    #[test]
    fn test_month_range_covers_whole_month() {
        let (from, to) = month_range(2024, 3).unwrap();
        assert_eq!(from.day(), 1);
        assert_eq!(from.month(), 3);
        assert_eq!(to.month(), 3);
        assert_eq!(to.day(), 31);
        // Upper bound is the last millisecond of the month
        assert_eq!(to.hour(), 23);
        assert_eq!(to.minute(), 59);
    }

    #[test]
    fn test_month_range_december_wraps_year() {
        let (from, to) = month_range(2024, 12).unwrap();
        assert_eq!(from.month(), 12);
        assert_eq!(to.month(), 12);
        assert_eq!(to.day(), 31);
        assert_eq!(to.year(), 2024);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2).unwrap(), 29); // leap year
        assert_eq!(days_in_month(2023, 2).unwrap(), 28);
        assert_eq!(days_in_month(2024, 4).unwrap(), 30);
        assert_eq!(days_in_month(2024, 12).unwrap(), 31);
    }

    #[test]
    fn test_invalid_month_rejected() {
        assert!(month_range(2024, 0).is_err());
        assert!(month_range(2024, 13).is_err());
        assert!(days_in_month(2024, 13).is_err());
    }

    #[test]
    fn test_format_date() {
        let date = parse_training_date("2024-03-05").unwrap();
        assert_eq!(format_date(&date), "2024-03-05");
    }
}
