use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

/// Parses a training date entered by the user: `today` or `YYYY-MM-DD`.
/// The result is midnight UTC of that day.
pub fn parse_training_date(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("today") {
        return Ok(midnight_utc(Utc::now().date_naive()));
    }
    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| anyhow!("Use YYYY-MM-DD or 'today'"))?;
    Ok(midnight_utc(date))
}

/// Inclusive datetime bounds of one calendar month.
///
/// The upper bound is 1ms before the next month starts; BSON datetimes
/// have millisecond precision, so nothing can fall in the gap.
pub fn month_range(year: i32, month: u32) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| anyhow!("Invalid month: {year}-{month}"))?;
    let next_first = first_of_next_month(year, month)?;

    let from = midnight_utc(first);
    let to = midnight_utc(next_first) - chrono::Duration::milliseconds(1);
    Ok((from, to))
}

/// Number of days in a calendar month.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| anyhow!("Invalid month: {year}-{month}"))?;
    let next_first = first_of_next_month(year, month)?;
    Ok((next_first - first).num_days() as u32)
}

pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

fn first_of_next_month(year: i32, month: u32) -> Result<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .ok_or_else(|| anyhow!("Invalid month: {year}-{month}"))
}

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}
