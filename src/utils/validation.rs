use anyhow::{anyhow, Result};

/// Validates a training duration entered as text, in whole minutes.
pub fn validate_duration_minutes(input: &str) -> Result<i64> {
    let minutes: i64 = input
        .trim()
        .parse()
        .map_err(|_| anyhow!("Please enter a valid number for the duration in minutes"))?;

    if minutes <= 0 {
        return Err(anyhow!("Duration must be a positive number of minutes"));
    }

    if minutes > 24 * 60 {
        return Err(anyhow!("Duration cannot be longer than 24 hours"));
    }

    Ok(minutes)
}

/// Validates a rest time entered as text, in whole seconds.
pub fn validate_rest_seconds(input: &str) -> Result<i64> {
    let seconds: i64 = input
        .trim()
        .parse()
        .map_err(|_| anyhow!("Please enter a valid number for rest time in seconds"))?;

    if seconds < 0 {
        return Err(anyhow!("Rest time cannot be negative"));
    }

    if seconds > 3600 {
        return Err(anyhow!("Rest time cannot be longer than one hour"));
    }

    Ok(seconds)
}
