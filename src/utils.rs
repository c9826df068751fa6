use crate::errors::{AppError, AppResult};
use std::time::Duration;

pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    let millis = duration.subsec_millis();
    format!("{hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
}

/// Parses `500ms`, `30s`, `2m`, `1h` or a bare number of seconds.
pub fn parse_duration(input: &str) -> AppResult<Duration> {
    let value = input.trim();
    let split = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    let (digits, unit) = value.split_at(split);

    if digits.is_empty() {
        return Err(AppError::InvalidInput(format!(
            "Duration '{input}' must start with a number"
        )));
    }
    let amount: u64 = digits.parse()?;

    let duration = match unit.trim() {
        "ms" => Duration::from_millis(amount),
        "" | "s" => Duration::from_secs(amount),
        "m" => Duration::from_secs(amount.saturating_mul(60)),
        "h" => Duration::from_secs(amount.saturating_mul(3600)),
        other => {
            return Err(AppError::InvalidInput(format!(
                "Unknown duration unit '{other}' in '{input}' (expected ms, s, m or h)"
            )))
        }
    };

    if duration.is_zero() {
        return Err(AppError::InvalidInput(
            "Duration must be greater than 0".into(),
        ));
    }
    Ok(duration)
}
