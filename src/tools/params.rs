// ABOUTME: Argument extraction and validation for tool calls
// ABOUTME: Every check here runs before any upstream request is made
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scalar argument validation
//!
//! Tool arguments are simple scalars: dates, identifiers, limits. These
//! helpers pull them out of the `arguments` object and reject malformed
//! values with validation-class errors, so bad input never reaches the
//! upstream service.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde_json::Value;

/// Wire format for calendar date arguments
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Optional non-negative integer argument
///
/// # Errors
///
/// Rejects non-numeric values and negative or fractional numbers.
pub fn optional_count(args: &Value, key: &str) -> AppResult<Option<usize>> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n.as_u64().map(|v| Some(v as usize)).ok_or_else(|| {
            AppError::value_out_of_range(format!("'{key}' must be a non-negative integer"))
        }),
        Some(_) => Err(AppError::invalid_format(format!("'{key}' must be a number"))),
    }
}

/// Page-size argument with a default and an inclusive maximum
///
/// # Errors
///
/// Rejects zero, values above `max`, and anything `optional_count` rejects.
pub fn limit(args: &Value, key: &str, default: usize, max: usize) -> AppResult<usize> {
    let value = optional_count(args, key)?.unwrap_or(default);
    if value == 0 || value > max {
        return Err(AppError::value_out_of_range(format!(
            "'{key}' must be between 1 and {max}"
        )));
    }
    Ok(value)
}

/// Offset argument, defaulting to zero
///
/// # Errors
///
/// Rejects anything `optional_count` rejects.
pub fn offset(args: &Value, key: &str) -> AppResult<usize> {
    Ok(optional_count(args, key)?.unwrap_or(0))
}

/// Required string argument
///
/// # Errors
///
/// Rejects missing, non-string, and empty values.
pub fn required_str(args: &Value, key: &str) -> AppResult<String> {
    let value = args
        .get(key)
        .ok_or_else(|| AppError::missing_field(key))?
        .as_str()
        .ok_or_else(|| AppError::invalid_format(format!("'{key}' must be a string")))?;
    if value.trim().is_empty() {
        return Err(AppError::invalid_input(format!("'{key}' must not be empty")));
    }
    Ok(value.to_owned())
}

/// Optional string argument
///
/// # Errors
///
/// Rejects present non-string values.
pub fn optional_str(args: &Value, key: &str) -> AppResult<Option<String>> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(Some(s.clone())),
        Some(Value::String(_)) => Ok(None),
        Some(_) => Err(AppError::invalid_format(format!("'{key}' must be a string"))),
    }
}

/// Required `YYYY-MM-DD` date argument
///
/// # Errors
///
/// Rejects missing values and strings that are not calendar dates.
pub fn required_date(args: &Value, key: &str) -> AppResult<NaiveDate> {
    let raw = required_str(args, key)?;
    NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(|e| {
        AppError::invalid_format(format!("'{key}' must be a YYYY-MM-DD date: {e}"))
    })
}

/// Required `start_date`/`end_date` pair with ordering check
///
/// # Errors
///
/// Rejects malformed dates and ranges where start is after end.
pub fn date_range(args: &Value) -> AppResult<(NaiveDate, NaiveDate)> {
    let start = required_date(args, "start_date")?;
    let end = required_date(args, "end_date")?;
    if start > end {
        return Err(AppError::invalid_input(
            "'start_date' must not be after 'end_date'",
        ));
    }
    Ok((start, end))
}

/// Required numeric identifier argument (activity, device, workout IDs)
///
/// Accepts a decimal string or a JSON integer; always returns the string
/// form used in endpoint paths.
///
/// # Errors
///
/// Rejects missing values and anything that is not a decimal identifier.
pub fn required_id(args: &Value, key: &str) -> AppResult<String> {
    let raw = match args.get(key) {
        None | Some(Value::Null) => return Err(AppError::missing_field(key)),
        Some(Value::Number(n)) => n
            .as_u64()
            .map(|v| v.to_string())
            .ok_or_else(|| AppError::invalid_format(format!("'{key}' must be a positive identifier")))?,
        Some(Value::String(s)) => s.trim().to_owned(),
        Some(_) => {
            return Err(AppError::invalid_format(format!(
                "'{key}' must be a numeric identifier"
            )))
        }
    };

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::invalid_format(format!(
            "'{key}' must be a numeric identifier"
        )));
    }
    Ok(raw)
}
