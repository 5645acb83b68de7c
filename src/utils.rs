/// Duration input error types
#[derive(Debug, Clone, PartialEq)]
pub enum DurationInputError {
    EmptyInput,
    NotANumber(String),
    OutOfRange(String),
}

impl std::fmt::Display for DurationInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DurationInputError::EmptyInput => write!(f, "Duration cannot be empty"),
            DurationInputError::NotANumber(raw) => write!(f, "Not a number: '{}'", raw),
            DurationInputError::OutOfRange(raw) => write!(f, "Duration out of range: '{}'", raw),
        }
    }
}

impl std::error::Error for DurationInputError {}

/// Parse the duration field into whole seconds.
///
/// Accepts anything the number input can hold: integers, decimals
/// (truncated toward zero) and exponent notation. The sign is kept, so
/// the timer itself decides what to do with zero or negative values:
/// "90" gives 90, "2.9" gives 2 and "-5" gives -5.
pub fn parse_duration_input(input: &str) -> Result<i64, DurationInputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DurationInputError::EmptyInput);
    }

    if let Ok(seconds) = trimmed.parse::<i64>() {
        return Ok(seconds);
    }

    let value = trimmed
        .parse::<f64>()
        .map_err(|_| DurationInputError::NotANumber(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(DurationInputError::NotANumber(trimmed.to_string()));
    }

    let truncated = value.trunc();
    if truncated < i64::MIN as f64 || truncated > i64::MAX as f64 {
        return Err(DurationInputError::OutOfRange(trimmed.to_string()));
    }
    Ok(truncated as i64)
}

/// Canonical text for the duration field while typing: anything that is not
/// a non-zero number becomes empty.
pub fn normalize_duration_text(input: &str) -> String {
    match parse_duration_input(input) {
        Ok(0) | Err(_) => String::new(),
        Ok(_) => input.trim().to_string(),
    }
}

/// Browser tab title showing the remaining time.
pub fn document_title(formatted_remaining: &str, app_title: &str) -> String {
    format!("{} · {}", formatted_remaining, app_title)
}
