//! Parsing helpers shared by every create/edit form.
//!
//! Form fields are bound to plain `String` signals; these turn them into the
//! typed request fields and produce the inline message shown on failure.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Trimmed value of a required field.
///
/// # Errors
///
/// Returns "`<label>` is required." when the field is blank.
pub fn required(label: &str, value: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(format!("{label} is required."));
    }
    Ok(value.to_owned())
}

/// Split comma- or newline-separated input into trimmed, non-empty entries.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split([',', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Inverse of [`parse_list`] for pre-filling an input.
pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}

/// Parse a whole number within `min..=max`.
///
/// # Errors
///
/// Returns a message naming `label` for non-numeric or out-of-range input.
pub fn parse_whole(label: &str, raw: &str, min: u32, max: u32) -> Result<u32, String> {
    let value: u32 = raw
        .trim()
        .parse()
        .map_err(|_| format!("{label} must be a whole number."))?;
    if !(min..=max).contains(&value) {
        return Err(format!("{label} must be between {min} and {max}."));
    }
    Ok(value)
}

/// Parse a money amount. Zero is allowed only when `allow_zero`.
///
/// # Errors
///
/// Returns a message naming `label` for non-numeric, negative or (unless
/// allowed) zero amounts.
pub fn parse_amount(label: &str, raw: &str, allow_zero: bool) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .trim_start_matches('$')
        .replace(',', "")
        .parse()
        .map_err(|_| format!("{label} must be a number."))?;
    if !value.is_finite() || value < 0.0 || (!allow_zero && value <= 0.0) {
        return Err(format!("{label} must be greater than zero."));
    }
    Ok(value)
}

/// Optional whole number; blank input is `None`.
///
/// # Errors
///
/// Returns a message naming `label` when non-blank input is not a number.
pub fn parse_optional_year(label: &str, raw: &str) -> Result<Option<u32>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    parse_whole(label, raw, 1800, 2100).map(Some)
}
