//! Numeric display normalization

/// Re-format numeric-looking text to exactly two decimal places.
///
/// Designation labels are usually numbers ("12.5") but occasionally free
/// text; non-numeric input passes through unchanged so labels never crash
/// the import.
pub fn round_special(value: &str) -> String {
    match value.parse::<f64>() {
        Ok(number) => format!("{:.2}", (number * 100.0).round() / 100.0),
        Err(_) => value.to_string(),
    }
}
