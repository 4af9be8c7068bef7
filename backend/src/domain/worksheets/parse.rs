//! Lenient numeric parsing for worksheet form fields.

/// Parse a user-entered numeric field.
///
/// Accepts plain numbers plus the decorations people type into money
/// fields: surrounding whitespace, a leading currency symbol and thousands
/// separators. Returns `None` when the field is empty or not a number.
pub fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches(['$', '€', '£', '₩'])
        .chars()
        .filter(|c| *c != ',')
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}

/// Parse a user-entered amount, treating anything unparseable as 0.
pub fn parse_amount(raw: &str) -> f64 {
    parse_number(raw).unwrap_or(0.0)
}
