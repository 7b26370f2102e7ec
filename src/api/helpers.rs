//! Pure validation helpers shared by the item endpoints. No I/O.

/// Parse an item id from its raw path-parameter form
///
/// Accepts syntactically valid base-10 integers only. Fractional values
/// like "12.5" and non-numeric strings (including "null" and "undefined")
/// are rejected.
pub fn parse_item_id(raw: &str) -> Option<i32> {
    raw.parse::<i32>().ok()
}

/// Validate and normalize a note name
///
/// Fails when the value is absent, empty, or whitespace-only after
/// trimming. Returns the trimmed value otherwise; internal whitespace is
/// preserved. The trimmed form is the only form ever stored.
pub fn validate_name(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}
