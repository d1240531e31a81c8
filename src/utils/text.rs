/// Trims `text`, treating empty or whitespace-only input as absent.
pub fn normalize(text: Option<&str>) -> Option<String> {
    let trimmed = text?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Splits a comma separated option value, dropping blank items.
///
/// `"a, b,,c"` yields `["a", "b", "c"]`.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .filter_map(|item| normalize(Some(item)))
        .collect()
}
