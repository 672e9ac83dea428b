/// Raw operation parameters lifted from the parsed query pairs.
///
/// Only `f`, `w`, `h` and `q` are recognized (case-insensitive); everything
/// else is ignored. When a key repeats, the last occurrence wins.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct RawOperations {
    pub format: Option<String>,
    pub width: Option<u32>,
    pub quality: Option<u32>,
    pub height: Option<u32>,
}

pub(crate) fn extract_operations(pairs: &[(String, String)]) -> RawOperations {
    let mut raw = RawOperations::default();

    for (key, value) in pairs {
        match key.to_ascii_lowercase().as_str() {
            "f" => {
                if !value.is_empty() {
                    raw.format = Some(value.clone());
                }
            }
            "w" => raw.width = parse_positive(value),
            "h" => raw.height = parse_positive(value),
            "q" => raw.quality = parse_positive(value),
            _ => {}
        }
    }

    raw
}

/// Fail-open integer parse: anything that is not a positive integer counts
/// as "not supplied".
fn parse_positive(raw: &str) -> Option<u32> {
    match raw.trim().parse::<i64>() {
        Ok(value) if value > 0 => u32::try_from(value).ok(),
        _ => None,
    }
}
