use percent_encoding::percent_decode_str;

/// Split a raw query string into decoded key/value pairs.
///
/// This parser is fail-open by contract: client input can degrade but never
/// reject. A part without `=` becomes a key with an empty value, empty parts
/// vanish, and a percent-sequence that does not decode to UTF-8 is kept in
/// its raw form rather than dropped. Duplicate keys are preserved in order;
/// consumers decide which occurrence wins.
pub fn parse_query_pairs(raw: &str) -> Vec<(String, String)> {
    if raw.is_empty() {
        return Vec::new();
    }

    raw.split('&')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let (key, value) = part.split_once('=').unwrap_or((part, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    match percent_decode_str(raw).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}
