//! `%%name%%` placeholder substitution for HTML documents.

use std::collections::HashMap;

/// Substitutes placeholders in `document`.
///
/// For each key only the first `%%key%%` occurrence is replaced; later
/// occurrences of the same placeholder stay as they are. Keys without a
/// placeholder and placeholders without a key are left alone. Keys are applied
/// in sorted order so the output does not depend on map iteration order.
///
/// # Example
///
/// ```
/// # use std::collections::HashMap;
/// # use lantern::files::template::render;
/// let params = HashMap::from([("name".to_string(), "Ada".to_string())]);
/// assert_eq!(render(b"Hi %%name%%, %%name%%", &params), b"Hi Ada, %%name%%");
/// ```
pub fn render(document: &[u8], params: &HashMap<String, String>) -> Vec<u8> {
    let mut output = document.to_vec();

    let mut keys: Vec<&String> = params.keys().collect();
    keys.sort();

    for key in keys {
        let placeholder = format!("%%{key}%%");
        if let Some(start) = find(&output, placeholder.as_bytes()) {
            output.splice(
                start..start + placeholder.len(),
                params[key].bytes(),
            );
        }
    }

    output
}

/// Decodes an `application/x-www-form-urlencoded` body.
///
/// `+` becomes a space and percent escapes are decoded on both sides of the
/// first `=`. A pair without `=` maps to an empty value.
pub fn parse_form_urlencoded(body: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(body.as_bytes())
        .into_owned()
        .collect()
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }

    haystack
        .windows(needle.len())
        .position(|w| w == needle)
}
