//! Text sanitization and display-formatting helpers.
//!
//! # Design
//! - All functions are pure string transforms; nothing touches the DOM.
//! - [`strip_markup`] unescapes entities, so its output can reintroduce
//!   markup — callers that render it must escape again or trust the source.

/// Escape the five HTML-significant characters as entities.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}

/// Reduce an HTML fragment to its text content.
///
/// Tags are removed first, then entities are decoded, matching what a parser
/// would yield as `textContent`. An unterminated tag swallows the remainder
/// of the input.
#[must_use]
pub fn strip_markup(input: &str) -> String {
    unescape_entities(&strip_tags(input))
}

/// Best-effort sanitizer for untrusted display text.
///
/// Markup is stripped and the result trimmed; when nothing survives (input
/// was markup-only), the raw input is escaped instead so the user still sees
/// something inert.
#[must_use]
pub fn sanitize(input: &str) -> String {
    let stripped = strip_markup(input).trim().to_string();
    if stripped.is_empty() {
        escape_html(input)
    } else {
        stripped
    }
}

/// Extract the payload from a signed value of the form `"payload"$.$signature`.
///
/// Returns `None` when the head is not a quoted string; callers treat that
/// as "not signed data".
#[must_use]
pub fn extract_signed_payload(signed: &str) -> Option<String> {
    let head = signed.split("$.$").next().unwrap_or_default();
    let unescaped = head.replace("\\\"", "\"");
    let inner = unescaped.strip_prefix('"')?.strip_suffix('"')?;
    Some(inner.to_string())
}

/// Lowercase the input and capitalize the first letter of every word.
#[must_use]
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for ch in input.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Compact a full name: first word title-cased, the rest as uppercase
/// initials (`"DANIEL HARLIANO SITORUS"` becomes `"Daniel H S"`).
///
/// Returns `None` when the input holds no words at all.
#[must_use]
pub fn name_initials(full_name: &str) -> Option<String> {
    let mut words = full_name.split_whitespace();
    let first = words.next()?;
    let mut parts = vec![title_case(first)];
    for word in words {
        if let Some(initial) = word.chars().next() {
            parts.push(initial.to_uppercase().collect());
        }
    }
    Some(parts.join(" "))
}

fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for ch in input.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            other if !in_tag => out.push(other),
            _ => {}
        }
    }
    out
}

fn unescape_entities(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(end) = tail[1..].find(';').map(|offset| offset + 1) {
            if let Some(decoded) = decode_entity(&tail[1..end]) {
                out.push(decoded);
                rest = &tail[end + 1..];
                continue;
            }
        }
        out.push('&');
        rest = &tail[1..];
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let digits = name.strip_prefix('#')?;
            let code = if let Some(hex) = digits
                .strip_prefix('x')
                .or_else(|| digits.strip_prefix('X'))
            {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                digits.parse::<u32>().ok()?
            };
            char::from_u32(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_significant_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;"
        );
    }

    #[test]
    fn strip_markup_removes_tags() {
        assert_eq!(strip_markup("<script>alert('ok')</script>"), "alert('ok')");
        assert_eq!(strip_markup("hello <b>world</b>"), "hello world");
    }

    #[test]
    fn strip_markup_unescapes_entities() {
        assert_eq!(
            strip_markup("&lt;script&gt;alert(&#x27;ok&#x27;)&lt;/script&gt;"),
            "<script>alert('ok')</script>"
        );
        assert_eq!(strip_markup("a &amp;&#32;b"), "a & b");
    }

    #[test]
    fn strip_markup_keeps_unknown_entities_verbatim() {
        assert_eq!(strip_markup("x &unknown; y"), "x &unknown; y");
        assert_eq!(strip_markup("dangling &amp"), "dangling &amp");
    }

    #[test]
    fn sanitize_prefers_stripped_text() {
        assert_eq!(sanitize("hello <b>world</b>"), "hello world");
    }

    #[test]
    fn sanitize_falls_back_to_escaping_markup_only_input() {
        assert_eq!(sanitize("<img src=x>"), "&lt;img src=x&gt;");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn signed_payload_extraction_matches_wire_format() {
        assert_eq!(
            extract_signed_payload("\"KZ01\"$.$jt7uiNKe3inpnFK0JttdrpBxLYI"),
            Some("KZ01".to_string())
        );
        assert_eq!(
            extract_signed_payload("\"a \\\"quoted\\\" part\"$.$sig"),
            Some("a \"quoted\" part".to_string())
        );
    }

    #[test]
    fn unsigned_input_yields_none() {
        assert_eq!(extract_signed_payload("KZ01"), None);
        assert_eq!(extract_signed_payload(""), None);
    }

    #[test]
    fn title_case_normalizes_shouting() {
        assert_eq!(title_case("DANIEL HARLIANO"), "Daniel Harliano");
        assert_eq!(title_case("jakarta  barat"), "Jakarta  Barat");
    }

    #[test]
    fn initials_keep_first_name_whole() {
        assert_eq!(
            name_initials("DANIEL HARLIANO SITORUS"),
            Some("Daniel H S".to_string())
        );
        assert_eq!(name_initials("budi"), Some("Budi".to_string()));
        assert_eq!(name_initials("   "), None);
    }
}
