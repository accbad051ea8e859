//! Shared naming, escaping and literal formatting helpers.
//!
//! Case mapping is ASCII-only: any other character passes through untouched.

/// Convert camelCase to underscore_separated form.
///
/// The first character is lower-cased; every later upper-case character is
/// lower-cased and preceded by `_`.
///
/// - `aMultiWord` -> `a_multi_word`
/// - `CamelCase` -> `camel_case`
/// - `name` -> `name`
pub fn underscore(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut chars = s.chars();
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_lowercase());
    }
    for c in chars {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Convert underscore_separated to camelCase.
///
/// Every `_` is dropped and the character following it is upper-cased.
///
/// - `a_multi_word` -> `aMultiWord`
/// - `some_name` -> `someName`
pub fn camelcase(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut upper_next = false;
    for c in s.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Upper-case the first character.
pub fn capitalize(s: &str) -> String {
    map_first(s, |c| c.to_ascii_uppercase())
}

/// Lower-case the first character.
pub fn decapitalize(s: &str) -> String {
    map_first(s, |c| c.to_ascii_lowercase())
}

pub fn lowercase(s: &str) -> String {
    s.to_ascii_lowercase()
}

pub fn uppercase(s: &str) -> String {
    s.to_ascii_uppercase()
}

fn map_first(s: &str, f: impl FnOnce(char) -> char) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => std::iter::once(f(c)).chain(chars).collect(),
    }
}

/// Escape a string for use inside a double-quoted literal.
///
/// Newline, carriage return, tab, `"` and `\` become two-character escape
/// sequences; everything else is copied as is.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }
    out
}

/// Format a double as a floating-point literal.
///
/// The output is in fixed notation, uses the fewest digits that parse back
/// to exactly `value`, and always has a fractional part (`1.0`, not `1`).
/// Non-finite values are rendered as `NaN`, `inf` and `-inf`.
pub fn format_double(value: f64) -> String {
    // `Display` for f64 is shortest-round-trip and never scientific.
    let s = value.to_string();
    if !value.is_finite() || s.contains('.') {
        s
    } else {
        s + ".0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underscore() {
        assert_eq!(underscore("aMultiWord"), "a_multi_word");
        assert_eq!(underscore("someName"), "some_name");
        assert_eq!(underscore("CamelCase"), "camel_case");
        assert_eq!(underscore("name"), "name");
        assert_eq!(underscore("Name"), "name");
        assert_eq!(underscore("HTTPServer"), "h_t_t_p_server");
        assert_eq!(underscore("A"), "a");
        assert_eq!(underscore(""), "");
    }

    #[test]
    fn test_camelcase() {
        assert_eq!(camelcase("a_multi_word"), "aMultiWord");
        assert_eq!(camelcase("some_name"), "someName");
        assert_eq!(camelcase("name"), "name");
        assert_eq!(camelcase("trailing_"), "trailing");
        assert_eq!(camelcase("_leading"), "Leading");
        assert_eq!(camelcase(""), "");
    }

    #[test]
    fn test_capitalize_and_decapitalize() {
        assert_eq!(capitalize("point"), "Point");
        assert_eq!(capitalize("pOINT"), "POINT");
        assert_eq!(decapitalize("Point"), "point");
        assert_eq!(capitalize(""), "");
        assert_eq!(decapitalize("é"), "é");
    }

    #[test]
    fn test_lowercase_and_uppercase() {
        assert_eq!(lowercase("MixedCase_1"), "mixedcase_1");
        assert_eq!(uppercase("MixedCase_1"), "MIXEDCASE_1");
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("a\nb"), "a\\nb");
        assert_eq!(escape("tab\there"), "tab\\there");
        assert_eq!(escape("cr\r"), "cr\\r");
        assert_eq!(escape(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape(r"C:\dir"), r"C:\\dir");
        assert_eq!(escape("héllo ✓"), "héllo ✓");
    }

    #[test]
    fn test_format_double_integral_values() {
        assert_eq!(format_double(1.0), "1.0");
        assert_eq!(format_double(0.0), "0.0");
        assert_eq!(format_double(-0.0), "-0.0");
        assert_eq!(format_double(-42.0), "-42.0");
    }

    #[test]
    fn test_format_double_fixed_notation() {
        assert_eq!(format_double(0.1), "0.1");
        assert_eq!(format_double(1e-7), "0.0000001");
        assert_eq!(format_double(1e16), "10000000000000000.0");
        assert!(!format_double(f64::MAX).contains('e'));
    }

    #[test]
    fn test_format_double_round_trips() {
        for value in [0.1, 1.0 / 3.0, std::f64::consts::PI, 123456.789, 5e-324] {
            let parsed: f64 = format_double(value).parse().unwrap();
            assert_eq!(parsed, value);
        }
    }

    #[test]
    fn test_format_double_non_finite() {
        assert_eq!(format_double(f64::NAN), "NaN");
        assert_eq!(format_double(f64::INFINITY), "inf");
        assert_eq!(format_double(f64::NEG_INFINITY), "-inf");
    }
}
