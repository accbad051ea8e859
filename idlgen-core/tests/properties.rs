//! Property-based tests for the naming and escaping helpers.

use idlgen_core::{camelcase, escape, format_double, underscore};
use proptest::prelude::*;

// =============================================================================
// Case conversion
// =============================================================================

proptest! {
    /// Converting back and forth settles on the underscore form.
    #[test]
    fn underscore_camelcase_is_stable(s in "[a-zA-Z][a-zA-Z0-9]{0,24}") {
        let once = underscore(&s);
        prop_assert_eq!(underscore(&camelcase(&once)), once);
    }

    /// The underscore form never contains ASCII upper-case letters.
    #[test]
    fn underscore_has_no_uppercase(s in "[a-zA-Z0-9_]{0,32}") {
        prop_assert!(!underscore(&s).chars().any(|c| c.is_ascii_uppercase()));
    }

    /// camelcase removes every underscore.
    #[test]
    fn camelcase_removes_underscores(s in "[a-z_]{0,32}") {
        prop_assert!(!camelcase(&s).contains('_'));
    }
}

// =============================================================================
// Escaping
// =============================================================================

/// Undo `escape`, returning None on a dangling or unknown escape.
fn unescape(s: &str) -> Option<String> {
    let mut out = String::new();
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        out.push(match chars.next()? {
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            '"' => '"',
            '\\' => '\\',
            _ => return None,
        });
    }
    Some(out)
}

proptest! {
    /// No raw control character or quote survives escaping.
    #[test]
    fn escape_removes_raw_specials(s in "[a-z \n\r\t\"\\\\é]{0,48}") {
        let escaped = escape(&s);
        prop_assert!(!escaped.contains('\n'));
        prop_assert!(!escaped.contains('\r'));
        prop_assert!(!escaped.contains('\t'));
        prop_assert!(!escaped.replace("\\\"", "").replace("\\\\", "").contains('"'));
    }

    /// Escaping only adds backslashes; every other character is preserved.
    #[test]
    fn escape_preserves_content(s in any::<String>()) {
        prop_assert_eq!(unescape(&escape(&s)), Some(s));
    }
}

// =============================================================================
// Double formatting
// =============================================================================

proptest! {
    #[test]
    fn format_double_round_trips(value in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
        let text = format_double(value);
        prop_assert!(!text.contains('e') && !text.contains('E'));
        prop_assert!(text.contains('.'));
        let parsed: f64 = text.parse().unwrap();
        prop_assert_eq!(parsed.to_bits(), value.to_bits());
    }
}

#[test]
fn format_double_one_has_fraction() {
    let text = format_double(1.0);
    let (_, fraction) = text.split_once('.').expect("fixed notation with a fraction");
    assert!(!fraction.is_empty());
    assert_eq!(text.parse::<f64>().unwrap(), 1.0);
}
