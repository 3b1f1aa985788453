//! Star-rating colorizer.
//!
//! A rating control lists its labels highest-value first, so a rating of `v`
//! lights the last `v` labels. Input values arrive as strings and are coerced
//! with the browser's string-to-number rules before comparing.

use crate::config::RatingPalette;

/// Display state of one rating label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarColor {
    Dim,
    Highlight,
}

impl StarColor {
    /// CSS color for this state.
    pub fn css(self, palette: &RatingPalette) -> &str {
        match self {
            StarColor::Dim => &palette.dim,
            StarColor::Highlight => &palette.highlight,
        }
    }
}

/// Colors for `label_count` labels given the input's raw `value`.
///
/// Label `i` is dimmed when `i < max - value`. A value that does not coerce
/// to a number makes every comparison false, which highlights all labels.
pub fn star_colors(value: &str, label_count: usize, max: f64) -> Vec<StarColor> {
    let limit = max - to_number(value);
    (0..label_count)
        .map(|index| {
            if (index as f64) < limit {
                StarColor::Dim
            } else {
                StarColor::Highlight
            }
        })
        .collect()
}

/// Convert a string to a number the way a browser coerces form values.
///
/// Surrounding whitespace is ignored, the empty string is zero, `0x`/`0o`/`0b`
/// literals and `Infinity` are accepted, and anything else that is not a
/// decimal literal is NaN.
pub fn to_number(input: &str) -> f64 {
    let text = input.trim_matches(is_js_whitespace);
    if text.is_empty() {
        return 0.0;
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = text.strip_prefix(prefix) {
            return parse_radix(digits, radix);
        }
    }

    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned == "Infinity" {
        return if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    // Rust's float parser also accepts "inf" and "nan", which browsers do not.
    let is_decimal = unsigned
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !is_decimal {
        return f64::NAN;
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix)
                .map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

fn is_js_whitespace(c: char) -> bool {
    // Unicode White_Space minus NEL, plus the byte-order mark
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlighted(colors: &[StarColor]) -> usize {
        colors.iter().filter(|c| **c == StarColor::Highlight).count()
    }

    #[test]
    fn test_each_rating_lights_last_labels() {
        for value in 0..=5usize {
            let colors = star_colors(&value.to_string(), 5, 5.0);
            assert_eq!(highlighted(&colors), value, "value {}", value);
            // Highlighted labels are the trailing ones
            for (index, color) in colors.iter().enumerate() {
                let expected = if index < 5 - value {
                    StarColor::Dim
                } else {
                    StarColor::Highlight
                };
                assert_eq!(*color, expected, "value {} index {}", value, index);
            }
        }
    }

    #[test]
    fn test_empty_value_dims_all() {
        let colors = star_colors("", 5, 5.0);
        assert_eq!(highlighted(&colors), 0);
    }

    #[test]
    fn test_non_numeric_value_highlights_all() {
        assert_eq!(highlighted(&star_colors("abc", 5, 5.0)), 5);
        assert_eq!(highlighted(&star_colors("inf", 5, 5.0)), 5);
    }

    #[test]
    fn test_fractional_and_out_of_range_values() {
        // 5 - 2.5 = 2.5, so indices 0..=2 are dimmed
        assert_eq!(highlighted(&star_colors("2.5", 5, 5.0)), 2);
        assert_eq!(highlighted(&star_colors("-1", 5, 5.0)), 0);
        assert_eq!(highlighted(&star_colors("9", 5, 5.0)), 5);
    }

    #[test]
    fn test_label_count_differs_from_max() {
        // The comparison is against the configured max, not the label count
        let colors = star_colors("1", 3, 5.0);
        assert_eq!(colors, vec![StarColor::Dim, StarColor::Dim, StarColor::Dim]);
    }

    #[test]
    fn test_to_number_decimal_forms() {
        assert_eq!(to_number("3"), 3.0);
        assert_eq!(to_number(" 4\n"), 4.0);
        assert_eq!(to_number("+2"), 2.0);
        assert_eq!(to_number("-2"), -2.0);
        assert_eq!(to_number(".5"), 0.5);
        assert_eq!(to_number("5."), 5.0);
        assert_eq!(to_number("1e1"), 10.0);
        assert_eq!(to_number("\u{FEFF}1"), 1.0);
    }

    #[test]
    fn test_to_number_special_forms() {
        assert_eq!(to_number(""), 0.0);
        assert_eq!(to_number("   "), 0.0);
        assert_eq!(to_number("0x1F"), 31.0);
        assert_eq!(to_number("0b101"), 5.0);
        assert_eq!(to_number("0o17"), 15.0);
        assert_eq!(to_number("Infinity"), f64::INFINITY);
        assert_eq!(to_number("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_to_number_rejects_invalid() {
        for text in ["abc", "1e", ".", "0x", "-0x1", "inf", "NaN", "1_0", "3 stars", "\u{85}1"] {
            assert!(to_number(text).is_nan(), "{:?}", text);
        }
    }

    #[test]
    fn test_css_lookup() {
        let palette = RatingPalette::default();
        assert_eq!(StarColor::Dim.css(&palette), "#ccc");
        assert_eq!(StarColor::Highlight.css(&palette), "gold");
    }
}
