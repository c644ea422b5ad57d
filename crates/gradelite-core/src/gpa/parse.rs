//! Lenient grade parsing
//!
//! Grades arrive as free text. The longest leading decimal number is used
//! and anything that does not start with one counts as 0, so a blank field
//! never blocks a calculation.

/// Parse a grade, returning 0 for missing or non-numeric input.
///
/// Leading whitespace is skipped and trailing garbage ignored: `"8.5"` is
/// 8.5, `" 9abc"` is 9, `""`, `"abc"` and `"-"` are 0. Values that overflow
/// to infinity are also 0.
pub fn parse_grade(input: &str) -> f64 {
    let trimmed = input.trim_start();
    let end = numeric_prefix_len(trimmed);
    trimmed[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Length in bytes of the decimal literal at the start of `s`, or 0
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_digits = digits_from(i);
    i += int_digits;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_digits = digits_from(i + 1);
        if int_digits > 0 || frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = digits_from(j);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }

    i
}
