//! Leading-prefix number parsing and number-to-text formatting

const INFINITY: &str = "Infinity";

/// Parses the longest numeric prefix of `input`, ignoring whatever follows.
///
/// Leading whitespace is skipped. Accepted shapes: an optional sign, then
/// either `Infinity` or digits with an optional fraction and exponent.
/// Returns `f64::NAN` when there is no numeric prefix at all.
///
/// # Examples
///
/// ```
/// use contracts::numeric::parse_leading_float;
///
/// assert_eq!(parse_leading_float("12abc"), 12.0);
/// assert_eq!(parse_leading_float("  -3.5e2px"), -350.0);
/// assert!(parse_leading_float("abc").is_nan());
/// ```
pub fn parse_leading_float(input: &str) -> f64 {
    let trimmed = input.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let bytes = trimmed.as_bytes();

    let mut pos = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        pos += 1;
    }

    if trimmed[pos..].starts_with(INFINITY) {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(&bytes[pos + 1..]);
        // A lone "." after the integer part still belongs to the number ("1." -> 1)
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
        let mut exp_pos = pos + 1;
        if matches!(bytes.get(exp_pos), Some(b'+') | Some(b'-')) {
            exp_pos += 1;
        }
        let exp_digits = count_digits(&bytes[exp_pos.min(bytes.len())..]);
        if exp_digits > 0 {
            pos = exp_pos + exp_digits;
        }
    }

    trimmed[..pos].parse::<f64>().unwrap_or(f64::NAN)
}

/// Same parse as [`parse_leading_float`], with "no number" as `None`.
pub fn parse_number(input: &str) -> Option<f64> {
    let value = parse_leading_float(input);
    if value.is_nan() {
        None
    } else {
        Some(value)
    }
}

/// Renders a number the way a browser stringifies it: integral values without
/// a fraction, `NaN`/`Infinity` spelled out, and exponent form outside
/// `[1e-6, 1e21)`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 {
            INFINITY.to_string()
        } else {
            format!("-{}", INFINITY)
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => formatted,
        };
    }

    format!("{}", value)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
