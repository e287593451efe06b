/// Significant digits shown when printing a result.
pub const DISPLAY_PRECISION: usize = 6;

/// Formats a value like C's `%g` with six significant digits.
///
/// Fixed notation is used when the decimal exponent (after rounding) lies
/// in `-4..6`; otherwise the value is written as mantissa and exponent with
/// at least two exponent digits. Trailing zeros and a dangling decimal
/// point are removed in both forms.
///
/// ## Example
/// ```
/// use scalc::util::num::format_general;
///
/// assert_eq!(format_general(1024.0), "1024");
/// assert_eq!(format_general(1.0 / 3.0), "0.333333");
/// assert_eq!(format_general(-2.5), "-2.5");
/// assert_eq!(format_general(1e20), "1e+20");
/// assert_eq!(format_general(123_456_789.0), "1.23457e+08");
/// assert_eq!(format_general(0.0001), "0.0001");
/// assert_eq!(format_general(0.00001234), "1.234e-05");
/// assert_eq!(format_general(999_999.7), "1e+06");
/// assert_eq!(format_general(f64::INFINITY), "inf");
/// assert_eq!(format_general(f64::NEG_INFINITY), "-inf");
/// assert_eq!(format_general(f64::NAN), "nan");
/// assert_eq!(format_general(0.0), "0");
/// ```
#[must_use]
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Round to the display precision first; the exponent of the rounded
    // value decides between fixed and exponent notation.
    let scientific = format!("{:.*e}", DISPLAY_PRECISION - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    #[allow(clippy::cast_possible_wrap)]
    let precision = DISPLAY_PRECISION as i32;
    if (-4..precision).contains(&exponent) {
        #[allow(clippy::cast_sign_loss)]
        let decimals = (precision - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs())
    }
}

/// Strips trailing zeros after a decimal point, then the point itself.
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
