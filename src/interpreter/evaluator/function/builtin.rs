/// Computes the logarithm of `x` in the given `base`: `ln(x) / ln(base)`.
///
/// Bases of `1`, `0` or below follow IEEE 754 and give infinities or NaN.
///
/// # Example
/// ```
/// use scalc::interpreter::evaluator::function::builtin::log;
///
/// assert_eq!(log(2.0, 8.0), 3.0);
/// assert!(log(1.0, 8.0).is_infinite());
/// ```
#[must_use]
pub fn log(base: f64, x: f64) -> f64 {
    x.ln() / base.ln()
}

/// Floating-point remainder of `a / b`, truncating toward zero.
///
/// The result takes the sign of `a`, as with C's `fmod`, so `fmod(-5, 3)`
/// is `-2` rather than `1`.
///
/// # Example
/// ```
/// use scalc::interpreter::evaluator::function::builtin::fmod;
///
/// assert_eq!(fmod(5.0, 3.0), 2.0);
/// assert_eq!(fmod(-5.0, 3.0), -2.0);
/// assert_eq!(fmod(5.0, -3.0), 2.0);
/// assert!(fmod(1.0, 0.0).is_nan());
/// ```
#[must_use]
pub fn fmod(a: f64, b: f64) -> f64 {
    a % b
}
