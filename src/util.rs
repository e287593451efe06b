/// Number formatting helpers.
///
/// Renders results the way the calculator prints them: six significant
/// digits, trailing zeros removed, switching to exponent notation for very
/// large or very small magnitudes.
pub mod num;
