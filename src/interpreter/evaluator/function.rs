/// Builtin function implementations that are more than a single `f64`
/// method call.
pub mod builtin;

/// The builtin table and call dispatch.
pub mod core;
