/// Command-line splitting and the `:` command set.
///
/// Splits the text after a leading `:` into shell-like terms, honoring
/// single and double quotes and backslash escapes, and maps the first term
/// to a [`command::Command`].
pub mod command;

/// The line-oriented session driver.
///
/// Reads lines from any buffered stream, dispatches commands, evaluates
/// expressions against the shared environment, and sources files
/// recursively up to a fixed depth.
pub mod driver;
