use std::path::PathBuf;

use crate::error::CommandError;

/// A recognized `:` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `:e` / `:exit` ends the current stream.
    Exit,
    /// `:h` / `:help` prints usage in interactive mode.
    Help,
    /// `:f` / `:file` sources each listed path in order.
    File(Vec<PathBuf>),
    /// Any other command word. The driver ignores these.
    Unknown(String),
}

impl Command {
    /// Parses the text of a command line after its leading `:`.
    ///
    /// Returns `Ok(None)` when the line holds no terms at all.
    ///
    /// # Errors
    /// Returns `CommandError::UnclosedQuote` if a quote is left open.
    ///
    /// # Example
    /// ```
    /// use std::path::PathBuf;
    ///
    /// use scalc::repl::command::Command;
    ///
    /// assert_eq!(Command::parse("e").unwrap(), Some(Command::Exit));
    /// assert_eq!(Command::parse("help").unwrap(), Some(Command::Help));
    /// assert_eq!(Command::parse(r#"f "my vars.scalc" b"#).unwrap(),
    ///            Some(Command::File(vec![PathBuf::from("my vars.scalc"), PathBuf::from("b")])));
    /// assert_eq!(Command::parse("   ").unwrap(), None);
    /// ```
    pub fn parse(input: &str) -> Result<Option<Self>, CommandError> {
        let mut terms = split_terms(input)?.into_iter();
        let Some(word) = terms.next() else {
            return Ok(None);
        };

        let command = match word.as_str() {
            "e" | "exit" => Self::Exit,
            "h" | "help" => Self::Help,
            "f" | "file" => Self::File(terms.map(PathBuf::from).collect()),
            _ => Self::Unknown(word),
        };
        Ok(Some(command))
    }
}

/// Splits a command line into terms.
///
/// The input is the line without its leading `:`. Rules, in priority
/// order, for each character:
///
/// 1. after a backslash, the character is taken literally, whatever it is;
/// 2. a backslash starts an escape and is itself dropped;
/// 3. `'` or `"` opens a quote when unquoted, closes it when it matches the
///    opening character, and is literal inside the other kind of quote;
/// 4. an unquoted space ends the current term;
/// 5. anything else is appended to the current term.
///
/// Empty terms are never produced. Only the space character separates
/// terms; tabs are ordinary characters.
///
/// # Errors
/// Returns `CommandError::UnclosedQuote` if the input ends inside quotes.
///
/// # Example
/// ```
/// use scalc::repl::command::split_terms;
///
/// assert_eq!(split_terms(r#"file "a b.txt" 'c.txt'"#).unwrap(),
///            vec!["file", "a b.txt", "c.txt"]);
/// assert_eq!(split_terms(r#"f it\'s "say \"hi\"""#).unwrap(),
///            vec!["f", "it's", r#"say "hi""#]);
/// assert!(split_terms("f 'open").is_err());
/// ```
pub fn split_terms(input: &str) -> Result<Vec<String>, CommandError> {
    let mut terms = Vec::new();
    let mut term = String::new();
    let mut quote: Option<char> = None;
    let mut escaping = false;

    for c in input.chars() {
        if escaping {
            term.push(c);
            escaping = false;
            continue;
        }
        match (c, quote) {
            ('\\', _) => escaping = true,
            ('"' | '\'', None) => quote = Some(c),
            ('"' | '\'', Some(open)) if c == open => quote = None,
            (' ', None) => {
                if !term.is_empty() {
                    terms.push(std::mem::take(&mut term));
                }
            },
            _ => term.push(c),
        }
    }

    if let Some(quote) = quote {
        return Err(CommandError::UnclosedQuote { quote });
    }
    if !term.is_empty() {
        terms.push(term);
    }
    Ok(terms)
}
