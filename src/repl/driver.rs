use std::{
    fmt::Display,
    fs::File,
    io::{self, BufRead, BufReader, Stderr, Stdout, Write},
    path::Path,
};

use crossterm::style::Stylize;

use crate::{
    calculate,
    error::Error,
    interpreter::evaluator::{
        core::{ANSWER_VARIABLE, Environment},
        function::core::BUILTIN_FUNCTIONS,
    },
    repl::command::Command,
    util::num::format_general,
};

/// Deepest level of nested `:file` sourcing that is still processed.
///
/// The top-level stream is depth `0`; a stream opened at a depth beyond
/// this is skipped without any message, which is what stops a file that
/// sources itself.
pub const MAX_DEPTH: usize = 128;

/// Text written before each interactive read.
pub const PROMPT: &str = "> ";

/// Script sourced at startup when it exists.
pub const DEFAULT_INIT_FILE: &str = "init.scalc";

/// Runtime switches handed to a [`Session`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Stop the interactive stream after a single line.
    pub once: bool,
}

/// Whether the current stream keeps going after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Version line printed by `-v`, after the program name.
pub const VERSION_TEXT: &str = concat!(env!("CARGO_PKG_VERSION"), "\nCopyright (C) 2025 Qvito");

/// Builds the usage text printed by `:help` and by `-h`.
///
/// # Example
/// ```
/// let help = scalc::repl::driver::help_text();
/// assert!(help.contains("    :file <paths>"));
/// assert!(help.contains("log/2"));
/// ```
#[must_use]
pub fn help_text() -> String {
    let functions = BUILTIN_FUNCTIONS.iter()
                                     .map(|(name, arity)| format!("{name}/{arity}"))
                                     .collect::<Vec<_>>()
                                     .join(" ");
    format!("Usage: scalc [options]
Options:
  -h --help         Display this information.
  -v --version      Display calculator version information.
  -o --once         Run the calculation only once and then exit.
  -f <path>
    --file <path>   Execute commands from specified file.
Interactive commands:
  :e :exit          Exit interactive mode.
  :h :help          Display this information.
  :f <paths>
    :file <paths>   Execute commands from specified files.
  <expression>      Calculate expression. The result is stored in variable '{ANSWER_VARIABLE}'.
Functions:
  {functions}
")
}

/// Opens a script for sourcing. A directory opens fine on some platforms
/// but cannot be read as lines, so it counts as unopenable.
fn open_script(path: &Path) -> Option<File> {
    let file = File::open(path).ok()?;
    file.metadata().is_ok_and(|meta| !meta.is_dir()).then_some(file)
}

/// A calculator session: one environment plus its output channels.
///
/// Every stream the session processes, including files pulled in with
/// `:file`, reads and writes the same [`Environment`].
///
/// # Example
/// ```
/// use scalc::repl::driver::{Session, SessionOptions};
///
/// let mut session = Session::new(SessionOptions::default(), Vec::new(), Vec::new());
/// session.process("x = 4\nsqrt(x) + 1\n".as_bytes(), true, 0).unwrap();
///
/// let (env, out, err) = session.into_parts();
/// assert_eq!(env.get("x"), Some(4.0));
/// assert_eq!(env.get("Ans"), Some(3.0));
/// assert_eq!(String::from_utf8(out).unwrap(), "> Ans: 4\n> Ans: 3\n> ");
/// assert!(err.is_empty());
/// ```
pub struct Session<O: Write, E: Write> {
    env:     Environment,
    options: SessionOptions,
    out:     O,
    err:     E,
}

impl Session<Stdout, Stderr> {
    /// Creates a session writing results to stdout and errors to stderr.
    #[must_use]
    pub fn stdio(options: SessionOptions) -> Self {
        Self::new(options, io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Session<O, E> {
    /// Creates a session with a fresh environment.
    pub fn new(options: SessionOptions, out: O, err: E) -> Self {
        Self { env: Environment::new(),
               options,
               out,
               err }
    }

    /// Mutable access to the session's variables.
    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    /// Consumes the session, returning the environment and both writers.
    pub fn into_parts(self) -> (Environment, O, E) {
        (self.env, self.out, self.err)
    }

    /// Sources each startup script that can be opened, in order.
    ///
    /// Paths that cannot be opened, directories included, are skipped
    /// silently; the default `init.scalc` is usually absent.
    ///
    /// # Errors
    /// Propagates failures to write to the output channels.
    pub fn run_startup_files<P: AsRef<Path>>(&mut self, paths: &[P]) -> io::Result<()> {
        for path in paths {
            if let Some(file) = open_script(path.as_ref()) {
                self.source(BufReader::new(file), 0)?;
            }
        }
        Ok(())
    }

    /// Evaluates one expression line and stores the result in `Ans`.
    ///
    /// The line is evaluated as `Ans = <line>`, so an assignment such as
    /// `x = 5` binds both `x` and `Ans`.
    ///
    /// # Errors
    /// Returns the parse or runtime error of the line. Assignments that ran
    /// before the failure are kept.
    pub fn evaluate_line(&mut self, line: &str) -> Result<f64, Error> {
        calculate(&format!("{ANSWER_VARIABLE} = {line}"), &mut self.env)
    }

    /// Processes a stream line by line until it ends or `:exit` is read.
    ///
    /// - Empty lines are skipped.
    /// - Lines starting with `:` are commands.
    /// - Everything else is an expression, see [`Session::evaluate_line`].
    ///
    /// In interactive mode a prompt precedes each read and results are
    /// printed; with [`SessionOptions::once`] the stream stops after the
    /// first line. Errors on a line are reported and never end the stream.
    /// Streams deeper than [`MAX_DEPTH`] are ignored.
    ///
    /// # Errors
    /// Returns I/O errors from reading `input` or writing to the output
    /// channels.
    pub fn process<R: BufRead>(&mut self,
                               mut input: R,
                               interactive: bool,
                               depth: usize)
                               -> io::Result<()> {
        if depth > MAX_DEPTH {
            return Ok(());
        }

        let mut buffer = Vec::new();
        loop {
            if interactive {
                write!(self.out, "{PROMPT}")?;
                self.out.flush()?;
            }

            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            let text = String::from_utf8_lossy(&buffer);
            let line = text.trim_end_matches('\n').trim_end_matches('\r');

            let flow = self.handle_line(line, interactive, depth)?;
            if flow == Flow::Stop || (interactive && self.options.once) {
                break;
            }
        }
        Ok(())
    }

    fn handle_line(&mut self, line: &str, interactive: bool, depth: usize) -> io::Result<Flow> {
        if line.is_empty() {
            return Ok(Flow::Continue);
        }

        if let Some(command) = line.strip_prefix(':') {
            return match Command::parse(command) {
                Ok(Some(command)) => self.dispatch(command, interactive, depth),
                Ok(None) => Ok(Flow::Continue),
                Err(err) => {
                    self.report(&err)?;
                    Ok(Flow::Continue)
                },
            };
        }

        match self.evaluate_line(line) {
            Ok(value) if interactive => {
                writeln!(self.out, "{ANSWER_VARIABLE}: {}", format_general(value))?;
            },
            Ok(_) => {},
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn dispatch(&mut self, command: Command, interactive: bool, depth: usize) -> io::Result<Flow> {
        match command {
            Command::Exit => return Ok(Flow::Stop),
            Command::Help => {
                if interactive {
                    write!(self.out, "{}", help_text())?;
                    self.out.flush()?;
                }
            },
            Command::File(paths) => {
                for path in paths {
                    match open_script(&path) {
                        Some(file) => self.source(BufReader::new(file), depth + 1)?,
                        None => {
                            self.report(&format_args!("Cannot open file {}", path.display()))?;
                        },
                    }
                }
            },
            Command::Unknown(_) => {},
        }
        Ok(Flow::Continue)
    }

    /// Runs a sourced stream non-interactively.
    ///
    /// A read failure ends only that stream; it is reported and the caller
    /// carries on.
    fn source<R: BufRead>(&mut self, input: R, depth: usize) -> io::Result<()> {
        if let Err(err) = self.process(input, false, depth) {
            self.report(&err)?;
        }
        Ok(())
    }

    fn report(&mut self, err: &dyn Display) -> io::Result<()> {
        writeln!(self.err, "{}", format!("Error: {err}").red())?;
        self.err.flush()
    }
}
