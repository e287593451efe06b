use std::{io, path::PathBuf, process::ExitCode};

use clap::{ArgAction, Parser};
use scalc::repl::driver::{DEFAULT_INIT_FILE, Session, SessionOptions, VERSION_TEXT, help_text};

/// scalc is a small interactive calculator. Every result is stored in the
/// variable `Ans`.
#[derive(Parser, Debug)]
#[command(version = VERSION_TEXT,
          about,
          long_about = None,
          disable_version_flag = true,
          override_help = help_text())]
struct Args {
    /// Display calculator version information.
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,

    /// Run the calculation only once and then exit.
    #[arg(short, long)]
    once: bool,

    /// Execute commands from the specified file before reading input. May
    /// be given more than once.
    #[arg(short, long = "file", value_name = "PATH")]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut startup = vec![PathBuf::from(DEFAULT_INIT_FILE)];
    startup.extend(args.files);

    let mut session = Session::stdio(SessionOptions { once: args.once });
    let result = session.run_startup_files(&startup)
                        .and_then(|()| session.process(io::stdin().lock(), true, 0));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
