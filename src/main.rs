use std::fs::read_to_string;
use std::io::Write;
use std::path::Path;
use std::process::exit;
use std::{env, io};

use thiserror::Error;
use tracing::debug;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lox_scan::repl::PromptLines;
use lox_scan::{tokenize, ConsoleReporter, ErrorReporter, Keywords};

/// Wrong number of arguments.
const EXIT_USAGE: i32 = 64;
/// The script had lexical errors.
const EXIT_SCAN_ERROR: i32 = 69;

#[derive(Debug, Error)]
enum CLIError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error("file does not seem to exist {0}")]
    FileDoesNotExist(String),
    #[error("failed to initialize logging: {0}")]
    Logging(#[from] TryInitError),
}

fn main() -> Result<(), color_eyre::eyre::Error> {
    color_eyre::install()?;
    init_logging()?;

    let args: Vec<String> = env::args().collect();
    debug!(args = %args.join(" "), "starting");
    if args.len() > 2 {
        println!("Too many arguments received ({})", args.len() - 1);
        println!("Usage: lox-scan [script]");
        exit(EXIT_USAGE);
    }

    let keywords = Keywords::new();
    if args.len() == 2 {
        let file_path = &args[1];
        if run_file(file_path, &keywords)? {
            exit(EXIT_SCAN_ERROR);
        }
    } else {
        run_prompt(&keywords)?;
    }
    Ok(())
}

/// Log level comes from `RUST_LOG`, warnings only by default. Logs go to stderr so they
/// never mix with the token dump.
fn init_logging() -> Result<(), CLIError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()?;
    Ok(())
}

/// Returns whether any lexical error was reported.
fn run_file(path_string: &str, keywords: &Keywords) -> Result<bool, CLIError> {
    let path = Path::new(path_string);
    if !path.try_exists()? {
        return Err(CLIError::FileDoesNotExist(path_string.to_string()));
    }
    let source = read_to_string(path)?;
    debug!(path = path_string, bytes = source.len(), "read script");

    let mut reporter = ConsoleReporter::new(io::stderr());
    run(&source, keywords, &mut reporter, &mut io::stdout().lock())?;
    Ok(reporter.had_error())
}

fn run_prompt(keywords: &Keywords) -> Result<(), CLIError> {
    fn prompt() -> Result<(), io::Error> {
        print!("> ");
        io::stdout().flush()
    }

    println!("Welcome to lox-scan.");
    let mut reporter = ConsoleReporter::new(io::stderr());
    prompt()?;
    for line in PromptLines::new(io::stdin().lock()) {
        run(&line?, keywords, &mut reporter, &mut io::stdout().lock())?;
        // every prompt line is a fresh program
        reporter.reset();
        prompt()?;
    }
    Ok(())
}

fn run<R, W>(source: &str, keywords: &Keywords, reporter: &mut R, out: &mut W) -> io::Result<()>
where
    R: ErrorReporter,
    W: Write,
{
    for token in tokenize(source, keywords, reporter) {
        writeln!(out, "{token}")?;
    }
    Ok(())
}
