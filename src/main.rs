// minicalc: tokenize, parse or evaluate an expression program from a file or stdin

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser as CliParser, ValueEnum};
use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use minicalc::interpreter::engine::Interpreter;
use minicalc::parser::ast::SourceLocation;
use minicalc::parser::lexer::Lexer;
use minicalc::parser::parse::Parser;
use minicalc::Error;

/// What to produce from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Print one `KIND:lexeme` line per token
    Tokens,
    /// Print the parsed program
    Ast,
    /// Evaluate the program and print its result
    Eval,
}

/// minicalc evaluates `;`-separated integer expressions with variables.
#[derive(CliParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Source file to read. Standard input is used when omitted.
    file: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Mode::Eval)]
    mode: Mode,

    /// After evaluating, print every variable binding sorted by name.
    #[arg(short, long)]
    bindings: bool,

    /// Raise log verbosity (-v for debug, -vv for trace). Overrides RUST_LOG.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let (source, filename) = match read_input(args.file.as_deref()) {
        Ok(input) => input,
        Err(e) => {
            let name = args
                .file
                .as_deref()
                .map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string());
            report(None, &format!("Could not read input '{}': {}", name, e));
            process::exit(1);
        }
    };

    if let Err(err) = run_mode(&args, &source, &filename) {
        report(Some(err.location()), &err.message());
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Returns the source text and the name used for it in diagnostics
fn read_input(file: Option<&Path>) -> io::Result<(String, String)> {
    match file {
        Some(path) => {
            let source = fs::read_to_string(path)?;
            Ok((source, path.display().to_string()))
        }
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok((source, "<stdin>".to_string()))
        }
    }
}

fn run_mode(args: &Args, source: &str, filename: &str) -> Result<(), Error> {
    debug!(mode = ?args.mode, filename, bytes = source.len(), "starting");

    match args.mode {
        Mode::Tokens => {
            for token in Lexer::from_source(source, filename).tokenize()? {
                println!("{}", token.dump());
            }
        }
        Mode::Ast => {
            let program = Parser::from_source(source, filename).parse_program()?;
            println!("{}", program);
        }
        Mode::Eval => {
            let program = Parser::from_source(source, filename).parse_program()?;
            info!(units = program.units().len(), "parsed {}", filename);

            let mut interpreter = Interpreter::new();
            let result = interpreter.run(&program)?;
            println!("{}", result);

            if args.bindings {
                for (name, value) in interpreter.environment().bindings() {
                    println!("{} = {}", name, value);
                }
            }
        }
    }

    Ok(())
}

/// Print a diagnostic as `file:line:column: Error: message`, colouring the
/// tag when stderr is a terminal.
fn report(location: Option<&SourceLocation>, message: &str) {
    let prefix = location.map_or_else(String::new, |loc| format!("{}: ", loc));
    let mut stderr = io::stderr();

    if stderr.is_terminal() {
        let _ = execute!(
            stderr,
            Print(prefix),
            SetForegroundColor(Color::Red),
            Print("Error:"),
            ResetColor,
            Print(format!(" {}\n", message))
        );
    } else {
        eprintln!("{}Error: {}", prefix, message);
    }
}
