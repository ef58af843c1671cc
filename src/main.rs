//! CLI tool to run, check, and format turtle programs.

use std::fs;
use std::io::{self, Read as _, Write as _};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "turtle", version, about = "Run, check, and format turtle programs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a program and print the segments it draws
    Run {
        /// Program file; reads stdin when omitted
        file: Option<PathBuf>,
    },
    /// Check that programs are valid
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print a program in canonical form
    Fmt {
        /// Program file; reads stdin when omitted
        file: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    init_tracing();

    match Cli::parse().command {
        Command::Run { file } => run_program(file.as_deref()),
        Command::Check { files } => check_programs(&files),
        Command::Fmt { file } => format_program(file.as_deref()),
    }
}

/// Log to stderr, only when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn source_name(path: Option<&Path>) -> String {
    path.map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string())
}

fn read_source(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn write_stdout(text: &str) -> ExitCode {
    match io::stdout().lock().write_all(text.as_bytes()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("<stdout>: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_program(path: Option<&Path>) -> ExitCode {
    let name = source_name(path);
    let source = match read_source(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{name}: {e}");
            return ExitCode::FAILURE;
        }
    };

    match turtle_lang::run(&source) {
        Ok(segments) => write_stdout(&turtle_lang::render(&segments)),
        Err(e) => {
            println!("Syntaxfel på rad {}", e.line());
            eprintln!("{name}: {e}");
            ExitCode::FAILURE
        }
    }
}

fn check_programs(paths: &[PathBuf]) -> ExitCode {
    let mut had_error = false;

    for path in paths {
        let name = path.display();
        let source = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{name}: {e}");
                had_error = true;
                continue;
            }
        };

        match turtle_lang::parse_str(&source) {
            Ok(program) => {
                let statements = program.statement_count();
                eprintln!("{name}: valid ({statements} statement(s))");
            }
            Err(e) => {
                eprintln!("{name}: {e}");
                had_error = true;
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn format_program(path: Option<&Path>) -> ExitCode {
    let name = source_name(path);
    let source = match read_source(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{name}: {e}");
            return ExitCode::FAILURE;
        }
    };

    match turtle_lang::parse_str(&source) {
        Ok(program) => write_stdout(&turtle_lang::format(&program)),
        Err(e) => {
            eprintln!("{name}: {e}");
            ExitCode::FAILURE
        }
    }
}
