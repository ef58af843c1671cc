//! Lexer, parser, interpreter, and formatter for a small turtle
//! graphics language.
//!
//! Programs are sequences of period-terminated commands (`FORW`, `BACK`,
//! `LEFT`, `RIGHT`, `DOWN`, `UP`, `COLOR`) and `REP` loops. Keywords and
//! hex digits are case-insensitive and `%` starts a line comment.
//! Running a program yields the line segments drawn while the pen is
//! down.
//!
//! # Quick start
//!
//! ## Run a program
//!
//! ```
//! use turtle_lang::{render, run};
//!
//! let input = "DOWN.\nREP 2 \"FORW 1. LEFT 90.\"\n";
//! let segments = run(input).unwrap();
//! assert_eq!(
//!     render(&segments),
//!     "#0000FF 0.0000 0.0000 1.0000 0.0000\n\
//!      #0000FF 1.0000 0.0000 1.0000 1.0000\n"
//! );
//! ```
//!
//! ## Stage by stage
//!
//! ```
//! use turtle_lang::{interpret, parse, tokenize};
//!
//! let tokens = tokenize("down. forw 3. % comment\n");
//! let program = parse(&tokens).unwrap();
//! let segments = interpret(&program);
//! assert_eq!(segments.len(), 1);
//! ```
//!
//! ## Build a program programmatically
//!
//! ```
//! use turtle_lang::{Program, format};
//!
//! let program = Program::new().down().rep(4, Program::new().forw(1).left(90));
//! assert_eq!(format(&program), "DOWN.\nREP 4 \"FORW 1. LEFT 90.\"\n");
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod ast;
pub mod builder;
pub mod formatter;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod stack;
pub mod token;

pub use ast::{Color, InvalidColor, MoveDirection, Node, Program, TurnDirection};
pub use formatter::format;
pub use interpreter::{Interpreter, Point, Segment, Turtle, interpret, render};
pub use lexer::{LexErrorKind, tokenize};
pub use parser::{ParseError, ParseErrorKind, parse};
pub use token::{Keyword, Position, Token, TokenKind};

/// Tokenize and parse a program in one step.
pub fn parse_str(input: &str) -> Result<Program, ParseError> {
    parse(&tokenize(input))
}

/// Tokenize, parse, and interpret a program.
///
/// Nothing is interpreted unless the whole program parses.
pub fn run(input: &str) -> Result<Vec<Segment>, ParseError> {
    let program = parse_str(input)?;
    Ok(interpret(&program))
}
