//! Pretty-printer that serializes a program back into canonical source.
//!
//! One top-level statement per line. Repeat bodies with a single
//! statement are printed bare, longer bodies inline between quotes.

use std::fmt::Write as _;

use crate::ast::{MoveDirection, Node, Program, TurnDirection};
use crate::stack::ensure_sufficient_stack;
use crate::token::Keyword;

/// Format a [`Program`] as source text.
///
/// Parsing the result gives back an equal program for anything the
/// parser can produce. A hand-built `Repeat` with an empty body is
/// printed as `REP n ""`, which does not parse.
#[must_use]
pub fn format(program: &Program) -> String {
    let mut out = String::new();
    for node in &program.statements {
        format_node(&mut out, node);
        out.push('\n');
    }
    out
}

fn format_node(out: &mut String, node: &Node) {
    match node {
        Node::Move {
            direction,
            distance,
        } => {
            let keyword = match direction {
                MoveDirection::Forward => Keyword::Forw,
                MoveDirection::Back => Keyword::Back,
            };
            let _ = write!(out, "{keyword} {distance}.");
        }
        Node::Turn { direction, degrees } => {
            let keyword = match direction {
                TurnDirection::Left => Keyword::Left,
                TurnDirection::Right => Keyword::Right,
            };
            let _ = write!(out, "{keyword} {degrees}.");
        }
        Node::PenState { down: true } => out.push_str("DOWN."),
        Node::PenState { down: false } => out.push_str("UP."),
        Node::SetColor(color) => {
            let _ = write!(out, "COLOR {color}.");
        }
        Node::Repeat { count, body } => {
            let _ = write!(out, "REP {count} ");
            ensure_sufficient_stack(|| format_body(out, body));
        }
    }
}

fn format_body(out: &mut String, body: &[Node]) {
    if let [single] = body {
        format_node(out, single);
        return;
    }

    out.push('"');
    for (i, node) in body.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        format_node(out, node);
    }
    out.push('"');
}
