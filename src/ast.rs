use std::str::FromStr;
use std::{fmt, mem};

use crate::stack::ensure_sufficient_stack;

/// Complete program: the top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub statements: Vec<Node>,
}

/// A single statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// `FORW n.` / `BACK n.`
    Move {
        direction: MoveDirection,
        distance: u32,
    },
    /// `LEFT n.` / `RIGHT n.`
    Turn {
        direction: TurnDirection,
        degrees: u32,
    },
    /// `DOWN.` / `UP.`
    PenState { down: bool },
    /// `COLOR #RRGGBB.`
    SetColor(Color),
    /// `REP n <statement>` or `REP n "<statements>"`.
    Repeat { count: u32, body: Vec<Self> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Forward,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnDirection {
    Left,
    Right,
}

/// Pen color: `#` followed by six upper-case hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    /// Color the turtle starts with.
    pub const DEFAULT_HEX: &'static str = "#0000FF";

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self(Self::DEFAULT_HEX.to_string())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error returned when a string is not a valid `#RRGGBB` color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color '{literal}', expected '#' followed by 6 hex digits")]
pub struct InvalidColor {
    pub literal: String,
}

impl FromStr for Color {
    type Err = InvalidColor;

    /// Accepts hex digits in either case and normalizes to upper case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let valid = s
            .strip_prefix('#')
            .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()));
        if valid {
            Ok(Self(s.to_ascii_uppercase()))
        } else {
            Err(InvalidColor {
                literal: s.to_string(),
            })
        }
    }
}

impl Node {
    /// Number of statements in this node, counting nested repeat
    /// bodies once each (not multiplied by the repeat count).
    #[must_use]
    pub fn statement_count(&self) -> usize {
        match self {
            Self::Repeat { body, .. } => {
                1 + ensure_sufficient_stack(|| body.iter().map(Self::statement_count).sum::<usize>())
            }
            _ => 1,
        }
    }
}

/// Frees nested repeat bodies from an explicit work list, so dropping
/// a deeply nested tree does not recurse once per level.
impl Drop for Node {
    fn drop(&mut self) {
        let Self::Repeat { body, .. } = self else {
            return;
        };
        if !body.iter().any(|node| matches!(node, Self::Repeat { .. })) {
            return;
        }
        let mut pending = mem::take(body);
        while let Some(mut node) = pending.pop() {
            if let Self::Repeat { body, .. } = &mut node {
                pending.append(body);
            }
        }
    }
}

impl Program {
    /// Total statements including those nested in repeat bodies.
    #[must_use]
    pub fn statement_count(&self) -> usize {
        self.statements.iter().map(Node::statement_count).sum()
    }
}
