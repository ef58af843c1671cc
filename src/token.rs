use std::fmt;

use crate::lexer::LexErrorKind;

/// Source location for error reporting.
///
/// `index` counts characters of the case-folded input. `line` and
/// `column` are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub index: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Position of the first character of the input.
    #[must_use]
    pub const fn start() -> Self {
        Self {
            index: 0,
            line: 1,
            column: 1,
        }
    }

    /// Step past `ch`. A newline moves to the start of the next line.
    pub const fn advance(&mut self, ch: char) {
        self.index += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

/// The eight instruction words of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Forw,
    Back,
    Left,
    Right,
    Down,
    Up,
    Color,
    Rep,
}

impl Keyword {
    pub const ALL: [Self; 8] = [
        Self::Forw,
        Self::Back,
        Self::Left,
        Self::Right,
        Self::Down,
        Self::Up,
        Self::Color,
        Self::Rep,
    ];

    /// Look up an already upper-cased word.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kw| kw.as_str() == word)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Forw => "FORW",
            Self::Back => "BACK",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Down => "DOWN",
            Self::Up => "UP",
            Self::Color => "COLOR",
            Self::Rep => "REP",
        }
    }

    /// Whether the keyword must be followed by a separator character.
    ///
    /// `DOWN` and `UP` take no argument, so `DOWN.` is fine.
    #[must_use]
    pub const fn needs_separator(self) -> bool {
        !matches!(self, Self::Down | Self::Up)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// One of the instruction words.
    Keyword(Keyword),
    /// Positive integer literal.
    Number(u32),
    /// Color literal (`#` followed by hex digits), upper-cased.
    Hex(String),
    /// Statement terminator `.`.
    Period,
    /// Block delimiter `"`.
    Quote,
    /// Lexically malformed input, reported once the parser reaches it.
    Error(LexErrorKind),
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Short name used in diagnostics.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Keyword(kw) => kw.as_str(),
            Self::Number(_) => "number",
            Self::Hex(_) => "color",
            Self::Period => "'.'",
            Self::Quote => "'\"'",
            Self::Error(_) => "invalid input",
            Self::Eof => "end of input",
        }
    }
}

/// A single token with its kind and source range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: Position,
    pub end: Position,
}

impl Token {
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}
