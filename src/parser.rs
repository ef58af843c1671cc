use std::fmt;

use crate::ast::{Color, InvalidColor, MoveDirection, Node, Program, TurnDirection};
use crate::lexer::LexErrorKind;
use crate::stack::ensure_sufficient_stack;
use crate::token::{Keyword, Position, Token, TokenKind};

/// Classifies a parser error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The parser reached a token the lexer marked as malformed.
    Lexical(LexErrorKind),
    /// A specific token was required, something else was found.
    Expected {
        expected: &'static str,
        found: &'static str,
    },
    /// A statement was required, something else was found.
    ExpectedStatement { found: &'static str },
    /// `REP n ""` with nothing between the quotes.
    EmptyRepeatBody,
    /// Input ended inside a quoted `REP` body.
    UnterminatedRepeatBody,
    /// Color token that is not `#RRGGBB`.
    InvalidColor(InvalidColor),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lexical(kind) => write!(f, "{kind}"),
            Self::Expected { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            Self::ExpectedStatement { found } => {
                write!(f, "expected a statement, found {found}")
            }
            Self::EmptyRepeatBody => write!(f, "empty repeat block"),
            Self::UnterminatedRepeatBody => {
                write!(f, "repeat block is missing its closing '\"'")
            }
            Self::InvalidColor(err) => write!(f, "{err}"),
        }
    }
}

/// Error produced during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", position.line, position.column)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: Position,
}

impl ParseError {
    /// 1-based source line of the offending token.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.position.line
    }
}

/// Parse a token stream into a [`Program`].
///
/// Parsing stops at the first error; there is no recovery.
///
/// # Errors
///
/// Returns `ParseError` when the tokens do not form a program, including
/// when a lexical error token is reached.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    let result = Parser::new(tokens).parse();
    match &result {
        Ok(program) => tracing::debug!(statements = program.statements.len(), "parsed"),
        Err(err) => tracing::debug!(error = %err, "parse failed"),
    }
    result
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    /// Stands in for any position past the end of `tokens`.
    eof: Token,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        let at = tokens.last().map_or_else(Position::start, |last| last.start);
        Self {
            tokens,
            pos: 0,
            eof: Token {
                kind: TokenKind::Eof,
                start: at,
                end: at,
            },
        }
    }

    fn parse(mut self) -> Result<Program, ParseError> {
        let mut statements = Vec::new();
        while !self.current().is_eof() {
            statements.push(self.parse_statement()?);
        }
        Ok(Program { statements })
    }

    fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    const fn advance(&mut self) {
        self.pos += 1;
    }

    fn parse_statement(&mut self) -> Result<Node, ParseError> {
        let TokenKind::Keyword(keyword) = self.current().kind else {
            return Err(self.unexpected_statement());
        };
        self.advance();

        match keyword {
            Keyword::Rep => self.parse_repeat(),
            Keyword::Forw => self.parse_move(MoveDirection::Forward),
            Keyword::Back => self.parse_move(MoveDirection::Back),
            Keyword::Left => self.parse_turn(TurnDirection::Left),
            Keyword::Right => self.parse_turn(TurnDirection::Right),
            Keyword::Down => self.parse_pen(true),
            Keyword::Up => self.parse_pen(false),
            Keyword::Color => {
                let color = self.expect_color()?;
                self.expect_period()?;
                Ok(Node::SetColor(color))
            }
        }
    }

    /// Parse a statement one nesting level down.
    fn parse_nested_statement(&mut self) -> Result<Node, ParseError> {
        ensure_sufficient_stack(|| self.parse_statement())
    }

    fn parse_move(&mut self, direction: MoveDirection) -> Result<Node, ParseError> {
        let distance = self.expect_number()?;
        self.expect_period()?;
        Ok(Node::Move {
            direction,
            distance,
        })
    }

    fn parse_turn(&mut self, direction: TurnDirection) -> Result<Node, ParseError> {
        let degrees = self.expect_number()?;
        self.expect_period()?;
        Ok(Node::Turn { direction, degrees })
    }

    fn parse_pen(&mut self, down: bool) -> Result<Node, ParseError> {
        self.expect_period()?;
        Ok(Node::PenState { down })
    }

    fn parse_repeat(&mut self) -> Result<Node, ParseError> {
        let count = self.expect_number()?;

        let body = if self.current().kind == TokenKind::Quote {
            self.advance();
            self.parse_block()?
        } else {
            vec![self.parse_nested_statement()?]
        };

        tracing::trace!(count, body = body.len(), "repeat");
        Ok(Node::Repeat { count, body })
    }

    /// Statements up to and including the closing quote.
    fn parse_block(&mut self) -> Result<Vec<Node>, ParseError> {
        if self.current().kind == TokenKind::Quote {
            return Err(self.error_here(ParseErrorKind::EmptyRepeatBody));
        }

        let mut body = Vec::new();
        loop {
            match self.current().kind {
                TokenKind::Quote => {
                    self.advance();
                    return Ok(body);
                }
                TokenKind::Eof => {
                    return Err(self.error_here(ParseErrorKind::UnterminatedRepeatBody));
                }
                _ => body.push(self.parse_nested_statement()?),
            }
        }
    }

    fn expect_number(&mut self) -> Result<u32, ParseError> {
        if let TokenKind::Number(value) = self.current().kind {
            self.advance();
            Ok(value)
        } else {
            Err(self.unexpected("number"))
        }
    }

    fn expect_color(&mut self) -> Result<Color, ParseError> {
        let token = self.current();
        let TokenKind::Hex(literal) = &token.kind else {
            return Err(self.unexpected("color"));
        };
        let color = literal.parse::<Color>().map_err(|err| ParseError {
            kind: ParseErrorKind::InvalidColor(err),
            position: token.start,
        })?;
        self.advance();
        Ok(color)
    }

    fn expect_period(&mut self) -> Result<(), ParseError> {
        if self.current().kind == TokenKind::Period {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected("'.'"))
        }
    }

    fn error_here(&self, kind: ParseErrorKind) -> ParseError {
        ParseError {
            kind,
            position: self.current().start,
        }
    }

    /// Error for the current token when `expected` was required.
    fn unexpected(&self, expected: &'static str) -> ParseError {
        let kind = match &self.current().kind {
            TokenKind::Error(lex) => ParseErrorKind::Lexical(lex.clone()),
            found => ParseErrorKind::Expected {
                expected,
                found: found.describe(),
            },
        };
        self.error_here(kind)
    }

    fn unexpected_statement(&self) -> ParseError {
        let kind = match &self.current().kind {
            TokenKind::Error(lex) => ParseErrorKind::Lexical(lex.clone()),
            found => ParseErrorKind::ExpectedStatement {
                found: found.describe(),
            },
        };
        self.error_here(kind)
    }
}
