use std::fmt;

use crate::token::{Keyword, Position, Token, TokenKind};

/// Characters allowed right after a keyword or number.
const SEPARATORS: [char; 4] = [' ', '\t', '\n', '%'];

/// Classifies a lexical error.
///
/// Lexical errors do not stop the lexer. Each one becomes a
/// [`TokenKind::Error`] token and is reported when the parser
/// reaches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Alphabetic run that is not one of the keywords.
    UnknownKeyword { word: String },
    /// Keyword glued to the following character (`COLOR#...`).
    MissingSeparator { keyword: Keyword },
    /// Numeric literal with value 0.
    ZeroNumber,
    /// Digits followed by something other than a separator or `.`.
    MalformedNumber { digits: String },
    /// Literal that does not fit in a `u32`.
    NumberTooLarge { digits: String },
    /// Color literal without exactly six hex digits.
    MalformedColor { literal: String },
    /// Character that cannot start any token.
    UnexpectedCharacter(char),
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKeyword { word } => {
                write!(f, "unknown word '{word}', expected one of ")?;
                for (i, kw) in Keyword::ALL.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{kw}")?;
                }
                Ok(())
            }
            Self::MissingSeparator { keyword } => {
                write!(
                    f,
                    "keyword '{keyword}' must be followed by whitespace \
                     or a comment"
                )
            }
            Self::ZeroNumber => write!(f, "number can not be 0"),
            Self::MalformedNumber { digits } => {
                write!(
                    f,
                    "number '{digits}' must be followed by whitespace, \
                     a comment, or '.'"
                )
            }
            Self::NumberTooLarge { digits } => {
                write!(f, "number '{digits}' is too large")
            }
            Self::MalformedColor { literal } => {
                write!(
                    f,
                    "color '{literal}' must be '#' followed by 6 hex digits"
                )
            }
            Self::UnexpectedCharacter(ch) => {
                write!(f, "unexpected character: {}", ch.escape_default())
            }
        }
    }
}

/// Tokenize a program into a sequence of tokens ending with
/// [`TokenKind::Eof`].
///
/// The input is upper-cased before scanning, so keywords and hex
/// digits are case-insensitive. Tokenizing never fails: malformed
/// input is returned as [`TokenKind::Error`] tokens.
#[must_use]
#[tracing::instrument(level = "debug", skip_all, fields(len = input.len()))]
pub fn tokenize(input: &str) -> Vec<Token> {
    let tokens = Lexer::new(input).tokenize();
    tracing::debug!(count = tokens.len(), "tokenized");
    tokens
}

struct Lexer {
    chars: Vec<char>,
    pos: Position,
    tokens: Vec<Token>,
}

impl Lexer {
    fn new(input: &str) -> Self {
        Self {
            chars: input.to_uppercase().chars().collect(),
            pos: Position::start(),
            tokens: Vec::new(),
        }
    }

    fn tokenize(mut self) -> Vec<Token> {
        while let Some(ch) = self.peek() {
            match ch {
                ' ' | '\t' | '\n' => self.advance(),
                '%' => self.skip_comment(),
                '.' => self.single(TokenKind::Period),
                '"' => self.single(TokenKind::Quote),
                '#' => self.read_color(),
                c if c.is_ascii_digit() => self.read_number(),
                c if c.is_alphabetic() => self.read_word(),
                c => self.single(TokenKind::Error(LexErrorKind::UnexpectedCharacter(c))),
            }
        }

        // EOF sits on the last token so that truncated input is
        // reported on the last line holding code.
        let at = self.tokens.last().map_or(self.pos, |last| last.start);
        self.tokens.push(Token {
            kind: TokenKind::Eof,
            start: at,
            end: at,
        });
        self.tokens
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos.index).copied()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.peek() {
            self.pos.advance(ch);
        }
    }

    fn at_separator(&self) -> bool {
        self.peek().is_some_and(|c| SEPARATORS.contains(&c))
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut text = String::new();
        while let Some(ch) = self.peek().filter(|&c| pred(c)) {
            text.push(ch);
            self.advance();
        }
        text
    }

    fn push(&mut self, kind: TokenKind, start: Position) {
        tracing::trace!(?kind, line = start.line, column = start.column, "token");
        self.tokens.push(Token {
            kind,
            start,
            end: self.pos,
        });
    }

    fn single(&mut self, kind: TokenKind) {
        let start = self.pos;
        self.advance();
        self.push(kind, start);
    }

    fn skip_comment(&mut self) {
        while self.peek().is_some_and(|c| c != '\n') {
            self.advance();
        }
    }

    fn read_word(&mut self) {
        let start = self.pos;
        let word = self.take_while(char::is_alphabetic);

        let kind = match Keyword::from_word(&word) {
            Some(keyword) if !keyword.needs_separator() || self.at_separator() => {
                TokenKind::Keyword(keyword)
            }
            Some(keyword) => TokenKind::Error(LexErrorKind::MissingSeparator { keyword }),
            None => TokenKind::Error(LexErrorKind::UnknownKeyword { word }),
        };
        self.push(kind, start);
    }

    fn read_number(&mut self) {
        let start = self.pos;
        let digits = self.take_while(|c| c.is_ascii_digit());
        let terminated = self.at_separator() || self.peek() == Some('.');

        let kind = match digits.parse::<u32>() {
            Ok(0) => TokenKind::Error(LexErrorKind::ZeroNumber),
            _ if !terminated => TokenKind::Error(LexErrorKind::MalformedNumber { digits }),
            Ok(value) => TokenKind::Number(value),
            Err(_) => TokenKind::Error(LexErrorKind::NumberTooLarge { digits }),
        };
        self.push(kind, start);
    }

    fn read_color(&mut self) {
        let start = self.pos;
        self.advance(); // skip #
        let digits = self.take_while(|c| c.is_ascii_hexdigit());
        let literal = format!("#{digits}");

        // The error goes first so the parser meets it where the
        // color was expected.
        if digits.len() != 6 {
            self.push(
                TokenKind::Error(LexErrorKind::MalformedColor {
                    literal: literal.clone(),
                }),
                start,
            );
        }
        self.push(TokenKind::Hex(literal), start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn simple_command() {
        assert_eq!(
            kinds("FORW 10."),
            vec![
                TokenKind::Keyword(Keyword::Forw),
                TokenKind::Number(10),
                TokenKind::Period,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn case_folding() {
        assert_eq!(kinds("forw 1."), kinds("FORW 1."));
        assert_eq!(
            kinds("color #abcdef."),
            vec![
                TokenKind::Keyword(Keyword::Color),
                TokenKind::Hex("#ABCDEF".to_string()),
                TokenKind::Period,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn down_and_up_need_no_separator() {
        assert_eq!(
            kinds("DOWN.UP."),
            vec![
                TokenKind::Keyword(Keyword::Down),
                TokenKind::Period,
                TokenKind::Keyword(Keyword::Up),
                TokenKind::Period,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn keyword_glued_to_argument() {
        let tokens = kinds("COLOR#000000.");
        assert_eq!(
            tokens[0],
            TokenKind::Error(LexErrorKind::MissingSeparator {
                keyword: Keyword::Color
            })
        );
    }

    #[test]
    fn keyword_at_end_of_input_lacks_separator() {
        let tokens = kinds("FORW");
        assert!(matches!(
            tokens[0],
            TokenKind::Error(LexErrorKind::MissingSeparator { .. })
        ));
    }

    #[test]
    fn comment_is_a_separator() {
        assert_eq!(
            kinds("REP% two times\n2 FORW 1."),
            kinds("REP 2 FORW 1.")
        );
    }

    #[test]
    fn unknown_word() {
        let tokens = kinds("JUMP 1.");
        assert_eq!(
            tokens[0],
            TokenKind::Error(LexErrorKind::UnknownKeyword {
                word: "JUMP".to_string()
            })
        );
    }

    #[test]
    fn zero_is_rejected() {
        let tokens = kinds("FORW 0.");
        assert_eq!(tokens[1], TokenKind::Error(LexErrorKind::ZeroNumber));
        assert_eq!(tokens.len(), 4);
    }

    #[test]
    fn number_needs_terminator() {
        let tokens = kinds("FORW 2,3.");
        assert_eq!(
            tokens[1],
            TokenKind::Error(LexErrorKind::MalformedNumber {
                digits: "2".to_string()
            })
        );
        assert_eq!(
            tokens[2],
            TokenKind::Error(LexErrorKind::UnexpectedCharacter(','))
        );
    }

    #[test]
    fn number_too_large() {
        let tokens = kinds("FORW 99999999999.");
        assert!(matches!(
            tokens[1],
            TokenKind::Error(LexErrorKind::NumberTooLarge { .. })
        ));
    }

    #[test]
    fn short_color_emits_error_then_hex() {
        let tokens = kinds("COLOR #ABCDE.");
        assert_eq!(
            tokens[1],
            TokenKind::Error(LexErrorKind::MalformedColor {
                literal: "#ABCDE".to_string()
            })
        );
        assert_eq!(tokens[2], TokenKind::Hex("#ABCDE".to_string()));
    }

    #[test]
    fn eof_sits_on_last_token() {
        let tokens = tokenize("DOWN.\n\n% trailing\n");
        let eof = tokens.last().expect("eof");
        assert!(eof.is_eof());
        assert_eq!(eof.start, tokens[1].start);
        assert_eq!(eof.start.line, 1);
    }

    #[test]
    fn eof_on_empty_input() {
        let tokens = tokenize("");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].start, Position::start());
    }

    #[test]
    fn position_tracking() {
        let tokens = tokenize("DOWN.\n  FORW 1.");
        assert_eq!((tokens[0].start.line, tokens[0].start.column), (1, 1));
        assert_eq!((tokens[2].start.line, tokens[2].start.column), (2, 3));
        assert_eq!((tokens[3].start.line, tokens[3].start.column), (2, 8));
        assert_eq!(tokens[2].end.column, 7);
    }
}
