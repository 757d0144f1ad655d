//! Lexer (tokenizer) for expression source text
//!
//! Pulls characters from any `Iterator<Item = char>` on demand and hands out
//! [`Token`]s lazily. The parser drives it through [`Lexer::peek`] and
//! [`Lexer::next`]; only as many tokens as have been asked for are buffered,
//! and no character past the end of the last requested token is read.

use super::ast::SourceLocation;
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::trace;

/// All token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    IntegerLiteral,
    Plus,      // +
    Minus,     // -
    Times,     // *
    Divide,    // /
    LParen,    // (
    RParen,    // )
    Assign,    // =
    Semicolon, // ;
}

impl TokenKind {
    pub const ALL: [TokenKind; 10] = [
        TokenKind::Identifier,
        TokenKind::IntegerLiteral,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Times,
        TokenKind::Divide,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::Assign,
        TokenKind::Semicolon,
    ];

    /// Upper-case name used in token dumps (`KIND:lexeme`).
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::IntegerLiteral => "INTEGER_LITERAL",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Times => "TIMES",
            TokenKind::Divide => "DIVIDE",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Semicolon => "SEMICOLON",
        }
    }

    fn from_char(ch: char) -> Option<TokenKind> {
        match ch {
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '*' => Some(TokenKind::Times),
            '/' => Some(TokenKind::Divide),
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            '=' => Some(TokenKind::Assign),
            ';' => Some(TokenKind::Semicolon),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::IntegerLiteral => write!(f, "integer literal"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Times => write!(f, "'*'"),
            TokenKind::Divide => write!(f, "'/'"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::Assign => write!(f, "'='"),
            TokenKind::Semicolon => write!(f, "';'"),
        }
    }
}

impl FromStr for TokenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| format!("Unknown token kind: {}", s))
    }
}

/// A token with its literal text and the position of its first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub location: SourceLocation,
}

impl Token {
    /// Render as a `KIND:lexeme` line.
    pub fn dump(&self) -> String {
        format!("{}:{}", self.kind.name(), self.lexeme)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Identifier => write!(f, "identifier '{}'", self.lexeme),
            TokenKind::IntegerLiteral => write!(f, "integer literal {}", self.lexeme),
            kind => write!(f, "{}", kind),
        }
    }
}

/// Lexing or parsing failure, always tied to a source position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub location: SourceLocation,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, location: SourceLocation) -> Self {
        SyntaxError {
            message: message.into(),
            location,
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

impl std::error::Error for SyntaxError {}

/// Streaming lexer over a character iterator
pub struct Lexer<I: Iterator<Item = char>> {
    input: I,
    pushback: Option<char>,
    lookahead: VecDeque<Token>,
    filename: Arc<str>,
    line: usize,
    column: usize,
    /// (line, column) before the most recently read character
    prev_position: (usize, usize),
    at_end: bool,
}

impl<'a> Lexer<std::str::Chars<'a>> {
    /// Create a lexer over an in-memory source string.
    pub fn from_source(source: &'a str, filename: &str) -> Self {
        Lexer::new(source.chars(), filename)
    }
}

impl<I: Iterator<Item = char>> Lexer<I> {
    pub fn new(input: I, filename: &str) -> Self {
        Self {
            input,
            pushback: None,
            lookahead: VecDeque::new(),
            filename: Arc::from(filename),
            line: 1,
            column: 1,
            prev_position: (1, 1),
            at_end: false,
        }
    }

    /// Consume the next token.
    ///
    /// Fails if the input ends before a token can be read.
    pub fn next(&mut self) -> Result<Token, SyntaxError> {
        self.fill(1)?;
        match self.lookahead.pop_front() {
            Some(token) => Ok(token),
            None => Err(SyntaxError::new(
                "Unexpected end of input",
                self.current_location(),
            )),
        }
    }

    /// Look `how_far` tokens ahead (1 is the next token) without consuming.
    ///
    /// Returns `None` if the input ends before that token.
    pub fn peek(&mut self, how_far: usize) -> Result<Option<&Token>, SyntaxError> {
        let how_far = how_far.max(1);
        self.fill(how_far)?;
        Ok(self.lookahead.get(how_far - 1))
    }

    /// Kind of the token `how_far` ahead, if any.
    pub fn peek_kind(&mut self, how_far: usize) -> Result<Option<TokenKind>, SyntaxError> {
        Ok(self.peek(how_far)?.map(|token| token.kind))
    }

    /// Drain the remaining input into a token list
    pub fn tokenize(&mut self) -> Result<Vec<Token>, SyntaxError> {
        let mut tokens = Vec::new();
        while self.peek(1)?.is_some() {
            tokens.push(self.next()?);
        }
        Ok(tokens)
    }

    /// Position of the next unread character
    pub fn current_location(&self) -> SourceLocation {
        SourceLocation::new(Arc::clone(&self.filename), self.line, self.column)
    }

    fn fill(&mut self, how_many: usize) -> Result<(), SyntaxError> {
        while !self.at_end && self.lookahead.len() < how_many {
            match self.read_token()? {
                Some(token) => {
                    trace!(
                        kind = token.kind.name(),
                        lexeme = %token.lexeme,
                        line = token.location.line,
                        column = token.location.column,
                        "token"
                    );
                    self.lookahead.push_back(token);
                }
                None => self.at_end = true,
            }
        }
        Ok(())
    }

    fn read_token(&mut self) -> Result<Option<Token>, SyntaxError> {
        let (ch, loc) = loop {
            let loc = self.current_location();
            match self.read() {
                None => return Ok(None),
                Some(c) if c.is_whitespace() => continue,
                Some(c) => break (c, loc),
            }
        };

        if ch.is_ascii_alphabetic() {
            return Ok(Some(self.read_continued_token(
                TokenKind::Identifier,
                ch,
                loc,
                |c| c.is_ascii_alphanumeric(),
            )));
        }
        if ch.is_ascii_digit() {
            return Ok(Some(self.read_continued_token(
                TokenKind::IntegerLiteral,
                ch,
                loc,
                |c| c.is_ascii_digit(),
            )));
        }

        match TokenKind::from_char(ch) {
            Some(kind) => Ok(Some(Token {
                kind,
                lexeme: ch.to_string(),
                location: loc,
            })),
            None => Err(SyntaxError::new(
                format!("Unrecognized character '{}'", ch.escape_default()),
                loc,
            )),
        }
    }

    /// Read the rest of a multi-character token; the first character that
    /// fails `continues` is pushed back.
    fn read_continued_token(
        &mut self,
        kind: TokenKind,
        first: char,
        location: SourceLocation,
        continues: fn(char) -> bool,
    ) -> Token {
        let mut lexeme = String::from(first);
        while let Some(ch) = self.read() {
            if continues(ch) {
                lexeme.push(ch);
            } else {
                self.unread(ch);
                break;
            }
        }
        Token {
            kind,
            lexeme,
            location,
        }
    }

    fn read(&mut self) -> Option<char> {
        let ch = self.pushback.take().or_else(|| self.input.next())?;

        self.prev_position = (self.line, self.column);
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Push back one character, restoring the position it was read at.
    fn unread(&mut self, ch: char) {
        debug_assert!(self.pushback.is_none());
        self.pushback = Some(ch);
        (self.line, self.column) = self.prev_position;
    }
}
