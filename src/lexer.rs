use std::{fmt, sync::LazyLock};

use regex::Regex;

use crate::ast::Token;

/// Shape of a complete numeric literal: optional sign, digits with an optional
/// fractional part, optional exponent.
static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("numeric literal pattern is valid")
});

/// Location of a character in the selection text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// 0-based character offset
    pub offset: usize,
    /// 1-based line
    pub line: usize,
    /// 1-based column
    pub column: usize,
}

impl Position {
    fn locate(input: &[char], offset: usize) -> Self {
        let mut line = 1;
        let mut column = 1;
        for &ch in input.iter().take(offset) {
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        Position {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Error raised when the selection text cannot be split into tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    pub message: String,
    /// The offending piece of input
    pub text: String,
    pub position: Position,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.message, self.position)
    }
}

impl std::error::Error for LexError {}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn error(&self, message: String, text: String, start: usize) -> LexError {
        LexError {
            message,
            text,
            position: Position::locate(&self.input, start),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    /// True when a number literal starts at the current position.
    fn at_number(&self) -> bool {
        let starts_digits = |offset: usize| match self.peek_char(offset) {
            Some(c) if c.is_ascii_digit() => true,
            Some('.') => self.peek_char(offset + 1).is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        };
        match self.current_char() {
            Some('+') | Some('-') => starts_digits(1),
            _ => starts_digits(0),
        }
    }

    fn read_number(&mut self) -> Result<Token, LexError> {
        let start = self.position;
        let mut literal = String::new();

        if let Some(sign @ ('+' | '-')) = self.current_char() {
            literal.push(sign);
            self.advance();
        }

        // Grab the whole word so that `1.2.3` or `3abc` is reported as one
        // malformed literal instead of two unrelated tokens.
        while let Some(ch) = self.current_char() {
            let exponent_sign =
                (ch == '+' || ch == '-') && matches!(literal.chars().last(), Some('e' | 'E'));
            if ch.is_ascii_alphanumeric() || ch == '.' || ch == '_' || exponent_sign {
                literal.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if !NUMBER.is_match(&literal) {
            return Err(self.error(
                format!("malformed number '{}'", literal),
                literal,
                start,
            ));
        }

        match literal.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Token::Number(value)),
            _ => Err(self.error(
                format!("number '{}' is out of range", literal),
                literal,
                start,
            )),
        }
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        if self.at_number() {
            return self.read_number();
        }

        let start = self.position;
        let token = match self.current_char() {
            None => Token::Eof,
            Some('(') => {
                self.advance();
                Token::LParen
            }
            Some(')') => {
                self.advance();
                Token::RParen
            }
            Some('=') => {
                // `=` and `==` are the same operator
                self.advance();
                if self.current_char() == Some('=') {
                    self.advance();
                }
                Token::EqEq
            }
            Some('!') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Token::NotEq
                } else {
                    return Err(self.error(
                        "unexpected '!' (did you mean '!=' or 'not'?)".to_string(),
                        "!".to_string(),
                        start,
                    ));
                }
            }
            Some('<') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Token::LtEq
                } else {
                    self.advance();
                    Token::Lt
                }
            }
            Some('>') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Token::GtEq
                } else {
                    self.advance();
                    Token::Gt
                }
            }
            Some(ch) if ch.is_ascii_alphabetic() || ch == '_' => {
                let ident = self.read_identifier();

                match ident.as_str() {
                    "and" => Token::And,
                    "or" => Token::Or,
                    "not" => Token::Not,
                    _ => Token::Identifier(ident),
                }
            }
            Some(ch) => {
                return Err(self.error(
                    format!("unexpected character '{}'", ch),
                    ch.to_string(),
                    start,
                ));
            }
        };

        Ok(token)
    }

    /// Splits the whole input, always ending with [`Token::Eof`].
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token == Token::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }
}

#[test]
fn test_keywords() {
    let mut lexer = Lexer::new("and or not");
    assert_eq!(lexer.next_token().unwrap(), Token::And);
    assert_eq!(lexer.next_token().unwrap(), Token::Or);
    assert_eq!(lexer.next_token().unwrap(), Token::Not);
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
}

#[test]
fn test_leaf() {
    let mut lexer = Lexer::new("x<-1.5");
    assert_eq!(lexer.next_token().unwrap(), Token::Identifier("x".to_string()));
    assert_eq!(lexer.next_token().unwrap(), Token::Lt);
    assert_eq!(lexer.next_token().unwrap(), Token::Number(-1.5));
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
}

#[test]
fn test_error_position() {
    let mut lexer = Lexer::new("name == O\nand #");
    let err = lexer.tokenize().unwrap_err();
    assert_eq!(err.text, "#");
    assert_eq!(err.position.offset, 14);
    assert_eq!(err.position.line, 2);
    assert_eq!(err.position.column, 5);
}
