use std::fmt;

use crate::ast::Token;

/// Relational operators usable inside a leaf predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    /// Equal (`==`)
    Equal,
    /// Not equal (`!=`)
    NotEqual,
    /// Less than (`<`)
    LessThan,
    /// Greater than (`>`)
    GreaterThan,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

impl BinOp {
    /// Maps a relational token to its operator.
    pub fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::EqEq => Some(BinOp::Equal),
            Token::NotEq => Some(BinOp::NotEqual),
            Token::Lt => Some(BinOp::LessThan),
            Token::Gt => Some(BinOp::GreaterThan),
            Token::LtEq => Some(BinOp::LessEqual),
            Token::GtEq => Some(BinOp::GreaterEqual),
            _ => None,
        }
    }

    /// Applies the operator as `lhs <op> rhs`.
    pub fn compare<T: PartialOrd>(self, lhs: T, rhs: T) -> bool {
        match self {
            BinOp::Equal => lhs == rhs,
            BinOp::NotEqual => lhs != rhs,
            BinOp::LessThan => lhs < rhs,
            BinOp::GreaterThan => lhs > rhs,
            BinOp::LessEqual => lhs <= rhs,
            BinOp::GreaterEqual => lhs >= rhs,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BinOp::Equal => "==",
            BinOp::NotEqual => "!=",
            BinOp::LessThan => "<",
            BinOp::GreaterThan => ">",
            BinOp::LessEqual => "<=",
            BinOp::GreaterEqual => ">=",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
