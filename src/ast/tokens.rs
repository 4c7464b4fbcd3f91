use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    /// Numeric literal, integral or not
    ///
    /// # Examples
    /// ```text
    /// 42
    /// -1.5
    /// 2e-3
    /// ```
    Number(f64),

    /// Property keyword or comparison value
    ///
    /// Must start with an ASCII letter or underscore, followed by letters,
    /// digits, or underscores. Identifiers are case-sensitive.
    ///
    /// # Examples
    /// ```text
    /// name
    /// CA
    /// H1
    /// ```
    Identifier(String),

    // Comparison
    /// Equality operator (`==`, or a single `=`)
    EqEq,

    /// Inequality operator
    NotEq,

    /// Less than
    Lt,

    /// Greater than
    Gt,

    /// Less than or equal
    LtEq,

    /// Greater than or equal
    GtEq,

    // Logical
    /// Logical AND (word, not symbol)
    ///
    /// # Examples
    /// ```text
    /// name == CA and index < 100
    /// ```
    And,

    /// Logical OR (word, not symbol)
    Or,

    /// Logical NOT (word, not symbol)
    ///
    /// # Examples
    /// ```text
    /// not name == H
    /// ```
    Not,

    // Delimiters
    /// Left parenthesis for grouping
    LParen,

    /// Right parenthesis
    RParen,

    /// End of selection
    Eof,
}

impl Token {
    /// True for the six relational operators.
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            Token::EqEq | Token::NotEq | Token::Lt | Token::Gt | Token::LtEq | Token::GtEq
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Identifier(name) => write!(f, "{}", name),
            Token::EqEq => write!(f, "=="),
            Token::NotEq => write!(f, "!="),
            Token::Lt => write!(f, "<"),
            Token::Gt => write!(f, ">"),
            Token::LtEq => write!(f, "<="),
            Token::GtEq => write!(f, ">="),
            Token::And => write!(f, "and"),
            Token::Or => write!(f, "or"),
            Token::Not => write!(f, "not"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Eof => write!(f, "<end of selection>"),
        }
    }
}
