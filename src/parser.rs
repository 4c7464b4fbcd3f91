use std::fmt;

use crate::ast::{Axis, BinOp, Expr, Token};

/// Error raised when a token sequence does not form a selection.
///
/// Nested failures keep the innermost `message` and stack the productions
/// they went through in `context`, innermost first.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub context: Vec<String>,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        ParseError {
            message: message.into(),
            context: Vec::new(),
        }
    }

    /// Wraps this error in one more level of context.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for context in self.context.iter().rev() {
            write!(f, "{}: ", context)?;
        }
        f.write_str(&self.message)
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, Clone, Copy)]
enum TextProperty {
    Name,
    Type,
    Resname,
}

#[derive(Debug, Clone, Copy)]
enum IntegerProperty {
    Index,
    Resid,
}

#[derive(Debug, Clone, Copy)]
enum FloatProperty {
    Mass,
    Position(Axis),
    Velocity(Axis),
}

impl TextProperty {
    /// `name` only takes identifiers; types and residue names may be numeric
    /// labels such as `45`.
    fn accepts_numbers(self) -> bool {
        !matches!(self, TextProperty::Name)
    }

    fn label(self) -> &'static str {
        match self {
            TextProperty::Name => "Name",
            TextProperty::Type => "Type",
            TextProperty::Resname => "Resname",
        }
    }

    fn build(self, name: String, equals: bool) -> Expr {
        match self {
            TextProperty::Name => Expr::Name { name, equals },
            TextProperty::Type => Expr::Type { name, equals },
            TextProperty::Resname => Expr::Resname { name, equals },
        }
    }
}

impl IntegerProperty {
    fn label(self) -> &'static str {
        match self {
            IntegerProperty::Index => "Index",
            IntegerProperty::Resid => "Resid",
        }
    }

    fn build(self, op: BinOp, value: u64) -> Expr {
        match self {
            IntegerProperty::Index => Expr::Index { op, value },
            IntegerProperty::Resid => Expr::Resid { op, value },
        }
    }
}

impl FloatProperty {
    fn label(self) -> &'static str {
        match self {
            FloatProperty::Mass => "Mass",
            FloatProperty::Position(_) => "Position",
            FloatProperty::Velocity(_) => "Velocity",
        }
    }

    fn build(self, op: BinOp, value: f64) -> Expr {
        match self {
            FloatProperty::Mass => Expr::Mass { op, value },
            FloatProperty::Position(axis) => Expr::Position { axis, op, value },
            FloatProperty::Velocity(axis) => Expr::Velocity { axis, op, value },
        }
    }
}

/// Production selected from the lookahead.
#[derive(Debug, Clone, Copy)]
enum Production {
    Group,
    Not,
    And,
    Or,
    Constant(bool),
    Text(TextProperty),
    Integer(IntegerProperty),
    Float(FloatProperty),
}

/// Property keywords and the leaf production each one starts.
///
/// A new kind of leaf needs one entry here, one `Expr` variant and one
/// evaluator arm.
const KEYWORDS: &[(&str, Production)] = &[
    ("all", Production::Constant(true)),
    ("none", Production::Constant(false)),
    ("name", Production::Text(TextProperty::Name)),
    ("type", Production::Text(TextProperty::Type)),
    ("resname", Production::Text(TextProperty::Resname)),
    ("index", Production::Integer(IntegerProperty::Index)),
    ("resid", Production::Integer(IntegerProperty::Resid)),
    ("mass", Production::Float(FloatProperty::Mass)),
    ("x", Production::Float(FloatProperty::Position(Axis::X))),
    ("y", Production::Float(FloatProperty::Position(Axis::Y))),
    ("z", Production::Float(FloatProperty::Position(Axis::Z))),
    ("vx", Production::Float(FloatProperty::Velocity(Axis::X))),
    ("vy", Production::Float(FloatProperty::Velocity(Axis::Y))),
    ("vz", Production::Float(FloatProperty::Velocity(Axis::Z))),
];

/// Deepest tree a selection may compile to, and deepest nesting of groups,
/// negations and prefix connectives the parser follows.
pub const MAX_DEPTH: usize = 256;

/// A parsed subtree and its height, 1 for a leaf.
type Parsed = (Expr, usize);

fn too_deep() -> ParseError {
    ParseError::new("selection is nested too deeply")
}

/// Height of a node whose tallest child is `child` high.
fn grow(child: usize) -> Result<usize, ParseError> {
    if child >= MAX_DEPTH {
        Err(too_deep())
    } else {
        Ok(child + 1)
    }
}

fn leaf(expr: Expr) -> Parsed {
    (expr, 1)
}

pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
    nesting: usize,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last() != Some(&Token::Eof) {
            tokens.push(Token::Eof);
        }
        Parser {
            tokens,
            position: 0,
            nesting: 0,
        }
    }

    /// Token `offset` places ahead, or the final `Eof`.
    fn peek(&self, offset: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.position + offset).min(last)]
    }

    fn advance(&mut self) {
        if self.position < self.tokens.len() - 1 {
            self.position += 1;
        }
    }

    fn check(&self, token: &Token) -> bool {
        std::mem::discriminant(self.peek(0)) == std::mem::discriminant(token)
    }

    fn classify(&self) -> Option<Production> {
        match self.peek(0) {
            Token::LParen => Some(Production::Group),
            Token::Not => Some(Production::Not),
            Token::And => Some(Production::And),
            Token::Or => Some(Production::Or),
            Token::Identifier(word) => KEYWORDS
                .iter()
                .find(|(keyword, _)| *keyword == word.as_str())
                .map(|&(_, production)| production),
            _ => None,
        }
    }

    /// Parse a complete selection, rejecting anything left after it.
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        if self.check(&Token::Eof) {
            return Err(ParseError::new("empty selection"));
        }

        let (expr, _) = self.parse_or()?;

        if !self.check(&Token::Eof) {
            let mut extra = String::new();
            while !self.check(&Token::Eof) {
                extra.push(' ');
                extra.push_str(&self.peek(0).to_string());
                self.advance();
            }
            return Err(ParseError::new(format!(
                "additional data after the end of the selection:{}",
                extra
            )));
        }
        Ok(expr)
    }

    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_or().map(|(expr, _)| expr)
    }

    fn parse_or(&mut self) -> Result<Parsed, ParseError> {
        let (mut left, mut height) = self.parse_and()?;

        while self.check(&Token::Or) {
            self.advance();
            let (right, right_height) =
                self.parse_operand("right-hand side operand to 'or'", Self::parse_and)?;
            height = grow(height.max(right_height))?;
            left = Expr::or(left, right);
        }
        Ok((left, height))
    }

    fn parse_and(&mut self) -> Result<Parsed, ParseError> {
        let (mut left, mut height) = self.dispatch()?;

        while self.check(&Token::And) {
            self.advance();
            let (right, right_height) =
                self.parse_operand("right-hand side operand to 'and'", Self::dispatch)?;
            height = grow(height.max(right_height))?;
            left = Expr::and(left, right);
        }
        Ok((left, height))
    }

    /// Parses one operand of a connective. `operand` names it in errors,
    /// e.g. "right-hand side operand to 'and'".
    fn parse_operand(
        &mut self,
        operand: &str,
        parse: fn(&mut Self) -> Result<Parsed, ParseError>,
    ) -> Result<Parsed, ParseError> {
        if self.check(&Token::Eof) {
            return Err(ParseError::new(format!("Missing {}", operand)));
        }
        self.nested(parse)
            .map_err(|e| e.with_context(format!("Error in {}", operand)))
    }

    /// Runs `parse` one level deeper, failing once `MAX_DEPTH` levels are open.
    fn nested(
        &mut self,
        parse: fn(&mut Self) -> Result<Parsed, ParseError>,
    ) -> Result<Parsed, ParseError> {
        if self.nesting >= MAX_DEPTH {
            return Err(too_deep());
        }
        self.nesting += 1;
        let result = parse(self);
        self.nesting -= 1;
        result
    }

    /// Parses a single operand: a leaf, a negation, a group, or a prefix
    /// `and`/`or`.
    fn dispatch(&mut self) -> Result<Parsed, ParseError> {
        match self.classify() {
            Some(Production::Group) => {
                self.advance(); // consume '('
                let inner = self.nested(Self::parse_or)?;
                if !self.check(&Token::RParen) {
                    return Err(ParseError::new("mismatched parenthesis"));
                }
                self.advance();
                Ok(inner)
            }
            Some(Production::Not) => {
                self.advance();
                let (operand, height) = self.parse_operand("operand of 'not'", Self::dispatch)?;
                Ok((Expr::not(operand), grow(height)?))
            }
            Some(Production::And) => {
                self.advance();
                let (lhs, lhs_height) =
                    self.parse_operand("left-hand side operand to 'and'", Self::dispatch)?;
                let (rhs, rhs_height) =
                    self.parse_operand("right-hand side operand to 'and'", Self::dispatch)?;
                Ok((Expr::and(lhs, rhs), grow(lhs_height.max(rhs_height))?))
            }
            Some(Production::Or) => {
                self.advance();
                let (lhs, lhs_height) =
                    self.parse_operand("left-hand side operand to 'or'", Self::dispatch)?;
                let (rhs, rhs_height) =
                    self.parse_operand("right-hand side operand to 'or'", Self::dispatch)?;
                Ok((Expr::or(lhs, rhs), grow(lhs_height.max(rhs_height))?))
            }
            Some(Production::Constant(all)) => {
                self.advance();
                Ok(leaf(if all { Expr::All } else { Expr::None }))
            }
            Some(Production::Text(property)) => self.parse_text(property).map(leaf),
            Some(Production::Integer(property)) => self.parse_integer(property).map(leaf),
            Some(Production::Float(property)) => self.parse_float(property).map(leaf),
            None => Err(match self.peek(0) {
                Token::Identifier(word) => {
                    ParseError::new(format!("unknown selection keyword '{}'", word))
                }
                Token::Eof => ParseError::new("expected a selection, found <end of selection>"),
                token => ParseError::new(format!("unexpected token '{}'", token)),
            }),
        }
    }

    fn keyword(&self) -> String {
        self.peek(0).to_string()
    }

    /// Reads the comparison operator right after the keyword.
    fn comparison(&self, keyword: &str) -> Result<BinOp, ParseError> {
        BinOp::from_token(self.peek(1)).ok_or_else(|| {
            ParseError::new(format!(
                "expected a comparison operator after '{}', found {}",
                keyword,
                self.peek(1)
            ))
        })
    }

    // keyword ("==" | "!=") IDENT, or NUM for type and resname
    fn parse_text(&mut self, property: TextProperty) -> Result<Expr, ParseError> {
        let keyword = self.keyword();
        let pattern_error = |found: &Token| {
            ParseError::new(format!(
                "{} selection must follow the pattern '{} == <value>' or '{} != <value>', found {}",
                property.label(),
                keyword,
                keyword,
                found
            ))
        };

        let equals = match self.peek(1) {
            Token::EqEq => true,
            Token::NotEq => false,
            other => return Err(pattern_error(other)),
        };
        let name = match self.peek(2) {
            Token::Identifier(name) => name.clone(),
            Token::Number(n) if property.accepts_numbers() => n.to_string(),
            other => return Err(pattern_error(other)),
        };

        self.position += 3;
        Ok(property.build(name, equals))
    }

    // keyword relop NUM, NUM integral and non-negative
    fn parse_integer(&mut self, property: IntegerProperty) -> Result<Expr, ParseError> {
        let keyword = self.keyword();
        let op = self.comparison(&keyword)?;

        let value = match self.peek(2) {
            Token::Number(n) if n.fract() == 0.0 => *n,
            _ => {
                return Err(ParseError::new(format!(
                    "{} selection should contain an integer",
                    property.label()
                )));
            }
        };
        if value < 0.0 {
            return Err(ParseError::new(format!(
                "{} selection should contain a non-negative integer",
                property.label()
            )));
        }
        // u64::MAX rounds up to 2^64 as a float
        if value >= u64::MAX as f64 {
            return Err(ParseError::new(format!(
                "{} selection value is too large, it must be below 2^64",
                property.label()
            )));
        }

        self.position += 3;
        Ok(property.build(op, value as u64))
    }

    // keyword relop NUM
    fn parse_float(&mut self, property: FloatProperty) -> Result<Expr, ParseError> {
        let keyword = self.keyword();
        let op = self.comparison(&keyword)?;

        let value = match self.peek(2) {
            Token::Number(n) => *n,
            _ => {
                return Err(ParseError::new(format!(
                    "{} selection can only contain a number as criterion",
                    property.label()
                )));
            }
        };

        self.position += 3;
        Ok(property.build(op, value))
    }
}
