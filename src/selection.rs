//! Compiled, reusable selections.
//!
//! ```
//! use atomsel::{Atom, Frame, Selection};
//!
//! let mut frame = Frame::new();
//! frame.add_atom(Atom::new("O"), [0.0, 0.0, 0.0]);
//! frame.add_atom(Atom::new("H"), [1.0, 0.0, 0.0]);
//! frame.add_atom(Atom::new("H"), [-1.0, 0.0, 0.0]);
//!
//! let selection = Selection::new("name == H and x > 0").unwrap();
//! assert_eq!(selection.evaluate(&frame).unwrap(), vec![1]);
//! ```

use std::fmt;

use log::{debug, trace};

use crate::{
    ast::Expr,
    evaluator::{EvalError, Evaluator},
    frame::Snapshot,
    lexer::{LexError, Lexer},
    output,
    parser::{ParseError, Parser},
};

/// Errors raised while compiling selection text.
#[derive(Debug, Clone, PartialEq)]
pub enum CompileError {
    /// The text contains characters or literals the language does not know
    Lex(LexError),
    /// The tokens do not form a selection
    Parse(ParseError),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Lex(e) => write!(f, "Lexer error: {}", e),
            CompileError::Parse(e) => write!(f, "Parser error: {}", e),
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompileError::Lex(e) => Some(e),
            CompileError::Parse(e) => Some(e),
        }
    }
}

impl From<LexError> for CompileError {
    fn from(e: LexError) -> Self {
        CompileError::Lex(e)
    }
}

impl From<ParseError> for CompileError {
    fn from(e: ParseError) -> Self {
        CompileError::Parse(e)
    }
}

/// A selection compiled once and evaluated against any number of snapshots.
///
/// The compiled tree is immutable, so a `Selection` can be shared between
/// threads and evaluated concurrently.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    text: String,
    ast: Expr,
}

impl Selection {
    /// Compiles `text`.
    pub fn new(text: &str) -> Result<Self, CompileError> {
        let tokens = Lexer::new(text).tokenize()?;
        let ast = Parser::new(tokens).parse()?;
        debug!(
            "compiled selection '{}' into {} nodes",
            text,
            ast.node_count()
        );
        Ok(Selection {
            text: text.to_string(),
            ast,
        })
    }

    /// Ascending indices of the atoms of `snapshot` matching this selection.
    pub fn evaluate<S: Snapshot + ?Sized>(&self, snapshot: &S) -> Result<Vec<usize>, EvalError> {
        let matches = Evaluator::new(snapshot).eval(&self.ast)?;
        trace!(
            "selection '{}' matched {} of {} atoms",
            self.text,
            matches.len(),
            snapshot.size()
        );
        Ok(matches)
    }

    /// Per-atom verdicts, in snapshot order.
    pub fn evaluate_mask<S: Snapshot + ?Sized>(&self, snapshot: &S) -> Result<Vec<bool>, EvalError> {
        Evaluator::new(snapshot).eval_mask(&self.ast)
    }

    /// Diagnostic rendering of the compiled tree.
    pub fn to_text(&self) -> String {
        output::to_text(&self.ast)
    }

    /// The text this selection was compiled from.
    pub fn string(&self) -> &str {
        &self.text
    }

    pub fn ast(&self) -> &Expr {
        &self.ast
    }
}

/// Compiles `text` into a [`Selection`].
pub fn compile(text: &str) -> Result<Selection, CompileError> {
    Selection::new(text)
}
