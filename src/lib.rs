pub mod ast;
pub mod cli;
pub mod evaluator;
pub mod frame;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod selection;

pub use ast::{Axis, BinOp, Expr, Token};
pub use evaluator::{EvalError, Evaluator};
pub use frame::{Atom, Frame, Residue, Snapshot, Vector3D};
pub use lexer::{LexError, Lexer, Position};
pub use output::to_text;
pub use parser::{ParseError, Parser};
pub use selection::{CompileError, Selection, compile};
