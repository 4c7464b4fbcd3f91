//! # Atom Selection Language - Abstract Syntax Tree
//!
//! This module defines the tokens and the tree produced when a selection such
//! as `name == O and index < 10` is compiled.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[expressions]** - Predicate and boolean combinator nodes
//! - **[operators]** - Relational operators used by leaf predicates
//!
//! ## Leaf Predicates
//!
//! Every leaf reads as `keyword <operator> <value>`:
//!
//! ```text
//! name == CA          // atom name, == or != only
//! index >= 10         // 0-based atom index, integer only
//! x < 1.5             // position component (x, y, z)
//! vz != 0             // velocity component (vx, vy, vz)
//! ```
//!
//! `type` and `resname` behave like `name`, `resid` like `index`, and `mass`
//! like a position component. `all` and `none` take no operator.
//!
//! ## Boolean Combinators
//!
//! `not` binds tighter than `and`, which binds tighter than `or`. Repeated
//! connectives associate to the left and parentheses group:
//!
//! ```text
//! not name == H and index < 5 or x > 0
//! // ((not name == H) and index < 5) or x > 0
//! ```
pub mod expressions;
pub mod operators;
pub mod tokens;

pub use expressions::{Axis, Expr};
pub use operators::BinOp;
pub use tokens::Token;
