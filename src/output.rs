//! Diagnostic rendering of compiled selections.
//!
//! Leaves and negations print on a single line, in the same form the parser
//! accepts. Conjunctions and disjunctions print as a two-branch block with
//! both arrows aligned, so that deep trees stay readable:
//!
//! ```
//! use atomsel::Selection;
//!
//! let selection = Selection::new("name == O and index < 2").unwrap();
//! assert_eq!(selection.to_text(), "and -> name == O\n    -> index < 2");
//! ```
//!
//! The exact layout of multi-line output is not stable across versions.

use std::fmt;

use crate::ast::Expr;

pub struct TreePrinter;

impl TreePrinter {
    pub fn print(&self, expr: &Expr) -> String {
        self.print_expr(expr, 0)
    }

    /// `delta` is the column at which `expr` starts, used to align the
    /// second branch of `and`/`or` blocks.
    fn print_expr(&self, expr: &Expr, delta: usize) -> String {
        match expr {
            Expr::All => "all".to_string(),
            Expr::None => "none".to_string(),
            Expr::Name { name, equals } => self.print_text("name", name, *equals),
            Expr::Type { name, equals } => self.print_text("type", name, *equals),
            Expr::Resname { name, equals } => self.print_text("resname", name, *equals),
            Expr::Index { op, value } => format!("index {} {}", op, value),
            Expr::Resid { op, value } => format!("resid {} {}", op, value),
            Expr::Mass { op, value } => format!("mass {} {}", op, value),
            Expr::Position { axis, op, value } => {
                format!("{} {} {}", axis.as_str(), op, value)
            }
            Expr::Velocity { axis, op, value } => {
                format!("v{} {} {}", axis.as_str(), op, value)
            }
            Expr::And { lhs, rhs } => self.print_branches("and", lhs, rhs, delta),
            Expr::Or { lhs, rhs } => self.print_branches("or", lhs, rhs, delta),
            Expr::Not { operand } => format!("not {}", self.print_expr(operand, delta + 4)),
        }
    }

    fn print_text(&self, keyword: &str, name: &str, equals: bool) -> String {
        let op = if equals { "==" } else { "!=" };
        format!("{} {} {}", keyword, op, name)
    }

    fn print_branches(&self, keyword: &str, lhs: &Expr, rhs: &Expr, delta: usize) -> String {
        // "and -> " / "or -> "
        let width = keyword.len() + 4;
        format!(
            "{} -> {}\n{}{} -> {}",
            keyword,
            self.print_expr(lhs, delta + width),
            self.indent(delta),
            self.indent(keyword.len()),
            self.print_expr(rhs, delta + width)
        )
    }

    fn indent(&self, width: usize) -> String {
        " ".repeat(width)
    }
}

/// Renders `expr` for diagnostics.
pub fn to_text(expr: &Expr) -> String {
    TreePrinter.print(expr)
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_text(self))
    }
}
