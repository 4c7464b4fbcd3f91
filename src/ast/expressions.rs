use crate::ast::BinOp;

/// Component of a three-dimensional vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Index of this component in a `[f64; 3]`.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

/// Abstract Syntax Tree node representing a compiled selection.
///
/// Leaves compare one atom property against a literal; `And`, `Or` and `Not`
/// combine other nodes. Every child is exclusively owned, so a tree is never
/// shared and never cyclic.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    // Constants
    /// Matches every atom
    ///
    /// # Example
    /// ```text
    /// all
    /// ```
    All,

    /// Matches no atom
    None,

    // String properties
    /// Atom name comparison
    ///
    /// # Examples
    /// ```text
    /// name == CA
    /// name != H1
    /// ```
    Name { name: String, equals: bool },

    /// Atom type comparison
    ///
    /// # Example
    /// ```text
    /// type == O
    /// ```
    Type { name: String, equals: bool },

    /// Name of the residue containing the atom
    ///
    /// # Example
    /// ```text
    /// resname == WAT
    /// ```
    Resname { name: String, equals: bool },

    // Numeric properties
    /// Position of the atom in the frame, 0-based
    ///
    /// # Example
    /// ```text
    /// index >= 10
    /// ```
    Index { op: BinOp, value: u64 },

    /// Identifier of the residue containing the atom
    ///
    /// # Example
    /// ```text
    /// resid == 3
    /// ```
    Resid { op: BinOp, value: u64 },

    /// Atom mass
    ///
    /// # Example
    /// ```text
    /// mass > 12.5
    /// ```
    Mass { op: BinOp, value: f64 },

    /// Cartesian coordinate, in angstrom
    ///
    /// # Examples
    /// ```text
    /// x < 1.5
    /// z >= -3
    /// ```
    Position { axis: Axis, op: BinOp, value: f64 },

    /// Velocity component
    ///
    /// # Example
    /// ```text
    /// vx > 0
    /// ```
    Velocity { axis: Axis, op: BinOp, value: f64 },

    // Boolean combinators
    /// Both sides match
    And { lhs: Box<Expr>, rhs: Box<Expr> },

    /// Either side matches
    Or { lhs: Box<Expr>, rhs: Box<Expr> },

    /// The operand does not match
    Not { operand: Box<Expr> },
}

impl Expr {
    pub fn and(lhs: Expr, rhs: Expr) -> Self {
        Expr::And {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn or(lhs: Expr, rhs: Expr) -> Self {
        Expr::Or {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn not(operand: Expr) -> Self {
        Expr::Not {
            operand: Box::new(operand),
        }
    }

    /// Number of nodes in this tree.
    pub fn node_count(&self) -> usize {
        match self {
            Expr::And { lhs, rhs } | Expr::Or { lhs, rhs } => {
                1 + lhs.node_count() + rhs.node_count()
            }
            Expr::Not { operand } => 1 + operand.node_count(),
            _ => 1,
        }
    }
}
