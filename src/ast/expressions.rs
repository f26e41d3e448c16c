use std::fmt;

use crate::ast::BinOp;

/// A coordinate axis, selecting one component of a position or velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Index of this axis in a `[f64; 3]` vector.
    pub fn as_index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// Abstract Syntax Tree node representing a parsed selection.
///
/// The AST is the internal representation of a selection after parsing: an
/// owned tree of property comparisons and boolean combinators. It is built
/// once per selection string, never mutated afterwards, and evaluated any
/// number of times against atoms of different frames.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    // Leaf selectors
    /// Matches every atom
    ///
    /// # Example
    /// ```text
    /// all
    /// ```
    All,

    /// Matches no atom
    None,

    // Property comparisons
    /// Atom name comparison
    ///
    /// Names only support equality and inequality; the parser rejects
    /// ordering operators before this node is ever built.
    ///
    /// # Examples
    /// ```text
    /// name == CA
    /// name != OW
    /// ```
    Name { op: BinOp, value: String },

    /// Atom index comparison
    ///
    /// # Examples
    /// ```text
    /// index == 0
    /// index < 128
    /// ```
    Index { op: BinOp, value: usize },

    /// Atomic mass comparison
    ///
    /// # Example
    /// ```text
    /// mass > 12.0
    /// ```
    Mass { op: BinOp, value: f64 },

    /// Position component comparison (`x`, `y`, `z`)
    ///
    /// # Example
    /// ```text
    /// z <= 4.5
    /// ```
    Position { axis: Axis, op: BinOp, value: f64 },

    /// Velocity component comparison (`vx`, `vy`, `vz`)
    ///
    /// # Example
    /// ```text
    /// vx > 0
    /// ```
    Velocity { axis: Axis, op: BinOp, value: f64 },

    // Combinators
    /// Conjunction of two selections
    And(Box<Expr>, Box<Expr>),

    /// Disjunction of two selections
    Or(Box<Expr>, Box<Expr>),

    /// Negation of a selection
    Not(Box<Expr>),
}

impl Expr {
    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self)
    }
}

/// Canonical selection text; reparsing the output yields an equal tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::All => write!(f, "all"),
            Expr::None => write!(f, "none"),
            Expr::Name { op, value } => write!(f, "name {} {}", op, value),
            Expr::Index { op, value } => write!(f, "index {} {}", op, value),
            Expr::Mass { op, value } => write!(f, "mass {} {}", op, value),
            Expr::Position { axis, op, value } => write!(f, "{} {} {}", axis, op, value),
            Expr::Velocity { axis, op, value } => write!(f, "v{} {} {}", axis, op, value),
            Expr::And(lhs, rhs) => {
                lhs.fmt_operand(f)?;
                write!(f, " and ")?;
                rhs.fmt_operand(f)
            }
            Expr::Or(lhs, rhs) => {
                lhs.fmt_operand(f)?;
                write!(f, " or ")?;
                rhs.fmt_operand(f)
            }
            Expr::Not(inner) => {
                write!(f, "not ")?;
                inner.fmt_operand(f)
            }
        }
    }
}

#[test]
fn test_display_leaves() {
    let expr = Expr::Name {
        op: BinOp::Equal,
        value: "CA".into(),
    };
    assert_eq!(expr.to_string(), "name == CA");

    let expr = Expr::Position {
        axis: Axis::Z,
        op: BinOp::LessEqual,
        value: 4.5,
    };
    assert_eq!(expr.to_string(), "z <= 4.5");
}

#[test]
fn test_display_combinators() {
    let expr = Expr::And(
        Box::new(Expr::Not(Box::new(Expr::All))),
        Box::new(Expr::Index {
            op: BinOp::GreaterThan,
            value: 3,
        }),
    );
    assert_eq!(expr.to_string(), "(not (all)) and (index > 3)");
}
