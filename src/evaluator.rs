use tracing::warn;

use crate::ast::Expr;
use crate::frame::{AtomContext, Frame};
use crate::parser::{self, SelectionError};

/// A compiled selection.
///
/// Built once from a selection string, then evaluated any number of times
/// against atoms of different frames. The underlying AST is immutable, so a
/// `Selection` can be shared and evaluated from multiple threads at once.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    expression: String,
    ast: Expr,
}

impl Selection {
    /// Compiles a selection string.
    ///
    /// # Examples
    ///
    /// ```
    /// use atomsel::Selection;
    ///
    /// let selection = Selection::parse("name CA and mass > 12").unwrap();
    /// assert!(Selection::parse("name ==").is_err());
    /// ```
    pub fn parse(expression: &str) -> Result<Selection, SelectionError> {
        let ast = parser::parse(expression)?;
        Ok(Selection {
            expression: expression.to_string(),
            ast,
        })
    }

    /// The selection string this was compiled from.
    pub fn string(&self) -> &str {
        &self.expression
    }

    /// The compiled expression tree.
    pub fn ast(&self) -> &Expr {
        &self.ast
    }

    /// Decides whether one atom matches the selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use atomsel::{AtomContext, Frame, Selection};
    ///
    /// let mut frame = Frame::new();
    /// frame.add_atom("CA", 12.0, [1.0, 0.0, 0.0]);
    ///
    /// let selection = Selection::parse("x < 2").unwrap();
    /// assert!(selection.evaluate(&frame.atom(0).unwrap()));
    /// ```
    pub fn evaluate<A: AtomContext>(&self, atom: &A) -> bool {
        evaluate(&self.ast, atom)
    }

    /// Per-atom match decisions for a whole frame.
    pub fn mask(&self, frame: &Frame) -> Vec<bool> {
        frame.atoms().map(|atom| self.evaluate(&atom)).collect()
    }

    /// Indices of the atoms of `frame` matching the selection, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use atomsel::{Frame, Selection};
    ///
    /// let mut frame = Frame::new();
    /// frame.add_atom("CA", 12.0, [1.0, 0.0, 0.0]);
    /// frame.add_atom("OW", 16.0, [4.0, 0.0, 0.0]);
    ///
    /// let selection = Selection::parse("name CA").unwrap();
    /// assert_eq!(selection.filter(&frame), vec![0]);
    /// ```
    pub fn filter(&self, frame: &Frame) -> Vec<usize> {
        frame
            .atoms()
            .enumerate()
            .filter_map(|(i, atom)| self.evaluate(&atom).then_some(i))
            .collect()
    }
}

/// Compile a selection string; the single entry point of the engine.
pub fn parse(expression: &str) -> Result<Selection, SelectionError> {
    Selection::parse(expression)
}

fn evaluate<A: AtomContext>(expr: &Expr, atom: &A) -> bool {
    match expr {
        Expr::All => true,
        Expr::None => false,
        Expr::Name { op, value } => op.compare(atom.name(), value.as_str()),
        Expr::Index { op, value } => op.compare(atom.index(), *value),
        Expr::Mass { op, value } => op.compare(atom.mass(), *value),
        Expr::Position { axis, op, value } => {
            op.compare(atom.position()[axis.as_index()], *value)
        }
        Expr::Velocity { axis, op, value } => match atom.velocity() {
            Some(velocity) => op.compare(velocity[axis.as_index()], *value),
            None => {
                warn!("no velocities in frame while evaluating '{}'", expr);
                false
            }
        },
        // Short-circuit: the right operand only runs when needed.
        Expr::And(lhs, rhs) => evaluate(lhs, atom) && evaluate(rhs, atom),
        Expr::Or(lhs, rhs) => evaluate(lhs, atom) || evaluate(rhs, atom),
        Expr::Not(inner) => !evaluate(inner, atom),
    }
}
