use std::fmt;

use crate::ast::Token;

/// Binary comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    /// Equal (`==`)
    Equal,
    /// Not equal (`!=`)
    NotEqual,
    /// Less than (`<`)
    LessThan,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    GreaterThan,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

impl BinOp {
    /// Apply the comparison to a pair of values.
    pub fn compare<T: PartialOrd>(self, lhs: T, rhs: T) -> bool {
        match self {
            BinOp::Equal => lhs == rhs,
            BinOp::NotEqual => lhs != rhs,
            BinOp::LessThan => lhs < rhs,
            BinOp::LessEqual => lhs <= rhs,
            BinOp::GreaterThan => lhs > rhs,
            BinOp::GreaterEqual => lhs >= rhs,
        }
    }

    /// The operator for a comparison token, if the token is one.
    pub fn from_token(token: &Token) -> Option<BinOp> {
        match token {
            Token::EqEq => Some(BinOp::Equal),
            Token::NotEq => Some(BinOp::NotEqual),
            Token::Lt => Some(BinOp::LessThan),
            Token::LtEq => Some(BinOp::LessEqual),
            Token::Gt => Some(BinOp::GreaterThan),
            Token::GtEq => Some(BinOp::GreaterEqual),
            _ => None,
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinOp::Equal => write!(f, "=="),
            BinOp::NotEqual => write!(f, "!="),
            BinOp::LessThan => write!(f, "<"),
            BinOp::LessEqual => write!(f, "<="),
            BinOp::GreaterThan => write!(f, ">"),
            BinOp::GreaterEqual => write!(f, ">="),
        }
    }
}
