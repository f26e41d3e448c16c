pub mod ast;
pub mod evaluator;
pub mod frame;
pub mod lexer;
pub mod parser;

#[cfg(feature = "cli")]
pub mod cli;

pub use ast::{Axis, BinOp, Expr, Token};
pub use evaluator::{Selection, parse};
pub use frame::{AtomContext, AtomRef, Frame};
pub use lexer::{LexError, Lexer};
pub use parser::{Parser, SelectionError};
