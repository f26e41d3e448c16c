//! # Atomsel Selection Language - Abstract Syntax Tree
//!
//! This module defines the Abstract Syntax Tree (AST) for the atomsel
//! selection language, a small predicate language that decides, per atom of
//! a molecular structure, whether the atom belongs to a subset of interest.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[operators]** - Comparison operators (`==`, `!=`, `<`, `<=`, `>`, `>=`)
//! - **[expressions]** - Expression nodes (property comparisons, combinators)
//!
//! ## Quick Start
//!
//! ```text
//! name == CA and mass > 12
//! ```
//!
//! This selection keeps the alpha carbons heavier than 12 amu.
//!
//! ## Core Concepts
//!
//! ### Properties
//!
//! A selection compares atomic properties against literals:
//!
//! - `name` - atom name (string, `==`/`!=` only)
//! - `index` - atom index in the frame (integer)
//! - `mass` - atomic mass (number)
//! - `x`, `y`, `z` - position components (number)
//! - `vx`, `vy`, `vz` - velocity components (number)
//!
//! ### Short forms
//!
//! `name CA`, `index 3` and `mass 12` are sugar for `name == CA`,
//! `index == 3` and `mass == 12`. The positional properties always require
//! an explicit operator.
//!
//! ### Boolean logic
//!
//! Predicates combine with `and`, `or` and `not`; `not` binds tighter than
//! `and`, which binds tighter than `or`, and parentheses override
//! precedence:
//!
//! ```text
//! (name == O or name == H) and not index < 10
//! ```
//!
//! ### Leaf selectors
//!
//! `all` matches every atom, `none` matches no atom.
pub mod tokens;
pub mod operators;
pub mod expressions;

pub use tokens::Token;
pub use operators::BinOp;
pub use expressions::{Axis, Expr};
