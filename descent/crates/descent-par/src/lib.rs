//! descent-par - Recursive-descent parsers for the descent grammars
//!
//! This crate provides two single-line recursive-descent parsers over the
//! token streams produced by `descent-lex`:
//!
//! - [`chain`] - a recognizer for dotted-identifier statements that records
//!   the fields it matched
//! - [`polish`] - a Polish-notation calculator whose descent is generic over
//!   a [`Reducer`], evaluating while it parses or building a [`Formula`]
//!
//! # Example Usage
//!
//! ```
//! use descent_par::{evaluate, recognize, ParseLimits};
//!
//! let limits = ParseLimits::default();
//!
//! assert_eq!(evaluate("* 3 + 4 5", &limits), Ok(27));
//!
//! let result = recognize("foo.bar;", &limits);
//! assert_eq!(result.to_string(), "ID foo\nDOT .\nID bar\nSEMICOLON ;");
//! ```
//!
//! # Error Handling
//!
//! Nothing here recovers: the first failure ends the line. Failures are
//! values ([`ParseError`], [`EvalError`]) that implement
//! [`IntoDiagnostic`](descent_util::IntoDiagnostic), and both parsers start
//! from clean state on the next line.
//!
//! Recursion is bounded by [`ParseLimits::max_depth`]. Exceeding it is a
//! `TooDeep` failure instead of unbounded stack growth.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chain;
pub mod error;
pub mod limits;
pub mod polish;

#[cfg(test)]
mod edge_cases;

pub use chain::{recognize, ChainParser, ExtractedFields, ParseResult};
pub use error::{EvalError, ParseError};
pub use limits::{ParseLimits, DEFAULT_MAX_DEPTH};
pub use polish::{evaluate, parse_formula, Evaluator, Formula, FormulaParser, Reducer, TreeBuilder};
