//! descent-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Shared vocabulary for every phase of the descent toolchain:
//!
//! - [`span`] - source locations (byte range plus line/column) carried by
//!   every token and every error
//! - [`diagnostic`] - error diagnostics, stable diagnostic codes, the fluent
//!   [`DiagnosticBuilder`], and the [`Handler`] that collects diagnostics for
//!   a session
//!
//! Library crates never print. They return typed errors which implement
//! [`IntoDiagnostic`], and the driver decides how each diagnostic is surfaced.
//
// DESIGN NOTES:
// -------------
// Spans are plain `Copy` values. A line is the unit of work for both
// grammars, so a span records the line it came from and a 1-based column
// inside that line; byte offsets are kept for slicing the line back out.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, IntoDiagnostic};
pub use span::Span;
