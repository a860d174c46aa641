//! Scala-flavored grammar for the vicuna highlighting engine.
//!
//! The scanner is line-oriented and resumable: every grammar construct that
//! can span a line boundary (interpolated strings, triple-quoted strings,
//! nested block comments, inline XML) records enough in the per-line state
//! word for a later pass to pick up mid-document. Interpolation and XML
//! nesting keep an explicit stack while scanning, so edits inside such a run
//! re-scan from the line where the run began (see
//! [`vicuna_core::backtrack_to_start`]).
//!
//! Folding reuses the shared bracket folder from [`vicuna_core::fold`].

mod state;
mod tokenize;
pub mod word_lists;

pub use state::ScalaState;
pub use tokenize::tokenize;
pub use vicuna_core::fold::fold;
