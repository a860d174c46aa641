//! Vicuna core - resumable syntax-highlighting engine
//!
//! This crate contains the grammar-independent half of the engine:
//! - `Document`: text plus per-byte styles, per-line lexical state, and
//!   per-line fold records (the in-memory buffer collaborator)
//! - `ScanContext`: the character cursor fused with style-run emission
//! - `Style`: the shared classification every grammar emits from
//! - `EscapeState`: the single-slot escape-sequence sub-state
//! - `LineState`: the per-line continuation record and its `u32` codec
//! - `KeywordSets`: indexed word lists for identifier classification
//! - `fold`: the style-driven brace folder shared by every grammar
//! - `resume`: backtrack/lookback helpers for mid-construct restarts
//!
//! # Incremental contract
//!
//! Tokenizers built on this crate restart at any line boundary using only
//! the previous line's persisted `LineState` plus the style of the byte
//! before the boundary. Re-lexing a suffix of an unchanged document must
//! produce byte-identical styles to a full scan; every helper here exists
//! to keep that property cheap.
//!
//! # Design Philosophy
//!
//! - **Bytes for positions, chars for decisions**: positions are `u32`
//!   byte offsets; classification looks at decoded `char`s.
//! - **No failure modes**: malformed input degrades to a less specific
//!   style, never to an error value.
//! - **State lives in the call**: every counter and stack is owned by one
//!   scan invocation; nothing global, nothing shared.

pub mod chars;
pub mod document;
pub mod escape;
pub mod fold;
pub mod keywords;
pub mod line_state;
pub mod marker;
pub mod resume;
pub mod scan;
pub mod style;

pub use document::Document;
pub use escape::EscapeState;
pub use fold::{fold, FoldLevel, FOLD_BASE};
pub use keywords::{KeywordSets, WordList};
pub use line_state::LineState;
pub use marker::highlight_task_marker;
pub use resume::{backtrack_to_start, lookback_non_white, ScanWindow};
pub use scan::{ScanContext, ScanState};
pub use style::Style;
