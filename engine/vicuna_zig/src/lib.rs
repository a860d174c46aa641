//! Zig-flavored grammar instance.
//!
//! Line-oriented scanning: every construct except the escape sequence
//! ends at the line break, so a scan can resume at any line boundary
//! from the previous line's persisted state alone. Strings carry format
//! placeholders (`{d}`, `{[name]:>8.3}`), comments come in four
//! flavors, and `\\` opens the line-long multiline-string form.
//!
//! [`tokenize`] paints styles and persists line states; [`fold`] (the
//! shared brace folder) turns them into fold levels.

mod state;
mod tokenize;
pub mod word_lists;

pub use state::ZigState;
pub use tokenize::tokenize;
pub use vicuna_core::fold::fold;
