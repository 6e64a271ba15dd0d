//! Keymap import engine
//!
//! Translates an IntelliJ keymap (defaults + user overrides) into VS Code
//! keybindings for a chosen destination platform.
//!
//! # Architecture
//!
//! ```text
//! defaults + custom → merge → synthesize → filter → (retire) → generate
//!                               ↑ action table     ↑ existing keybindings.json
//!                               ↑ keystroke table
//! ```
//!
//! Every stage is a pure function over in-memory records; reading and writing
//! files is left to the caller (see [`crate::parse`] and [`crate::resources`]).

mod filter;
mod generate;
mod merge;
mod pipeline;
mod report;
mod retire;
mod synthesize;

pub use filter::{filter, KeyIndex};
pub use generate::generate;
pub use merge::merge;
pub use pipeline::{run, ImportRequest, Translation};
pub use report::ImportEvent;
pub use retire::retire;
pub use synthesize::synthesize;
