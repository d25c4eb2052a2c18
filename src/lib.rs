//! Blockfall (workspace facade crate).
//!
//! This package keeps the `blockfall::{core,input,term,types}` public API in
//! one place while the implementation lives in dedicated crates under
//! `crates/`. The shell-side collaborators (sound cues, best-score
//! persistence) live here because nothing below the binary needs them.

pub mod audio;
pub mod highscore;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
