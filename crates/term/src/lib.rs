//! Terminal rendering layer.
//!
//! A small, game-oriented renderer: the view paints a whole frame into a
//! [`Surface`] of styled glyphs, and the presenter flushes it to the
//! terminal, diffing against the previous frame so steady-state updates
//! stay cheap. No widget framework, no layout engine.
//!
//! Goals:
//! - Keep the game core free of terminal concerns
//! - Make every frame unit-testable as plain data
//! - Allow precise control over aspect ratio (2 columns per board cell)

pub mod surface;
pub mod terminal;
pub mod view;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use surface::{ChangedRuns, Glyph, GlyphStyle, Intensity, Rgb, Run, Surface};
pub use terminal::TerminalPresenter;
pub use view::{GameView, Viewport};
