//! Deterministic falling-block game core - pure, seedable, and testable
//!
//! This crate contains all the game rules, state management, and simulation
//! logic. It has **zero dependencies** on UI, timers, or I/O, making it:
//!
//! - **Deterministic**: the same seed and command script replay the same game
//! - **Testable**: every rule is reachable without a terminal or a clock
//! - **Portable**: runs the same in a TUI shell, a headless harness, or a bench
//!
//! # Module Structure
//!
//! - [`board`]: 12x20 well with collision detection and row sweeping
//! - [`pieces`]: the seven piece shapes as small occupancy matrices
//! - [`session`]: the aggregate game state machine driven by commands and time
//! - [`progression`]: score, level, and fall-speed arithmetic
//! - [`rng`]: the seedable piece source, plus a scripted one for tests
//! - [`events`]: cues the session queues for renderers and audio
//!
//! # Game Rules
//!
//! This implementation keeps the feel of the classic arcade ruleset rather
//! than modern guideline play:
//!
//! - **Uniform randomizer**: kind and color are independent uniform draws,
//!   so droughts and repeats happen the way old machines allowed
//! - **Horizontal kicks**: a blocked rotation tries x offsets 0, +1, -1,
//!   +2, -2 and is discarded if none fit
//! - **Immediate lock**: a piece locks the moment a descent step fails;
//!   there is no lock delay and no hold slot
//! - **Open sky**: pieces may overhang the top edge; only the side walls
//!   and the floor are solid
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameSession;
//! use blockfall_types::{GameCommand, Phase};
//!
//! let mut session = GameSession::new(12345);
//! session.start();
//! assert_eq!(session.phase(), Phase::Running);
//!
//! session.apply(GameCommand::MoveLeft);
//! session.apply(GameCommand::RotateCw);
//! session.apply(GameCommand::HardDrop);
//!
//! // The piece is part of the stack now.
//! assert!(session.board().cells().iter().any(|cell| cell.is_some()));
//! ```
//!
//! # Timing
//!
//! The session owns no clock. Call [`GameSession::tick`] every frame with
//! the measured elapsed milliseconds; gravity fires once the accumulated
//! time exceeds the level's fall interval (1000 ms at level 1, 100 ms less
//! per level, floored at 100 ms).

pub mod board;
pub mod events;
pub mod pieces;
pub mod progression;
pub mod rng;
pub mod session;

pub use blockfall_types as types;

// Re-export the common surface so shells rarely need the submodules.
pub use board::{Board, SweptRows};
pub use events::SessionEvent;
pub use pieces::{spawn_shape, Shape};
pub use progression::{fall_interval_for_level, level_for_score, score_for_rows, Progress};
pub use rng::{RandomSource, SequenceRng, SimpleRng};
pub use session::{ActivePiece, GameSession, PieceDraw};
