//! Shared vocabulary for the blockfall workspace.
//!
//! Pure data: constants and small enums with no dependencies, usable from the
//! rules core, the renderer and the input layer alike.
//!
//! # Well dimensions
//!
//! - **Width**: 12 columns (indexed 0-11)
//! - **Height**: 20 rows (indexed 0-19), y grows downward
//! - **Spawn row**: 0, column centered on the piece matrix
//!
//! # Progression constants
//!
//! | Constant | Value | Meaning |
//! |----------|-------|---------|
//! | `POINTS_PER_ROW` | 10 | Score per cleared row |
//! | `LEVEL_STEP_POINTS` | 30 | Points per level step (`level = score/30 + 1`) |
//! | `BASE_FALL_MS` | 1000 | Gravity interval at level 1 |
//! | `FALL_STEP_MS` | 100 | Interval reduction per level |
//! | `MIN_FALL_MS` | 100 | Gravity interval floor (level 10+) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{BlockColor, GameCommand, Phase, PieceKind, BOARD_WIDTH};
//!
//! assert_eq!(BOARD_WIDTH, 12);
//! assert_eq!(PieceKind::ALL.len(), 7);
//! assert_eq!(BlockColor::ALL.len(), 7);
//! assert_ne!(Phase::Running, Phase::Paused);
//! assert_eq!(GameCommand::HardDrop, GameCommand::HardDrop);
//! ```

/// Well width in cells (12 columns).
pub const BOARD_WIDTH: usize = 12;

/// Well height in cells (20 rows).
pub const BOARD_HEIGHT: usize = 20;

/// Frame cadence of the terminal shell in milliseconds (~60 FPS).
pub const FRAME_MS: u64 = 16;

/// Gravity interval at level 1 (one row per second).
pub const BASE_FALL_MS: u32 = 1000;

/// Gravity interval reduction per level beyond the first.
pub const FALL_STEP_MS: u32 = 100;

/// Gravity interval floor; reached at level 10 and held from there on.
pub const MIN_FALL_MS: u32 = 100;

/// Score awarded per cleared row.
pub const POINTS_PER_ROW: u32 = 10;

/// Points per level step: `level = score / LEVEL_STEP_POINTS + 1`.
pub const LEVEL_STEP_POINTS: u32 = 30;

/// Horizontal kick offsets tried on rotation, in order. Columns only:
/// a rotation never shifts the piece vertically.
pub const KICK_OFFSETS: [i8; 5] = [0, 1, -1, 2, -2];

/// Frames the well background flashes after a hard drop.
pub const FLASH_FRAMES: u8 = 5;

/// The seven piece kinds, in catalog order.
///
/// Shape matrices live in the core's piece catalog; the kind alone is just
/// a name. Note that on-screen color is *not* a function of the kind; see
/// [`BlockColor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    T,
    O,
    L,
    J,
    S,
    Z,
    I,
}

impl PieceKind {
    /// All kinds, in catalog order. Index with a uniform draw to pick one.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::O,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::I,
    ];
}

/// The palette a locked cell can carry.
///
/// Color is drawn independently of the piece kind: a red T and a cyan T are
/// both normal. The board remembers only the color, never the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Cyan,
    Magenta,
    Yellow,
    Green,
    Blue,
    Red,
    Orange,
}

impl BlockColor {
    /// All colors, in palette order. Index with a uniform draw to pick one.
    pub const ALL: [BlockColor; 7] = [
        BlockColor::Cyan,
        BlockColor::Magenta,
        BlockColor::Yellow,
        BlockColor::Green,
        BlockColor::Blue,
        BlockColor::Red,
        BlockColor::Orange,
    ];
}

/// A cell of the well.
///
/// - `None`: empty
/// - `Some(color)`: filled, remembering the color it was locked with
pub type Cell = Option<BlockColor>;

/// Session lifecycle states.
///
/// ```text
/// Idle --start--> Running <--toggle_pause--> Paused
///                    |                          |
///                    +------ blocked spawn -----+--> GameOver --start--> Running
/// ```
///
/// Time only advances in `Running`; `Paused` and `GameOver` freeze the
/// session until resumed or restarted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No game yet; waiting for the first start.
    Idle,
    /// Gravity and the full command set are live.
    Running,
    /// Frozen mid-game. Rotation and hard drop still work (see the session
    /// gating table); movement, soft drop and gravity do not.
    Paused,
    /// Terminal: a spawn collided with the stack. Only start leaves it.
    GameOver,
}

/// The discrete input surface, each command mapped 1:1 onto a session
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Shift the active piece one column left.
    MoveLeft,
    /// Shift the active piece one column right.
    MoveRight,
    /// Advance the active piece one row; locks on contact.
    SoftDrop,
    /// Rotate the active piece 90° clockwise, with kick offsets.
    RotateCw,
    /// Slam the active piece to the floor and lock immediately.
    HardDrop,
    /// Flip between Running and Paused.
    TogglePause,
    /// Start a fresh game (the shell gates this to Idle/GameOver).
    Start,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_dimensions() {
        assert_eq!(BOARD_WIDTH, 12);
        assert_eq!(BOARD_HEIGHT, 20);
    }

    #[test]
    fn test_progression_constants() {
        assert_eq!(POINTS_PER_ROW, 10);
        assert_eq!(LEVEL_STEP_POINTS, 30);
        assert_eq!(BASE_FALL_MS, 1000);
        assert_eq!(FALL_STEP_MS, 100);
        assert_eq!(MIN_FALL_MS, 100);
    }

    #[test]
    fn test_kick_offsets_try_in_place_then_widening() {
        assert_eq!(KICK_OFFSETS, [0, 1, -1, 2, -2]);
    }

    #[test]
    fn test_kind_and_color_draws_cover_seven_variants_each() {
        assert_eq!(PieceKind::ALL.len(), 7);
        assert_eq!(BlockColor::ALL.len(), 7);
    }
}
