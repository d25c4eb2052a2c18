//! Session events - cues for the shell's collaborators
//!
//! The session queues one event per audible/visible cue; the shell drains
//! the queue once per frame and fans the cues out to the audio sink, the
//! score store and the renderer. The core never blocks on a consumer, and
//! an undrained queue is simply replaced on restart.

use crate::board::SweptRows;

/// One cue emitted by a session operation.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A rotation landed, possibly after a kick.
    Rotated,
    /// The active piece locked into the stack.
    Locked,
    /// A sweep removed rows; indices are in clearance order, repeats for
    /// stacked clears.
    RowsCleared { rows: SweptRows },
    /// A spawn was blocked; the session is terminal until restarted.
    GameOver,
}
