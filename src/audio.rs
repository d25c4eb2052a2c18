//! Sound cues for game moments.
//!
//! The session reports what happened; a sink decides what it sounds like.
//! Terminals give us exactly one instrument, so the default sink rings the
//! bell for the weighty moments and stays quiet for routine ones.

use std::io::{self, Write};

use blockfall_core::SessionEvent;

/// Receiver for game sound cues. Every cue defaults to silence, so sinks
/// implement only the moments they care about.
pub trait AudioSink {
    fn rotate(&mut self) {}
    fn lock(&mut self) {}
    fn line_clear(&mut self) {}
    fn game_over(&mut self) {}

    /// Route a session event to its cue.
    fn handle_event(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::Rotated => self.rotate(),
            SessionEvent::Locked => self.lock(),
            SessionEvent::RowsCleared { .. } => self.line_clear(),
            SessionEvent::GameOver => self.game_over(),
        }
    }
}

/// No sound at all.
pub struct Silent;

impl AudioSink for Silent {}

/// Terminal-bell cues. Best effort; a failed write never interrupts play.
pub struct TerminalBell;

impl TerminalBell {
    fn ring(&self) {
        let mut stdout = io::stdout();
        let _ = stdout.write_all(b"\x07");
        let _ = stdout.flush();
    }
}

impl AudioSink for TerminalBell {
    fn line_clear(&mut self) {
        self.ring();
    }

    fn game_over(&mut self) {
        self.ring();
    }
}
