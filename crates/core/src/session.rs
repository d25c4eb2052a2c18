//! Game session - the aggregate owning one complete game
//!
//! Ties the board, piece catalog, progression and random provider together
//! behind a single state machine. Everything is driven from outside: the
//! host feeds `tick` with measured time deltas and `apply` with discrete
//! commands, and the session never schedules anything itself. No globals,
//! no clocks, no I/O - a seed plus a command script replays bit-identically.

use blockfall_types::{BlockColor, GameCommand, Phase, PieceKind, FLASH_FRAMES, KICK_OFFSETS};

use crate::board::Board;
use crate::events::SessionEvent;
use crate::pieces::{spawn_shape, Shape};
use crate::progression::Progress;
use crate::rng::{RandomSource, SimpleRng};

/// The falling piece: kind, current matrix, well position and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
    pub color: BlockColor,
}

/// A generated-but-not-yet-spawned piece; what the preview box shows.
///
/// Kind and color are independent draws: the board only ever remembers the
/// color, so the pairing is free to repeat or clash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceDraw {
    pub kind: PieceKind,
    pub color: BlockColor,
}

/// One complete game.
#[derive(Debug, Clone)]
pub struct GameSession<R: RandomSource = SimpleRng> {
    board: Board,
    active: Option<ActivePiece>,
    preview: Option<PieceDraw>,
    progress: Progress,
    phase: Phase,
    /// Time accumulated toward the next gravity step.
    drop_counter_ms: u32,
    /// Hard-drop flash countdown, in frames.
    flash_frames: u8,
    events: Vec<SessionEvent>,
    rng: R,
}

impl GameSession {
    /// A session drawing pieces from a seeded LCG.
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameSession<R> {
    /// A session drawing pieces from any random provider; how tests inject
    /// scripted sequences.
    pub fn with_rng(rng: R) -> Self {
        Self {
            board: Board::new(),
            active: None,
            preview: None,
            progress: Progress::new(),
            phase: Phase::Idle,
            drop_counter_ms: 0,
            flash_frames: 0,
            events: Vec::new(),
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn preview(&self) -> Option<PieceDraw> {
        self.preview
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.progress.score()
    }

    pub fn level(&self) -> u32 {
        self.progress.level()
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.progress.fall_interval_ms()
    }

    pub fn flash_frames(&self) -> u8 {
        self.flash_frames
    }

    pub fn drop_counter_ms(&self) -> u32 {
        self.drop_counter_ms
    }

    /// Begin a fresh game: empty well, zeroed progress, new lookahead, first
    /// spawn, phase Running. The session itself accepts this from any phase;
    /// the shell decides which keys may trigger it when.
    pub fn start(&mut self) {
        self.board.clear();
        self.progress = Progress::new();
        self.drop_counter_ms = 0;
        self.flash_frames = 0;
        self.events.clear();
        self.active = None;
        self.phase = Phase::Running;
        let first = self.draw_piece();
        self.preview = Some(first);
        self.spawn();
    }

    /// Flip Running and Paused. Resuming zeroes the gravity counter so the
    /// pause duration never converts into a backlog drop.
    pub fn toggle_pause(&mut self) {
        match self.phase {
            Phase::Running => self.phase = Phase::Paused,
            Phase::Paused => {
                self.phase = Phase::Running;
                self.drop_counter_ms = 0;
            }
            Phase::Idle | Phase::GameOver => {}
        }
    }

    /// Advance time. Only Running ticks; every other phase ignores time
    /// entirely. When the gravity counter exceeds the fall interval the
    /// piece takes one descent step (which may lock it). Returns whether a
    /// gravity step happened.
    pub fn tick(&mut self, dt_ms: u32) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        if self.flash_frames > 0 {
            self.flash_frames -= 1;
        }
        self.drop_counter_ms = self.drop_counter_ms.saturating_add(dt_ms);
        if self.drop_counter_ms > self.progress.fall_interval_ms() {
            self.drop_step();
            return true;
        }
        false
    }

    /// Shift the active piece one column; reverted if the result collides.
    /// Running only.
    pub fn move_horizontal(&mut self, dir: i8) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        let x = active.x + dir;
        if self.board.collides(active.shape, x, active.y) {
            return false;
        }
        self.active = Some(ActivePiece { x, ..active });
        true
    }

    /// One manual descent step. Running only. Returns whether the piece
    /// moved down a row; `false` means it locked instead (or was gated).
    pub fn soft_drop(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.drop_step()
    }

    /// Slam the piece to the floor and lock it, with the flash countdown
    /// armed. Works while paused too - only Idle and GameOver gate it. The
    /// gravity counter is deliberately left alone: a hard drop is not a
    /// descent step, so the next automatic drop keeps its schedule.
    pub fn hard_drop(&mut self) -> bool {
        if !self.piece_controllable() {
            return false;
        }
        let Some(mut active) = self.active else {
            return false;
        };
        self.flash_frames = FLASH_FRAMES;
        while !self.board.collides(active.shape, active.x, active.y + 1) {
            active.y += 1;
        }
        self.active = Some(active);
        self.lock_active();
        true
    }

    /// Rotate the active piece, kicking along `KICK_OFFSETS` until a
    /// candidate fits. The first fitting offset commits shape and shifted
    /// column together; if all five collide the rotation is discarded and
    /// the piece is untouched. Like hard drop, this carries no pause gate.
    pub fn rotate(&mut self, clockwise: bool) -> bool {
        if !self.piece_controllable() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        let shape = active.shape.rotated(clockwise);
        for offset in KICK_OFFSETS {
            let x = active.x + offset;
            if !self.board.collides(shape, x, active.y) {
                self.active = Some(ActivePiece { shape, x, ..active });
                self.events.push(SessionEvent::Rotated);
                return true;
            }
        }
        false
    }

    /// The row the active piece would land on if hard-dropped now. Pure.
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;
        let mut y = active.y;
        while !self.board.collides(active.shape, active.x, y + 1) {
            y += 1;
        }
        Some(y)
    }

    /// Dispatch one input command onto its operation. Returns whether the
    /// command changed anything.
    pub fn apply(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::MoveLeft => self.move_horizontal(-1),
            GameCommand::MoveRight => self.move_horizontal(1),
            GameCommand::SoftDrop => self.soft_drop(),
            GameCommand::RotateCw => self.rotate(true),
            GameCommand::HardDrop => self.hard_drop(),
            GameCommand::TogglePause => {
                let before = self.phase;
                self.toggle_pause();
                self.phase != before
            }
            GameCommand::Start => {
                self.start();
                true
            }
        }
    }

    /// Drain the queued collaborator cues.
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    fn piece_controllable(&self) -> bool {
        matches!(self.phase, Phase::Running | Phase::Paused)
    }

    /// One row of descent, locking on contact. The gravity counter resets
    /// either way: a manual drop postpones the next automatic one.
    fn drop_step(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let moved = if self.board.collides(active.shape, active.x, active.y + 1) {
            self.lock_active();
            false
        } else {
            self.active = Some(ActivePiece {
                y: active.y + 1,
                ..active
            });
            true
        };
        self.drop_counter_ms = 0;
        moved
    }

    /// Write the piece into the stack, resolve rows, fold progression in,
    /// then hand the well to the next piece. Order matters: the board is
    /// settled before anything new appears.
    fn lock_active(&mut self) {
        let Some(active) = self.active else {
            return;
        };
        self.board
            .lock(active.shape, active.x, active.y, active.color);
        self.events.push(SessionEvent::Locked);

        let rows = self.board.sweep();
        if !rows.is_empty() {
            self.progress.record_clears(rows.len());
            self.events.push(SessionEvent::RowsCleared { rows });
        }

        self.spawn();
    }

    /// Promote the lookahead to active at the spawn position and draw a
    /// fresh lookahead. A blocked spawn is terminal: the piece stays
    /// visible where it tried to appear and the phase flips to GameOver.
    fn spawn(&mut self) {
        let draw = match self.preview.take() {
            Some(draw) => draw,
            None => self.draw_piece(),
        };
        let shape = spawn_shape(draw.kind);
        let piece = ActivePiece {
            kind: draw.kind,
            shape,
            x: shape.spawn_x(),
            y: 0,
            color: draw.color,
        };
        self.preview = Some(self.draw_piece());
        self.active = Some(piece);
        if self.board.collides(shape, piece.x, piece.y) {
            self.phase = Phase::GameOver;
            self.events.push(SessionEvent::GameOver);
        }
    }

    /// Two independent uniform draws: kind, then color.
    fn draw_piece(&mut self) -> PieceDraw {
        let kind = PieceKind::ALL[self.rng.next_range(PieceKind::ALL.len() as u32) as usize];
        let color = BlockColor::ALL[self.rng.next_range(BlockColor::ALL.len() as u32) as usize];
        PieceDraw { kind, color }
    }
}
