//! Terminal blockfall runner (default binary).
//!
//! The gameplay entrypoint: crossterm input, the surface-based renderer,
//! and a fixed-cadence frame loop feeding measured time into the session.

use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::audio::{AudioSink, Silent, TerminalBell};
use blockfall::core::GameSession;
use blockfall::highscore::HighScoreStore;
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{GameView, Surface, TerminalPresenter, Viewport};
use blockfall::types::{GameCommand, Phase, FRAME_MS};

/// Falling-block puzzle in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "blockfall",
    version,
    about = "Falling-block puzzle in the terminal. Stack pieces, clear full rows, outlast the speed-up.",
    long_about = "Blockfall is a terminal falling-block game with a deterministic core.\n\n\
        CONTROLS:\n  Left/Right  Move      Up       Rotate     Down    Soft drop\n  Space       Hard drop P        Pause      Enter   Start / restart\n  Q / Ctrl-C  Quit\n\n\
        Vi-style (h/j/k/l) and WASD synonyms work too. Pass --seed to replay\n\
        the exact same piece sequence."
)]
struct Args {
    /// Seed for the piece generator; derived from the clock when not set.
    #[arg(long, value_name = "N")]
    seed: Option<u32>,

    /// Disable terminal-bell sound cues.
    #[arg(long)]
    mute: bool,

    /// Path of the best-score file. Defaults to the user config directory.
    #[arg(long, value_name = "FILE")]
    scores_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut term = TerminalPresenter::new();
    term.enter()?;

    let result = run(&mut term, &args);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalPresenter, args: &Args) -> Result<()> {
    let seed = args.seed.unwrap_or_else(clock_seed);
    let mut session = GameSession::new(seed);

    let store = match &args.scores_file {
        Some(path) => HighScoreStore::at(path.clone()),
        None => HighScoreStore::open_default(),
    };
    let mut best_score = store.load();

    let mut audio: Box<dyn AudioSink> = if args.mute {
        Box::new(Silent)
    } else {
        Box::new(TerminalBell)
    };

    let view = GameView::default();
    let mut surface = Surface::new(0, 0);

    let frame = Duration::from_millis(FRAME_MS);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session, best_score, Viewport::new(w, h), &mut surface);
        term.draw_swap(&mut surface)?;

        // Input with timeout until the next frame.
        let timeout = frame
            .checked_sub(last_frame.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key)
                    if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        if dispatch(&mut session, command) {
                            // A fresh game picks up scores saved elsewhere.
                            best_score = store.load();
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Advance game time by what actually elapsed, once per frame.
        let now = Instant::now();
        if now.duration_since(last_frame) >= frame {
            let dt = now.duration_since(last_frame).as_millis() as u32;
            last_frame = now;
            session.tick(dt);
        }

        // Fan out whatever the commands and the tick produced.
        for cue in session.take_events() {
            audio.handle_event(&cue);
        }

        // The best score tracks the live one; improvements are written
        // through immediately, best effort.
        if session.score() > best_score {
            best_score = session.score();
            let _ = store.save(best_score);
        }
    }
}

/// Route a command to the session. Enter is the one key the shell gates:
/// it starts a game from the idle and game-over screens only, so a stray
/// Enter mid-game cannot wipe the board. Returns whether a game started.
fn dispatch(session: &mut GameSession, command: GameCommand) -> bool {
    match command {
        GameCommand::Start => {
            if matches!(session.phase(), Phase::Idle | Phase::GameOver) {
                session.start();
                return true;
            }
            false
        }
        other => {
            session.apply(other);
            false
        }
    }
}

/// Seed from the wall clock for unseeded runs.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(0x5eed)
}
