//! GameView: maps a `GameSession` into a terminal surface.
//!
//! This module is pure (no I/O). It can be unit-tested.

use blockfall_core::rng::RandomSource;
use blockfall_core::{spawn_shape, GameSession};
use blockfall_types::{BlockColor, Phase, BOARD_HEIGHT, BOARD_WIDTH};

use crate::surface::{GlyphStyle, Intensity, Rgb, Surface};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal view for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the session into an existing surface.
    ///
    /// Callers can reuse a surface across frames; it is resized to the
    /// viewport and fully repainted each time. `best_score` is the
    /// persisted high score shown in the side panel.
    pub fn render_into<R: RandomSource>(
        &self,
        session: &GameSession<R>,
        best_score: u32,
        viewport: Viewport,
        surface: &mut Surface,
    ) {
        surface.resize(viewport.width, viewport.height);
        surface.clear();

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        // The whole play area strobes while the hard-drop flash runs.
        let area_bg = if session.flash_frames() > 0 && session.flash_frames() % 2 == 0 {
            Rgb::new(190, 190, 205)
        } else {
            Rgb::new(30, 30, 40)
        };
        let bg = GlyphStyle {
            fg: Rgb::new(80, 80, 90),
            bg: area_bg,
            intensity: Intensity::Normal,
        };
        let border = GlyphStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::BLACK,
            intensity: Intensity::Normal,
        };

        // Background for play area.
        surface.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);

        // Border.
        surface.stroke_rect(start_x, start_y, frame_w, frame_h, border);

        // Locked stack.
        for y in 0..BOARD_HEIGHT as u16 {
            for x in 0..BOARD_WIDTH as u16 {
                let cell = session.board().get(x as i8, y as i8).unwrap_or(None);
                match cell {
                    Some(color) => {
                        self.draw_block(surface, start_x, start_y, x, y, color, area_bg)
                    }
                    None => self.draw_empty_cell(surface, start_x, start_y, x, y, area_bg),
                }
            }
        }

        // Ghost piece, only while the game is actually moving.
        if session.phase() == Phase::Running {
            if let (Some(active), Some(ghost_y)) = (session.active(), session.ghost_y()) {
                let ghost = GlyphStyle {
                    fg: Rgb::new(140, 140, 140),
                    bg: area_bg,
                    intensity: Intensity::Dim,
                };
                for (dx, dy) in active.shape.cells() {
                    let x = active.x + dx as i8;
                    let y = ghost_y + dy as i8;
                    if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                        self.fill_cell_rect(
                            surface,
                            start_x,
                            start_y,
                            x as u16,
                            y as u16,
                            '░',
                            ghost,
                        );
                    }
                }
            }
        }

        // Active piece; rows hanging above the top edge are clipped.
        if let Some(active) = session.active() {
            for (dx, dy) in active.shape.cells() {
                let x = active.x + dx as i8;
                let y = active.y + dy as i8;
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.draw_block(
                        surface,
                        start_x,
                        start_y,
                        x as u16,
                        y as u16,
                        active.color,
                        area_bg,
                    );
                }
            }
        }

        // Side panel (score/best/level/next).
        self.draw_side_panel(session, best_score, viewport, surface, start_x, start_y, frame_w);

        // Phase overlays.
        let mid_y = start_y.saturating_add(frame_h / 2);
        match session.phase() {
            Phase::Idle => {
                self.draw_centered(surface, start_x, frame_w, mid_y, "PRESS ENTER TO START");
            }
            Phase::Paused => {
                self.draw_centered(surface, start_x, frame_w, mid_y, "PAUSED");
            }
            Phase::GameOver => {
                self.draw_centered(surface, start_x, frame_w, mid_y, "GAME OVER");
                self.draw_centered(
                    surface,
                    start_x,
                    frame_w,
                    mid_y + 1,
                    &format!("SCORE {}", session.score()),
                );
                self.draw_centered(surface, start_x, frame_w, mid_y + 2, "PRESS ENTER TO RESTART");
            }
            Phase::Running => {}
        }
    }

    /// Convenience helper that allocates a fresh surface.
    pub fn render<R: RandomSource>(
        &self,
        session: &GameSession<R>,
        best_score: u32,
        viewport: Viewport,
    ) -> Surface {
        let mut surface = Surface::new(viewport.width, viewport.height);
        self.render_into(session, best_score, viewport, &mut surface);
        surface
    }

    fn draw_empty_cell(
        &self,
        surface: &mut Surface,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        area_bg: Rgb,
    ) {
        let style = GlyphStyle {
            fg: Rgb::new(90, 90, 100),
            bg: area_bg,
            intensity: Intensity::Dim,
        };
        self.fill_cell_rect(surface, start_x, start_y, x, y, '·', style);
    }

    fn draw_block(
        &self,
        surface: &mut Surface,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        color: BlockColor,
        area_bg: Rgb,
    ) {
        let style = GlyphStyle {
            fg: color_rgb(color),
            bg: area_bg,
            intensity: Intensity::Bold,
        };
        self.fill_cell_rect(surface, start_x, start_y, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        surface: &mut Surface,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: GlyphStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        surface.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel<R: RandomSource>(
        &self,
        session: &GameSession<R>,
        best_score: u32,
        viewport: Viewport,
        surface: &mut Surface,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = GlyphStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::BLACK,
            intensity: Intensity::Bold,
        };
        let value = GlyphStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::BLACK,
            intensity: Intensity::Normal,
        };

        let mut y = start_y;
        surface.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        surface.put_str(panel_x, y, &format!("{}", session.score()), value);
        y = y.saturating_add(2);

        surface.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        surface.put_str(panel_x, y, &format!("{}", best_score), value);
        y = y.saturating_add(2);

        surface.put_str(panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        surface.put_str(panel_x, y, &format!("{}", session.level()), value);
        y = y.saturating_add(2);

        surface.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        if let Some(preview) = session.preview() {
            let shape = spawn_shape(preview.kind);
            let style = GlyphStyle {
                fg: color_rgb(preview.color),
                bg: Rgb::BLACK,
                intensity: Intensity::Bold,
            };
            for (dx, dy) in shape.cells() {
                let px = panel_x + (dx as u16) * self.cell_w;
                let py = y + dy as u16;
                if px + self.cell_w <= viewport.width && py < viewport.height {
                    surface.fill_rect(px, py, self.cell_w, 1, '█', style);
                }
            }
        }
    }

    fn draw_centered(&self, surface: &mut Surface, start_x: u16, frame_w: u16, y: u16, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = GlyphStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::BLACK,
            intensity: Intensity::Bold,
        };
        surface.put_str(x, y, text, style);
    }
}

fn color_rgb(color: BlockColor) -> Rgb {
    match color {
        BlockColor::Cyan => Rgb::new(80, 220, 220),
        BlockColor::Magenta => Rgb::new(220, 80, 220),
        BlockColor::Yellow => Rgb::new(240, 220, 80),
        BlockColor::Green => Rgb::new(100, 220, 120),
        BlockColor::Blue => Rgb::new(80, 120, 220),
        BlockColor::Red => Rgb::new(220, 80, 80),
        BlockColor::Orange => Rgb::new(255, 165, 0),
    }
}
