//! TerminalPresenter: owns the tty session and puts frames on screen.
//!
//! `enter`/`exit` bracket a raw-mode alternate screen. Between frames the
//! presenter keeps the one it drew last; the next frame goes out as the
//! changed spans reported by [`Surface::changed_runs`], with a full repaint
//! only on the first frame and after a viewport change.

use std::io::{self, Write};
use std::mem;

use anyhow::Result;

use crossterm::{
    cursor, queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal,
};

use crate::surface::{Glyph, GlyphStyle, Intensity, Rgb, Surface};

pub struct TerminalPresenter {
    stdout: io::Stdout,
    last: Option<Surface>,
}

impl TerminalPresenter {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        queue!(
            self.stdout,
            terminal::EnterAlternateScreen,
            terminal::DisableLineWrap,
            cursor::Hide
        )?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        queue!(
            self.stdout,
            ResetColor,
            SetAttribute(Attribute::Reset),
            cursor::Show,
            terminal::EnableLineWrap,
            terminal::LeaveAlternateScreen
        )?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Drop the frame history so the next draw repaints everything.
    /// The shell calls this when the terminal reports a resize.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Put a frame on screen and take it into the history.
    ///
    /// Callers keep one `Surface` and pass it in every frame; the previous
    /// buffer is handed back through `surface` for them to repaint, so
    /// steady-state drawing never clones.
    pub fn draw_swap(&mut self, surface: &mut Surface) -> Result<()> {
        match self.last.take() {
            Some(mut prev)
                if prev.width() == surface.width() && prev.height() == surface.height() =>
            {
                self.flush_changed(surface, &prev)?;
                mem::swap(&mut prev, surface);
                self.last = Some(prev);
            }
            Some(mut prev) => {
                self.flush_full(surface)?;
                // Sizes differ, so this resize also blanks the buffer.
                prev.resize(surface.width(), surface.height());
                mem::swap(&mut prev, surface);
                self.last = Some(prev);
            }
            None => {
                self.flush_full(surface)?;
                self.last = Some(surface.clone());
            }
        }
        Ok(())
    }

    fn flush_full(&mut self, surface: &Surface) -> Result<()> {
        queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        let mut brush = None;
        for (y, row) in surface.rows().enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, y as u16))?;
            self.print_span(row, &mut brush)?;
        }
        self.finish_frame()
    }

    fn flush_changed(&mut self, next: &Surface, prev: &Surface) -> Result<()> {
        let mut brush = None;
        let mut touched = false;
        for run in next.changed_runs(prev) {
            queue!(self.stdout, cursor::MoveTo(run.x, run.y))?;
            self.print_span(run.glyphs, &mut brush)?;
            touched = true;
        }
        // An unchanged frame writes nothing at all.
        if touched {
            self.finish_frame()?;
        }
        Ok(())
    }

    /// Print one span of glyphs at the cursor, restyling only on change.
    fn print_span(&mut self, glyphs: &[Glyph], brush: &mut Option<GlyphStyle>) -> Result<()> {
        for glyph in glyphs {
            if *brush != Some(glyph.style) {
                self.select_style(glyph.style)?;
                *brush = Some(glyph.style);
            }
            queue!(self.stdout, Print(glyph.ch))?;
        }
        Ok(())
    }

    /// `Attribute::Reset` wipes colors too, so it has to go out first.
    fn select_style(&mut self, style: GlyphStyle) -> Result<()> {
        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        match style.intensity {
            Intensity::Bold => queue!(self.stdout, SetAttribute(Attribute::Bold))?,
            Intensity::Dim => queue!(self.stdout, SetAttribute(Attribute::Dim))?,
            Intensity::Normal => {}
        }
        queue!(
            self.stdout,
            SetForegroundColor(paint(style.fg)),
            SetBackgroundColor(paint(style.bg))
        )?;
        Ok(())
    }

    fn finish_frame(&mut self) -> Result<()> {
        queue!(self.stdout, ResetColor, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalPresenter {
    fn default() -> Self {
        Self::new()
    }
}

fn paint(rgb: Rgb) -> Color {
    let Rgb { r, g, b } = rgb;
    Color::Rgb { r, g, b }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_preserves_channels() {
        assert_eq!(
            paint(Rgb::new(12, 200, 9)),
            Color::Rgb { r: 12, g: 200, b: 9 }
        );
    }

    #[test]
    fn test_invalidate_drops_the_frame_history() {
        let mut presenter = TerminalPresenter::new();
        assert!(presenter.last.is_none());
        presenter.last = Some(Surface::new(2, 2));
        presenter.invalidate();
        assert!(presenter.last.is_none());
    }
}
