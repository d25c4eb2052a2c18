//! Frame surface: the styled glyph grid a frame is composed into.
//!
//! The view repaints a whole frame into a [`Surface`] each time; the
//! presenter keeps the frame it drew last and asks
//! [`Surface::changed_runs`] for the spans that differ, so a steady frame
//! costs almost nothing on the wire. All drawing clips at the grid edge,
//! nothing wraps.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// SGR intensity of a glyph: normal, bold, or faint. Never combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Intensity {
    #[default]
    Normal,
    Bold,
    Dim,
}

/// How one glyph is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlyphStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub intensity: Intensity,
}

/// One terminal cell: a character plus its paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: GlyphStyle,
}

impl Glyph {
    /// What a cleared cell holds: a space on the terminal's black.
    pub const BLANK: Glyph = Glyph {
        ch: ' ',
        style: GlyphStyle {
            fg: Rgb::BLACK,
            bg: Rgb::BLACK,
            intensity: Intensity::Normal,
        },
    };
}

/// A horizontal span whose glyphs differ from the previous frame.
#[derive(Debug, Clone, Copy)]
pub struct Run<'a> {
    pub x: u16,
    pub y: u16,
    pub glyphs: &'a [Glyph],
}

/// Row-major grid of glyphs sized to the terminal viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl Surface {
    pub fn new(width: u16, height: u16) -> Self {
        let mut surface = Self {
            width: 0,
            height: 0,
            glyphs: Vec::new(),
        };
        surface.resize(width, height);
        surface
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Fit the grid to a new viewport, reusing the allocation.
    ///
    /// A real size change blanks every cell; a same-size call keeps the
    /// contents untouched.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.glyphs.clear();
        self.glyphs
            .resize((width as usize) * (height as usize), Glyph::BLANK);
    }

    /// Blank every cell.
    pub fn clear(&mut self) {
        self.glyphs.fill(Glyph::BLANK);
    }

    /// The glyph at (x, y), or `None` off the grid.
    pub fn glyph(&self, x: u16, y: u16) -> Option<Glyph> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.glyphs[(y as usize) * (self.width as usize) + (x as usize)])
    }

    /// The rows, top to bottom, as glyph slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Glyph]> {
        // chunks_exact rejects a zero chunk size; a zero-width grid holds
        // no glyphs, so any positive size yields the same empty iterator.
        self.glyphs.chunks_exact((self.width as usize).max(1))
    }

    /// Write text left to right from (x, y), clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, style: GlyphStyle) {
        let Some(row) = self.row_mut(y) else {
            return;
        };
        let mut cells = row.iter_mut().skip(x as usize);
        for ch in text.chars() {
            match cells.next() {
                Some(cell) => *cell = Glyph { ch, style },
                None => break,
            }
        }
    }

    /// Fill a rectangle with one repeated glyph.
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: GlyphStyle) {
        let glyph = Glyph { ch, style };
        for dy in 0..h {
            let Some(row) = self.row_mut(y.saturating_add(dy)) else {
                break;
            };
            for cell in row.iter_mut().skip(x as usize).take(w as usize) {
                *cell = glyph;
            }
        }
    }

    /// Draw a single-line box along the edge of a rectangle.
    pub fn stroke_rect(&mut self, x: u16, y: u16, w: u16, h: u16, style: GlyphStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        self.put(x, y, '┌', style);
        self.put(right, y, '┐', style);
        self.put(x, bottom, '└', style);
        self.put(right, bottom, '┘', style);
        for bx in x.saturating_add(1)..right {
            self.put(bx, y, '─', style);
            self.put(bx, bottom, '─', style);
        }
        for by in y.saturating_add(1)..bottom {
            self.put(x, by, '│', style);
            self.put(right, by, '│', style);
        }
    }

    /// Spans of this surface that differ from `prev`: row by row, left to
    /// right, adjacent differences coalesced into one [`Run`]. Surfaces of
    /// different sizes share no usable history, so every row comes back as
    /// a single whole-row span.
    pub fn changed_runs<'a>(&'a self, prev: &'a Surface) -> ChangedRuns<'a> {
        ChangedRuns {
            next: &self.glyphs,
            prev: &prev.glyphs,
            width: self.width as usize,
            height: self.height,
            row: 0,
            col: 0,
            whole_rows: self.width != prev.width || self.height != prev.height,
        }
    }

    fn row_mut(&mut self, y: u16) -> Option<&mut [Glyph]> {
        if y >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = (y as usize) * w;
        Some(&mut self.glyphs[start..start + w])
    }

    fn put(&mut self, x: u16, y: u16, ch: char, style: GlyphStyle) {
        if x < self.width && y < self.height {
            let i = (y as usize) * (self.width as usize) + (x as usize);
            self.glyphs[i] = Glyph { ch, style };
        }
    }
}

/// Iterator behind [`Surface::changed_runs`].
#[derive(Debug)]
pub struct ChangedRuns<'a> {
    next: &'a [Glyph],
    prev: &'a [Glyph],
    width: usize,
    height: u16,
    row: u16,
    col: usize,
    whole_rows: bool,
}

impl<'a> Iterator for ChangedRuns<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Run<'a>> {
        while self.row < self.height {
            let y = self.row;
            let start = (y as usize) * self.width;
            let row_next = &self.next[start..start + self.width];

            if self.whole_rows {
                self.row += 1;
                if row_next.is_empty() {
                    continue;
                }
                return Some(Run {
                    x: 0,
                    y,
                    glyphs: row_next,
                });
            }

            let row_prev = &self.prev[start..start + self.width];
            while self.col < self.width && row_next[self.col] == row_prev[self.col] {
                self.col += 1;
            }
            if self.col == self.width {
                self.row += 1;
                self.col = 0;
                continue;
            }

            let from = self.col;
            while self.col < self.width && row_next[self.col] != row_prev[self.col] {
                self.col += 1;
            }
            return Some(Run {
                x: from as u16,
                y,
                glyphs: &row_next[from..self.col],
            });
        }
        None
    }
}
