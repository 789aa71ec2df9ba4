//! Framebuffer and style types for terminal rendering.
//!
//! All drawing primitives clip silently at the buffer edges, so callers can
//! place dialogs and glyphs without checking the terminal size first.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn fg(fg: Rgb) -> Self {
        Self {
            fg,
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    pub const fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::fg(Rgb::new(220, 220, 220))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Print `s` starting at `(x, y)`, one column per char, clipped at the right edge.
    pub fn print_at(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Double-line bordered box with `title` on its first inner row.
    ///
    /// The interior is blanked. Boxes smaller than 2x2 are not drawn.
    pub fn draw_dialog(&mut self, x: u16, y: u16, w: u16, h: u16, title: &str, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        self.fill_rect(x + 1, y + 1, w - 2, h - 2, ' ', style);

        self.put_char(x, y, '╔', style);
        self.put_char(right, y, '╗', style);
        self.put_char(x, bottom, '╚', style);
        self.put_char(right, bottom, '╝', style);
        for dx in 1..w - 1 {
            self.put_char(x.saturating_add(dx), y, '═', style);
            self.put_char(x.saturating_add(dx), bottom, '═', style);
        }
        for dy in 1..h - 1 {
            self.put_char(x, y.saturating_add(dy), '║', style);
            self.put_char(right, y.saturating_add(dy), '║', style);
        }

        if h > 2 {
            self.print_at(x + 1, y + 1, title, style.bold());
        }
    }

    /// Row `y` as a string, for tests and debugging.
    pub fn row_string(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_at_clips_at_right_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.print_at(2, 0, "abc", CellStyle::default());
        assert_eq!(fb.row_string(0), "  ab");
    }

    #[test]
    fn dialog_draws_double_border_and_title() {
        let mut fb = FrameBuffer::new(12, 5);
        fb.draw_dialog(1, 0, 10, 4, "You win!", CellStyle::default());
        assert_eq!(fb.row_string(0), " ╔════════╗ ");
        assert_eq!(fb.row_string(1), " ║You win!║ ");
        assert_eq!(fb.row_string(2), " ║        ║ ");
        assert_eq!(fb.row_string(3), " ╚════════╝ ");
        assert_eq!(fb.row_string(4), "            ");
    }

    #[test]
    fn dialog_clips_when_partly_offscreen() {
        let mut fb = FrameBuffer::new(5, 3);
        fb.draw_dialog(2, 1, 10, 10, "Title", CellStyle::default());
        assert_eq!(fb.get(2, 1).unwrap().ch, '╔');
        assert_eq!(fb.row_string(2), "  ║Ti");
    }

    #[test]
    fn resize_keeps_requested_dimensions() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.resize(5, 3);
        assert_eq!((fb.width(), fb.height()), (5, 3));
        assert_eq!(fb.cells().len(), 15);
    }
}
