//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame is a full redraw; later frames only rewrite the runs of cells
//! that changed since the previous frame.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

use crate::surface::Surface;

/// Owns the real terminal: raw mode, alternate screen, cursor visibility.
///
/// Restores the terminal on [`TerminalRenderer::exit`] or, failing that, on drop.
pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    entered: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
            entered: false,
        }
    }

    /// Enable raw mode, switch to the alternate screen and hide the cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.entered = true;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Clear the screen, show the cursor and hand the terminal back.
    ///
    /// Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers should keep one `FrameBuffer` and pass it in every frame.
    /// The renderer will diff against the previous frame and then swap buffers
    /// so the caller can reuse the old one without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame_into(self.last.as_ref(), fb, &mut self.buf)?;
        self.flush_buf()?;

        // The previous frame becomes the caller's scratch buffer.
        let mut prev = match self.last.take() {
            Some(mut prev) => {
                prev.resize(fb.width(), fb.height());
                prev
            }
            None => FrameBuffer::new(fb.width(), fb.height()),
        };
        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

impl std::fmt::Debug for TerminalRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalRenderer")
            .field("entered", &self.entered)
            .finish_non_exhaustive()
    }
}

impl Surface for TerminalRenderer {
    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.draw_swap(fb)
    }
}

/// Encode the commands that turn `prev` into `next` on screen.
///
/// Without a previous frame of the same size the screen is cleared and every
/// cell is drawn. Otherwise only cells that differ are written, with one cursor
/// move per run of adjacent changes.
pub fn encode_frame_into(
    prev: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<()> {
    let prev = prev.filter(|p| p.width() == next.width() && p.height() == next.height());
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut at: Option<(u16, u16)> = None;
    let mut pen: Option<CellStyle> = None;
    for y in 0..next.height() {
        for x in 0..next.width() {
            let cell = next.get(x, y).unwrap_or_default();
            if prev.and_then(|p| p.get(x, y)) == Some(cell) {
                continue;
            }
            if at != Some((x, y)) {
                out.queue(cursor::MoveTo(x, y))?;
            }
            if pen != Some(cell.style) {
                set_pen(out, cell.style)?;
                pen = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
            at = Some((x + 1, y));
        }
    }

    if pen.is_some() {
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(ResetColor)?;
    }
    Ok(())
}

/// SGR reset clears colors too, so it goes first.
fn set_pen(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(truecolor(style.fg)))?;
    out.queue(SetBackgroundColor(truecolor(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn truecolor(c: Rgb) -> Color {
    Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    fn encode(prev: Option<&FrameBuffer>, next: &FrameBuffer) -> String {
        let mut out = Vec::new();
        encode_frame_into(prev, next, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn exit_before_enter_leaves_terminal_alone() {
        let mut term = TerminalRenderer::new();
        term.exit().unwrap();
        term.exit().unwrap();
        assert!(term.buf.is_empty());
    }

    #[test]
    fn first_frame_clears_and_draws_every_glyph() {
        let mut fb = FrameBuffer::new(2, 2);
        let style = CellStyle::default();
        fb.set(0, 0, Cell { ch: '@', style });
        fb.set(1, 1, Cell { ch: '◆', style });

        let text = encode(None, &fb);
        assert!(text.starts_with("\x1b[2J"));
        assert!(text.contains('@'));
        assert!(text.contains('◆'));
    }

    #[test]
    fn identical_frames_encode_to_nothing() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.print_at(0, 0, "abc", CellStyle::default());

        assert_eq!(encode(Some(&fb.clone()), &fb), "");
    }

    #[test]
    fn adjacent_changes_share_one_cursor_move() {
        let prev = FrameBuffer::new(5, 1);
        let mut next = prev.clone();
        next.print_at(1, 0, "XXX", CellStyle::default());

        let text = encode(Some(&prev), &next);
        // MoveTo is 1-based on the wire.
        assert!(text.contains("\x1b[1;2H"));
        assert_eq!(text.matches('H').count(), 1);
        assert_eq!(text.matches('X').count(), 3);
    }

    #[test]
    fn size_change_forces_a_full_redraw() {
        let prev = FrameBuffer::new(2, 1);
        let next = FrameBuffer::new(3, 1);

        let text = encode(Some(&prev), &next);
        assert!(text.starts_with("\x1b[2J"));
        assert_eq!(text.matches(' ').count(), 3);
    }
}
