//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Board cells map one-to-one onto terminal cells: the board was sized from the
//! terminal, so there is no frame, no scaling and no side panel.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Overlay, Position};

/// One glyph per kind of token, each a single column wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Glyphs {
    player: char,
    drone: char,
    wreck: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            player: '@',
            drone: '◆',
            wreck: '▒',
        }
    }
}

/// A lightweight terminal renderer for the chase board.
#[derive(Debug, Clone, Default)]
pub struct GameView {
    glyphs: Glyphs,
}

impl GameView {
    /// Render the snapshot into an existing framebuffer.
    ///
    /// Draw order: drones in index order, then the player, then the overlay.
    pub fn render_into(&self, snap: &GameSnapshot, fb: &mut FrameBuffer) {
        fb.resize(snap.width, snap.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let drone = CellStyle::fg(Rgb::new(230, 80, 70)).bold();
        let wreck = CellStyle::fg(Rgb::new(120, 120, 120)).dim();
        for d in snap.drones.iter() {
            let (ch, style) = if d.alive {
                (self.glyphs.drone, drone)
            } else {
                (self.glyphs.wreck, wreck)
            };
            put_token(fb, d.position, ch, style);
        }

        let player = CellStyle::fg(Rgb::new(250, 220, 90)).bold();
        put_token(fb, snap.player, self.glyphs.player, player);

        if let Some(d) = snap.overlay.dialog() {
            let bg = match snap.overlay {
                Overlay::Win(_) => Rgb::new(20, 90, 40),
                _ => Rgb::new(120, 30, 30),
            };
            let style = CellStyle::fg(Rgb::new(255, 255, 255)).with_bg(bg);
            fb.draw_dialog(d.x, d.y, d.width, d.height, d.title, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot) -> FrameBuffer {
        let mut fb = FrameBuffer::new(snap.width, snap.height);
        self.render_into(snap, &mut fb);
        fb
    }
}

fn put_token(fb: &mut FrameBuffer, p: Position, ch: char, style: CellStyle) {
    if let (Ok(x), Ok(y)) = (u16::try_from(p.x), u16::try_from(p.y)) {
        fb.put_char(x, y, ch, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Drone, GameState};
    use crate::types::{Dialog, DRONE_COUNT};

    fn layout() -> GameState {
        let mut drones = [Drone::wreck(Position::new(0, 0)); DRONE_COUNT];
        drones[1] = Drone::new(Position::new(3, 1));
        GameState::with_layout(Board::new(6, 3).unwrap(), Position::new(5, 2), drones).unwrap()
    }

    #[test]
    fn tokens_land_on_their_cells() {
        let fb = GameView::default().render(&layout().snapshot());
        assert_eq!((fb.width(), fb.height()), (6, 3));
        assert_eq!(fb.get(0, 0).unwrap().ch, '▒');
        assert_eq!(fb.get(3, 1).unwrap().ch, '◆');
        assert_eq!(fb.get(5, 2).unwrap().ch, '@');
        assert_eq!(fb.get(1, 0).unwrap().ch, ' ');
    }

    #[test]
    fn player_draws_over_drone_on_same_cell() {
        let mut snap = layout().snapshot();
        snap.drones[1].position = snap.player;
        let fb = GameView::default().render(&snap);
        assert_eq!(fb.get(5, 2).unwrap().ch, '@');
    }

    #[test]
    fn overlay_dialog_is_drawn_on_top() {
        let mut snap = layout().snapshot();
        snap.overlay = Overlay::Win(Dialog::new(0, 0, 6, 3, "Win"));
        let fb = GameView::default().render(&snap);
        assert_eq!(fb.row_string(0), "╔════╗");
        assert_eq!(fb.row_string(1), "║Win ║");
        assert_eq!(fb.row_string(2), "╚════╝");
        assert_eq!(fb.get(1, 1).unwrap().style.bg, Rgb::new(20, 90, 40));
    }

    #[test]
    fn game_over_dialog_uses_its_own_background() {
        let mut snap = layout().snapshot();
        snap.overlay = Overlay::GameOver(Dialog::new(0, 0, 6, 3, "Over"));
        let fb = GameView::default().render(&snap);
        assert_eq!(fb.row_string(1), "║Over║");
        assert_eq!(fb.get(0, 0).unwrap().style.bg, Rgb::new(120, 30, 30));
    }
}
