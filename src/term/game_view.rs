//! GameView: maps a `GameSnapshot` into terminal text.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::snapshot::{GameSnapshot, HoldSnapshot};

/// Renders snapshots as bordered character grids.
///
/// Each board cell is printed two characters wide to compensate for
/// the typical terminal glyph aspect ratio.
pub struct GameView {
    filled: char,
    empty: char,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            filled: '█',
            empty: '·',
        }
    }
}

impl GameView {
    pub fn new(filled: char, empty: char) -> Self {
        Self { filled, empty }
    }

    /// Render the full frame: board, hold box, counters.
    pub fn render(&self, snap: &GameSnapshot) -> String {
        let mut out = String::new();
        let inner = usize::from(snap.width) * 2;

        out.push('+');
        out.push_str(&"-".repeat(inner));
        out.push_str("+\n");
        for y in 0..snap.height {
            out.push('|');
            for x in 0..snap.width {
                let ch = if snap.cell(x, y) {
                    self.filled
                } else {
                    self.empty
                };
                out.push(ch);
                out.push(ch);
            }
            out.push_str("|\n");
        }
        out.push('+');
        out.push_str(&"-".repeat(inner));
        out.push_str("+\n");

        out.push_str("\nHOLD:\n");
        match snap.hold {
            Some(ref hold) => self.render_hold(&mut out, hold),
            None => out.push_str("(empty)\n"),
        }

        out.push_str(&format!("\nLINES: {}\n", snap.cleared_lines));
        out.push_str(&format!("LEVEL: {}\n", snap.level));

        if snap.game_over {
            out.push_str("\nGAME OVER - press r to restart, q to quit\n");
        }

        out
    }

    fn render_hold(&self, out: &mut String, hold: &HoldSnapshot) {
        for y in 0..hold.rows.len() as u8 {
            for x in 0..hold.width {
                let ch = if hold.cell(x, y) {
                    self.filled
                } else {
                    self.empty
                };
                out.push(ch);
                out.push(ch);
            }
            out.push('\n');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Game, PieceSource};
    use crate::types::{GameConfig, PieceKind};

    #[test]
    fn test_render_frame_layout() {
        let game = Game::new(
            GameConfig::default(),
            PieceSource::scripted(vec![PieceKind::O]),
        );
        let view = GameView::default();
        let frame = view.render(&game.snapshot());

        let lines: Vec<&str> = frame.lines().collect();
        // Border, 20 board rows, border.
        assert_eq!(lines[0], format!("+{}+", "-".repeat(20)));
        assert_eq!(lines[21], lines[0]);
        assert_eq!(lines.iter().filter(|l| l.starts_with('|')).count(), 20);
        assert!(frame.contains("LINES: 0"));
        assert!(frame.contains("LEVEL: 0"));
        assert!(frame.contains("(empty)"));
        assert!(!frame.contains("GAME OVER"));
    }

    #[test]
    fn test_render_shows_current_piece() {
        let game = Game::new(
            GameConfig::default(),
            PieceSource::scripted(vec![PieceKind::O]),
        );
        let frame = GameView::new('#', '.').render(&game.snapshot());
        // O spawns in the top two board rows at mid-board.
        let top_row = frame.lines().nth(1).unwrap();
        assert!(top_row.contains("####"));
    }

    #[test]
    fn test_render_hold_box() {
        let mut game = Game::new(
            GameConfig::default(),
            PieceSource::scripted(vec![PieceKind::I, PieceKind::O]),
        );
        game.hold();
        let frame = GameView::new('#', '.').render(&game.snapshot());
        assert!(!frame.contains("(empty)"));
        // Held vertical I renders as four one-cell rows.
        assert!(frame.contains("\n##\n##\n##\n##\n"));
    }
}
