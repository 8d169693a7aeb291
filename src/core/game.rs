//! Game controller - one session's piece lifecycle and bookkeeping.
//!
//! Owns the board, the current piece, the hold slot and the counters,
//! and orchestrates spawn, movement validation, locking, line clears,
//! hold swaps and game-over detection. All operations are total:
//! an illegal move or rotation reverts to the prior valid state, and
//! the only terminal condition is the game-over flag.

use crate::core::board::Board;
use crate::core::piece::Piece;
use crate::core::rng::PieceSource;
use crate::core::shapes::shape;
use crate::core::snapshot::{GameSnapshot, HoldSnapshot};
use crate::types::{
    GameAction, GameConfig, PieceKind, Rotation, RowMask, BASE_DROP_INTERVAL_NS,
    DROP_INTERVAL_STEP_NS, MIN_DROP_INTERVAL_NS,
};

/// Complete session state.
///
/// There is always a current piece; it is replaced, never absent,
/// while the session lives. Restart means building a fresh `Game` and
/// swapping it in at the driver, not re-initializing this one.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current: Piece,
    hold: Option<PieceKind>,
    can_hold: bool,
    cleared_lines: u32,
    starting_level: u32,
    height: u8,
    game_over: bool,
    source: PieceSource,
    last_gravity_ns: Option<u64>,
}

impl Game {
    /// Build a session and spawn the first piece.
    pub fn new(config: GameConfig, source: PieceSource) -> Self {
        debug_assert!((1..=RowMask::BITS as u8).contains(&config.width));
        debug_assert!(config.height >= 1);

        let mut game = Self {
            board: Board::new(config.width),
            // Placeholder; replaced by the spawn below.
            current: Piece::new(PieceKind::O, 0, i16::from(config.width) / 2),
            hold: None,
            can_hold: true,
            cleared_lines: 0,
            starting_level: config.starting_level,
            height: config.height,
            game_over: false,
            source,
            last_gravity_ns: None,
        };
        game.spawn();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Piece {
        self.current
    }

    pub fn held(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn cleared_lines(&self) -> u32 {
        self.cleared_lines
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Derived level: starting level plus one per ten cleared lines.
    pub fn level(&self) -> u32 {
        self.starting_level + self.cleared_lines / 10
    }

    /// Apply one discrete action. Returns whether any state changed.
    pub fn apply(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::MoveDown => {
                if self.game_over {
                    false
                } else {
                    // Either the piece advanced or it locked; both
                    // change state.
                    self.move_down();
                    true
                }
            }
            GameAction::HardDrop => {
                if self.game_over {
                    false
                } else {
                    self.hard_drop();
                    true
                }
            }
            GameAction::RotateCw => self.rotate_cw(),
            GameAction::RotateCcw => self.rotate_ccw(),
            GameAction::Hold => self.hold(),
            // Restart is the driver's concern: it swaps in a freshly
            // built session instead of mutating this one.
            GameAction::Restart => false,
        }
    }

    /// Move the current piece down one row.
    ///
    /// Returns whether the piece advanced. A rejected downward move is
    /// not a no-op: it is the lock trigger, merging the piece into the
    /// board and spawning the next one.
    pub fn move_down(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let mut candidate = self.current;
        candidate.offset(-1, 0);
        if self.position_ok(&candidate) {
            self.current = candidate;
            true
        } else {
            self.lock();
            false
        }
    }

    /// Move one column toward the left wall; reverted if illegal.
    pub fn move_left(&mut self) -> bool {
        self.try_shift(1)
    }

    /// Move one column toward the right wall; reverted if illegal.
    pub fn move_right(&mut self) -> bool {
        self.try_shift(-1)
    }

    /// Drop until the downward move is rejected (which locks as a side
    /// effect of the final step).
    pub fn hard_drop(&mut self) {
        while self.move_down() {}
    }

    /// Advance rotation one step clockwise; reverted if the new
    /// orientation does not fit at the current anchor. No kick search.
    pub fn rotate_cw(&mut self) -> bool {
        self.try_rotate(true)
    }

    /// Retreat rotation one step counter-clockwise; reverted if the
    /// new orientation does not fit at the current anchor.
    pub fn rotate_ccw(&mut self) -> bool {
        self.try_rotate(false)
    }

    /// Hold mechanic: at most one swap per lock cycle.
    ///
    /// The first use stores the current kind and spawns a fresh piece;
    /// later uses swap with the stored kind while hold is available.
    /// Either way availability is consumed until the next lock.
    pub fn hold(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        match self.hold {
            None => {
                self.hold = Some(self.current.kind());
                self.spawn();
                self.can_hold = false;
                true
            }
            Some(held) if self.can_hold => {
                self.hold = Some(self.current.kind());
                self.place_new(held);
                self.can_hold = false;
                true
            }
            Some(_) => false,
        }
    }

    /// Gravity interval for the current level, clamped to a positive
    /// floor so high levels never busy-loop.
    pub fn gravity_interval_ns(&self) -> u64 {
        BASE_DROP_INTERVAL_NS
            .saturating_sub(u64::from(self.level()) * DROP_INTERVAL_STEP_NS)
            .max(MIN_DROP_INTERVAL_NS)
    }

    /// Drive gravity from a monotonic nanosecond timestamp.
    ///
    /// The first call arms the timer without moving the piece. Later
    /// calls apply one automatic downward move (which may lock) every
    /// time the level interval has elapsed, then rearm. Returns
    /// whether a gravity step happened.
    pub fn tick(&mut self, now_ns: u64) -> bool {
        if self.game_over {
            return false;
        }
        match self.last_gravity_ns {
            None => {
                self.last_gravity_ns = Some(now_ns);
                false
            }
            Some(armed_ns) => {
                if now_ns.saturating_sub(armed_ns) < self.gravity_interval_ns() {
                    return false;
                }
                self.last_gravity_ns = Some(now_ns);
                self.move_down();
                true
            }
        }
    }

    /// Full-board snapshot with the current piece composited in.
    pub fn snapshot(&self) -> GameSnapshot {
        let piece_rows = if self.current.col() >= i16::from(self.current.width()) {
            Some(self.current.occupied_rows())
        } else {
            // A spawn-dead piece can sit outside the side bounds on a
            // very narrow board; render the locked cells only.
            None
        };

        let rows = (0..self.height)
            .rev()
            .map(|board_row| {
                let mut mask = self.board.row(usize::from(board_row));
                if let Some(ref piece_rows) = piece_rows {
                    let offset = i16::from(board_row) - self.current.row();
                    if (0..piece_rows.len() as i16).contains(&offset) {
                        mask |= piece_rows[offset as usize];
                    }
                }
                mask
            })
            .collect();

        GameSnapshot {
            width: self.board.width(),
            height: self.height,
            rows,
            hold: self.hold.map(HoldSnapshot::of),
            cleared_lines: self.cleared_lines,
            level: self.level(),
            game_over: self.game_over,
        }
    }

    /// Whether a candidate position satisfies the piece invariant:
    /// inside both side walls, at or above the floor, and free of
    /// locked cells. Bounds are checked before masks are built so the
    /// column shift is always non-negative.
    fn position_ok(&self, piece: &Piece) -> bool {
        if piece.row() < 0 {
            return false;
        }
        if piece.col() > i16::from(self.board.width()) {
            return false;
        }
        if piece.col() < i16::from(piece.width()) {
            return false;
        }
        !self
            .board
            .overlaps(&piece.occupied_rows(), piece.row() as usize)
    }

    fn try_shift(&mut self, d_col: i16) -> bool {
        if self.game_over {
            return false;
        }
        let mut candidate = self.current;
        candidate.offset(0, d_col);
        if self.position_ok(&candidate) {
            self.current = candidate;
            true
        } else {
            false
        }
    }

    fn try_rotate(&mut self, clockwise: bool) -> bool {
        if self.game_over {
            return false;
        }
        let mut candidate = self.current;
        if clockwise {
            candidate.rotate_cw();
        } else {
            candidate.rotate_ccw();
        }
        if self.position_ok(&candidate) {
            self.current = candidate;
            true
        } else {
            false
        }
    }

    /// Merge the current piece, clear completed rows, re-arm hold and
    /// spawn the next piece.
    fn lock(&mut self) {
        self.board
            .merge(&self.current.occupied_rows(), self.current.row() as usize);
        self.cleared_lines += self.board.clear_full_rows() as u32;
        self.can_hold = true;
        self.spawn();
    }

    /// Draw the next kind from the source and place it.
    fn spawn(&mut self) {
        let kind = self.source.draw();
        self.place_new(kind);
    }

    /// Place a fresh piece of `kind` at the spawn anchor: base
    /// rotation, column at mid-board, bounding-box top flush with the
    /// board top. If it violates the invariant immediately, the game
    /// is over; the piece stays in place as the terminal piece and the
    /// game-over guard keeps it inert.
    fn place_new(&mut self, kind: PieceKind) {
        let spawn_height = shape(kind).variant(Rotation::North).height();
        let row = i16::from(self.height) - i16::from(spawn_height);
        let col = i16::from(self.board.width()) / 2;
        self.current = Piece::new(kind, row, col);
        if !self.position_ok(&self.current) {
            self.game_over = true;
        }
    }
}
