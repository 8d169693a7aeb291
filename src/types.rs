//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// One board or piece row packed into an integer, one bit per column.
///
/// Bit 0 is the rightmost board column. The renderer prints masks
/// most-significant bit first, so printed rows read left to right.
pub type RowMask = u16;

/// Widest board the row representation can hold.
pub const MAX_BOARD_WIDTH: u8 = RowMask::BITS as u8;

/// Default board dimensions
pub const DEFAULT_BOARD_WIDTH: u8 = 10;
pub const DEFAULT_BOARD_HEIGHT: u8 = 20;

/// Gravity timing (nanoseconds)
pub const BASE_DROP_INTERVAL_NS: u64 = 800_000_000;
pub const DROP_INTERVAL_STEP_NS: u64 = 50_000_000;
/// Floor for the per-level interval so high levels never produce a
/// zero or negative wait.
pub const MIN_DROP_INTERVAL_NS: u64 = 50_000_000;

/// The seven piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    O,
    I,
    S,
    Z,
    J,
    L,
    T,
}

impl PieceKind {
    /// All kinds, in shape-table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::O,
        PieceKind::I,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
        PieceKind::T,
    ];

    /// Index into shape-table order.
    pub fn index(self) -> usize {
        match self {
            PieceKind::O => 0,
            PieceKind::I => 1,
            PieceKind::S => 2,
            PieceKind::Z => 3,
            PieceKind::J => 4,
            PieceKind::L => 5,
            PieceKind::T => 6,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::O => "o",
            PieceKind::I => "i",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::T => "t",
        }
    }
}

/// Rotation states (North = spawn orientation)
///
/// The four states form a cyclic group; `cw` and `ccw` are inverse
/// steps through it. Adjacency is spelled out per state rather than
/// computed, so the state labels stay decoupled from the transform
/// count that produced each precomputed variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise
    pub fn cw(self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise
    pub fn ccw(self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// Index into a shape's variant table.
    pub fn index(self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    MoveDown,
    HardDrop,
    RotateCw,
    RotateCcw,
    Hold,
    Restart,
}

/// Session parameters.
///
/// Width is capped by the row-mask type; the binary validates user
/// input before a `Game` is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    pub starting_level: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            starting_level: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_cw_ccw_are_inverse() {
        for rot in [
            Rotation::North,
            Rotation::East,
            Rotation::South,
            Rotation::West,
        ] {
            assert_eq!(rot.cw().ccw(), rot);
            assert_eq!(rot.ccw().cw(), rot);
        }
    }

    #[test]
    fn test_rotation_cycle_closes() {
        let mut rot = Rotation::North;
        for _ in 0..4 {
            rot = rot.cw();
        }
        assert_eq!(rot, Rotation::North);
    }

    #[test]
    fn test_piece_kind_index_matches_all_order() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }
}
