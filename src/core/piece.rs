//! Piece module - a live, mutable instance of a shape.
//!
//! A piece is a shape identity plus a rotation state and an anchor.
//! Its occupied cells are exposed as row bitmasks already shifted to
//! the board columns, so overlap testing against board rows is a
//! single bitwise AND per row.

use crate::core::shapes::{shape, ShapeVariant, VariantRows};
use crate::types::{PieceKind, Rotation};

/// Active falling piece.
///
/// `row` is the board row of the variant's bottom row (row 0 is the
/// lowest board row). `col` is the exclusive upper bit boundary of the
/// piece: the occupied bits of every row sit in `[col - width, col)`.
/// Either coordinate may step outside the board while the controller
/// probes a candidate move; only validated positions persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    rotation: Rotation,
    row: i16,
    col: i16,
}

impl Piece {
    /// Create a piece in its base rotation at the given anchor.
    pub fn new(kind: PieceKind, row: i16, col: i16) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            row,
            col,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn row(&self) -> i16 {
        self.row
    }

    pub fn col(&self) -> i16 {
        self.col
    }

    /// The precomputed variant for the current rotation state.
    pub fn variant(&self) -> &'static ShapeVariant {
        shape(self.kind).variant(self.rotation)
    }

    /// Width of the current variant's bounding box.
    pub fn width(&self) -> u8 {
        self.variant().width()
    }

    /// Height of the current variant's bounding box.
    pub fn height(&self) -> u8 {
        self.variant().height()
    }

    /// Row masks shifted to the piece's board columns, bottom row first.
    ///
    /// Callers must have checked the side bounds: the shift amount
    /// `col - width` is non-negative for any in-bounds column.
    pub fn occupied_rows(&self) -> VariantRows {
        let variant = self.variant();
        let shift = self.col - i16::from(variant.width());
        debug_assert!(shift >= 0, "occupied_rows on an out-of-bounds column");
        variant.rows().iter().map(|&row| row << shift).collect()
    }

    /// Translate the anchor. Pure state change; legality is the
    /// controller's job.
    pub fn offset(&mut self, d_row: i16, d_col: i16) {
        self.row += d_row;
        self.col += d_col;
    }

    /// Advance the rotation state one step clockwise.
    pub fn rotate_cw(&mut self) {
        self.rotation = self.rotation.cw();
    }

    /// Retreat the rotation state one step counter-clockwise.
    pub fn rotate_ccw(&mut self) {
        self.rotation = self.rotation.ccw();
    }
}
