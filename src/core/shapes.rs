//! Shape table - the seven piece geometries and their rotation variants.
//!
//! A shape is a sequence of row bitmasks, bottom row first, bit 0 at the
//! rightmost column. The base geometry is the North variant; the other
//! three are derived once, at table construction, by chaining a
//! 90-degree counter-clockwise transform.

use std::sync::OnceLock;

use arrayvec::ArrayVec;

use crate::types::{PieceKind, Rotation, RowMask};

/// Row masks of one rotation variant (a piece spans at most four rows).
pub type VariantRows = ArrayVec<RowMask, 4>;

/// One precomputed rotation variant: row masks plus cached dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeVariant {
    rows: VariantRows,
    width: u8,
    height: u8,
}

impl ShapeVariant {
    fn new(rows: VariantRows) -> Self {
        let width = rows.iter().map(|&row| bit_width(row)).max().unwrap_or(0);
        let height = rows.len() as u8;
        Self {
            rows,
            width,
            height,
        }
    }

    /// Row masks, bottom row first.
    pub fn rows(&self) -> &[RowMask] {
        &self.rows
    }

    /// Highest occupied bit position + 1 across the rows.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Row count.
    pub fn height(&self) -> u8 {
        self.height
    }
}

/// All four rotation variants of one piece kind.
#[derive(Debug, Clone)]
pub struct Shape {
    variants: [ShapeVariant; 4],
}

impl Shape {
    /// Build a shape from its base geometry.
    ///
    /// The transform turns the grid counter-clockwise, so West is one
    /// application, South two, East three. Stepping North -> East ->
    /// South -> West (`Rotation::cw`) therefore turns the visual shape
    /// clockwise one quarter per step.
    fn from_base(base: &[RowMask]) -> Self {
        let north = ShapeVariant::new(base.iter().copied().collect());
        let west = ShapeVariant::new(rotate_ccw(north.rows(), north.width()));
        let south = ShapeVariant::new(rotate_ccw(west.rows(), west.width()));
        let east = ShapeVariant::new(rotate_ccw(south.rows(), south.width()));
        // Slot order must line up with Rotation::index.
        Self {
            variants: [north, east, south, west],
        }
    }

    /// The precomputed variant for a rotation state.
    pub fn variant(&self, rotation: Rotation) -> &ShapeVariant {
        &self.variants[rotation.index()]
    }
}

/// Look up a kind's shape in the shared table (built on first use).
pub fn shape(kind: PieceKind) -> &'static Shape {
    static TABLE: OnceLock<[Shape; 7]> = OnceLock::new();
    let table = TABLE.get_or_init(|| PieceKind::ALL.map(|kind| Shape::from_base(base_rows(kind))));
    &table[kind.index()]
}

/// The seven canonical geometries, base (North) rotation, bottom row first.
fn base_rows(kind: PieceKind) -> &'static [RowMask] {
    match kind {
        PieceKind::O => &[0b11, 0b11],
        PieceKind::I => &[0b1, 0b1, 0b1, 0b1],
        PieceKind::S => &[0b110, 0b011],
        PieceKind::Z => &[0b011, 0b110],
        PieceKind::J => &[0b11, 0b01, 0b01],
        PieceKind::L => &[0b11, 0b10, 0b10],
        PieceKind::T => &[0b010, 0b111],
    }
}

/// Rotate a bottom-first row-mask sequence 90 degrees counter-clockwise.
///
/// Every row is padded to `width` bits, the row order is reversed, and
/// bit `k` of each reversed row is packed into new row `width - 1 - k`.
/// The result's height is the original width and vice versa.
fn rotate_ccw(rows: &[RowMask], width: u8) -> VariantRows {
    let mut out = VariantRows::new();
    for k in (0..width).rev() {
        let mut mask: RowMask = 0;
        for &row in rows.iter().rev() {
            mask = (mask << 1) | ((row >> k) & 1);
        }
        out.push(mask);
    }
    out
}

fn bit_width(mask: RowMask) -> u8 {
    (RowMask::BITS - mask.leading_zeros()) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ccw(rows: &[RowMask]) -> Vec<RowMask> {
        let width = rows.iter().map(|&row| bit_width(row)).max().unwrap_or(0);
        rotate_ccw(rows, width).to_vec()
    }

    #[test]
    fn test_transform_turns_j_counter_clockwise() {
        // .X          XXX
        // .X    ccw   ..X
        // XX
        assert_eq!(ccw(&[0b11, 0b01, 0b01]), vec![0b001, 0b111]);
    }

    #[test]
    fn test_transform_swaps_dimensions() {
        for kind in PieceKind::ALL {
            let base = base_rows(kind);
            let width = base.iter().map(|&row| bit_width(row)).max().unwrap();
            let turned = rotate_ccw(base, width);
            assert_eq!(turned.len(), width as usize);
            let turned_width = turned.iter().map(|&row| bit_width(row)).max().unwrap();
            assert_eq!(turned_width as usize, base.len());
        }
    }

    #[test]
    fn test_transform_four_times_is_identity() {
        for kind in PieceKind::ALL {
            let base: Vec<RowMask> = base_rows(kind).to_vec();
            let mut rows = base.clone();
            for _ in 0..4 {
                rows = ccw(&rows);
            }
            assert_eq!(rows, base, "shape {:?} did not close after 4 turns", kind);
        }
    }

    #[test]
    fn test_variant_labels_follow_transform_counts() {
        // North = base, West = 1 turn, South = 2, East = 3.
        let shape = shape(PieceKind::J);
        let base = base_rows(PieceKind::J).to_vec();
        assert_eq!(shape.variant(Rotation::North).rows(), &base[..]);
        assert_eq!(shape.variant(Rotation::West).rows(), &ccw(&base)[..]);
        assert_eq!(shape.variant(Rotation::South).rows(), &ccw(&ccw(&base))[..]);
        assert_eq!(
            shape.variant(Rotation::East).rows(),
            &ccw(&ccw(&ccw(&base)))[..]
        );
    }

    #[test]
    fn test_variant_dimensions_cached() {
        let shape = shape(PieceKind::I);
        assert_eq!(shape.variant(Rotation::North).width(), 1);
        assert_eq!(shape.variant(Rotation::North).height(), 4);
        assert_eq!(shape.variant(Rotation::East).width(), 4);
        assert_eq!(shape.variant(Rotation::East).height(), 1);
    }
}
