//! Shape table and rotation-direction tests.

use bitfall::core::{shape, Piece};
use bitfall::types::{PieceKind, Rotation};

#[test]
fn test_rotate_right_four_times_is_identity() {
    for kind in PieceKind::ALL {
        let mut piece = Piece::new(kind, 5, 6);
        let before = piece.occupied_rows();
        for _ in 0..4 {
            piece.rotate_cw();
        }
        assert_eq!(piece.rotation(), Rotation::North);
        assert_eq!(
            piece.occupied_rows(),
            before,
            "{:?} occupancy changed after four right rotations",
            kind
        );
    }
}

#[test]
fn test_rotate_left_four_times_is_identity() {
    for kind in PieceKind::ALL {
        let mut piece = Piece::new(kind, 5, 6);
        let before = piece.occupied_rows();
        for _ in 0..4 {
            piece.rotate_ccw();
        }
        assert_eq!(piece.rotation(), Rotation::North);
        assert_eq!(piece.occupied_rows(), before);
    }
}

#[test]
fn test_square_identical_across_all_rotations() {
    let square = shape(PieceKind::O);
    let base = square.variant(Rotation::North);
    for rotation in [Rotation::East, Rotation::South, Rotation::West] {
        assert_eq!(square.variant(rotation), base);
    }
    assert_eq!(base.rows(), &[0b11, 0b11]);
}

// The two tests below pin the visual meaning of "rotate right": one
// step from North must be a quarter turn clockwise, not whatever falls
// out of cycling variant slots in storage order.

#[test]
fn test_rotate_right_turns_t_clockwise() {
    // XXX         .X
    // .X.   cw    XX
    //             .X
    let east = shape(PieceKind::T).variant(Rotation::East);
    assert_eq!(east.rows(), &[0b01, 0b11, 0b01]);
    assert_eq!(east.width(), 2);
    assert_eq!(east.height(), 3);
}

#[test]
fn test_rotate_right_turns_j_clockwise() {
    // .X          X..
    // .X    cw    XXX
    // XX
    let east = shape(PieceKind::J).variant(Rotation::East);
    assert_eq!(east.rows(), &[0b111, 0b100]);

    // And one step left from North is the inverse quarter turn:
    // XXX over ..X, bottom row first.
    let west = shape(PieceKind::J).variant(Rotation::West);
    assert_eq!(west.rows(), &[0b001, 0b111]);
}

#[test]
fn test_line_shape_variants() {
    let line = shape(PieceKind::I);
    // Spawns vertical, one column wide.
    assert_eq!(line.variant(Rotation::North).rows(), &[1, 1, 1, 1]);
    // Quarter turns lay it flat.
    assert_eq!(line.variant(Rotation::East).rows(), &[0b1111]);
    assert_eq!(line.variant(Rotation::West).rows(), &[0b1111]);
    assert_eq!(line.variant(Rotation::South).rows(), &[1, 1, 1, 1]);
}

#[test]
fn test_rotation_swaps_bounding_box() {
    for kind in PieceKind::ALL {
        for rotation in [
            Rotation::North,
            Rotation::East,
            Rotation::South,
            Rotation::West,
        ] {
            let here = shape(kind).variant(rotation);
            let next = shape(kind).variant(rotation.cw());
            assert_eq!(here.width(), next.height(), "{:?} at {:?}", kind, rotation);
            assert_eq!(here.height(), next.width(), "{:?} at {:?}", kind, rotation);
        }
    }
}

#[test]
fn test_skew_pair_mirror() {
    assert_eq!(shape(PieceKind::S).variant(Rotation::North).rows(), &[0b110, 0b011]);
    assert_eq!(shape(PieceKind::Z).variant(Rotation::North).rows(), &[0b011, 0b110]);
}
