//! Catalog and active-piece tests - rotation tables and occupancy overlay

use gridfall::core::{rotation_states, state_count, ActivePiece};
use gridfall::types::PieceKind;

#[test]
fn o_has_one_state_the_rest_have_four() {
    assert_eq!(state_count(PieceKind::O), 1);
    for kind in [
        PieceKind::I,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ] {
        assert_eq!(state_count(kind), 4, "{:?}", kind);
    }
}

#[test]
fn spawn_states_match_the_tables() {
    // Cell-for-cell expectations for every kind's spawn state.
    let expected: [(PieceKind, [(i8, i8); 4]); 7] = [
        (PieceKind::I, [(0, 2), (1, 2), (2, 2), (3, 2)]),
        (PieceKind::O, [(1, 2), (2, 2), (1, 3), (2, 3)]),
        (PieceKind::T, [(2, 2), (1, 3), (2, 3), (3, 3)]),
        (PieceKind::S, [(2, 2), (3, 2), (1, 3), (2, 3)]),
        (PieceKind::Z, [(1, 2), (2, 2), (2, 3), (3, 3)]),
        (PieceKind::J, [(1, 2), (1, 3), (2, 3), (3, 3)]),
        (PieceKind::L, [(3, 2), (1, 3), (2, 3), (3, 3)]),
    ];
    for (kind, cells) in expected {
        assert_eq!(rotation_states(kind)[0], cells, "{:?}", kind);
    }
}

#[test]
fn j_and_l_rotations_match_the_tables() {
    let j = rotation_states(PieceKind::J);
    assert_eq!(j[1], [(2, 1), (2, 2), (1, 3), (2, 3)]);
    assert_eq!(j[2], [(1, 2), (2, 2), (3, 2), (3, 3)]);
    assert_eq!(j[3], [(1, 1), (2, 1), (2, 2), (2, 3)]);

    let l = rotation_states(PieceKind::L);
    assert_eq!(l[1], [(2, 1), (3, 1), (3, 2), (3, 3)]);
    assert_eq!(l[2], [(1, 2), (2, 2), (3, 2), (1, 3)]);
    assert_eq!(l[3], [(2, 1), (2, 2), (2, 3), (3, 3)]);
}

#[test]
fn occupied_cells_are_state_offsets_translated_by_origin() {
    for kind in PieceKind::ALL {
        for (rotation, state) in rotation_states(kind).iter().enumerate() {
            let piece = ActivePiece {
                kind,
                rotation: rotation as u8,
                x: 4,
                y: 9,
            };
            let mut expected = *state;
            for cell in &mut expected {
                cell.0 += 4;
                cell.1 += 9;
            }
            assert_eq!(piece.cells(), expected, "{:?} rotation {}", kind, rotation);
        }
    }
}

#[test]
fn four_rotations_return_to_the_start() {
    for kind in PieceKind::ALL {
        if kind == PieceKind::O {
            continue;
        }
        let mut piece = ActivePiece::spawn(kind);
        let original = piece.cells();
        for _ in 0..4 {
            piece.rotation = piece.next_rotation();
        }
        assert_eq!(piece.rotation, 0, "{:?}", kind);
        assert_eq!(piece.cells(), original, "{:?}", kind);
    }
}

#[test]
fn spawn_origin_is_board_midpoint_top() {
    for kind in PieceKind::ALL {
        let piece = ActivePiece::spawn(kind);
        assert_eq!((piece.x, piece.y, piece.rotation), (7, 0, 0), "{:?}", kind);
    }
}
