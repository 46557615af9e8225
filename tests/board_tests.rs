use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rstest::*;
use std::collections::HashSet;

use slide_puzzle::{Direction, GridIndex, PuzzleBoard};

// ============================================================================
// Helpers
// ============================================================================

#[fixture]
fn board_with_corner_gap() -> PuzzleBoard {
    let mut board = PuzzleBoard::new(3, 3);
    board.remove_tile(GridIndex::new(0, 0));
    board
}

fn snapshot(board: &PuzzleBoard) -> Vec<(GridIndex, GridIndex)> {
    board
        .tiles()
        .map(|(index, tile)| (index, tile.correct_index()))
        .collect()
}

/// Every cell but the gap holds exactly one tile, and every tile but the
/// removed one is present.
fn assert_permutation(board: &PuzzleBoard, removed: GridIndex) {
    let blank = board.blank().expect("gap must be open");
    let occupied: HashSet<GridIndex> = board.tiles().map(|(index, _)| index).collect();
    let identities: HashSet<GridIndex> = board.tiles().map(|(_, t)| t.correct_index()).collect();
    let cells = board.width() as usize * board.height() as usize;

    assert_eq!(occupied.len(), cells - 1);
    assert!(!occupied.contains(&blank));
    assert!(board.tile_at(blank).is_none());
    assert_eq!(identities.len(), cells - 1);
    assert!(!identities.contains(&removed));
}

// ============================================================================
// Construction
// ============================================================================

#[rstest]
#[case(0, 3)]
#[case(1, 3)]
#[case(3, 1)]
#[should_panic(expected = "at least 2x2")]
fn test_board_too_small(#[case] width: u32, #[case] height: u32) {
    PuzzleBoard::new(width, height);
}

#[test]
fn test_new_board_is_solved() {
    let board = PuzzleBoard::new(3, 3);
    assert!(board.is_solved());
    assert_eq!(board.misplaced_count(), 0);
}

#[test]
fn test_removing_a_tile_keeps_solved() {
    let mut board = PuzzleBoard::new(3, 3);
    let tile = board.remove_tile(GridIndex::new(0, 0));
    assert_eq!(tile.correct_index(), GridIndex::new(0, 0));
    assert_eq!(board.blank(), Some(GridIndex::new(0, 0)));
    assert!(board.is_solved());
}

// ============================================================================
// Moves
// ============================================================================

#[rstest]
fn test_adjacent_move_relocates_gap(mut board_with_corner_gap: PuzzleBoard) {
    let board = &mut board_with_corner_gap;
    assert!(board.try_move(GridIndex::new(0, 1)));
    assert_eq!(board.blank(), Some(GridIndex::new(0, 1)));
    assert_eq!(
        board.tile_at(GridIndex::new(0, 0)).map(|t| t.correct_index()),
        Some(GridIndex::new(0, 1))
    );
    assert!(!board.is_solved());
}

#[rstest]
fn test_distant_move_leaves_board_untouched(mut board_with_corner_gap: PuzzleBoard) {
    let board = &mut board_with_corner_gap;
    let before = snapshot(board);
    assert!(!board.try_move(GridIndex::new(2, 2)));
    assert_eq!(board.blank(), Some(GridIndex::new(0, 0)));
    assert_eq!(snapshot(board), before);
}

#[rstest]
#[case(GridIndex::new(0, 0))]
#[case(GridIndex::new(1, 1))]
#[case(GridIndex::new(-1, 0))]
#[case(GridIndex::new(0, -1))]
#[case(GridIndex::new(3, 0))]
#[case(GridIndex::new(0, 2))]
fn test_rejected_targets(mut board_with_corner_gap: PuzzleBoard, #[case] target: GridIndex) {
    let before = snapshot(&board_with_corner_gap);
    assert!(!board_with_corner_gap.try_move(target));
    assert_eq!(snapshot(&board_with_corner_gap), before);
}

#[rstest]
fn test_move_back_restores_solution(mut board_with_corner_gap: PuzzleBoard) {
    let board = &mut board_with_corner_gap;
    assert!(board.try_move(GridIndex::new(1, 0)));
    assert!(board.try_move(GridIndex::new(0, 0)));
    assert!(board.is_solved());
}

#[rstest]
fn test_slide_directions(mut board_with_corner_gap: PuzzleBoard) {
    let board = &mut board_with_corner_gap;
    // Gap in the bottom-left corner: nothing can slide up or right into it.
    assert!(!board.try_slide(Direction::Up));
    assert!(!board.try_slide(Direction::Right));

    assert!(board.try_slide(Direction::Left));
    assert_eq!(board.blank(), Some(GridIndex::new(1, 0)));
    assert!(board.try_slide(Direction::Down));
    assert_eq!(board.blank(), Some(GridIndex::new(1, 1)));
}

#[rstest]
fn test_movable_tiles_in_corner(board_with_corner_gap: PuzzleBoard) {
    let movable: HashSet<_> = board_with_corner_gap.movable_tiles().into_iter().collect();
    let expected: HashSet<_> = [GridIndex::new(1, 0), GridIndex::new(0, 1)].into();
    assert_eq!(movable, expected);
}

#[test]
fn test_movable_tiles_in_centre() {
    let mut board = PuzzleBoard::new(3, 3);
    board.remove_tile(GridIndex::new(1, 1));
    assert_eq!(board.movable_tiles().len(), 4);
}

// ============================================================================
// Shuffle
// ============================================================================

#[test]
fn test_shuffle_keeps_single_gap() {
    let mut board = PuzzleBoard::new(4, 4);
    let removed = GridIndex::new(3, 3);
    board.remove_tile(removed);
    board.shuffle(1000);
    assert_permutation(&board, removed);
}

#[test]
fn test_shuffle_zero_moves_is_noop() {
    let mut board = PuzzleBoard::new(4, 4);
    board.remove_tile(GridIndex::new(3, 3));
    board.shuffle(0);
    assert!(board.is_solved());
    assert_eq!(board.blank(), Some(GridIndex::new(3, 3)));
}

#[test]
fn test_seeded_shuffle_is_reproducible() {
    let shuffled = |seed| {
        let mut board = PuzzleBoard::new(4, 3);
        board.remove_tile(GridIndex::new(0, 0));
        board.shuffle_with(200, &mut StdRng::seed_from_u64(seed));
        snapshot(&board)
    };
    assert_eq!(shuffled(7), shuffled(7));
}

#[test]
fn test_shuffle_is_reversible() {
    // Replaying the gap's path backwards must restore the solved board.
    let mut board = PuzzleBoard::new(3, 3);
    board.remove_tile(GridIndex::new(2, 2));
    let mut path = vec![board.blank().unwrap()];
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        board.shuffle_with(1, &mut rng);
        path.push(board.blank().unwrap());
    }

    path.pop();
    while let Some(target) = path.pop() {
        assert!(board.try_move(target));
    }
    assert!(board.is_solved());
    assert_eq!(board.blank(), Some(GridIndex::new(2, 2)));
}

// ============================================================================
// Solved-state quirk
// ============================================================================

#[test]
fn test_is_solved_skips_gap_cell() {
    // The gap is never compared with the removed tile's home; with every
    // tile in place it cannot be anywhere else.
    let mut board = PuzzleBoard::new(2, 2);
    board.remove_tile(GridIndex::new(0, 0));
    assert!(board.tile_at(GridIndex::new(0, 0)).is_none());
    assert!(board.is_solved());

    assert!(board.try_move(GridIndex::new(1, 0)));
    assert!(!board.is_solved());
    assert_eq!(board.misplaced_count(), 1);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn moves_preserve_permutation(
        width in 2u32..6,
        height in 2u32..6,
        seed in any::<u64>(),
        targets in prop::collection::vec((-1i32..7, -1i32..7), 0..64),
    ) {
        let mut board = PuzzleBoard::new(width, height);
        let removed = GridIndex::new(0, 0);
        board.remove_tile(removed);
        board.shuffle_with(32, &mut StdRng::seed_from_u64(seed));

        for (column, row) in targets {
            let target = GridIndex::new(column, row);
            let blank = board.blank().unwrap();
            let legal = board.contains(target) && target.is_adjacent(blank);
            prop_assert_eq!(board.try_move(target), legal);
            if legal {
                prop_assert_eq!(board.blank(), Some(target));
            } else {
                prop_assert_eq!(board.blank(), Some(blank));
            }
        }

        assert_permutation(&board, removed);
    }

    #[test]
    fn shuffle_leaves_exactly_one_gap(moves in 0usize..500, seed in any::<u64>()) {
        let mut board = PuzzleBoard::new(4, 4);
        let removed = GridIndex::new(1, 2);
        board.remove_tile(removed);
        board.shuffle_with(moves, &mut StdRng::seed_from_u64(seed));
        assert_permutation(&board, removed);
    }
}
