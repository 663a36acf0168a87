use memory_match::{
    populate_answers, render_board, Board, BoardError, Coord, Dimensions, GameSession,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn counts(answers: &[char]) -> std::collections::BTreeMap<char, usize> {
    let mut map = std::collections::BTreeMap::new();
    for &c in answers {
        *map.entry(c).or_insert(0) += 1;
    }
    map
}

#[test]
fn test_generated_board_places_each_symbol_twice() {
    let mut rng = SmallRng::seed_from_u64(42);
    let board = Board::generate(8, &mut rng).unwrap();
    assert_eq!(board.dimensions(), Dimensions::new(4, 4));
    assert_eq!(board.answers().len(), 16);
    let counts = counts(board.answers());
    assert_eq!(counts.len(), 8);
    assert!(counts.values().all(|&n| n == 2));
    assert_eq!(counts.keys().copied().collect::<String>(), "ABCDEFGH");
}

#[test]
fn test_generated_board_starts_hidden() {
    let mut rng = SmallRng::seed_from_u64(7);
    let board = Board::generate(5, &mut rng).unwrap();
    assert_eq!(board.revealed().len(), board.answers().len());
    assert!(board.revealed().iter().all(|&r| !r));
    assert_eq!(board.revealed_count(), 0);
    assert_eq!(board.hidden_cells().count(), 10);
    assert!(!board.is_complete());
}

#[test]
fn test_same_seed_same_board() {
    let mut rng1 = SmallRng::seed_from_u64(12345);
    let mut rng2 = SmallRng::seed_from_u64(12345);
    let b1 = Board::generate(26, &mut rng1).unwrap();
    let b2 = Board::generate(26, &mut rng2).unwrap();
    assert_eq!(b1.answers(), b2.answers());
}

#[test]
fn test_populate_answers_fills_board() {
    let mut rng = SmallRng::seed_from_u64(3);
    let answers = populate_answers(Dimensions::new(3, 4), 6, &mut rng).unwrap();
    assert_eq!(answers.len(), 12);
    assert!(counts(&answers).values().all(|&n| n == 2));
}

#[test]
fn test_populate_answers_rejects_mismatched_shape() {
    let mut rng = SmallRng::seed_from_u64(3);
    assert!(matches!(
        populate_answers(Dimensions::new(3, 4), 2, &mut rng),
        Err(BoardError::InvalidLayout(_))
    ));
    assert!(matches!(
        populate_answers(Dimensions::new(1, 2), 3, &mut rng),
        Err(BoardError::InvalidLayout(_))
    ));
    assert_eq!(
        populate_answers(Dimensions::new(10, 10), 40, &mut rng),
        Err(BoardError::InvalidSymbolCount(40))
    );
    assert_eq!(
        populate_answers(Dimensions::new(0, 0), 0, &mut rng),
        Err(BoardError::InvalidSymbolCount(0))
    );
}

#[test]
fn test_generate_rejects_bad_counts() {
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        Board::generate(0, &mut rng).unwrap_err(),
        BoardError::InvalidSymbolCount(0)
    );
    assert_eq!(
        Board::generate(27, &mut rng).unwrap_err(),
        BoardError::InvalidSymbolCount(27)
    );
}

#[test]
fn test_from_answers_validates_layout() {
    let dims = Dimensions::new(2, 2);
    assert!(Board::from_answers(dims, &['A', 'B', 'B', 'A']).is_ok());
    assert!(matches!(
        Board::from_answers(dims, &['A', 'A', 'A', 'B']),
        Err(BoardError::InvalidLayout(_))
    ));
    assert!(matches!(
        Board::from_answers(dims, &['A', 'B', 'C', 'A']),
        Err(BoardError::InvalidLayout(_))
    ));
    assert!(matches!(
        Board::from_answers(dims, &['A', 'A']),
        Err(BoardError::InvalidLayout(_))
    ));
    assert!(matches!(
        Board::from_answers(Dimensions::new(1, 3), &['A', 'A', 'B']),
        Err(BoardError::InvalidLayout(_))
    ));
}

#[test]
fn test_symbol_lookup_and_bounds() {
    let board = Board::from_answers(Dimensions::new(1, 2), &['A', 'A']).unwrap();
    assert_eq!(board.symbol(Coord::new(0, 1)).unwrap(), 'A');
    assert_eq!(
        board.symbol(Coord::new(1, 0)).unwrap_err(),
        BoardError::OutOfBounds(Coord::new(1, 0))
    );
    assert_eq!(
        board.is_revealed(Coord::new(0, 2)).unwrap_err(),
        BoardError::OutOfBounds(Coord::new(0, 2))
    );
}

#[test]
fn test_render_hidden_board() {
    let board = Board::from_answers(Dimensions::new(1, 2), &['A', 'A']).unwrap();
    assert_eq!(render_board(&board), "-   0  1\n0   +  +\n");
    assert_eq!(board.to_string(), render_board(&board));
}

#[test]
fn test_render_shows_matched_symbols() {
    let board = Board::from_answers(
        Dimensions::new(2, 4),
        &['A', 'B', 'C', 'D', 'A', 'D', 'C', 'B'],
    )
    .unwrap();
    let mut session = GameSession::from_board(board);
    session
        .reveal_pair(Coord::new(0, 0), Coord::new(1, 0))
        .unwrap();
    assert_eq!(
        render_board(session.board()),
        "-   0  1  2  3\n0   A  +  +  +\n1   A  +  +  +\n"
    );
}

#[test]
fn test_render_widens_two_digit_columns() {
    let row: Vec<char> = "ABCDEFGHIJKLM".chars().collect();
    let answers: Vec<char> = row.iter().chain(row.iter()).copied().collect();
    let board = Board::from_answers(Dimensions::new(2, 13), &answers).unwrap();
    let expected = "-   0   1   2   3   4   5   6   7   8   9   10  11  12\n\
                    0   +   +   +   +   +   +   +   +   +   +   +   +   +\n\
                    1   +   +   +   +   +   +   +   +   +   +   +   +   +\n";
    assert_eq!(render_board(&board), expected);
}
