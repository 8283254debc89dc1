use classic_chess::board::Board;
use classic_chess::coord::Coord;
use classic_chess::pieces::{Color, Piece, PieceKind};

#[test]
fn a_rejected_move_leaves_the_board_untouched() {
    let mut board = Board::new();
    let before = board.clone();

    // A rook has no diagonal moves.
    assert!(!board.make_move(Coord::new(0, 0), Coord::new(1, 1)));
    assert_eq!(board, before);
    assert_eq!(board.current_turn(), Color::White);
}

#[test]
fn a_successful_move_relocates_and_marks_the_piece() {
    let mut board = Board::new();
    assert!(board.make_move(Coord::new(0, 1), Coord::new(2, 2)));

    assert!(board.get_piece(0, 1).is_none());
    let knight = board.get_piece(2, 2).unwrap();
    assert_eq!(knight.kind, PieceKind::Knight);
    assert_eq!(knight.color, Color::White);
    assert!(knight.has_moved);
}

#[test]
fn a_capture_discards_the_captured_piece() {
    let mut board = Board::empty();
    board.place(Coord::new(4, 0), Piece::new(PieceKind::Rook, Color::White));
    board.place(Coord::new(4, 5), Piece::new(PieceKind::Pawn, Color::Black));
    assert_eq!(board.pieces().count(), 2);

    assert!(board.make_move(Coord::new(4, 0), Coord::new(4, 5)));
    assert_eq!(board.pieces().count(), 1);
    let rook = board.get_piece(4, 5).unwrap();
    assert_eq!(rook.kind, PieceKind::Rook);
    assert_eq!(rook.color, Color::White);
}

/// The turn flag toggles on every applied move, whichever color moved; no
/// check ties the mover to the side to move.
#[test]
fn turn_alternates_regardless_of_who_moved() {
    let mut board = Board::new();
    let hops = [
        (Coord::new(0, 1), Coord::new(2, 2)),
        (Coord::new(2, 2), Coord::new(0, 1)),
    ];

    for n in 0..6 {
        let expected = if n % 2 == 0 { Color::White } else { Color::Black };
        assert_eq!(board.current_turn(), expected, "after {n} moves");

        // The same white knight moves every time.
        let (from, to) = hops[n % 2];
        assert!(board.make_move(from, to));
    }
}

#[test]
fn white_may_move_while_it_is_blacks_turn() {
    let mut board = Board::new();
    assert!(board.make_move(Coord::new(0, 1), Coord::new(2, 2)));
    assert_eq!(board.current_turn(), Color::Black);

    assert!(board.make_move(Coord::new(2, 2), Coord::new(4, 3)));
    assert_eq!(board.current_turn(), Color::White);
}

#[test]
fn a_board_survives_serialization() {
    let board = Board::new();
    let json = serde_json::to_string(&board).unwrap();
    let restored: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, board);
}
