use lib::chess::*;
use lib::util::Integer;
use test_strategy::proptest;

fn lone(piece: Piece, sq: Square) -> Game {
    let mut board = Board::empty();
    board.place(piece, sq);
    Game::new(board)
}

#[test]
fn white_knight_on_an_empty_board_moves_in_an_l_shape() {
    let knight = Piece(Side::White, Role::Knight);

    for whence in Square::iter() {
        let game = lone(knight, whence);

        for whither in Square::iter() {
            let ranks = (whither.rank() - whence.rank()).abs();
            let files = (whither.file() - whence.file()).abs();

            assert_eq!(
                game.is_legal_move(whence, whither),
                (ranks, files) == (2, 1) || (ranks, files) == (1, 2),
                "{whence}{whither}"
            );
        }
    }
}

#[test]
fn pawn_double_step_is_only_allowed_from_its_starting_rank() {
    let pawn = Piece(Side::Black, Role::Pawn);
    assert!(Geometry.permits(pawn, Square::D7, Square::D5));
    assert!(!Geometry.permits(pawn, Square::D6, Square::D4));

    let mut game = Game::default();
    assert!(game.submit_move(Square::D2, Square::D4).is_ok());
    assert!(game.submit_move(Square::D7, Square::D5).is_ok());
    assert!(game.submit_move(Square::E2, Square::E3).is_ok());
    assert_eq!(
        game.submit_move(Square::D5, Square::D3).map(Ply::played),
        Err(Rejected::IllegalForPieceType)
    );
}

#[test]
fn rook_is_not_obstructed_by_pieces_in_its_way() {
    let board = Board::default();
    let rook = board[Square::A1].unwrap();
    assert_eq!(rook, Piece(Side::White, Role::Rook));
    assert!(Geometry.permits(rook, Square::A1, Square::F1));
}

#[test]
fn king_cannot_move_two_squares() {
    let mut game = Game::default();
    assert!(game.submit_move(Square::F2, Square::F4).is_ok());
    assert!(game.submit_move(Square::A7, Square::A6).is_ok());

    assert_eq!(
        game.submit_move(Square::F1, Square::F3).map(Ply::played),
        Err(Rejected::IllegalForPieceType)
    );
}

#[test]
fn black_cannot_move_first() {
    let mut game = Game::default();
    assert_eq!(
        game.submit_move(Square::D7, Square::D5).map(Ply::played),
        Err(Rejected::WrongSideToMove)
    );

    assert_eq!(game.current_board(), &Board::default());
    assert_eq!(game.side_to_move(), Side::White);
}

#[proptest]
fn rejections_never_change_the_game(
    #[strategy(0..=Square::MAX)] whence: i8,
    #[strategy(0..=Square::MAX)] whither: i8,
) {
    let whence = <Square as Integer>::new(whence);
    let whither = <Square as Integer>::new(whither);

    let mut game = Game::default();
    let before = game.clone();

    if let Err(reason) = game.submit_move(whence, whither).map(Ply::played) {
        assert_eq!(game, before);
        assert_eq!(game.submit_move(whence, whither).map(Ply::played), Err(reason));
        assert_eq!(game, before);
    }
}

#[test]
fn accepted_moves_relocate_the_piece_and_pass_the_turn() {
    let mut game = Game::default();
    let archbishop = Piece(Side::White, Role::Archbishop);

    assert!(game.submit_move(Square::H2, Square::H3).is_ok());
    assert!(game.submit_move(Square::H7, Square::H6).is_ok());

    let ply = game.submit_move(Square::G1, Square::H2).cloned();
    assert_eq!(ply.as_ref().map(Ply::piece), Ok(archbishop));

    assert_eq!(game.piece_at(Square::G1), None);
    assert_eq!(game.piece_at(Square::H2), Some(archbishop));
    assert_eq!(game.side_to_move(), Side::Black);
}

#[test]
fn replaying_a_transcript_rebuilds_the_game() {
    let mut game = Game::default();

    for m in ["e2e4", "e7e5", "g1i3", "b8c6", "e1e3", "c6d4"] {
        let m: Move = m.parse().unwrap();
        assert!(game.submit_move(m.whence(), m.whither()).is_ok(), "{m}");
    }

    let transcript: Transcript = game.transcript().to_string().parse().unwrap();
    let replayed = Game::default().replay(transcript).unwrap();

    assert_eq!(replayed, game);
}

#[test]
fn destinations_agree_with_is_legal_move() {
    let game = Game::default();

    for whence in Square::iter() {
        let expected: Vec<_> = Square::iter()
            .filter(|&whither| game.is_legal_move(whence, whither))
            .collect();

        assert_eq!(game.destinations(whence).collect::<Vec<_>>(), expected);
    }
}
