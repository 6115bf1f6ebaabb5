use crate::chess::{Board, Move, Piece, Square};

/// One half-move, recorded together with the [`Board`] it resulted in.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Ply {
    board: Board,
    piece: Piece,
    played: Move,
}

impl Ply {
    pub(crate) fn new(board: Board, piece: Piece, played: Move) -> Self {
        Ply {
            board,
            piece,
            played,
        }
    }

    /// The [`Board`] after this ply.
    #[inline(always)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The [`Piece`] that moved.
    #[inline(always)]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// The [`Move`] played.
    #[inline(always)]
    pub fn played(&self) -> Move {
        self.played
    }

    /// The [`Square`] the piece moved from.
    #[inline(always)]
    pub fn whence(&self) -> Square {
        self.played.whence()
    }

    /// The [`Square`] the piece moved to.
    #[inline(always)]
    pub fn whither(&self) -> Square {
        self.played.whither()
    }
}
