use crate::chess::{Board, Geometry, Move, Piece, Ply, Rules, Side, Square, Transcript};
use crate::util::Integer;
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// The reason why a [`Move`] was rejected.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Rejected {
    #[display(fmt = "there is no piece on the source square")]
    NoPieceAtSource,
    #[display(fmt = "the piece on the source square belongs to the opponent")]
    WrongSideToMove,
    #[display(fmt = "the source and destination squares are the same")]
    SameSquare,
    #[display(fmt = "the destination square is occupied by a piece of the same side")]
    OwnPieceAtDestination,
    #[display(fmt = "the piece does not move this way")]
    IllegalForPieceType,
}

/// The reason why replaying a [`Transcript`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "move #{} `{}` was rejected", "index + 1", played)]
pub struct ReplayError {
    /// The position of the rejected move in the transcript, starting from 0.
    pub index: usize,
    /// The rejected move.
    pub played: Move,
    /// Why the move was rejected.
    #[error(source)]
    pub reason: Rejected,
}

/// The state of a game, derived from its history of [`Ply`]s.
///
/// The history is append-only, it only grows through [`Game::submit_move`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Game<R: Rules = Geometry> {
    origin: Board,
    plies: Vec<Ply>,
    rules: R,
}

/// A game from the starting position.
impl Default for Game {
    fn default() -> Self {
        Game::new(Board::default())
    }
}

impl Game {
    /// A game starting from an arbitrary [`Board`], white to move.
    pub fn new(origin: Board) -> Self {
        Game::with_rules(origin, Geometry)
    }
}

impl<R: Rules> Game<R> {
    /// A game starting from an arbitrary [`Board`] that follows the given [`Rules`].
    pub fn with_rules(origin: Board, rules: R) -> Self {
        Game {
            origin,
            plies: Vec::new(),
            rules,
        }
    }

    /// The [`Board`] after the last [`Ply`].
    #[inline(always)]
    pub fn current_board(&self) -> &Board {
        self.plies.last().map_or(&self.origin, Ply::board)
    }

    /// The [`Side`] that must move next.
    #[inline(always)]
    pub fn side_to_move(&self) -> Side {
        self.plies.last().map_or(Side::White, |p| !p.piece().side())
    }

    /// The [`Piece`] on a [`Square`] of the current board, if any.
    #[inline(always)]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.current_board().piece_on(sq)
    }

    /// The history of this game, oldest first.
    #[inline(always)]
    pub fn plies(&self) -> &[Ply] {
        &self.plies
    }

    /// The [`Move`]s played so far.
    pub fn transcript(&self) -> Transcript {
        self.plies.iter().map(Ply::played).collect()
    }

    /// Checks whether the piece on `whence` may currently move to `whither`.
    ///
    /// Returns the piece that would move.
    pub fn check(&self, whence: Square, whither: Square) -> Result<Piece, Rejected> {
        let piece = self.piece_at(whence).ok_or(Rejected::NoPieceAtSource)?;

        if piece.side() != self.side_to_move() {
            return Err(Rejected::WrongSideToMove);
        }

        if whence == whither {
            return Err(Rejected::SameSquare);
        }

        if self.piece_at(whither).is_some_and(|p| p.side() == piece.side()) {
            return Err(Rejected::OwnPieceAtDestination);
        }

        if !self.rules.permits(piece, whence, whither) {
            return Err(Rejected::IllegalForPieceType);
        }

        Ok(piece)
    }

    /// Whether the piece on `whence` may currently move to `whither`.
    #[inline(always)]
    pub fn is_legal_move(&self, whence: Square, whither: Square) -> bool {
        self.check(whence, whither).is_ok()
    }

    /// The [`Square`]s the piece on `whence` may currently move to.
    pub fn destinations(&self, whence: Square) -> impl Iterator<Item = Square> + '_ {
        Square::iter().filter(move |&whither| self.is_legal_move(whence, whither))
    }

    /// Relocates the piece on `whence` to `whither` if legal, capturing whatever was there.
    ///
    /// A rejected move leaves the game untouched.
    #[instrument(level = "debug", skip(self))]
    pub fn submit_move(&mut self, whence: Square, whither: Square) -> Result<&Ply, Rejected> {
        let piece = match self.check(whence, whither) {
            Ok(piece) => piece,
            Err(reason) => {
                debug!(%reason, "move rejected");
                return Err(reason);
            }
        };

        let board = self.current_board().relocate(whence, whither);

        debug!(%piece, %board, "move accepted");

        self.plies.push(Ply::new(board, piece, Move::new(whence, whither)));
        Ok(&self.plies[self.plies.len() - 1])
    }

    /// Submits every [`Move`] in order, stopping at the first one rejected.
    pub fn replay<I>(mut self, moves: I) -> Result<Self, ReplayError>
    where
        I: IntoIterator<Item = Move>,
    {
        for (index, played) in moves.into_iter().enumerate() {
            if let Err(reason) = self.submit_move(played.whence(), played.whither()) {
                return Err(ReplayError {
                    index,
                    played,
                    reason,
                });
            }
        }

        Ok(self)
    }
}
