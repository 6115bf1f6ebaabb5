use crate::chess::{File, ParsePieceError, Piece, Rank, Role, Side, Square};
use crate::util::Integer;
use derive_more::{DebugCustom, Display, Error, From};
use std::fmt::{self, Write};
use std::{ops::Index, str::FromStr};

/// The arrangement of [`Role`]s on either back rank at the start of the game.
const BACK_RANK: [Role; 10] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::Chancellor,
    Role::King,
    Role::Archbishop,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

/// The occupancy of the chess board.
///
/// This type does not validate whether the placement it holds is reachable
/// according to any set of chess rules.
#[derive(DebugCustom, Copy, Clone, Eq, PartialEq, Hash)]
#[debug(fmt = "Board(\"{}\")", self)]
pub struct Board {
    squares: [Option<Piece>; 80],
}

// We provide a custom implementation of Arbitrary rather than deriving,
// otherwise proptest overflows the stack generating large arrays.
#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Board {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Board>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::{collection::vec, prelude::*};

        vec(any::<Option<Piece>>(), 80)
            .prop_map(|v| {
                let mut board = Board::empty();
                board.squares.iter_mut().zip(v).for_each(|(s, p)| *s = p);
                board
            })
            .boxed()
    }
}

/// The starting position.
impl Default for Board {
    fn default() -> Self {
        let mut board = Board::empty();

        for (file, &role) in File::iter().zip(&BACK_RANK) {
            board.place(Piece(Side::White, role), Square::new(file, Rank::First));
            board.place(Piece(Side::White, Role::Pawn), Square::new(file, Rank::Second));
            board.place(Piece(Side::Black, Role::Pawn), Square::new(file, Rank::Seventh));
            board.place(Piece(Side::Black, role), Square::new(file, Rank::Eighth));
        }

        board
    }
}

impl Board {
    /// A board without any pieces.
    pub fn empty() -> Self {
        Board {
            squares: [None; 80],
        }
    }

    /// The [`Piece`] on the given [`Square`], if any.
    #[inline(always)]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.squares[sq as usize]
    }

    /// Places a [`Piece`] on a [`Square`], replacing whatever occupied it.
    #[inline(always)]
    pub fn place(&mut self, p: Piece, sq: Square) {
        self.squares[sq as usize] = Some(p);
    }

    /// Removes the [`Piece`] on a [`Square`], if any.
    #[inline(always)]
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq as usize].take()
    }

    /// The board that results from relocating the piece on `whence` to `whither`.
    ///
    /// Whatever occupied `whither` is captured.
    pub fn relocate(&self, whence: Square, whither: Square) -> Self {
        let mut next = *self;

        if let Some(p) = next.remove(whence) {
            next.place(p, whither);
        }

        next
    }

    /// An iterator over all pieces on the board.
    pub fn iter(&self) -> impl Iterator<Item = (Piece, Square)> + '_ {
        Square::iter().filter_map(|sq| Some((self[sq]?, sq)))
    }

    fn grid(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = format!("  +{}", "---+".repeat(File::iter().len()));

        f.write_str("   ")?;
        for file in File::iter() {
            write!(f, " {} ", file)?;
            f.write_char(' ')?;
        }

        writeln!(f)?;
        writeln!(f, "{}", border)?;

        for rank in Rank::iter().rev() {
            write!(f, "{} |", rank)?;

            for file in File::iter() {
                match self[Square::new(file, rank)] {
                    Some(p) => write!(f, " {} |", p)?,
                    None => f.write_str("   |")?,
                }
            }

            writeln!(f, " {}", rank)?;
            writeln!(f, "{}", border)?;
        }

        f.write_str("   ")?;
        for file in File::iter() {
            write!(f, " {} ", file)?;
            f.write_char(' ')?;
        }

        Ok(())
    }
}

/// Retrieves the [`Piece`] at a given [`Square`], if any.
impl Index<Square> for Board {
    type Output = Option<Piece>;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.squares[sq as usize]
    }
}

/// Prints the piece placement, or a grid if the alternate flag is set.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return self.grid(f);
        }

        for rank in Rank::iter().rev() {
            let mut skip = 0;

            for file in File::iter() {
                match self[Square::new(file, rank)] {
                    None => skip += 1,
                    Some(p) => {
                        if skip > 0 {
                            write!(f, "{}", skip)?;
                            skip = 0;
                        }

                        write!(f, "{}", p)?;
                    }
                }
            }

            if skip > 0 {
                write!(f, "{}", skip)?;
            }

            if rank != Rank::First {
                f.write_char('/')?;
            }
        }

        Ok(())
    }
}

/// The reason why parsing the piece placement failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseBoardError {
    #[display(fmt = "expected {} ranks separated by `/`", "Rank::iter().len()")]
    #[from(ignore)]
    InvalidRankCount,
    #[display(fmt = "expected {} squares on rank {}", "File::iter().len()", _0)]
    #[from(ignore)]
    InvalidRankLength(#[error(not(source))] Rank),
    #[display(fmt = "unexpected character in piece placement")]
    InvalidPiece(ParsePieceError),
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ranks: Vec<_> = s.split('/').rev().collect();
        if ranks.len() != Rank::iter().len() {
            return Err(ParseBoardError::InvalidRankCount);
        }

        let width = File::iter().len() as u32;

        let mut board = Board::empty();
        for (rank, segment) in Rank::iter().zip(ranks) {
            let mut file = 0u32;
            let mut skip = None;

            for c in segment.chars() {
                if let Some(d) = c.to_digit(10) {
                    let n = match skip {
                        None if d == 0 => return Err(ParseBoardError::InvalidRankLength(rank)),
                        None => d,
                        Some(n) => n * 10 + d,
                    };

                    // Runs never extend past the last file, which also bounds `n`.
                    if file + n > width {
                        return Err(ParseBoardError::InvalidRankLength(rank));
                    }

                    skip = Some(n);
                    continue;
                }

                file += skip.take().unwrap_or(0);
                let p: Piece = c.try_into()?;

                match file.convert() {
                    Some(f) => board.place(p, Square::new(f, rank)),
                    None => return Err(ParseBoardError::InvalidRankLength(rank)),
                }

                file += 1;
            }

            file += skip.unwrap_or(0);
            if file != width {
                return Err(ParseBoardError::InvalidRankLength(rank));
            }
        }

        Ok(board)
    }
}
