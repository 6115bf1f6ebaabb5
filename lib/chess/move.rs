use crate::chess::{ParseSquareError, Square};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A proposed relocation of a piece.
///
/// Moves carry no information about the piece being moved,
/// whether they are legal depends on the position they are played in.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(into = "String", try_from = "String")]
#[display(fmt = "{}{}", _0, _1)]
pub struct Move(Square, Square);

impl Move {
    /// Constructs [`Move`] from a pair of source and destination [`Square`]s.
    #[inline(always)]
    pub fn new(whence: Square, whither: Square) -> Self {
        Move(whence, whither)
    }

    /// The source [`Square`].
    #[inline(always)]
    pub fn whence(&self) -> Square {
        self.0
    }

    /// The destination [`Square`].
    #[inline(always)]
    pub fn whither(&self) -> Square {
        self.1
    }
}

/// The reason why parsing [`Move`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse move, expected pure coordinate notation")]
pub struct ParseMoveError(ParseSquareError);

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(2).map_or_else(|| s.len(), |(i, _)| i);
        Ok(Move(s[..i].parse()?, s[i..].parse()?))
    }
}

impl From<Move> for String {
    fn from(m: Move) -> Self {
        m.to_string()
    }
}

impl TryFrom<String> for Move {
    type Error = ParseMoveError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
