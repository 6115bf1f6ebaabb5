use crate::chess::{ParseRoleError, Role, Side};
use derive_more::{Display, Error, From};
use std::fmt::{self, Write};
use std::str::FromStr;

/// A chess [piece][`Role`] of a certain [`Side`].
///
/// Pieces have no identity of their own, a piece is whatever occupies a square.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Piece(pub Side, pub Role);

impl Piece {
    /// This piece's [`Side`].
    #[inline(always)]
    pub fn side(&self) -> Side {
        self.0
    }

    /// This piece's [`Role`].
    #[inline(always)]
    pub fn role(&self) -> Role {
        self.1
    }
}

/// The letter of the piece's [`Role`], upper case for white and lower case for black.
impl From<Piece> for char {
    fn from(p: Piece) -> char {
        match p.side() {
            Side::White => p.role().letter().to_ascii_uppercase(),
            Side::Black => p.role().letter(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char((*self).into())
    }
}

/// The reason why parsing [`Piece`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse piece")]
pub struct ParsePieceError(ParseRoleError);

impl TryFrom<char> for Piece {
    type Error = ParsePieceError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let role = c.to_ascii_lowercase().try_into()?;

        if c.is_ascii_uppercase() {
            Ok(Piece(Side::White, role))
        } else {
            Ok(Piece(Side::Black, role))
        }
    }
}

impl FromStr for Piece {
    type Err = ParsePieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.try_into(),
            _ => Err(ParseRoleError.into()),
        }
    }
}
