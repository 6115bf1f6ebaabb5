use crate::util::Integer;
use derive_more::{Display, Error};
use std::fmt::{self, Formatter, Write};
use std::str::FromStr;

/// The type of a chess [`Piece`][`crate::chess::Piece`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Role {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    /// Moves as a [`Role::Bishop`] or a [`Role::Knight`].
    Archbishop,
    /// Moves as a [`Role::Rook`] or a [`Role::Knight`].
    Chancellor,
}

unsafe impl Integer for Role {
    type Repr = u8;
    const MIN: Self::Repr = Role::Pawn as _;
    const MAX: Self::Repr = Role::Chancellor as _;
}

impl Role {
    /// This role's lower case letter.
    pub fn letter(&self) -> char {
        match self {
            Role::Pawn => 'p',
            Role::Knight => 'n',
            Role::Bishop => 'b',
            Role::Rook => 'r',
            Role::Queen => 'q',
            Role::King => 'k',
            Role::Archbishop => 'a',
            Role::Chancellor => 'c',
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char(self.letter())
    }
}

/// The reason why parsing [`Role`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse role, expected one of `pnbrqkac`")]
pub struct ParseRoleError;

impl TryFrom<char> for Role {
    type Error = ParseRoleError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'p' => Ok(Role::Pawn),
            'n' => Ok(Role::Knight),
            'b' => Ok(Role::Bishop),
            'r' => Ok(Role::Rook),
            'q' => Ok(Role::Queen),
            'k' => Ok(Role::King),
            'a' => Ok(Role::Archbishop),
            'c' => Ok(Role::Chancellor),
            _ => Err(ParseRoleError),
        }
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.try_into(),
            _ => Err(ParseRoleError),
        }
    }
}
