use crate::chess::Move;
use derive_more::{Deref, Display, Error, From, IntoIterator};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The sequence of [`Move`]s played in a game, oldest first.
///
/// Transcripts are written in [RON] as a list of moves in pure coordinate notation,
/// e.g. `["b2b4","g7g5"]`.
///
/// [RON]: https://github.com/ron-rs/ron
#[derive(
    Debug, Default, Clone, Eq, PartialEq, Hash, Deref, From, IntoIterator, Deserialize, Serialize,
)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[into_iterator(owned, ref)]
#[serde(transparent)]
pub struct Transcript(Vec<Move>);

impl FromIterator<Move> for Transcript {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Transcript(Vec::from_iter(iter))
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = ron::ser::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

/// The reason why parsing [`Transcript`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse transcript")]
pub struct ParseTranscriptError(ron::de::SpannedError);

impl FromStr for Transcript {
    type Err = ParseTranscriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}
