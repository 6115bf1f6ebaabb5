use super::Execute;
use anyhow::{Context, Error as Anyhow};
use async_trait::async_trait;
use clap::Parser;
use lib::chess::{Board, Game, Transcript};
use tracing::{info, instrument};

/// Replays a transcript and prints the resulting board.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Replay {
    /// The starting piece placement, white to move.
    #[clap(short, long, default_value_t)]
    board: Board,

    /// The moves to replay as a RON list, e.g. `["b2b4","g7g5"]`.
    transcript: Transcript,
}

impl Replay {
    fn replay(self) -> Result<Game, Anyhow> {
        let game = Game::new(self.board)
            .replay(self.transcript)
            .context("failed to replay the transcript")?;

        info!(plies = game.plies().len(), board = %game.current_board());

        Ok(game)
    }
}

#[async_trait]
impl Execute for Replay {
    #[instrument(level = "trace", skip(self), err)]
    async fn execute(self) -> Result<(), Anyhow> {
        let game = self.replay()?;
        println!("{:#}", game.current_board());
        println!("{} to move", game.side_to_move());
        Ok(())
    }
}
