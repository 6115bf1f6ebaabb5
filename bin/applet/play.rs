use super::Execute;
use crate::io::{Io, Pipe};
use anyhow::{Context, Error as Anyhow};
use async_trait::async_trait;
use clap::Parser;
use lib::chess::{Board, Game, Move, Square};
use std::io;
use tokio::io::{stdin, stdout};
use tracing::{info, instrument};

/// Plays an interactive game on the standard input and output.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// The starting piece placement, white to move.
    #[clap(short, long, default_value_t)]
    board: Board,
}

#[async_trait]
impl Execute for Play {
    #[instrument(level = "trace", skip(self), err)]
    async fn execute(self) -> Result<(), Anyhow> {
        let io = Pipe::new(stdout(), stdin());
        Session::new(Game::new(self.board), io).run().await
    }
}

/// Commands understood by an interactive [`Session`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Parser)]
#[clap(
    name = "",
    multicall = true,
    arg_required_else_help = true,
    disable_help_flag = true,
    disable_version_flag = true
)]
enum Cmd {
    /// Move a piece on the board, e.g. `move b2b4` or simply `b2b4`.
    Move {
        /// A move in pure coordinate notation.
        descriptor: Move,
    },

    /// List the squares the piece on a square may move to.
    Moves {
        /// A square in coordinate notation, e.g. `b1`.
        square: Square,
    },

    /// Print the board.
    Board,

    /// Print the moves played so far.
    History,

    /// End the session.
    Quit,
}

impl Cmd {
    fn interpret(line: &str) -> Result<Self, clap::Error> {
        match line.parse() {
            Ok(descriptor) => Ok(Cmd::Move { descriptor }),
            Err(_) => Cmd::try_parse_from(line.split_whitespace()),
        }
    }
}

struct Session<T: Io> {
    game: Game,
    io: T,
}

impl<T: Io + Send> Session<T> {
    fn new(game: Game, io: T) -> Self {
        Session { game, io }
    }

    async fn board(&mut self) -> io::Result<()> {
        let board = format!("{:#}", self.game.current_board());
        self.io.send(&board).await?;

        let turn = format!("{} to move", self.game.side_to_move());
        self.io.send(&turn).await
    }

    async fn run(&mut self) -> Result<(), Anyhow> {
        self.board().await?;

        loop {
            self.io.flush().await?;

            let line = match self.io.recv().await {
                Ok(line) => line,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break Ok(()),
                Err(e) => return Err(e).context("failed to read command"),
            };

            match Cmd::interpret(&line) {
                Err(e) => self.io.send(&e.to_string()).await?,

                Ok(Cmd::Quit) => break Ok(()),
                Ok(Cmd::Board) => self.board().await?,
                Ok(Cmd::History) => self.io.send(&self.game.transcript().to_string()).await?,

                Ok(Cmd::Moves { square }) => {
                    let destinations: Vec<_> = self
                        .game
                        .destinations(square)
                        .map(|sq| sq.to_string())
                        .collect();

                    self.io.send(&destinations.join(" ")).await?;
                }

                Ok(Cmd::Move { descriptor }) => {
                    let (whence, whither) = (descriptor.whence(), descriptor.whither());
                    match self.game.submit_move(whence, whither).map(|ply| ply.piece()) {
                        Ok(piece) => {
                            info!(side = %piece.side(), %piece, played = %descriptor);
                            self.board().await?;
                        }

                        Err(reason) => {
                            info!(played = %descriptor, %reason, "move rejected");
                            let msg = format!("illegal move `{}`: {}", descriptor, reason);
                            self.io.send(&msg).await?;
                        }
                    }
                }
            }
        }
    }
}
