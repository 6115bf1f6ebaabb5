use anyhow::Error as Anyhow;
use async_trait::async_trait;
use clap::Subcommand;
use derive_more::From;

mod play;
mod replay;

/// Trait for types that behave like subcommands.
#[async_trait]
pub trait Execute {
    /// Execute the subcommand.
    async fn execute(self) -> Result<(), Anyhow>;
}

#[derive(From, Subcommand)]
pub enum Applet {
    Play(play::Play),
    Replay(replay::Replay),
}

impl Default for Applet {
    fn default() -> Self {
        play::Play::default().into()
    }
}

#[async_trait]
impl Execute for Applet {
    async fn execute(self) -> Result<(), Anyhow> {
        match self {
            Applet::Play(a) => Ok(a.execute().await?),
            Applet::Replay(a) => Ok(a.execute().await?),
        }
    }
}
