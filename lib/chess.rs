mod board;
mod file;
mod game;
mod r#move;
mod piece;
mod ply;
mod rank;
mod role;
mod rules;
mod side;
mod square;
mod transcript;

pub use board::*;
pub use file::*;
pub use game::*;
pub use piece::*;
pub use ply::*;
pub use r#move::*;
pub use rank::*;
pub use role::*;
pub use rules::*;
pub use side::*;
pub use square::*;
pub use transcript::*;
