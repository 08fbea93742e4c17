pub mod error;
pub mod game_data;
pub mod metadata;
pub mod pgn;
pub mod replay;
