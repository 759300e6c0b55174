pub mod depth;
pub mod game;
pub mod picks;
