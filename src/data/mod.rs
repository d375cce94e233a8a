pub mod datetime;
pub mod game_log;
pub mod loader;
