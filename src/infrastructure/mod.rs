pub mod atlas;
pub mod config;
pub mod state;
