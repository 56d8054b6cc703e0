pub mod config;
pub mod draw;
pub mod probability;
pub mod timer;
