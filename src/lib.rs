pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod generator;
pub mod io;
pub mod preview;
