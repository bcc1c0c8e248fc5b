pub mod cli;
pub mod config;
pub mod generate;
pub mod preset;
