pub mod ai;
pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod translator;
pub mod ui;
