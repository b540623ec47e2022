pub mod commands;
pub mod config;
pub mod dataset;
pub mod error;
pub mod fixtures;
pub mod formatting;
pub mod page;
