pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;

#[cfg(test)]
mod testing;
