//! anitui - a terminal viewer for anime rankings and detail pages
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod terminal;
pub mod text;
pub mod traits;
pub mod ui;
pub mod views;
