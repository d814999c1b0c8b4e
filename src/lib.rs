//! Ten News: a daily digest pager for the terminal.

pub mod config;
pub mod content;
pub mod logging;
pub mod slides;
pub mod ui;
