//! Noughts Application
//!
//! Headless host shell: configuration, logging and a frame loop that feeds
//! pointer events and animation ticks to the board widget.

mod app;

pub use app::{App, AppConfig, AppError, run_demo};
