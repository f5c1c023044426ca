//! Scribboard Application
//!
//! Headless shell around the core: loads configuration, replays gesture
//! scripts through the canvas and reports the resulting board.

mod app;
mod error;
mod script;
mod summary;

pub use app::{AppConfig, Args, Session, load_editor_config, run};
pub use error::AppError;
pub use script::{Step, parse_script};
pub use summary::SummaryRenderer;
