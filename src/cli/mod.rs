//! Command line interface for ytmenu

pub mod args;
pub mod output;
pub mod prompt;
pub mod session;

pub use args::{Args, VerbosityLevel};
pub use output::OutputFormatter;
pub use session::{interrupt_notice, MenuChoice, Session, SessionEnd};
