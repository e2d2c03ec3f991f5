//! Core functionality for ytmenu

pub mod directory;
pub mod invoker;
pub mod preset;
pub mod selector;

pub use directory::*;
pub use invoker::*;
pub use preset::*;
pub use selector::*;
