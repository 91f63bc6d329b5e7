//! Air-raid calculator CLI library.
//!
//! Terminal styling and output formatting shared by the command handlers.

pub mod output;
pub mod terminal;
