//! Command interpreter for the simulated shell.
//!
//! [`interpreter::execute`] turns a state and a command line into a
//! [`Transition`]; [`Session`] keeps the live state between lines.

mod command;
mod commands;
mod error;
pub mod interpreter;
mod output;
mod session;

pub use command::Command;
pub use output::{CommandOutput, DIRECTORY_MARKER_END, DIRECTORY_MARKER_START};
pub use session::Session;
