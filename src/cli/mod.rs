//! Interactive command loop for the flashcard trainer.
//!
//! - **command**: the closed set of commands and their names
//! - **console**: line-oriented I/O boundary (stdin/stdout or scripted)
//! - **session**: the loop itself, one handler per command

pub mod command;
pub mod console;
pub mod session;

pub use command::{Command, UnknownCommand};
pub use console::{Console, ScriptedConsole, StdConsole};
pub use session::Session;
