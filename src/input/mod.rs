//! Input handling: closed command set and per-frame event routing

mod command;
mod router;

pub use command::{Bindings, Command};
pub use router::InputRouter;
