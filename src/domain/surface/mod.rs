//! Drawing surface aggregate: gesture state machine and overlay draw commands.

pub mod commands;
pub mod state;

pub use commands::*;
pub use state::*;
