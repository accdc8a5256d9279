//! Input module - terminal key events to game commands
//!
//! Pure mapping layer between crossterm key events and the session's
//! command vocabulary. No state: held-key repeats arrive as terminal
//! auto-repeat events and map like any other press.

pub mod map;

pub use gridfall_types as types;

pub use map::{map_key_event, should_quit};
