//! Terminal rendering module.
//!
//! A small game-oriented rendering layer: the game view maps session
//! snapshots into a plain framebuffer of styled character cells, and the
//! terminal renderer flushes framebuffers to the real terminal. Keeping the
//! view pure (no I/O) makes it unit-testable; only `renderer` touches the
//! terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use gridfall_core as core;
pub use gridfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
