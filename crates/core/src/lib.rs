//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the whole game state engine: piece catalog, board,
//! collision detection, locking, line clearing, scoring, and the session
//! state machine. It performs **no I/O**: input arrives as `GameCommand`
//! values plus frame ticks, and output leaves as [`SessionSnapshot`] values
//! (and, during the line-clear blink, through the [`EffectSink`] port).
//!
//! # Module Structure
//!
//! - [`catalog`]: rotation tables for the seven piece kinds
//! - [`piece`]: the active falling piece and its occupancy overlay
//! - [`board`]: 15x20 occupancy grid, collision and line clearing
//! - [`spawn`]: uniformly-random piece generation
//! - [`session`]: the spawn / fall / lock / clear / score state machine
//! - [`snapshot`]: read-only views for the render collaborator
//!
//! # Example
//!
//! ```
//! use gridfall_core::{NullSink, Session};
//! use gridfall_types::{GameCommand, Phase};
//!
//! let mut session = Session::from_seed(1);
//! session.handle(GameCommand::MoveLeft);
//! session.handle(GameCommand::Rotate);
//! session.tick(500, &mut NullSink);
//!
//! let snap = session.snapshot();
//! assert_eq!(snap.phase, Phase::Running);
//! ```
//!
//! Drive [`Session::tick`] every frame with the elapsed milliseconds; the
//! session descends the piece once per fixed fall interval.

pub mod board;
pub mod catalog;
pub mod piece;
pub mod session;
pub mod snapshot;
pub mod spawn;

pub use gridfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use catalog::{rotation_states, state_count, CellOffset, RotationState};
pub use piece::ActivePiece;
pub use session::{EffectSink, NullSink, Session};
pub use snapshot::{PieceView, SessionSnapshot};
pub use spawn::Spawner;
