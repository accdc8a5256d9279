//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data with no external dependencies, so they can be used
//! from any context (core logic, input mapping, rendering).
//!
//! # Board Dimensions
//!
//! - **Width**: 15 columns (indexed 0-14)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: (7, 0), the board midpoint rounded down
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame-loop timestep (~60 FPS) |
//! | `FALL_INTERVAL_MS` | 500 | Fixed gravity interval |
//! | `BLINK_PAUSE_MS` | 200 | Pause after each blink phase of a line clear |

/// Board width in cells (15 columns)
pub const BOARD_WIDTH: u8 = 15;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Frame-loop timestep in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval: one automatic descent every 500ms
pub const FALL_INTERVAL_MS: u32 = 500;

/// Points awarded per cleared row
pub const LINE_SCORE: u32 = 100;

/// Number of empty/filled blink cycles before full rows are removed
pub const BLINK_COUNT: u32 = 3;

/// Pause after each blink phase (rows emptied or refilled)
pub const BLINK_PAUSE_MS: u32 = 200;

/// The seven tetromino piece kinds
///
/// - **I**: horizontal bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **S**: S-shaped
/// - **Z**: Z-shaped (mirror of S)
/// - **J**: J-shaped
/// - **L**: L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in catalog order. Indexable by a uniform draw in `0..7`.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Single-letter display name
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Discrete commands a player (or test) can issue to a session
///
/// Quitting is not a session command: the outer loop owns process exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down
    SoftDrop,
    /// Advance the piece to its next rotation state
    Rotate,
    /// Restart the game (accepted only when the game is over)
    Confirm,
}

/// Session lifecycle phase
///
/// `GameOver` is terminal: the session freezes until a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_kinds_are_distinct() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in PieceKind::ALL.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(PieceKind::I.as_str(), "I");
        assert_eq!(PieceKind::L.as_str(), "L");
    }
}
