//! Read-only session snapshots for the render collaborator
//!
//! A snapshot is plain data: the renderer gets everything it needs to draw a
//! frame without holding any borrow of the live session. `snapshot_into`
//! fills a caller-owned snapshot so the frame loop allocates nothing.

use gridfall_types::{Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

use crate::piece::ActivePiece;

/// Current-piece view inside a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceView {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for PieceView {
    fn from(piece: ActivePiece) -> Self {
        Self {
            kind: piece.kind,
            rotation: piece.rotation,
            x: piece.x,
            y: piece.y,
        }
    }
}

/// Everything a renderer needs for one frame
///
/// `current` is absent only for frames presented mid-lock, during the
/// line-clear blink sequence: the locked piece is already stamped into
/// `board` at that point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Board occupancy, row-major: `board[y][x]`
    pub board: [[bool; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub current: Option<PieceView>,
    pub next_kind: PieceKind,
    pub score: u32,
    pub phase: Phase,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            board: [[false; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            current: None,
            next_kind: PieceKind::I,
            score: 0,
            phase: Phase::Running,
        }
    }
}
