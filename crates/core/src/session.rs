//! Session module - the spawn / fall / lock / clear / score state machine
//!
//! A `Session` owns the board, the current and next pieces, the score, and
//! the gravity timer. Callers drive it with discrete commands plus a
//! per-frame `tick`, and read it through snapshots. Collisions silently
//! reject the command; rejection is normal control flow, not an error.

use gridfall_types::{
    GameCommand, Phase, PieceKind, BLINK_COUNT, BLINK_PAUSE_MS, FALL_INTERVAL_MS, LINE_SCORE,
};

use crate::board::Board;
use crate::piece::ActivePiece;
use crate::snapshot::SessionSnapshot;
use crate::spawn::Spawner;

/// Render/pacing port invoked during the line-clear blink sequence.
///
/// The session owns the sequencing (what to show, how long to wait); the
/// implementation owns the actual drawing and sleeping. The sequence runs
/// synchronously inside `tick`, so `pause` is expected to block.
pub trait EffectSink {
    /// A frame is ready to be shown.
    fn render(&mut self, snapshot: &SessionSnapshot);
    /// Hold the current frame on screen for `duration_ms`.
    fn pause(&mut self, duration_ms: u32);
}

/// Sink that drops frames and skips pauses, for headless use and tests.
pub struct NullSink;

impl EffectSink for NullSink {
    fn render(&mut self, _snapshot: &SessionSnapshot) {}
    fn pause(&mut self, _duration_ms: u32) {}
}

/// One game from first spawn to game over
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    current: ActivePiece,
    next: ActivePiece,
    score: u32,
    phase: Phase,
    /// Elapsed time since the last automatic descent
    fall_timer_ms: u32,
    spawner: Spawner,
}

impl Session {
    /// New session with entropy-seeded spawning
    pub fn new() -> Self {
        Self::with_spawner(Spawner::new())
    }

    /// New session with a deterministic piece sequence
    pub fn from_seed(seed: u64) -> Self {
        Self::with_spawner(Spawner::from_seed(seed))
    }

    fn with_spawner(mut spawner: Spawner) -> Self {
        let current = spawner.next_piece();
        let next = spawner.next_piece();
        Self {
            board: Board::new(),
            current,
            next,
            score: 0,
            phase: Phase::Running,
            fall_timer_ms: 0,
            spawner,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> ActivePiece {
        self.current
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next.kind
    }

    /// Apply a player command. Returns whether the session state changed.
    ///
    /// While running, movement and rotation commit only if the candidate
    /// placement is collision-free. After game over, only `Confirm`
    /// (restart) is accepted.
    pub fn handle(&mut self, command: GameCommand) -> bool {
        match (self.phase, command) {
            (Phase::Running, GameCommand::MoveLeft) => self.try_shift(-1, 0),
            (Phase::Running, GameCommand::MoveRight) => self.try_shift(1, 0),
            (Phase::Running, GameCommand::SoftDrop) => self.try_shift(0, 1),
            (Phase::Running, GameCommand::Rotate) => self.try_rotate(),
            (Phase::Running, GameCommand::Confirm) => false,
            (Phase::GameOver, GameCommand::Confirm) => {
                self.restart();
                true
            }
            (Phase::GameOver, _) => false,
        }
    }

    /// Advance the gravity timer; at the fall interval, perform one gravity
    /// step and reset the timer (at most one step per call).
    ///
    /// Returns whether a gravity step ran. The sink is only exercised when
    /// the step locks a piece that completes rows.
    pub fn tick(&mut self, elapsed_ms: u32, sink: &mut dyn EffectSink) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        self.fall_timer_ms += elapsed_ms;
        if self.fall_timer_ms < FALL_INTERVAL_MS {
            return false;
        }
        self.fall_timer_ms = 0;

        self.gravity_step(sink);
        true
    }

    /// Re-initialize to a fresh game, keeping the spawner's RNG stream.
    pub fn restart(&mut self) {
        *self = Self::with_spawner(self.spawner.clone());
    }

    /// Fill a caller-owned snapshot without allocating.
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        self.board.write_grid(&mut out.board);
        out.current = Some(self.current.into());
        out.next_kind = self.next.kind;
        out.score = self.score;
        out.phase = self.phase;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut snap = SessionSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        let candidate =
            self.current
                .cells_at(self.current.rotation, self.current.x + dx, self.current.y + dy);
        if self.board.is_blocked(&candidate) {
            return false;
        }
        self.current.x += dx;
        self.current.y += dy;
        true
    }

    fn try_rotate(&mut self) -> bool {
        let rotation = self.current.next_rotation();
        if rotation == self.current.rotation {
            // O piece: a single rotation state.
            return false;
        }
        let candidate = self.current.cells_at(rotation, self.current.x, self.current.y);
        if self.board.is_blocked(&candidate) {
            // No wall kicks: a rejected rotation is simply discarded.
            return false;
        }
        self.current.rotation = rotation;
        true
    }

    /// One automatic descent: move down if free, otherwise lock and cycle.
    fn gravity_step(&mut self, sink: &mut dyn EffectSink) {
        if self.try_shift(0, 1) {
            return;
        }

        self.board.lock(&self.current.cells());

        let rows = self.board.full_rows();
        if !rows.is_empty() {
            self.blink_rows(&rows, sink);
            let cleared = self.board.clear_rows(&rows);
            self.score += cleared as u32 * LINE_SCORE;
        }

        self.current = self.next;
        self.next = self.spawner.next_piece();

        if self.board.is_blocked(&self.current.cells()) {
            // Spawn-validity failure: freeze with the score on display.
            self.phase = Phase::GameOver;
        }
    }

    /// Blink the full rows before removal: empty, show, hold; refill, show,
    /// hold; three times over. Input is not processed while this runs.
    fn blink_rows(&mut self, rows: &[usize], sink: &mut dyn EffectSink) {
        for _ in 0..BLINK_COUNT {
            for occupied in [false, true] {
                for &y in rows {
                    self.board.set_row(y, occupied);
                }
                self.present_board(sink);
                sink.pause(BLINK_PAUSE_MS);
            }
        }
    }

    /// Present a mid-lock frame: the locked piece is already part of the
    /// board, so the snapshot carries no current piece.
    fn present_board(&self, sink: &mut dyn EffectSink) {
        let mut snap = SessionSnapshot::default();
        self.board.write_grid(&mut snap.board);
        snap.current = None;
        snap.next_kind = self.next.kind;
        snap.score = self.score;
        snap.phase = self.phase;
        sink.render(&snap);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
