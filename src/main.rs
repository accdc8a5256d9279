//! Terminal gameplay runner (default binary).
//!
//! Single-threaded frame loop: drain pending key events, advance the session
//! on tick boundaries, render a snapshot. The session's line-clear blink
//! runs synchronously through `FramePresenter`, freezing input while the
//! animation plays.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use gridfall::core::{EffectSink, Session, SessionSnapshot};
use gridfall::input::{map_key_event, should_quit};
use gridfall::term::{GameView, TerminalRenderer, Viewport};
use gridfall::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Renders and paces the line-clear blink through the live terminal.
struct FramePresenter<'a> {
    term: &'a mut TerminalRenderer,
    view: &'a GameView,
    viewport: Viewport,
}

impl EffectSink for FramePresenter<'_> {
    fn render(&mut self, snapshot: &SessionSnapshot) {
        let fb = self.view.render(snapshot, self.viewport);
        // Keep playing even if a frame fails to flush mid-animation.
        let _ = self.term.draw(&fb);
    }

    fn pause(&mut self, duration_ms: u32) {
        thread::sleep(Duration::from_millis(duration_ms as u64));
    }
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut session = Session::new();
    let view = GameView::default();
    let mut snap = SessionSnapshot::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        let fb = view.render(&snap, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Terminal auto-repeat doubles as held-key movement.
                if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = map_key_event(key) {
                        session.handle(command);
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            let mut presenter = FramePresenter {
                term: &mut *term,
                view: &view,
                viewport: Viewport::new(w, h),
            };
            session.tick(TICK_MS, &mut presenter);
        }
    }
}
