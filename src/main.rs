//! Terminal memory-game runner (default binary).
//!
//! Single-threaded event loop: render the current snapshot, poll for input
//! with a timeout until the next fixed tick, apply actions synchronously,
//! then advance the countdown timers.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_pairs::core::{GameSnapshot, GameState};
use tui_pairs::input::{handle_key_event, should_quit, Cursor};
use tui_pairs::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};
use tui_pairs::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new(clock_seed());
    let mut cursor = Cursor::new();
    let view = BoardView::default();

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, (cursor.col, cursor.row), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Repeats are fine for cursor movement; crossterm only
                    // reports Release on terminals with enhanced keyboard
                    // protocols, and we don't need it.
                    if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(action) = handle_key_event(key) {
                            apply_action(&mut game, &mut cursor, action);
                        }
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(TICK_MS);
        }
    }
}

fn apply_action(game: &mut GameState, cursor: &mut Cursor, action: GameAction) {
    match action {
        GameAction::CursorLeft
        | GameAction::CursorRight
        | GameAction::CursorUp
        | GameAction::CursorDown => {
            cursor.apply(action, game.size());
        }
        GameAction::Flip => {
            let _ = game.flip_card(cursor.card_id(game.size()));
        }
        GameAction::SizeUp => {
            if game.set_size(game.size() + 1) {
                cursor.clamp_to(game.size());
            }
        }
        GameAction::SizeDown => {
            if game.set_size(game.size().saturating_sub(1)) {
                cursor.clamp_to(game.size());
            }
        }
        GameAction::Reset => {
            game.reset();
        }
    }
}
