//! Viewer reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(state, event)`
//! and executes the returned effects.
//!
//! Poll results are applied wholesale: a successful completion replaces the
//! displayed list, a failed one leaves it untouched, and a completion that is
//! not the latest issued poll is dropped.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::render;
use crate::state::AppState;

/// Lines moved per mouse wheel notch.
const WHEEL_SCROLL_LINES: usize = 3;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(state: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => vec![],
        UiEvent::Frame { body_height } => {
            state.viewport_height = body_height;
            let total = render::body_line_count(&state.view);
            state.scroll.clamp(total, body_height);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(state, term_event),
        UiEvent::PollDue => {
            let seq = state.polls.issue();
            vec![UiEffect::FetchEvents { seq }]
        }
        UiEvent::PollCompleted { seq, result } => {
            match result {
                Ok(events) => {
                    if state.polls.is_latest(seq) {
                        state.view.replace(events);
                        let total = render::body_line_count(&state.view);
                        state.scroll.clamp(total, state.viewport_height);
                    } else {
                        tracing::debug!(seq = seq.0, "dropping completion of superseded poll");
                    }
                }
                Err(_) => {
                    // Already logged where the fetch ran; the displayed list
                    // stays as it was.
                }
            }
            vec![]
        }
    }
}

// ============================================================================
// Terminal input
// ============================================================================

fn handle_terminal_event(state: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(state, key),
        Event::Mouse(mouse) => {
            let total = render::body_line_count(&state.view);
            let viewport = state.viewport_height;
            match mouse.kind {
                MouseEventKind::ScrollUp => state.scroll.up(WHEEL_SCROLL_LINES),
                MouseEventKind::ScrollDown => {
                    state.scroll.down(WHEEL_SCROLL_LINES, total, viewport);
                }
                _ => {}
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // Windows terminals report both press and release
    if key.kind == KeyEventKind::Release {
        return vec![];
    }

    let total = render::body_line_count(&state.view);
    let viewport = state.viewport_height;

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return vec![UiEffect::Quit],
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return vec![UiEffect::Quit];
        }
        KeyCode::Up | KeyCode::Char('k') => state.scroll.up(1),
        KeyCode::Down | KeyCode::Char('j') => state.scroll.down(1, total, viewport),
        KeyCode::PageUp => state.scroll.up(viewport.max(1)),
        KeyCode::PageDown => state.scroll.down(viewport.max(1), total, viewport),
        KeyCode::Home => state.scroll.to_top(),
        KeyCode::End => state.scroll.to_bottom(total, viewport),
        _ => {}
    }
    vec![]
}
