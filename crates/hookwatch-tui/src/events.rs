//! Event types consumed by the reducer.
//!
//! All inputs (terminal input, loop ticks, scheduler triggers, poll results)
//! are converted to `UiEvent` before processing. Async results re-enter the
//! loop through the runtime inbox as plain events, never as callbacks.

use crossterm::event::Event as CrosstermEvent;
use hookwatch_core::client::PollError;
use hookwatch_core::events::EventRecord;

use crate::state::PollSeq;

/// Unified event enum for the viewer.
#[derive(Debug)]
pub enum UiEvent {
    /// Render-cadence tick from the event loop.
    Tick,
    /// Frame bookkeeping, prepended by the loop each iteration so scroll
    /// math sees the current geometry before other events are applied.
    Frame { body_height: usize },
    /// Raw terminal input.
    Terminal(CrosstermEvent),
    /// The poll scheduler says a poll is due.
    PollDue,
    /// An issued poll finished, successfully or not.
    PollCompleted {
        seq: PollSeq,
        result: Result<Vec<EventRecord>, PollError>,
    },
}
