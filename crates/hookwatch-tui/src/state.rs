//! Application state for the viewer.
//!
//! This module defines the state hierarchy:
//! - `AppState` - everything the reducer mutates and the renderer reads
//! - `ViewState` - the displayed event list (replacement-only)
//! - `PollSequencer` - issues poll sequence tags, remembers the newest
//! - `ScrollState` - viewport offset over the rendered card lines
//!
//! `ViewState` keeps its vector private on purpose: the only mutator is
//! `replace`, so partial updates (append, patch, merge) are not expressible.

use chrono::{DateTime, Local};
use hookwatch_core::events::EventRecord;

// ============================================================================
// Poll sequencing
// ============================================================================

/// Monotonic tag identifying one issued poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PollSeq(pub u64);

/// Issues `PollSeq` tags and remembers the newest one handed out.
///
/// A completion is accepted only if it carries the latest issued tag. An
/// older tag means a newer poll was issued while this one was in flight, and
/// applying it would put stale data on screen.
#[derive(Debug, Default)]
pub struct PollSequencer {
    next: u64,
    latest: Option<PollSeq>,
}

impl PollSequencer {
    /// Hands out the next tag and marks it as the latest.
    pub fn issue(&mut self) -> PollSeq {
        let seq = PollSeq(self.next);
        self.next = self.next.wrapping_add(1);
        self.latest = Some(seq);
        seq
    }

    /// Whether `seq` is the most recently issued tag.
    pub fn is_latest(&self, seq: PollSeq) -> bool {
        self.latest == Some(seq)
    }
}

// ============================================================================
// View state
// ============================================================================

/// The displayed event list plus the time of the last successful poll.
#[derive(Debug, Default)]
pub struct ViewState {
    events: Vec<EventRecord>,
    last_updated: Option<DateTime<Local>>,
}

impl ViewState {
    /// The current records, oldest first (server order is preserved).
    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// When the list was last replaced. `None` until the first success.
    pub fn last_updated(&self) -> Option<DateTime<Local>> {
        self.last_updated
    }

    /// Replaces the whole list with a poll result and stamps the time.
    pub fn replace(&mut self, events: Vec<EventRecord>) {
        self.events = events;
        self.last_updated = Some(Local::now());
    }
}

// ============================================================================
// Scrolling
// ============================================================================

/// Scroll offset over the pre-rendered card lines.
///
/// Offsets are clamped against the current line total, so a replacement that
/// shrinks the list cannot leave the viewport past the end.
#[derive(Debug, Default)]
pub struct ScrollState {
    offset: usize,
}

impl ScrollState {
    /// First visible line index.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn down(&mut self, lines: usize, total: usize, viewport: usize) {
        self.offset = (self.offset + lines).min(Self::max_offset(total, viewport));
    }

    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    pub fn to_bottom(&mut self, total: usize, viewport: usize) {
        self.offset = Self::max_offset(total, viewport);
    }

    /// Re-clamps after the content or the viewport changed.
    pub fn clamp(&mut self, total: usize, viewport: usize) {
        self.offset = self.offset.min(Self::max_offset(total, viewport));
    }

    fn max_offset(total: usize, viewport: usize) -> usize {
        total.saturating_sub(viewport)
    }
}

// ============================================================================
// AppState
// ============================================================================

/// Combined viewer state.
///
/// Mutated only by the reducer; read only by the renderer.
pub struct AppState {
    /// Set by the quit effect; the event loop exits when true.
    pub should_quit: bool,
    /// The displayed event list.
    pub view: ViewState,
    /// Poll sequence bookkeeping.
    pub polls: PollSequencer,
    /// Scroll position over the card lines.
    pub scroll: ScrollState,
    /// Card-list rows available in the last frame.
    pub viewport_height: usize,
    /// Endpoint string shown in the header.
    pub endpoint: String,
}

impl AppState {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            view: ViewState::default(),
            polls: PollSequencer::default(),
            scroll: ScrollState::default(),
            viewport_height: 0,
            endpoint: endpoint.into(),
        }
    }
}
