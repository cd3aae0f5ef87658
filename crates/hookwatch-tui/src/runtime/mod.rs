//! Viewer runtime - owns the terminal, runs the event loop, executes
//! effects.
//!
//! This is the boundary where side effects happen. The reducer stays pure
//! and produces effects; this module executes them.
//!
//! ## Inbox pattern
//!
//! Async results re-enter the loop through one channel:
//! - the scheduler and effect handlers send `UiEvent`s to `inbox_tx`
//! - the loop drains `inbox_rx` each iteration before processing
//!
//! Once the runtime is torn down the receiver is gone, so late completions
//! have nowhere to land and are discarded by the channel itself.

mod handlers;
mod scheduler;

pub use scheduler::PollScheduler;

use std::future::Future;
use std::io::Stdout;
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use hookwatch_core::client::EventsClient;
use hookwatch_core::config::Config;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Sender half of the runtime inbox.
pub type UiEventSender = mpsc::UnboundedSender<UiEvent>;
/// Receiver half of the runtime inbox.
pub type UiEventReceiver = mpsc::UnboundedReceiver<UiEvent>;

/// How long the loop blocks on terminal input before emitting a render tick.
pub const IDLE_POLL_DURATION: std::time::Duration = std::time::Duration::from_millis(100);

/// Full-screen viewer runtime.
///
/// Owns the terminal and state. Terminal state is restored on drop and on
/// panic.
pub struct ViewerRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    client: Arc<EventsClient>,
    /// Inbox sender - handlers and the scheduler send events here.
    inbox_tx: UiEventSender,
    /// Inbox receiver - drained each loop iteration.
    inbox_rx: UiEventReceiver,
    scheduler: PollScheduler,
    /// Last time a Tick event was emitted.
    last_tick: std::time::Instant,
}

impl ViewerRuntime {
    /// Sets up the terminal, spawns the poll scheduler and builds the state.
    ///
    /// Must be called inside a tokio runtime; the scheduler and fetches
    /// spawn onto it. The first poll happens one full period after this
    /// returns, never immediately.
    pub fn new(config: &Config) -> Result<Self> {
        let endpoint = config.endpoint_url()?;

        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let state = AppState::new(endpoint.as_str());
        let client = Arc::new(EventsClient::new(endpoint));

        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();
        let scheduler = PollScheduler::start(config.poll_interval(), inbox_tx.clone());

        Ok(Self {
            terminal,
            state,
            client,
            inbox_tx,
            inbox_rx,
            scheduler,
            last_tick: std::time::Instant::now(),
        })
    }

    /// Runs the main event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_mouse_capture()?;

        let result = self.event_loop();

        let _ = terminal::disable_mouse_capture();
        // Drop would cancel too; doing it here makes the normal exit path
        // stop polling before the terminal is restored.
        self.scheduler.cancel();

        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.should_quit {
            let mut events = self.collect_events()?;

            // Prepend Frame with the current geometry so scroll clamping in
            // the reducer agrees with what gets drawn below
            let size = self.terminal.size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    body_height: render::body_height(size.height),
                },
            );

            for event in events {
                // Only Tick triggers render - this caps the frame rate
                let marks_dirty = matches!(&event, UiEvent::Tick);

                let effects = update::update(&mut self.state, event);
                if marks_dirty {
                    dirty = true;
                }
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event collection
    // ========================================================================

    /// Collects pending events from the inbox and the terminal.
    ///
    /// Blocks on terminal input until the next tick is due, so the loop
    /// idles cheaply while staying responsive to keys and poll results.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Drain inbox - scheduler triggers and poll completions arrive here
        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        let time_until_tick = IDLE_POLL_DURATION.saturating_sub(self.last_tick.elapsed());
        let poll_duration = if events.is_empty() {
            time_until_tick
        } else {
            std::time::Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any remaining buffered events (non-blocking)
            while event::poll(std::time::Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= IDLE_POLL_DURATION {
            events.push(UiEvent::Tick);
            self.last_tick = std::time::Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::FetchEvents { seq } => {
                let client = Arc::clone(&self.client);
                self.spawn_effect(move || handlers::fetch_events(client, seq));
            }
        }
    }

    /// Spawns an async effect and forwards its resulting event to the inbox.
    ///
    /// The send result is deliberately ignored: after teardown the receiver
    /// is dropped and late completions disappear here.
    fn spawn_effect<F, Fut>(&self, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(f().await);
        });
    }
}

impl Drop for ViewerRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
