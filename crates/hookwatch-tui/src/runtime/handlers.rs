//! Async effect handlers.
//!
//! Handlers are pure async functions returning the `UiEvent` that carries
//! their result; the runtime spawns them and forwards the event through the
//! inbox.

use std::sync::Arc;

use hookwatch_core::client::EventsClient;

use crate::events::UiEvent;
use crate::state::PollSeq;

/// Runs one poll and wraps the outcome for the reducer.
///
/// Failures stop here: logged and carried as data, never propagated. The
/// reducer leaves the displayed list alone when it sees one.
pub async fn fetch_events(client: Arc<EventsClient>, seq: PollSeq) -> UiEvent {
    let result = client.fetch_events().await;

    match &result {
        Ok(events) => {
            tracing::debug!(seq = seq.0, count = events.len(), "poll succeeded");
        }
        Err(error) => {
            tracing::warn!(seq = seq.0, %error, "poll failed, keeping displayed events");
        }
    }

    UiEvent::PollCompleted { seq, result }
}
