//! Effect types returned by the reducer.
//!
//! The reducer never performs I/O; it describes what should happen and the
//! runtime executes it.

use crate::state::PollSeq;

/// Commands for the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEffect {
    /// Exit the viewer.
    Quit,
    /// Fetch the event list. The completion event must carry `seq` back so
    /// the reducer can tell current results from stale ones.
    FetchEvents { seq: PollSeq },
}
