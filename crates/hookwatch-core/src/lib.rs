//! Core hookwatch library (events model, poll client, config, logging).

pub mod client;
pub mod config;
pub mod events;
pub mod logging;
