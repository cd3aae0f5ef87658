//! Shared helpers for the viewer.

mod text;

pub use text::truncate_with_ellipsis;
