//! Track, clamp, and animate scroll positions.
//!
//! The engine is split in three layers:
//!
//! - [`ScrollState`] — an immutable snapshot of viewport size, content size,
//!   and offset, with clamping invariants.
//! - [`SmoothScrollingOperation`] — a time-based tween between two scroll
//!   positions, with an overshoot composition for long jumps.
//! - [`Scrollable`] — the controller owning the current state, mediating
//!   "scroll now" vs "scroll smoothly" requests and driving the per-frame
//!   animation loop.
pub mod animation;
pub mod scrollable;
pub mod state;

pub use animation::{SmoothScrollPosition, SmoothScrollingOperation, SmoothScrollingUpdate};
pub use scrollable::Scrollable;
pub use state::{
    NewScrollDimensions, NewScrollPosition, ScrollDimensions, ScrollEvent, ScrollPosition,
    ScrollState,
};
