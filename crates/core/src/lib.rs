//! The essential ideas of glide.
//!
//! This crate contains the scroll engine itself, independent of any
//! particular widget or rendering layer:
//!
//! - [`scroll`] — immutable scroll state, smooth scrolling animations, and
//!   the [`Scrollable`] controller that mediates immediate and animated
//!   scroll requests.
//! - [`frame`] — a double-buffered work queue drained once per display
//!   refresh, with cancellation handles.
//! - [`pointer`] — the raw pointer input surface shared with widgets.
//! - [`subscription`] — a small subscribe/notify contract with scoped
//!   release.
//! - [`platform`] and [`time`] — environment primitives.
pub mod frame;
pub mod platform;
pub mod pointer;
pub mod scroll;
pub mod subscription;
pub mod time;

pub use frame::{FrameHandle, FrameScheduler};
pub use platform::Platform;
pub use scroll::{ScrollEvent, ScrollState, Scrollable};
pub use subscription::{Listeners, Subscription};
