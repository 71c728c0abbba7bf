//! glide is a smooth scrolling engine and custom scrollbar toolkit for
//! building interactive widgets.
//!
//! The heart of glide is the scroll engine in [`glide_core`]: an immutable
//! [`ScrollState`] snapshot with clamping invariants, a cubic-eased
//! smooth-scrolling tween with an overshoot composition for long jumps, and
//! a [`Scrollable`] controller that drives the per-frame animation loop
//! against an injectable [`FrameScheduler`].
//!
//! On top of it, [`glide_widget`] derives scrollbar slider geometry and
//! translates pointer gestures (track clicks, slider drags, paged clicks)
//! into scroll requests.
//!
//! # Example
//! ```
//! use glide::core::scroll::{NewScrollDimensions, NewScrollPosition};
//! use glide::core::time::Duration;
//! use glide::{FrameScheduler, Scrollable};
//!
//! let scheduler = FrameScheduler::new();
//! let scrollable = Scrollable::new(true, Duration::from_millis(125), scheduler.clone());
//!
//! scrollable.set_scroll_dimensions(
//!     NewScrollDimensions::new().height(200.0).scroll_height(1000.0),
//!     false,
//! );
//! scrollable.set_scroll_position_smooth(NewScrollPosition::new().scroll_top(400.0), false);
//!
//! // The host drives one frame per display refresh.
//! while scheduler.needs_frame() {
//!     scheduler.run_frame();
//! }
//!
//! assert_eq!(scrollable.current_scroll_position().scroll_top, 400.0);
//! ```
pub use glide_core as core;
pub use glide_widget as widget;

pub use crate::core::frame::{FrameHandle, FrameScheduler};
pub use crate::core::scroll::{ScrollEvent, ScrollState, Scrollable};
pub use crate::core::subscription::Subscription;
pub use crate::widget::scrollbar::{Axis, Scrollbar, ScrollbarState, Visibility};
