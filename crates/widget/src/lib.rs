//! The built-in widgets of glide.
//!
//! The centerpiece is the custom [`Scrollbar`]: pure slider geometry in
//! [`scrollbar::ScrollbarState`], a visibility policy, and an interaction
//! controller translating pointer gestures into scroll requests against a
//! [`Scrollable`].
//!
//! Hosts wire the pieces together: they feed raw pointer events and
//! dimension reports in, subscribe to the scrollable's scroll events and
//! forward them via [`Scrollbar::on_did_scroll`], and paint whatever the
//! render directive describes.
//!
//! [`Scrollable`]: glide_core::scroll::Scrollable
pub use glide_core as core;

pub mod pointer_monitor;
pub mod scrollbar;

pub use pointer_monitor::PointerMoveMonitor;
pub use scrollbar::{Axis, Options, Render, Scrollbar, ScrollbarState, Visibility};
