//! Pointer input primitives.
use bitflags::bitflags;
use thiserror::Error;

bitflags! {
    /// The set of pointer buttons held down.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Buttons: u8 {
        /// The primary button, usually the left mouse button.
        const PRIMARY = 1 << 0;
        /// The secondary button, usually the right mouse button.
        const SECONDARY = 1 << 1;
        /// The auxiliary button, usually the wheel or middle button.
        const AUXILIARY = 1 << 2;
        /// The fourth button, usually "browser back".
        const BACK = 1 << 3;
        /// The fifth button, usually "browser forward".
        const FORWARD = 1 << 4;
    }
}

impl Default for Buttons {
    fn default() -> Self {
        Self::empty()
    }
}

/// The button that triggered a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// The primary button, usually the left mouse button.
    Primary,
    /// The secondary button, usually the right mouse button.
    Secondary,
    /// The auxiliary button, usually the wheel or middle button.
    Auxiliary,
    /// Some other button.
    Other(u8),
}

/// A raw pointer event reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The identifier of the pointing device.
    pub pointer_id: u32,
    /// The buttons held down when the event fired.
    pub buttons: Buttons,
    /// The button that triggered the event, if any.
    pub button: Option<Button>,
    /// The horizontal position, in page coordinates.
    pub page_x: f32,
    /// The vertical position, in page coordinates.
    pub page_y: f32,
}

/// A mouse wheel movement, in pixels per axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WheelDelta {
    /// The horizontal movement.
    pub delta_x: f32,
    /// The vertical movement.
    pub delta_y: f32,
}

/// The pointing device refused to grant capture.
///
/// This is not fatal: callers degrade to observing pointer events at a
/// broader scope instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("pointer capture was refused for pointer {pointer_id}")]
pub struct CaptureError {
    /// The identifier of the pointing device that refused capture.
    pub pointer_id: u32,
}

/// Grants and releases exclusive capture of a pointing device.
///
/// Implemented by the host windowing layer. Capture scopes pointer events
/// to one element for the duration of a drag gesture.
pub trait Capture {
    /// Requests capture of the given pointer.
    fn set_pointer_capture(&mut self, pointer_id: u32) -> Result<(), CaptureError>;

    /// Releases capture of the given pointer.
    ///
    /// Releasing a pointer that was never captured does nothing.
    fn release_pointer_capture(&mut self, pointer_id: u32);
}
