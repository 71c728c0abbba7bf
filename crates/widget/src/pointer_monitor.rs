//! Pointer-drag gesture tracking.
use glide_core::pointer::{Buttons, Capture, Event};

/// Where a gesture session observes pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenScope {
    /// The pointing device is captured; only its events reach the session.
    Device,
    /// Capture was refused; events are observed window-wide instead.
    Window,
}

struct Session {
    pointer_id: u32,
    initial_buttons: Buttons,
    scope: ListenScope,
    on_move: Box<dyn FnMut(&Event)>,
    on_stop: Option<Box<dyn FnOnce()>>,
}

/// Tracks a single pointer-drag gesture at a time.
///
/// A session starts on pointer-down and ends on pointer-up or when the
/// held buttons no longer match the ones the gesture started with.
/// Starting a new session silently replaces the previous one.
#[derive(Default)]
pub struct PointerMoveMonitor {
    session: Option<Session>,
}

impl PointerMoveMonitor {
    /// Creates an idle monitor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture session is in progress.
    pub fn is_monitoring(&self) -> bool {
        self.session.is_some()
    }

    /// The scope of the current session, if any.
    pub fn scope(&self) -> Option<ListenScope> {
        self.session.as_ref().map(|session| session.scope)
    }

    /// Begins a gesture session.
    ///
    /// Attempts to capture the pointing device; when the device refuses,
    /// the session degrades to window-scope listening instead of failing.
    /// `on_move` runs for every matching move, `on_stop` once when the
    /// gesture ends.
    pub fn start(
        &mut self,
        capture: &mut dyn Capture,
        pointer_id: u32,
        initial_buttons: Buttons,
        on_move: impl FnMut(&Event) + 'static,
        on_stop: impl FnOnce() + 'static,
    ) -> ListenScope {
        self.stop(capture, false);

        let scope = match capture.set_pointer_capture(pointer_id) {
            Ok(()) => ListenScope::Device,
            Err(error) => {
                log::debug!("{error}; listening at window scope");
                ListenScope::Window
            }
        };

        self.session = Some(Session {
            pointer_id,
            initial_buttons,
            scope,
            on_move: Box::new(on_move),
            on_stop: Some(Box::new(on_stop)),
        });

        scope
    }

    /// Feeds a pointer-move event to the current session.
    ///
    /// A buttons-state mismatch is the only mid-gesture cancellation
    /// signal; it ends the session and fires the stop callback.
    pub fn pointer_move(&mut self, capture: &mut dyn Capture, event: &Event) {
        let mismatch = match &self.session {
            Some(session) if session.pointer_id == event.pointer_id => {
                session.initial_buttons != event.buttons
            }
            _ => return,
        };

        if mismatch {
            self.stop(capture, true);
            return;
        }

        if let Some(session) = self.session.as_mut() {
            (session.on_move)(event);
        }
    }

    /// Feeds a pointer-up event, ending a matching session.
    pub fn pointer_up(&mut self, capture: &mut dyn Capture, event: &Event) {
        match &self.session {
            Some(session) if session.pointer_id == event.pointer_id => {}
            _ => return,
        }

        self.stop(capture, true);
    }

    /// Ends the current session, releasing device capture if held.
    pub fn stop(&mut self, capture: &mut dyn Capture, invoke_stop_callback: bool) {
        let Some(mut session) = self.session.take() else {
            return;
        };

        if session.scope == ListenScope::Device {
            capture.release_pointer_capture(session.pointer_id);
        }

        if invoke_stop_callback
            && let Some(on_stop) = session.on_stop.take()
        {
            on_stop();
        }
    }
}

impl std::fmt::Debug for PointerMoveMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerMoveMonitor")
            .field("is_monitoring", &self.is_monitoring())
            .field("scope", &self.scope())
            .finish()
    }
}
