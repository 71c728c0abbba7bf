//! Schedule work against the host's display refresh signal.
use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use crate::time::Instant;

/// A cooperative scheduler draining queued callbacks once per display frame.
///
/// The queue is double buffered: callbacks scheduled while a frame is being
/// drained go to the next frame's batch, never the one currently executing.
/// Within one batch, callbacks run in the order they were scheduled.
///
/// The scheduler is owned by whoever composes the scrollables and injected
/// into them, so tests can drive frames with [`FrameScheduler::run_frame`]
/// and a fake clock.
///
/// Cloning a [`FrameScheduler`] produces a handle to the same queue.
#[derive(Clone)]
pub struct FrameScheduler {
    inner: Rc<Inner>,
}

struct Inner {
    queue: RefCell<Vec<QueueItem>>,
    clock: Box<dyn Fn() -> Instant>,
}

struct QueueItem {
    canceled: Rc<Cell<bool>>,
    runner: Box<dyn FnOnce()>,
}

impl FrameScheduler {
    /// Creates a scheduler reading time from the system clock.
    pub fn new() -> Self {
        Self::with_clock(Instant::now)
    }

    /// Creates a scheduler reading time from the given clock.
    ///
    /// Lets tests substitute a deterministic clock and step animations by
    /// hand.
    pub fn with_clock(clock: impl Fn() -> Instant + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                queue: RefCell::new(Vec::new()),
                clock: Box::new(clock),
            }),
        }
    }

    /// The current time according to the scheduler's clock.
    pub fn now(&self) -> Instant {
        (self.inner.clock)()
    }

    /// Queues `runner` to execute on the next frame.
    ///
    /// The returned [`FrameHandle`] can cancel the callback before it runs.
    pub fn schedule(&self, runner: impl FnOnce() + 'static) -> FrameHandle {
        let canceled = Rc::new(Cell::new(false));

        self.inner.queue.borrow_mut().push(QueueItem {
            canceled: Rc::clone(&canceled),
            runner: Box::new(runner),
        });

        FrameHandle { canceled }
    }

    /// Whether any callback is waiting for the next frame.
    ///
    /// Hosts typically check this after pumping events to decide whether to
    /// request another display refresh.
    pub fn needs_frame(&self) -> bool {
        self.inner
            .queue
            .borrow()
            .iter()
            .any(|item| !item.canceled.get())
    }

    /// Drains the callbacks queued so far, in scheduling order.
    ///
    /// Callbacks scheduled during the drain run on the next frame. A
    /// callback canceled after the drain started is skipped. A panicking
    /// callback is caught here and logged, so one failing callback cannot
    /// stall the shared queue.
    pub fn run_frame(&self) {
        let batch = std::mem::take(&mut *self.inner.queue.borrow_mut());

        for item in batch {
            if item.canceled.get() {
                continue;
            }

            // Mark as executed so a late cancel is a no-op.
            item.canceled.set(true);

            if panic::catch_unwind(AssertUnwindSafe(item.runner)).is_err() {
                log::error!("a frame callback panicked and was skipped");
            }
        }
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FrameScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameScheduler")
            .field("queued", &self.inner.queue.borrow().len())
            .finish()
    }
}

/// A capability to cancel a scheduled frame callback before it runs.
#[derive(Debug, Clone)]
pub struct FrameHandle {
    canceled: Rc<Cell<bool>>,
}

impl FrameHandle {
    /// Cancels the callback.
    ///
    /// Canceling a callback that already ran, or canceling twice, does
    /// nothing.
    pub fn cancel(&self) {
        self.canceled.set(true);
    }
}
