//! The scrollable controller.
use std::cell::RefCell;
use std::rc::Rc;

use crate::frame::{FrameHandle, FrameScheduler};
use crate::scroll::animation::{SmoothScrollPosition, SmoothScrollingOperation};
use crate::scroll::state::{
    NewScrollDimensions, NewScrollPosition, ScrollDimensions, ScrollEvent, ScrollPosition,
    ScrollState,
};
use crate::subscription::{Listeners, Subscription};
use crate::time::Duration;

/// Owns the scroll state of a scrollable area and mediates immediate and
/// animated scroll requests.
///
/// All mutation goes through the controller, which is what gives the "no
/// redundant emission" and "at most one active animation" guarantees their
/// meaning. The animation loop is driven by the injected
/// [`FrameScheduler`]: one [`tick`] per display refresh, emitting a
/// [`ScrollEvent`] with `in_smooth_scrolling` set.
///
/// Cloning a [`Scrollable`] produces a handle to the same controller.
///
/// [`tick`]: SmoothScrollingOperation::tick
#[derive(Debug, Clone)]
pub struct Scrollable {
    inner: Rc<RefCell<Inner>>,
    scheduler: FrameScheduler,
    listeners: Listeners<ScrollEvent>,
}

#[derive(Debug)]
struct Inner {
    state: ScrollState,
    smooth_scroll_duration: Duration,
    smooth_scrolling: Option<SmoothScrollingOperation>,
    animation_frame: Option<FrameHandle>,
}

impl Inner {
    /// Replaces the state, returning the change event to emit, if any.
    ///
    /// Emission is suppressed entirely when the new state equals the old
    /// one, raw offsets included.
    fn apply_state(
        &mut self,
        new_state: ScrollState,
        in_smooth_scrolling: bool,
    ) -> Option<ScrollEvent> {
        if new_state == self.state {
            return None;
        }

        let event = new_state.create_scroll_event(&self.state, in_smooth_scrolling);
        self.state = new_state;
        Some(event)
    }

    fn cancel_smooth_scrolling(&mut self) {
        if let Some(handle) = self.animation_frame.take() {
            handle.cancel();
        }

        if self.smooth_scrolling.take().is_some() {
            log::trace!("smooth scrolling canceled");
        }
    }
}

impl Scrollable {
    /// Creates a new [`Scrollable`] with zero dimensions.
    ///
    /// A `smooth_scroll_duration` of zero disables animated scrolling:
    /// smooth requests degrade to immediate ones.
    pub fn new(
        force_integer_values: bool,
        smooth_scroll_duration: Duration,
        scheduler: FrameScheduler,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                state: ScrollState::new(force_integer_values, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
                smooth_scroll_duration,
                smooth_scrolling: None,
                animation_frame: None,
            })),
            scheduler,
            listeners: Listeners::new(),
        }
    }

    /// Registers a listener notified on every scroll state change.
    pub fn on_scroll(&self, listener: impl Fn(&ScrollEvent) + 'static) -> Subscription {
        self.listeners.subscribe(listener)
    }

    /// Changes the duration of animated scrolls.
    ///
    /// Takes effect on the next smooth request; an in-flight animation
    /// keeps its original duration.
    pub fn set_smooth_scroll_duration(&self, duration: Duration) {
        self.inner.borrow_mut().smooth_scroll_duration = duration;
    }

    /// The current dimensions.
    pub fn scroll_dimensions(&self) -> ScrollDimensions {
        self.inner.borrow().state.dimensions()
    }

    /// Updates the dimensions immediately; dimension changes are never
    /// animated.
    ///
    /// Any in-flight animation has its target re-validated against the new
    /// bounds.
    pub fn set_scroll_dimensions(
        &self,
        update: NewScrollDimensions,
        use_raw_scroll_positions: bool,
    ) {
        let event = {
            let mut inner = self.inner.borrow_mut();

            let new_state = inner
                .state
                .with_scroll_dimensions(update, use_raw_scroll_positions);
            let in_smooth_scrolling = inner.smooth_scrolling.is_some();
            let event = inner.apply_state(new_state, in_smooth_scrolling);

            if inner.smooth_scrolling.is_some() {
                let state = inner.state.clone();
                let now = self.scheduler.now();

                if let Some(operation) = &mut inner.smooth_scrolling {
                    operation.accept_scroll_dimensions(&state, now);
                }
            }

            event
        };

        self.emit(event);
    }

    /// The live scroll position, possibly mid-animation.
    pub fn current_scroll_position(&self) -> ScrollPosition {
        self.inner.borrow().state.position()
    }

    /// Where the scroll position will end up: the animation's final target,
    /// or the current position if none is in flight.
    ///
    /// Callers keeping something visible across an animated scroll must use
    /// this instead of [`Scrollable::current_scroll_position`].
    pub fn future_scroll_position(&self) -> ScrollPosition {
        let inner = self.inner.borrow();

        match &inner.smooth_scrolling {
            Some(operation) => ScrollPosition {
                scroll_left: operation.to().scroll_left,
                scroll_top: operation.to().scroll_top,
            },
            None => inner.state.position(),
        }
    }

    /// Whether an animated scroll is in flight.
    pub fn is_smooth_scrolling(&self) -> bool {
        self.inner.borrow().smooth_scrolling.is_some()
    }

    /// Clamps a requested position against the current dimensions, without
    /// applying it.
    pub fn validate_scroll_position(&self, update: NewScrollPosition) -> ScrollPosition {
        self.inner.borrow().state.with_scroll_position(update).position()
    }

    /// Scrolls to the given position immediately.
    ///
    /// Cancels any in-flight animation; no further animation frames run
    /// after the emitted event.
    pub fn set_scroll_position_now(&self, update: NewScrollPosition) {
        let event = {
            let mut inner = self.inner.borrow_mut();
            inner.cancel_smooth_scrolling();

            let new_state = inner.state.with_scroll_position(update);
            inner.apply_state(new_state, false)
        };

        self.emit(event);
    }

    /// Scrolls to the given position with an animated transition.
    ///
    /// While an animation is in flight, axes left unset merge from its
    /// current target; a request whose merged, validated target equals the
    /// in-flight one is a no-op. Otherwise the operation is replaced by one
    /// starting from the current live position, or rebuilt in place keeping
    /// its timing when `reuse_animation` is set.
    pub fn set_scroll_position_smooth(&self, update: NewScrollPosition, reuse_animation: bool) {
        if self.inner.borrow().smooth_scroll_duration.is_zero() {
            return self.set_scroll_position_now(update);
        }

        {
            let mut inner = self.inner.borrow_mut();
            let now = self.scheduler.now();

            if let Some(operation) = inner.smooth_scrolling.take() {
                let update = NewScrollPosition {
                    scroll_left: update.scroll_left.or(Some(operation.to().scroll_left)),
                    scroll_top: update.scroll_top.or(Some(operation.to().scroll_top)),
                };

                let valid_target = inner.state.with_scroll_position(update);

                if operation.to().scroll_left == valid_target.scroll_left()
                    && operation.to().scroll_top == valid_target.scroll_top()
                {
                    // Already flying there.
                    inner.smooth_scrolling = Some(operation);
                    return;
                }

                let to = SmoothScrollPosition::of(&valid_target);

                inner.smooth_scrolling = Some(if reuse_animation {
                    operation.retarget(to)
                } else {
                    SmoothScrollingOperation::start(
                        SmoothScrollPosition::of(&inner.state),
                        to,
                        now,
                        inner.smooth_scroll_duration,
                    )
                });
            } else {
                let valid_target = inner.state.with_scroll_position(update);

                log::trace!(
                    "smooth scrolling to ({}, {})",
                    valid_target.scroll_left(),
                    valid_target.scroll_top()
                );

                inner.smooth_scrolling = Some(SmoothScrollingOperation::start(
                    SmoothScrollPosition::of(&inner.state),
                    SmoothScrollPosition::of(&valid_target),
                    now,
                    inner.smooth_scroll_duration,
                ));
            }

            if let Some(handle) = inner.animation_frame.take() {
                handle.cancel();
            }
            inner.animation_frame = Some(self.schedule_tick());
        }
    }

    fn schedule_tick(&self) -> FrameHandle {
        let this = self.clone();

        self.scheduler
            .schedule(move || this.perform_smooth_scrolling())
    }

    fn perform_smooth_scrolling(&self) {
        let (event, is_done) = {
            let mut inner = self.inner.borrow_mut();
            inner.animation_frame = None;

            let Some(operation) = &inner.smooth_scrolling else {
                return;
            };

            let update = operation.tick(self.scheduler.now());
            let new_state = inner.state.with_scroll_position(
                NewScrollPosition::new()
                    .scroll_left(update.scroll_left)
                    .scroll_top(update.scroll_top),
            );

            (inner.apply_state(new_state, true), update.is_done)
        };

        self.emit(event);

        // A scroll listener may have canceled or retargeted the animation
        // re-entrantly while being notified.
        let mut inner = self.inner.borrow_mut();

        if inner.smooth_scrolling.is_none() {
            return;
        }

        if inner.animation_frame.is_some() {
            // Retargeted: the next frame is already scheduled.
            return;
        }

        if is_done {
            inner.smooth_scrolling = None;
            return;
        }

        inner.animation_frame = Some(self.schedule_tick());
    }

    fn emit(&self, event: Option<ScrollEvent>) {
        if let Some(event) = event {
            self.listeners.emit(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::Instant;
    use std::cell::Cell;

    fn fixture(duration_ms: u64) -> (Scrollable, FrameScheduler, Rc<Cell<Instant>>) {
        let time = Rc::new(Cell::new(Instant::now()));
        let scheduler = FrameScheduler::with_clock({
            let time = Rc::clone(&time);
            move || time.get()
        });

        let scrollable = Scrollable::new(
            false,
            Duration::from_millis(duration_ms),
            scheduler.clone(),
        );
        scrollable.set_scroll_dimensions(
            NewScrollDimensions::new()
                .width(100.0)
                .scroll_width(1000.0)
                .height(100.0)
                .scroll_height(1000.0),
            false,
        );

        (scrollable, scheduler, time)
    }

    fn record_events(scrollable: &Scrollable) -> Rc<RefCell<Vec<ScrollEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        scrollable
            .on_scroll({
                let events = Rc::clone(&events);
                move |event| events.borrow_mut().push(*event)
            })
            .detach();
        events
    }

    #[test]
    fn test_set_scroll_position_now() {
        let (scrollable, _scheduler, _time) = fixture(0);
        let events = record_events(&scrollable);

        scrollable.set_scroll_position_now(NewScrollPosition::new().scroll_left(250.0));

        assert_eq!(scrollable.current_scroll_position().scroll_left, 250.0);
        assert_eq!(events.borrow().len(), 1);
        assert!(!events.borrow()[0].in_smooth_scrolling);

        // Same position again: no redundant emission.
        scrollable.set_scroll_position_now(NewScrollPosition::new().scroll_left(250.0));
        assert_eq!(events.borrow().len(), 1);
    }

    #[test]
    fn test_zero_duration_degrades_to_now() {
        let (scrollable, scheduler, _time) = fixture(0);

        scrollable.set_scroll_position_smooth(NewScrollPosition::new().scroll_top(300.0), false);

        assert_eq!(scrollable.current_scroll_position().scroll_top, 300.0);
        assert!(!scrollable.is_smooth_scrolling());
        assert!(!scheduler.needs_frame());
    }

    #[test]
    fn test_smooth_scroll_runs_to_completion() {
        let (scrollable, scheduler, time) = fixture(125);
        let events = record_events(&scrollable);

        scrollable.set_scroll_position_smooth(NewScrollPosition::new().scroll_top(400.0), false);
        assert!(scrollable.is_smooth_scrolling());
        assert_eq!(scrollable.future_scroll_position().scroll_top, 400.0);

        let mut frames = 0;
        while scheduler.needs_frame() {
            time.set(time.get() + Duration::from_millis(16));
            scheduler.run_frame();
            frames += 1;
            assert!(frames < 100, "animation must terminate");
        }

        assert!(!scrollable.is_smooth_scrolling());
        assert_eq!(scrollable.current_scroll_position().scroll_top, 400.0);
        assert!(events.borrow().iter().all(|event| event.in_smooth_scrolling));

        // Monotonic progress toward the target.
        let mut previous = 0.0;
        for event in events.borrow().iter() {
            assert!(event.scroll_top >= previous);
            previous = event.scroll_top;
        }
    }

    #[test]
    fn test_repeated_same_target_is_a_no_op() {
        let (scrollable, scheduler, time) = fixture(125);

        scrollable.set_scroll_position_smooth(NewScrollPosition::new().scroll_top(400.0), false);
        let start_time = scrollable
            .inner
            .borrow()
            .smooth_scrolling
            .as_ref()
            .map(SmoothScrollingOperation::start_time)
            .unwrap();

        time.set(time.get() + Duration::from_millis(32));
        scheduler.run_frame();

        scrollable.set_scroll_position_smooth(NewScrollPosition::new().scroll_top(400.0), false);

        let unchanged = scrollable
            .inner
            .borrow()
            .smooth_scrolling
            .as_ref()
            .map(SmoothScrollingOperation::start_time)
            .unwrap();
        assert_eq!(unchanged, start_time); // same operation, not restarted
    }

    #[test]
    fn test_retarget_merges_unspecified_axes_from_target() {
        let (scrollable, _scheduler, _time) = fixture(125);

        scrollable.set_scroll_position_smooth(
            NewScrollPosition::new().scroll_left(200.0).scroll_top(400.0),
            false,
        );
        // Only the vertical axis changes; horizontal merges from the
        // in-flight target, not the current position.
        scrollable.set_scroll_position_smooth(NewScrollPosition::new().scroll_top(600.0), false);

        let future = scrollable.future_scroll_position();
        assert_eq!(future.scroll_left, 200.0);
        assert_eq!(future.scroll_top, 600.0);
    }

    #[test]
    fn test_now_preempts_smooth() {
        let (scrollable, scheduler, time) = fixture(125);
        let events = record_events(&scrollable);

        scrollable.set_scroll_position_smooth(NewScrollPosition::new().scroll_top(400.0), false);

        time.set(time.get() + Duration::from_millis(16));
        scheduler.run_frame();

        scrollable.set_scroll_position_now(NewScrollPosition::new().scroll_top(50.0));
        assert!(!scrollable.is_smooth_scrolling());

        let after_now = events.borrow().len();

        // No further animation frames: any queued tick bails out.
        time.set(time.get() + Duration::from_millis(16));
        scheduler.run_frame();
        scheduler.run_frame();

        assert_eq!(events.borrow().len(), after_now);
        assert_eq!(scrollable.current_scroll_position().scroll_top, 50.0);
    }

    #[test]
    fn test_reentrant_cancellation_from_listener() {
        let (scrollable, scheduler, time) = fixture(125);

        // The first smooth frame triggers an immediate scroll from inside
        // the listener, canceling the animation re-entrantly.
        scrollable
            .on_scroll({
                let scrollable = scrollable.clone();
                move |event| {
                    if event.in_smooth_scrolling {
                        scrollable.set_scroll_position_now(
                            NewScrollPosition::new().scroll_top(0.0),
                        );
                    }
                }
            })
            .detach();

        scrollable.set_scroll_position_smooth(NewScrollPosition::new().scroll_top(400.0), false);

        time.set(time.get() + Duration::from_millis(16));
        scheduler.run_frame();

        assert!(!scrollable.is_smooth_scrolling());
        assert!(!scheduler.needs_frame()); // loop stopped, not rescheduled
        assert_eq!(scrollable.current_scroll_position().scroll_top, 0.0);
    }

    #[test]
    fn test_dimension_change_revalidates_animation_target() {
        let (scrollable, scheduler, time) = fixture(125);

        scrollable.set_scroll_position_smooth(NewScrollPosition::new().scroll_top(900.0), false);
        assert_eq!(scrollable.future_scroll_position().scroll_top, 900.0);

        // Content shrinks mid-flight: the target re-clamps to 400.
        scrollable.set_scroll_dimensions(
            NewScrollDimensions::new().scroll_height(500.0),
            false,
        );
        assert_eq!(scrollable.future_scroll_position().scroll_top, 400.0);

        while scheduler.needs_frame() {
            time.set(time.get() + Duration::from_millis(16));
            scheduler.run_frame();
        }

        assert_eq!(scrollable.current_scroll_position().scroll_top, 400.0);
    }

    #[test]
    fn test_dimension_events_are_not_smooth() {
        let (scrollable, _scheduler, _time) = fixture(125);
        let events = record_events(&scrollable);

        scrollable.set_scroll_dimensions(NewScrollDimensions::new().width(80.0), false);

        assert_eq!(events.borrow().len(), 1);
        let event = &events.borrow()[0];
        assert!(event.width_changed);
        assert!(!event.in_smooth_scrolling);
    }
}
