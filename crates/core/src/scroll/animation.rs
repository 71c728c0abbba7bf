//! Smooth scrolling animations.
use crate::scroll::state::{NewScrollPosition, ScrollState};
use crate::time::{Duration, Instant};

/// Extra time granted to every operation, paired with a backdated start
/// time, so the very first frame already shows visible motion.
const START_LEAD: Duration = Duration::from_millis(10);

/// Jumps longer than this many viewports get the two-segment overshoot
/// animation instead of a single eased tween.
const OVERSHOOT_DISTANCE_FACTOR: f32 = 2.5;

/// How far past each endpoint the overshoot segments aim, as a fraction of
/// the viewport.
const OVERSHOOT_VIEWPORT_FRACTION: f32 = 0.75;

/// The completion ratio at which the two overshoot segments meet.
const OVERSHOOT_CUT: f32 = 0.33;

type Animation = Box<dyn Fn(f32) -> f32>;

fn ease_in_cubic(t: f32) -> f32 {
    t * t * t
}

/// Cubic ease-out over `[0, 1] → [0, 1]`.
fn ease_out_cubic(t: f32) -> f32 {
    1.0 - ease_in_cubic(1.0 - t)
}

fn ease_out_cubic_between(from: f32, to: f32) -> Animation {
    let delta = to - from;
    Box::new(move |completion| from + delta * ease_out_cubic(completion))
}

fn composed(a: Animation, b: Animation, cut: f32) -> Animation {
    Box::new(move |completion| {
        if completion < cut {
            a(completion / cut)
        } else {
            b((completion - cut) / (1.0 - cut))
        }
    })
}

/// Plans the animation of one axis.
///
/// A constant-duration tween over a very long distance feels abrupt at the
/// edges, so long jumps fling past a point near each endpoint and then
/// settle, keeping perceived velocity roughly constant regardless of
/// distance.
fn plan_animation(from: f32, to: f32, viewport_size: f32) -> Animation {
    let distance = (from - to).abs();

    if distance > OVERSHOOT_DISTANCE_FACTOR * viewport_size {
        let overshoot = OVERSHOOT_VIEWPORT_FRACTION * viewport_size;
        let (stop1, stop2) = if from < to {
            (from + overshoot, to - overshoot)
        } else {
            (from - overshoot, to + overshoot)
        };

        return composed(
            ease_out_cubic_between(from, stop1),
            ease_out_cubic_between(stop2, to),
            OVERSHOOT_CUT,
        );
    }

    ease_out_cubic_between(from, to)
}

/// A scroll position together with the viewport size it was measured at.
///
/// The viewport size is what decides whether a jump is long enough to get
/// the overshoot animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScrollPosition {
    /// The horizontal offset.
    pub scroll_left: f32,
    /// The vertical offset.
    pub scroll_top: f32,
    /// The viewport width at this position.
    pub width: f32,
    /// The viewport height at this position.
    pub height: f32,
}

impl SmoothScrollPosition {
    /// Captures the position and viewport of a [`ScrollState`].
    pub fn of(state: &ScrollState) -> Self {
        Self {
            scroll_left: state.scroll_left(),
            scroll_top: state.scroll_top(),
            width: state.width(),
            height: state.height(),
        }
    }
}

/// The outcome of advancing a smooth scrolling operation by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScrollingUpdate {
    /// The interpolated horizontal offset.
    pub scroll_left: f32,
    /// The interpolated vertical offset.
    pub scroll_top: f32,
    /// Whether the operation reached its target.
    pub is_done: bool,
}

/// An in-flight animated transition between two scroll positions.
///
/// At most one operation is active per [`Scrollable`] at a time; a new
/// animated target replaces, rather than queues behind, the previous one.
///
/// [`Scrollable`]: crate::scroll::Scrollable
pub struct SmoothScrollingOperation {
    from: SmoothScrollPosition,
    to: SmoothScrollPosition,
    start_time: Instant,
    duration: Duration,
    scroll_left: Animation,
    scroll_top: Animation,
}

impl SmoothScrollingOperation {
    /// Starts a new operation at `now`.
    pub fn start(
        from: SmoothScrollPosition,
        to: SmoothScrollPosition,
        now: Instant,
        duration: Duration,
    ) -> Self {
        // Backdate the start so the first frame already moved.
        Self::new(from, to, now - START_LEAD, duration + START_LEAD)
    }

    fn new(
        from: SmoothScrollPosition,
        to: SmoothScrollPosition,
        start_time: Instant,
        duration: Duration,
    ) -> Self {
        Self {
            from,
            to,
            start_time,
            duration,
            scroll_left: plan_animation(from.scroll_left, to.scroll_left, to.width),
            scroll_top: plan_animation(from.scroll_top, to.scroll_top, to.height),
        }
    }

    /// The target of this operation.
    pub fn to(&self) -> SmoothScrollPosition {
        self.to
    }

    /// When this operation started, including the backdating lead.
    pub fn start_time(&self) -> Instant {
        self.start_time
    }

    /// The total duration, including the lead.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Advances the animation to `now`.
    ///
    /// At completion ratio 1 or beyond, the update carries the exact target
    /// offsets with no interpolation error.
    pub fn tick(&self, now: Instant) -> SmoothScrollingUpdate {
        let elapsed = now.saturating_duration_since(self.start_time);
        let completion = elapsed.as_secs_f32() / self.duration.as_secs_f32();

        if completion < 1.0 {
            return SmoothScrollingUpdate {
                scroll_left: (self.scroll_left)(completion),
                scroll_top: (self.scroll_top)(completion),
                is_done: false,
            };
        }

        SmoothScrollingUpdate {
            scroll_left: self.to.scroll_left,
            scroll_top: self.to.scroll_top,
            is_done: true,
        }
    }

    /// Re-validates the target against new dimensions.
    ///
    /// Both axes are replanned from the current interpolated position, not
    /// the original start, so a mid-flight dimension change never makes the
    /// animation jump.
    pub fn accept_scroll_dimensions(&mut self, state: &ScrollState, now: Instant) {
        let current = self.tick(now);

        let target = state.with_scroll_position(
            NewScrollPosition::new()
                .scroll_left(self.to.scroll_left)
                .scroll_top(self.to.scroll_top),
        );

        self.from = SmoothScrollPosition {
            scroll_left: current.scroll_left,
            scroll_top: current.scroll_top,
            ..self.from
        };
        self.to = SmoothScrollPosition::of(&target);

        self.scroll_left = plan_animation(self.from.scroll_left, self.to.scroll_left, self.to.width);
        self.scroll_top = plan_animation(self.from.scroll_top, self.to.scroll_top, self.to.height);
    }

    /// Rebuilds this operation toward a new target, keeping its start time
    /// and duration.
    pub fn retarget(&self, to: SmoothScrollPosition) -> Self {
        Self::new(self.from, to, self.start_time, self.duration)
    }
}

impl std::fmt::Debug for SmoothScrollingOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmoothScrollingOperation")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("start_time", &self.start_time)
            .field("duration", &self.duration)
            .finish()
    }
}
