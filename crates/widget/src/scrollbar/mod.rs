//! The scrollbar interaction controller.
//!
//! A [`Scrollbar`] pairs pure slider geometry with the pointer gestures
//! that drive it: track clicks jump or page, slider drags scroll
//! immediately on every move, and every geometry change is pushed to the
//! host as a [`Render`] directive.
pub mod state;
pub mod visibility;

pub use state::{MINIMUM_SLIDER_SIZE, ScrollbarState};
pub use visibility::{Visibility, VisibilityController};

use std::cell::Cell;
use std::rc::Rc;

use glide_core::Platform;
use glide_core::pointer::{Button, Capture, Event, WheelDelta};
use glide_core::scroll::{NewScrollPosition, ScrollEvent, Scrollable};
use glide_core::subscription::{Listeners, Subscription};

use crate::pointer_monitor::PointerMoveMonitor;

/// The orthogonal distance from the drag start at which a slider drag
/// snaps back to where it began, as if the pointer lost its grip.
///
/// Only applied on Windows, where this affordance is conventional.
pub const POINTER_DRAG_RESET_DISTANCE: f32 = 140.0;

/// The direction a scrollbar scrolls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Scrolls `scroll_left` over the content width.
    Horizontal,
    /// Scrolls `scroll_top` over the content height.
    Vertical,
}

impl Axis {
    /// The element-relative offset along this axis.
    fn relative_position(self, offset_x: f32, offset_y: f32) -> f32 {
        match self {
            Self::Horizontal => offset_x,
            Self::Vertical => offset_y,
        }
    }

    /// The page coordinate of a pointer event along this axis.
    fn pointer_position(self, event: &Event) -> f32 {
        match self {
            Self::Horizontal => event.page_x,
            Self::Vertical => event.page_y,
        }
    }

    /// The page coordinate of a pointer event across this axis.
    fn orthogonal_pointer_position(self, event: &Event) -> f32 {
        match self {
            Self::Horizontal => event.page_y,
            Self::Vertical => event.page_x,
        }
    }

    /// A position update touching only this axis.
    fn new_scroll_position(self, position: f32) -> NewScrollPosition {
        match self {
            Self::Horizontal => NewScrollPosition::new().scroll_left(position),
            Self::Vertical => NewScrollPosition::new().scroll_top(position),
        }
    }

    /// Picks this axis' `(scroll_size, scroll_position, visible_size)` out
    /// of a scroll event.
    fn project(self, event: &ScrollEvent) -> (f32, f32, f32) {
        match self {
            Self::Horizontal => (event.scroll_width, event.scroll_left, event.width),
            Self::Vertical => (event.scroll_height, event.scroll_top, event.height),
        }
    }
}

/// The configuration of a [`Scrollbar`].
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    visibility: Visibility,
    has_arrows: bool,
    arrow_size: f32,
    scrollbar_size: f32,
    opposite_scrollbar_size: f32,
    scroll_by_page: bool,
    lazy_render: bool,
    platform: Platform,
}

impl Options {
    /// Sets when the scrollbar is shown.
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Enables the stepping arrows at the track ends.
    pub fn has_arrows(mut self, has_arrows: bool) -> Self {
        self.has_arrows = has_arrows;
        self
    }

    /// Sets the arrow size. Only takes effect with [`Self::has_arrows`].
    pub fn arrow_size(mut self, arrow_size: f32) -> Self {
        self.arrow_size = arrow_size;
        self
    }

    /// Sets the scrollbar thickness.
    pub fn scrollbar_size(mut self, scrollbar_size: f32) -> Self {
        self.scrollbar_size = scrollbar_size;
        self
    }

    /// Sets the thickness of the perpendicular scrollbar, which shortens
    /// this one's track.
    pub fn opposite_scrollbar_size(mut self, opposite_scrollbar_size: f32) -> Self {
        self.opposite_scrollbar_size = opposite_scrollbar_size;
        self
    }

    /// Makes track clicks scroll one page instead of jumping to the
    /// clicked position.
    pub fn scroll_by_page(mut self, scroll_by_page: bool) -> Self {
        self.scroll_by_page = scroll_by_page;
        self
    }

    /// Defers render directives until [`Scrollbar::render`] is called.
    pub fn lazy_render(mut self, lazy_render: bool) -> Self {
        self.lazy_render = lazy_render;
        self
    }

    /// Overrides the host platform, which decides platform-conventional
    /// affordances like the drag snap-back.
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            visibility: Visibility::Auto,
            has_arrows: false,
            arrow_size: 11.0,
            scrollbar_size: 10.0,
            opposite_scrollbar_size: 0.0,
            scroll_by_page: false,
            lazy_render: false,
            platform: Platform::CURRENT,
        }
    }
}

/// The geometry the host needs to paint the scrollbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Render {
    /// The track length along the scroll axis.
    pub track_large_size: f32,
    /// The track thickness across the scroll axis.
    pub track_small_size: f32,
    /// The slider length.
    pub slider_size: f32,
    /// The slider offset from the track start, past the leading arrow.
    pub slider_position: f32,
}

/// A slider drag starting or ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEvent {
    /// The primary button went down on the slider.
    Started,
    /// The pointer was released or the button state changed mid-drag.
    Ended,
}

/// Translates pointer gestures on one scrollbar into scroll requests.
///
/// The controller owns its [`ScrollbarState`] exclusively; hosts feed it
/// dimension reports and pointer events and observe it through the
/// `on_render`, `on_drag`, and `on_wheel` subscriptions.
pub struct Scrollbar {
    axis: Axis,
    scrollable: Scrollable,
    state: ScrollbarState,
    visibility: VisibilityController,
    monitor: PointerMoveMonitor,
    slider_active: Rc<Cell<bool>>,
    should_render: bool,
    scroll_by_page: bool,
    lazy_render: bool,
    platform: Platform,
    render_listeners: Listeners<Render>,
    drag_listeners: Listeners<DragEvent>,
    wheel_listeners: Listeners<WheelDelta>,
}

impl Scrollbar {
    /// Creates a scrollbar driving the given [`Scrollable`] along `axis`.
    pub fn new(axis: Axis, scrollable: Scrollable, options: Options) -> Self {
        let arrow_size = if options.has_arrows {
            options.arrow_size
        } else {
            0.0
        };

        Self {
            axis,
            scrollable,
            state: ScrollbarState::new(
                arrow_size,
                options.scrollbar_size,
                options.opposite_scrollbar_size,
            ),
            visibility: VisibilityController::new(options.visibility),
            monitor: PointerMoveMonitor::new(),
            slider_active: Rc::new(Cell::new(false)),
            should_render: true,
            scroll_by_page: options.scroll_by_page,
            lazy_render: options.lazy_render,
            platform: options.platform,
            render_listeners: Listeners::new(),
            drag_listeners: Listeners::new(),
            wheel_listeners: Listeners::new(),
        }
    }

    /// The axis this scrollbar scrolls.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Whether the content overflows along this scrollbar's axis.
    pub fn is_needed(&self) -> bool {
        self.state.is_needed()
    }

    /// Whether a slider drag is in progress.
    pub fn is_slider_active(&self) -> bool {
        self.slider_active.get()
    }

    /// Whether the scrollbar should currently be painted.
    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    /// Registers a listener for render directives.
    pub fn on_render(&self, listener: impl Fn(&Render) + 'static) -> Subscription {
        self.render_listeners.subscribe(listener)
    }

    /// Registers a listener for drag start and end.
    pub fn on_drag(&self, listener: impl Fn(&DragEvent) + 'static) -> Subscription {
        self.drag_listeners.subscribe(listener)
    }

    /// Registers a listener for wheel passthrough events.
    pub fn on_wheel(&self, listener: impl Fn(&WheelDelta) + 'static) -> Subscription {
        self.wheel_listeners.subscribe(listener)
    }

    /// Handles a pointer-down on the scrollbar element.
    ///
    /// `offset_x` and `offset_y` are relative to the scrollbar's origin.
    /// The click scrolls immediately; the primary button additionally
    /// begins a slider drag from the same event.
    pub fn pointer_down(
        &mut self,
        capture: &mut dyn Capture,
        event: &Event,
        offset_x: f32,
        offset_y: f32,
    ) {
        let offset = self.axis.relative_position(offset_x, offset_y);
        self.pointer_down_at(capture, event, offset);
    }

    fn pointer_down_at(&mut self, capture: &mut dyn Capture, event: &Event, offset: f32) {
        let desired = if self.scroll_by_page {
            self.state.desired_scroll_position_from_offset_paged(offset)
        } else {
            self.state.desired_scroll_position_from_offset(offset)
        };
        self.set_desired_scroll_position_now(desired);

        if event.button == Some(Button::Primary) {
            self.slider_pointer_down(capture, event);
        }
    }

    /// Begins a slider drag without the initial track jump.
    pub fn slider_pointer_down(&mut self, capture: &mut dyn Capture, event: &Event) {
        let initial_pointer_position = self.axis.pointer_position(event);
        let initial_orthogonal_position = self.axis.orthogonal_pointer_position(event);
        // Deltas are resolved against the geometry at drag start, so
        // mid-drag dimension changes cannot warp the gesture.
        let initial_state = self.state.clone();
        self.slider_active.set(true);

        let axis = self.axis;
        let platform = self.platform;
        let scrollable = self.scrollable.clone();
        let on_move = move |event: &Event| {
            let orthogonal_delta =
                (axis.orthogonal_pointer_position(event) - initial_orthogonal_position).abs();

            if platform.is_windows() && orthogonal_delta > POINTER_DRAG_RESET_DISTANCE {
                // The pointer wandered off the scrollbar: snap back.
                scrollable.set_scroll_position_now(
                    axis.new_scroll_position(initial_state.scroll_position()),
                );
                return;
            }

            let delta = axis.pointer_position(event) - initial_pointer_position;
            scrollable.set_scroll_position_now(
                axis.new_scroll_position(initial_state.desired_scroll_position_from_delta(delta)),
            );
        };

        let slider_active = Rc::clone(&self.slider_active);
        let drag_listeners = self.drag_listeners.clone();
        let on_stop = move || {
            slider_active.set(false);
            drag_listeners.emit(&DragEvent::Ended);
        };

        let _ = self
            .monitor
            .start(capture, event.pointer_id, event.buttons, on_move, on_stop);
        self.drag_listeners.emit(&DragEvent::Started);
    }

    /// Handles a pointer-down delegated from outside the scrollbar, e.g.
    /// a click in the pane's corner region.
    ///
    /// `track_origin` is the page coordinate of the track start along this
    /// axis. Clicks landing on the slider begin a drag; anywhere else on
    /// the track behaves like [`Self::pointer_down`].
    pub fn delegate_pointer_down(
        &mut self,
        capture: &mut dyn Capture,
        event: &Event,
        track_origin: f32,
    ) {
        let slider_start = track_origin + self.state.slider_position();
        let slider_stop = slider_start + self.state.slider_size();
        let pointer_position = self.axis.pointer_position(event);

        if slider_start <= pointer_position && pointer_position <= slider_stop {
            if event.button == Some(Button::Primary) {
                self.slider_pointer_down(capture, event);
            }
        } else {
            self.pointer_down_at(capture, event, pointer_position - track_origin);
        }
    }

    /// Forwards a pointer-move to the drag session, if any.
    pub fn pointer_move(&mut self, capture: &mut dyn Capture, event: &Event) {
        self.monitor.pointer_move(capture, event);
    }

    /// Forwards a pointer-up, ending the drag session if it matches.
    pub fn pointer_up(&mut self, capture: &mut dyn Capture, event: &Event) {
        self.monitor.pointer_up(capture, event);
    }

    /// Emits a wheel passthrough event for the host to route.
    pub fn wheel(&self, delta: WheelDelta) {
        self.wheel_listeners.emit(&delta);
    }

    /// Applies a scroll state change to this scrollbar's axis.
    ///
    /// Returns whether a render is pending afterwards.
    pub fn on_did_scroll(&mut self, event: &ScrollEvent) -> bool {
        let (scroll_size, scroll_position, visible_size) = self.axis.project(event);

        self.should_render = self.on_element_scroll_size(scroll_size) || self.should_render;
        self.should_render = self.on_element_scroll_position(scroll_position) || self.should_render;
        self.should_render = self.on_element_size(visible_size) || self.should_render;
        self.should_render
    }

    /// Reports the viewport size along this scrollbar's axis.
    pub fn set_element_size(&mut self, visible_size: f32) -> bool {
        self.on_element_size(visible_size)
    }

    /// Reports a new scrollbar thickness.
    pub fn set_scrollbar_size(&mut self, scrollbar_size: f32) {
        let _ = self.state.set_scrollbar_size(scrollbar_size);
        self.should_render = true;
        if !self.lazy_render {
            self.render();
        }
    }

    /// Signals host activity that should reveal an auto scrollbar.
    pub fn begin_reveal(&mut self) {
        self.visibility.set_should_be_visible(true);
    }

    /// Signals the end of host activity, hiding an auto scrollbar.
    pub fn begin_hide(&mut self) {
        self.visibility.set_should_be_visible(false);
    }

    /// Pushes the current geometry to the host, if a render is pending.
    pub fn render(&mut self) {
        if !self.should_render {
            return;
        }
        self.should_render = false;

        self.render_listeners.emit(&Render {
            track_large_size: self.state.available_track_size(),
            track_small_size: self.state.scrollbar_size(),
            slider_size: self.state.slider_size(),
            slider_position: self.state.arrow_size() + self.state.slider_position(),
        });
    }

    fn on_element_size(&mut self, visible_size: f32) -> bool {
        if self.state.set_visible_size(visible_size) {
            self.mark_render_pending();
        }
        self.should_render
    }

    fn on_element_scroll_size(&mut self, scroll_size: f32) -> bool {
        if self.state.set_scroll_size(scroll_size) {
            self.mark_render_pending();
        }
        self.should_render
    }

    fn on_element_scroll_position(&mut self, scroll_position: f32) -> bool {
        if self.state.set_scroll_position(scroll_position) {
            self.mark_render_pending();
        }
        self.should_render
    }

    fn mark_render_pending(&mut self) {
        self.visibility.set_is_needed(self.state.is_needed());
        self.should_render = true;
        if !self.lazy_render {
            self.render();
        }
    }

    fn set_desired_scroll_position_now(&self, position: f32) {
        self.scrollable
            .set_scroll_position_now(self.axis.new_scroll_position(position));
    }
}

impl std::fmt::Debug for Scrollbar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scrollbar")
            .field("axis", &self.axis)
            .field("state", &self.state)
            .field("slider_active", &self.slider_active.get())
            .field("should_render", &self.should_render)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_core::FrameScheduler;
    use glide_core::pointer::{Buttons, CaptureError};
    use glide_core::scroll::NewScrollDimensions;
    use glide_core::time::Duration;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeCapture {
        captured: Vec<u32>,
        released: Vec<u32>,
    }

    impl Capture for FakeCapture {
        fn set_pointer_capture(&mut self, pointer_id: u32) -> Result<(), CaptureError> {
            self.captured.push(pointer_id);
            Ok(())
        }

        fn release_pointer_capture(&mut self, pointer_id: u32) {
            self.released.push(pointer_id);
        }
    }

    fn down(page_x: f32, page_y: f32) -> Event {
        Event {
            pointer_id: 1,
            buttons: Buttons::PRIMARY,
            button: Some(Button::Primary),
            page_x,
            page_y,
        }
    }

    fn moved(page_x: f32, page_y: f32) -> Event {
        Event {
            pointer_id: 1,
            buttons: Buttons::PRIMARY,
            button: None,
            page_x,
            page_y,
        }
    }

    fn up(page_x: f32, page_y: f32) -> Event {
        Event {
            pointer_id: 1,
            buttons: Buttons::empty(),
            button: Some(Button::Primary),
            page_x,
            page_y,
        }
    }

    /// A vertical scrollbar over a 200-unit viewport of 1000-unit content
    /// at scroll top 400: slider size 40, ratio 0.2, position 80.
    fn fixture(options: Options) -> (Scrollbar, Scrollable) {
        let scrollable = Scrollable::new(true, Duration::ZERO, FrameScheduler::new());
        let mut scrollbar = Scrollbar::new(Axis::Vertical, scrollable.clone(), options);

        let events = Rc::new(RefCell::new(Vec::new()));
        let subscription = scrollable.on_scroll({
            let events = Rc::clone(&events);
            move |event: &ScrollEvent| events.borrow_mut().push(*event)
        });

        scrollable.set_scroll_dimensions(
            NewScrollDimensions::new().height(200.0).scroll_height(1000.0),
            false,
        );
        scrollable.set_scroll_position_now(NewScrollPosition::new().scroll_top(400.0));

        subscription.unsubscribe();
        for event in events.borrow().iter() {
            let _ = scrollbar.on_did_scroll(event);
        }

        (scrollbar, scrollable)
    }

    fn scroll_top(scrollable: &Scrollable) -> f32 {
        scrollable.current_scroll_position().scroll_top
    }

    #[test]
    fn test_track_click_scrolls_to_centered_position() {
        let (mut scrollbar, scrollable) = fixture(Options::default().scrollbar_size(15.0));
        let mut capture = FakeCapture::default();

        // offset 150 → round((150 - 40 / 2) / 0.2) = 650
        scrollbar.pointer_down(&mut capture, &down(5.0, 150.0), 5.0, 150.0);
        assert_eq!(scroll_top(&scrollable), 650.0);

        // The primary button also started a drag from the same event.
        assert!(scrollbar.is_slider_active());
        assert_eq!(capture.captured, vec![1]);
    }

    #[test]
    fn test_track_click_scrolls_by_page() {
        let (mut scrollbar, scrollable) =
            fixture(Options::default().scrollbar_size(15.0).scroll_by_page(true));
        let mut capture = FakeCapture::default();

        // Clicking above the slider pages up by one viewport.
        scrollbar.pointer_down(&mut capture, &down(5.0, 10.0), 5.0, 10.0);
        assert_eq!(scroll_top(&scrollable), 200.0);
    }

    #[test]
    fn test_slider_drag_converts_delta_through_snapshot() {
        let (mut scrollbar, scrollable) = fixture(Options::default().scrollbar_size(15.0));
        let mut capture = FakeCapture::default();

        scrollbar.slider_pointer_down(&mut capture, &down(5.0, 100.0));
        assert_eq!(scroll_top(&scrollable), 400.0); // no initial jump

        // delta 16 at ratio 0.2 → round((80 + 16) / 0.2) = 480
        scrollbar.pointer_move(&mut capture, &moved(5.0, 116.0));
        assert_eq!(scroll_top(&scrollable), 480.0);

        // Deltas stay relative to the drag-start snapshot.
        scrollbar.pointer_move(&mut capture, &moved(5.0, 132.0));
        assert_eq!(scroll_top(&scrollable), 560.0);

        scrollbar.pointer_move(&mut capture, &moved(5.0, 84.0));
        assert_eq!(scroll_top(&scrollable), 320.0);
    }

    #[test]
    fn test_drag_snaps_back_on_windows_only() {
        for (platform, expected) in [(Platform::Windows, 400.0), (Platform::Linux, 480.0)] {
            let (mut scrollbar, scrollable) =
                fixture(Options::default().scrollbar_size(15.0).platform(platform));
            let mut capture = FakeCapture::default();

            scrollbar.slider_pointer_down(&mut capture, &down(5.0, 100.0));

            // 16 units along the axis, 195 off it.
            scrollbar.pointer_move(&mut capture, &moved(200.0, 116.0));
            assert_eq!(scroll_top(&scrollable), expected);

            // Coming back within the threshold resumes the drag.
            scrollbar.pointer_move(&mut capture, &moved(5.0, 116.0));
            assert_eq!(scroll_top(&scrollable), 480.0);
        }
    }

    #[test]
    fn test_drag_lifecycle_notifications() {
        let (mut scrollbar, _scrollable) = fixture(Options::default().scrollbar_size(15.0));
        let mut capture = FakeCapture::default();

        let drags = Rc::new(RefCell::new(Vec::new()));
        scrollbar
            .on_drag({
                let drags = Rc::clone(&drags);
                move |event: &DragEvent| drags.borrow_mut().push(*event)
            })
            .detach();

        scrollbar.slider_pointer_down(&mut capture, &down(5.0, 100.0));
        assert!(scrollbar.is_slider_active());

        scrollbar.pointer_up(&mut capture, &up(5.0, 110.0));
        assert!(!scrollbar.is_slider_active());
        assert_eq!(*drags.borrow(), vec![DragEvent::Started, DragEvent::Ended]);
        assert_eq!(capture.released, vec![1]);
    }

    #[test]
    fn test_buttons_mismatch_ends_drag() {
        let (mut scrollbar, _scrollable) = fixture(Options::default().scrollbar_size(15.0));
        let mut capture = FakeCapture::default();

        scrollbar.slider_pointer_down(&mut capture, &down(5.0, 100.0));

        let mut mismatch = moved(5.0, 110.0);
        mismatch.buttons = Buttons::empty();
        scrollbar.pointer_move(&mut capture, &mismatch);
        assert!(!scrollbar.is_slider_active());
    }

    #[test]
    fn test_delegate_pointer_down_dispatches_on_slider_hit() {
        let (mut scrollbar, scrollable) = fixture(Options::default().scrollbar_size(15.0));
        let mut capture = FakeCapture::default();

        // The slider spans page 1080..1120 for a track starting at 1000.
        scrollbar.delegate_pointer_down(&mut capture, &down(5.0, 1100.0), 1000.0);
        assert_eq!(scroll_top(&scrollable), 400.0); // drag, no jump
        assert!(scrollbar.is_slider_active());
        scrollbar.pointer_up(&mut capture, &up(5.0, 1100.0));

        // Off the slider, it acts like a track click at offset 150.
        scrollbar.delegate_pointer_down(&mut capture, &down(5.0, 1150.0), 1000.0);
        assert_eq!(scroll_top(&scrollable), 650.0);
    }

    #[test]
    fn test_scroll_events_render_synchronously() {
        let (mut scrollbar, scrollable) = fixture(Options::default().scrollbar_size(15.0));

        let renders = Rc::new(RefCell::new(Vec::new()));
        scrollbar
            .on_render({
                let renders = Rc::clone(&renders);
                move |render: &Render| renders.borrow_mut().push(*render)
            })
            .detach();
        scrollbar.render(); // flush the initial pending render
        renders.borrow_mut().clear();

        let events = Rc::new(RefCell::new(Vec::new()));
        let subscription = scrollable.on_scroll({
            let events = Rc::clone(&events);
            move |event: &ScrollEvent| events.borrow_mut().push(*event)
        });
        scrollable.set_scroll_position_now(NewScrollPosition::new().scroll_top(600.0));
        subscription.unsubscribe();

        for event in events.borrow().iter() {
            let _ = scrollbar.on_did_scroll(event);
        }

        assert_eq!(
            *renders.borrow(),
            vec![Render {
                track_large_size: 200.0,
                track_small_size: 15.0,
                slider_size: 40.0,
                slider_position: 120.0, // round(600 * 0.2)
            }]
        );
    }

    #[test]
    fn test_lazy_render_defers_until_flushed() {
        let (mut scrollbar, _scrollable) =
            fixture(Options::default().scrollbar_size(15.0).lazy_render(true));

        let renders = Rc::new(RefCell::new(0));
        scrollbar
            .on_render({
                let renders = Rc::clone(&renders);
                move |_: &Render| *renders.borrow_mut() += 1
            })
            .detach();

        scrollbar.set_scrollbar_size(20.0);
        assert_eq!(*renders.borrow(), 0);

        scrollbar.render();
        assert_eq!(*renders.borrow(), 1);

        // Nothing pending: a second flush is a no-op.
        scrollbar.render();
        assert_eq!(*renders.borrow(), 1);
    }

    #[test]
    fn test_scrollbar_size_report_renders() {
        let (mut scrollbar, _scrollable) = fixture(Options::default().scrollbar_size(15.0));

        let renders = Rc::new(RefCell::new(Vec::new()));
        scrollbar
            .on_render({
                let renders = Rc::clone(&renders);
                move |render: &Render| renders.borrow_mut().push(*render)
            })
            .detach();
        scrollbar.render();
        renders.borrow_mut().clear();

        scrollbar.set_scrollbar_size(20.0);
        assert_eq!(renders.borrow().len(), 1);
        assert_eq!(renders.borrow()[0].track_small_size, 20.0);
    }

    #[test]
    fn test_visibility_follows_reveal_and_need() {
        let (mut scrollbar, _scrollable) = fixture(Options::default().scrollbar_size(15.0));

        assert!(scrollbar.is_needed());
        assert!(!scrollbar.is_visible());

        scrollbar.begin_reveal();
        assert!(scrollbar.is_visible());

        scrollbar.begin_hide();
        assert!(!scrollbar.is_visible());
    }

    #[test]
    fn test_wheel_passthrough() {
        let (scrollbar, _scrollable) = fixture(Options::default().scrollbar_size(15.0));

        let deltas = Rc::new(RefCell::new(Vec::new()));
        scrollbar
            .on_wheel({
                let deltas = Rc::clone(&deltas);
                move |delta: &WheelDelta| deltas.borrow_mut().push(*delta)
            })
            .detach();

        scrollbar.wheel(WheelDelta {
            delta_x: 0.0,
            delta_y: -3.0,
        });
        assert_eq!(deltas.borrow().len(), 1);
        assert_eq!(deltas.borrow()[0].delta_y, -3.0);
    }
}
