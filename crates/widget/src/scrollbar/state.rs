//! Pure scrollbar slider geometry.

/// The smallest slider size.
///
/// The slider is artificially enlarged to this size when the proportional
/// size would be smaller, so it stays graspable with a pointer.
pub const MINIMUM_SLIDER_SIZE: f32 = 20.0;

/// Derives slider geometry from scrollbar and viewport metrics.
///
/// For a vertical scrollbar the "size" axis is the height and the
/// "position" axis is the scroll top; for a horizontal one, width and
/// scroll left. All inputs are kept rounded to whole units.
///
/// Ratio math is gated behind [`ScrollbarState::is_needed`], which also
/// rules out the `scroll_size == visible_size` division by zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollbarState {
    /// For the vertical scrollbar: the height of the arrows.
    /// For the horizontal scrollbar: the width of the arrows.
    arrow_size: f32,

    /// For the vertical scrollbar: the width.
    /// For the horizontal scrollbar: the height.
    scrollbar_size: f32,

    /// For the vertical scrollbar: the height of the paired horizontal
    /// scrollbar. For the horizontal scrollbar: the width of the paired
    /// vertical scrollbar.
    opposite_scrollbar_size: f32,

    /// For the vertical scrollbar: the viewport height.
    /// For the horizontal scrollbar: the viewport width.
    visible_size: f32,

    /// For the vertical scrollbar: the content height.
    /// For the horizontal scrollbar: the content width.
    scroll_size: f32,

    /// For the vertical scrollbar: the scroll top.
    /// For the horizontal scrollbar: the scroll left.
    scroll_position: f32,

    computed: Computed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Computed {
    available_size: f32,
    is_needed: bool,
    slider_size: f32,
    slider_ratio: f32,
    slider_position: f32,
}

impl ScrollbarState {
    /// Creates a state with zero viewport, content, and position.
    pub fn new(arrow_size: f32, scrollbar_size: f32, opposite_scrollbar_size: f32) -> Self {
        let mut state = Self {
            arrow_size: arrow_size.round(),
            scrollbar_size: scrollbar_size.round(),
            opposite_scrollbar_size: opposite_scrollbar_size.round(),
            visible_size: 0.0,
            scroll_size: 0.0,
            scroll_position: 0.0,
            computed: Computed {
                available_size: 0.0,
                is_needed: false,
                slider_size: 0.0,
                slider_ratio: 0.0,
                slider_position: 0.0,
            },
        };
        state.refresh();
        state
    }

    /// Replaces the viewport size. Returns whether the value changed.
    pub fn set_visible_size(&mut self, visible_size: f32) -> bool {
        let visible_size = visible_size.round();
        if self.visible_size == visible_size {
            return false;
        }

        self.visible_size = visible_size;
        self.refresh();
        true
    }

    /// Replaces the content size. Returns whether the value changed.
    pub fn set_scroll_size(&mut self, scroll_size: f32) -> bool {
        let scroll_size = scroll_size.round();
        if self.scroll_size == scroll_size {
            return false;
        }

        self.scroll_size = scroll_size;
        self.refresh();
        true
    }

    /// Replaces the scroll position. Returns whether the value changed.
    pub fn set_scroll_position(&mut self, scroll_position: f32) -> bool {
        let scroll_position = scroll_position.round();
        if self.scroll_position == scroll_position {
            return false;
        }

        self.scroll_position = scroll_position;
        self.refresh();
        true
    }

    /// Replaces the scrollbar thickness. Returns whether the value changed.
    pub fn set_scrollbar_size(&mut self, scrollbar_size: f32) -> bool {
        let scrollbar_size = scrollbar_size.round();
        if self.scrollbar_size == scrollbar_size {
            return false;
        }

        self.scrollbar_size = scrollbar_size;
        self.refresh();
        true
    }

    fn refresh(&mut self) {
        let available_size = (self.visible_size - self.opposite_scrollbar_size).max(0.0);
        let representable_size = (available_size - 2.0 * self.arrow_size).max(0.0);
        let is_needed = self.scroll_size > 0.0 && self.scroll_size > self.visible_size;

        if !is_needed {
            self.computed = Computed {
                available_size: available_size.round(),
                is_needed,
                slider_size: representable_size.round(),
                slider_ratio: 0.0,
                slider_position: 0.0,
            };
            return;
        }

        let slider_size = MINIMUM_SLIDER_SIZE
            .max((self.visible_size * representable_size / self.scroll_size).floor())
            .round();

        // The slider moves over `representable_size - slider_size` the same
        // way the scroll position moves over `scroll_size - visible_size`.
        let slider_ratio =
            (representable_size - slider_size) / (self.scroll_size - self.visible_size);

        self.computed = Computed {
            available_size: available_size.round(),
            is_needed,
            slider_size,
            slider_ratio,
            slider_position: (self.scroll_position * slider_ratio).round(),
        };
    }

    /// The arrow size.
    pub fn arrow_size(&self) -> f32 {
        self.arrow_size
    }

    /// The scrollbar thickness.
    pub fn scrollbar_size(&self) -> f32 {
        self.scrollbar_size
    }

    /// The viewport size along this scrollbar's axis.
    pub fn visible_size(&self) -> f32 {
        self.visible_size
    }

    /// The content size along this scrollbar's axis.
    pub fn scroll_size(&self) -> f32 {
        self.scroll_size
    }

    /// The scroll position along this scrollbar's axis.
    pub fn scroll_position(&self) -> f32 {
        self.scroll_position
    }

    /// Whether the content exceeds the viewport.
    pub fn is_needed(&self) -> bool {
        self.computed.is_needed
    }

    /// The track length left after subtracting the perpendicular
    /// scrollbar's footprint.
    pub fn available_track_size(&self) -> f32 {
        self.computed.available_size
    }

    /// The slider length.
    pub fn slider_size(&self) -> f32 {
        self.computed.slider_size
    }

    /// The slider offset within the track, past the leading arrow.
    pub fn slider_position(&self) -> f32 {
        self.computed.slider_position
    }

    /// Computes the scroll position that centers the slider on `offset`.
    ///
    /// `offset` is in the same coordinate system as the slider position.
    /// Returns 0 when the scrollbar is not needed.
    pub fn desired_scroll_position_from_offset(&self, offset: f32) -> f32 {
        if !self.computed.is_needed {
            return 0.0;
        }

        let desired_slider_position = offset - self.arrow_size - self.computed.slider_size / 2.0;
        (desired_slider_position / self.computed.slider_ratio).round()
    }

    /// Computes the scroll position one page up or down from the current
    /// one, depending on whether `offset` falls before or after the slider.
    ///
    /// A "page" is one viewport. Returns 0 when the scrollbar is not
    /// needed.
    pub fn desired_scroll_position_from_offset_paged(&self, offset: f32) -> f32 {
        if !self.computed.is_needed {
            return 0.0;
        }

        let corrected_offset = offset - self.arrow_size;

        if corrected_offset < self.computed.slider_position {
            self.scroll_position - self.visible_size
        } else {
            self.scroll_position + self.visible_size
        }
    }

    /// Computes the scroll position that moves the slider by `delta`.
    ///
    /// Returns 0 when the scrollbar is not needed.
    pub fn desired_scroll_position_from_delta(&self, delta: f32) -> f32 {
        if !self.computed.is_needed {
            return 0.0;
        }

        let desired_slider_position = self.computed.slider_position + delta;
        (desired_slider_position / self.computed.slider_ratio).round()
    }
}
