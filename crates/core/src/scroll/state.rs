//! Immutable scroll state snapshots.

/// The dimensions of a scrollable area: the visible viewport and the full
/// content size, per axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollDimensions {
    /// The viewport width.
    pub width: f32,
    /// The content width.
    pub scroll_width: f32,
    /// The viewport height.
    pub height: f32,
    /// The content height.
    pub scroll_height: f32,
}

/// The scroll offsets of a scrollable area.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollPosition {
    /// The horizontal offset.
    pub scroll_left: f32,
    /// The vertical offset.
    pub scroll_top: f32,
}

/// A partial update to the dimensions of a scrollable area.
///
/// Fields left unset keep their current value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewScrollDimensions {
    /// The new viewport width, if any.
    pub width: Option<f32>,
    /// The new content width, if any.
    pub scroll_width: Option<f32>,
    /// The new viewport height, if any.
    pub height: Option<f32>,
    /// The new content height, if any.
    pub scroll_height: Option<f32>,
}

impl NewScrollDimensions {
    /// Creates an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the viewport width.
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the content width.
    pub fn scroll_width(mut self, scroll_width: f32) -> Self {
        self.scroll_width = Some(scroll_width);
        self
    }

    /// Sets the viewport height.
    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// Sets the content height.
    pub fn scroll_height(mut self, scroll_height: f32) -> Self {
        self.scroll_height = Some(scroll_height);
        self
    }
}

/// A partial update to the scroll offsets of a scrollable area.
///
/// Fields left unset keep their current value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewScrollPosition {
    /// The new horizontal offset, if any.
    pub scroll_left: Option<f32>,
    /// The new vertical offset, if any.
    pub scroll_top: Option<f32>,
}

impl NewScrollPosition {
    /// Creates an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the horizontal offset.
    pub fn scroll_left(mut self, scroll_left: f32) -> Self {
        self.scroll_left = Some(scroll_left);
        self
    }

    /// Sets the vertical offset.
    pub fn scroll_top(mut self, scroll_top: f32) -> Self {
        self.scroll_top = Some(scroll_top);
        self
    }
}

impl From<ScrollPosition> for NewScrollPosition {
    fn from(position: ScrollPosition) -> Self {
        Self {
            scroll_left: Some(position.scroll_left),
            scroll_top: Some(position.scroll_top),
        }
    }
}

/// An immutable snapshot of viewport size, content size, and scroll offset.
///
/// Offsets are always clamped into `[0, scroll_size - size]`; the raw,
/// pre-clamp offsets are retained so re-applying the same dimensions can
/// recover user intent instead of accumulating clamped drift.
///
/// A [`ScrollState`] is never mutated in place: every change produces a new
/// snapshot via [`ScrollState::with_scroll_dimensions`] or
/// [`ScrollState::with_scroll_position`].
#[derive(Debug, Clone)]
pub struct ScrollState {
    force_integer_values: bool,

    raw_scroll_left: f32,
    raw_scroll_top: f32,

    width: f32,
    scroll_width: f32,
    scroll_left: f32,
    height: f32,
    scroll_height: f32,
    scroll_top: f32,
}

impl ScrollState {
    /// Creates a new snapshot from raw values.
    ///
    /// If `force_integer_values`, every input is first truncated toward
    /// zero. Negative sizes are clamped to zero, and offsets are clamped
    /// into the valid range; content smaller than the viewport pins the
    /// offset at zero.
    pub fn new(
        force_integer_values: bool,
        width: f32,
        scroll_width: f32,
        scroll_left: f32,
        height: f32,
        scroll_height: f32,
        scroll_top: f32,
    ) -> Self {
        let coerce = |value: f32| {
            if force_integer_values {
                value.trunc()
            } else {
                value
            }
        };

        let mut width = coerce(width);
        let scroll_width = coerce(scroll_width);
        let mut scroll_left = coerce(scroll_left);
        let mut height = coerce(height);
        let scroll_height = coerce(scroll_height);
        let mut scroll_top = coerce(scroll_top);

        let raw_scroll_left = scroll_left;
        let raw_scroll_top = scroll_top;

        if width < 0.0 {
            width = 0.0;
        }
        if scroll_left + width > scroll_width {
            scroll_left = scroll_width - width;
        }
        if scroll_left < 0.0 {
            scroll_left = 0.0;
        }

        if height < 0.0 {
            height = 0.0;
        }
        if scroll_top + height > scroll_height {
            scroll_top = scroll_height - height;
        }
        if scroll_top < 0.0 {
            scroll_top = 0.0;
        }

        Self {
            force_integer_values,
            raw_scroll_left,
            raw_scroll_top,
            width,
            scroll_width,
            scroll_left,
            height,
            scroll_height,
            scroll_top,
        }
    }

    /// The viewport width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// The content width.
    pub fn scroll_width(&self) -> f32 {
        self.scroll_width
    }

    /// The clamped horizontal offset.
    pub fn scroll_left(&self) -> f32 {
        self.scroll_left
    }

    /// The viewport height.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// The content height.
    pub fn scroll_height(&self) -> f32 {
        self.scroll_height
    }

    /// The clamped vertical offset.
    pub fn scroll_top(&self) -> f32 {
        self.scroll_top
    }

    /// The last requested horizontal offset, before clamping.
    pub fn raw_scroll_left(&self) -> f32 {
        self.raw_scroll_left
    }

    /// The last requested vertical offset, before clamping.
    pub fn raw_scroll_top(&self) -> f32 {
        self.raw_scroll_top
    }

    /// The dimensions of this snapshot.
    pub fn dimensions(&self) -> ScrollDimensions {
        ScrollDimensions {
            width: self.width,
            scroll_width: self.scroll_width,
            height: self.height,
            scroll_height: self.scroll_height,
        }
    }

    /// The clamped offsets of this snapshot.
    pub fn position(&self) -> ScrollPosition {
        ScrollPosition {
            scroll_left: self.scroll_left,
            scroll_top: self.scroll_top,
        }
    }

    /// Returns a snapshot with the supplied dimension fields replaced.
    ///
    /// The offsets are re-derived from either the clamped or the raw prior
    /// offsets, per `use_raw_scroll_positions`. Using the raw offsets
    /// recovers the user's intent when content grows back after having
    /// shrunk.
    pub fn with_scroll_dimensions(
        &self,
        update: NewScrollDimensions,
        use_raw_scroll_positions: bool,
    ) -> Self {
        Self::new(
            self.force_integer_values,
            update.width.unwrap_or(self.width),
            update.scroll_width.unwrap_or(self.scroll_width),
            if use_raw_scroll_positions {
                self.raw_scroll_left
            } else {
                self.scroll_left
            },
            update.height.unwrap_or(self.height),
            update.scroll_height.unwrap_or(self.scroll_height),
            if use_raw_scroll_positions {
                self.raw_scroll_top
            } else {
                self.scroll_top
            },
        )
    }

    /// Returns a snapshot with the supplied offset fields replaced.
    ///
    /// Omitted offsets fall back to the raw prior offsets.
    pub fn with_scroll_position(&self, update: NewScrollPosition) -> Self {
        Self::new(
            self.force_integer_values,
            self.width,
            self.scroll_width,
            update.scroll_left.unwrap_or(self.raw_scroll_left),
            self.height,
            self.scroll_height,
            update.scroll_top.unwrap_or(self.raw_scroll_top),
        )
    }

    /// Produces the change record for a transition from `previous` to this
    /// snapshot.
    pub fn create_scroll_event(
        &self,
        previous: &ScrollState,
        in_smooth_scrolling: bool,
    ) -> ScrollEvent {
        ScrollEvent {
            in_smooth_scrolling,

            old_width: previous.width,
            old_scroll_width: previous.scroll_width,
            old_scroll_left: previous.scroll_left,

            width: self.width,
            scroll_width: self.scroll_width,
            scroll_left: self.scroll_left,

            old_height: previous.height,
            old_scroll_height: previous.scroll_height,
            old_scroll_top: previous.scroll_top,

            height: self.height,
            scroll_height: self.scroll_height,
            scroll_top: self.scroll_top,

            width_changed: self.width != previous.width,
            scroll_width_changed: self.scroll_width != previous.scroll_width,
            scroll_left_changed: self.scroll_left != previous.scroll_left,

            height_changed: self.height != previous.height,
            scroll_height_changed: self.scroll_height != previous.scroll_height,
            scroll_top_changed: self.scroll_top != previous.scroll_top,
        }
    }
}

impl PartialEq for ScrollState {
    /// Compares the eight stored numeric fields, raw offsets included.
    ///
    /// Two states built from different raw inputs that clamp to the same
    /// values are **not** equal.
    fn eq(&self, other: &Self) -> bool {
        self.raw_scroll_left == other.raw_scroll_left
            && self.raw_scroll_top == other.raw_scroll_top
            && self.width == other.width
            && self.scroll_width == other.scroll_width
            && self.scroll_left == other.scroll_left
            && self.height == other.height
            && self.scroll_height == other.scroll_height
            && self.scroll_top == other.scroll_top
    }
}

/// A change notification carrying the old and new scroll state, with a
/// changed flag per field.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollEvent {
    /// Whether the change was produced by a smooth scrolling frame.
    pub in_smooth_scrolling: bool,

    /// The previous viewport width.
    pub old_width: f32,
    /// The previous content width.
    pub old_scroll_width: f32,
    /// The previous horizontal offset.
    pub old_scroll_left: f32,

    /// The viewport width.
    pub width: f32,
    /// The content width.
    pub scroll_width: f32,
    /// The horizontal offset.
    pub scroll_left: f32,

    /// The previous viewport height.
    pub old_height: f32,
    /// The previous content height.
    pub old_scroll_height: f32,
    /// The previous vertical offset.
    pub old_scroll_top: f32,

    /// The viewport height.
    pub height: f32,
    /// The content height.
    pub scroll_height: f32,
    /// The vertical offset.
    pub scroll_top: f32,

    /// Whether the viewport width changed.
    pub width_changed: bool,
    /// Whether the content width changed.
    pub scroll_width_changed: bool,
    /// Whether the horizontal offset changed.
    pub scroll_left_changed: bool,

    /// Whether the viewport height changed.
    pub height_changed: bool,
    /// Whether the content height changed.
    pub scroll_height_changed: bool,
    /// Whether the vertical offset changed.
    pub scroll_top_changed: bool,
}
