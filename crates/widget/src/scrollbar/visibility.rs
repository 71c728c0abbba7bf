//! Scrollbar visibility policy.

/// When a scrollbar should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    /// Shown while the host signals activity and the content overflows.
    #[default]
    Auto,
    /// Never shown.
    Hidden,
    /// Always shown.
    Visible,
}

/// Combines the [`Visibility`] policy with overflow and host reveal intent
/// into a single visible-or-not answer.
#[derive(Debug, Clone)]
pub struct VisibilityController {
    visibility: Visibility,
    is_needed: bool,
    should_be_visible: bool,
}

impl VisibilityController {
    /// Creates a controller for the given policy, initially hidden.
    pub fn new(visibility: Visibility) -> Self {
        Self {
            visibility,
            is_needed: false,
            should_be_visible: false,
        }
    }

    /// Reports whether the content currently overflows the viewport.
    pub fn set_is_needed(&mut self, is_needed: bool) {
        self.is_needed = is_needed;
    }

    /// Sets the host's reveal intent, e.g. the pointer hovering the pane.
    pub fn set_should_be_visible(&mut self, should_be_visible: bool) {
        self.should_be_visible = should_be_visible;
    }

    /// Whether the scrollbar should be painted right now.
    pub fn is_visible(&self) -> bool {
        match self.visibility {
            Visibility::Hidden => false,
            Visibility::Visible => true,
            Visibility::Auto => self.should_be_visible && self.is_needed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_never_visible() {
        let mut controller = VisibilityController::new(Visibility::Hidden);
        controller.set_is_needed(true);
        controller.set_should_be_visible(true);
        assert!(!controller.is_visible());
    }

    #[test]
    fn test_visible_always_visible() {
        let controller = VisibilityController::new(Visibility::Visible);
        assert!(controller.is_visible());
    }

    #[test]
    fn test_auto_follows_intent_gated_by_need() {
        let mut controller = VisibilityController::new(Visibility::Auto);
        assert!(!controller.is_visible());

        controller.set_should_be_visible(true);
        assert!(!controller.is_visible()); // nothing to scroll yet

        controller.set_is_needed(true);
        assert!(controller.is_visible());

        controller.set_should_be_visible(false);
        assert!(!controller.is_visible());
    }
}
