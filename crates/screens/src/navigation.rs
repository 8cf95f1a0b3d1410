use crate::view::{ControlState, NavigationView};

/// Summary shown on the pulse category while the navbar is visible.
pub(crate) const PULSE_SUMMARY: &str = "Music visualizer for the navigation bar and lock screen";
/// Summary shown while the navbar is hidden and pulse cannot render there.
pub(crate) const PULSE_UNAVAILABLE_SUMMARY: &str =
    "Unavailable while the navigation bar is hidden";
/// Summary on the layout picker while gesture navigation manages it.
pub(crate) const GESTURE_NAV_SUMMARY: &str = "Layout is managed by gesture navigation";

/// Build-time traits of the host the navigation screen depends on.
#[derive(Debug, Clone, Copy)]
pub struct NavigationConfig {
    /// Whether this device ships with a navbar (seeds the visibility default).
    pub has_navbar_by_default: bool,
    /// Gesture navigation disables the layout picker.
    pub gestural_navigation: bool,
    /// Builds without the pulse feature hide the category entirely.
    pub pulse_available: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            has_navbar_by_default: true,
            gestural_navigation: false,
            pulse_available: true,
        }
    }
}

/// Project the navigation screen's control state.
///
/// The pulse category follows the navbar visibility value only; the
/// pulse screen's own gating never feeds back into this view.
pub fn project_navigation(config: &NavigationConfig, navbar_showing: bool) -> NavigationView {
    let navbar_layout = if config.gestural_navigation {
        ControlState::disabled().with_summary(GESTURE_NAV_SUMMARY)
    } else {
        ControlState::enabled()
    };

    let pulse_category = if !config.pulse_available {
        ControlState::hidden()
    } else if navbar_showing {
        ControlState::enabled().with_summary(PULSE_SUMMARY)
    } else {
        ControlState::disabled().with_summary(PULSE_UNAVAILABLE_SUMMARY)
    };

    NavigationView {
        navbar_visibility: ControlState::enabled(),
        navbar_layout,
        pulse_category,
    }
}
