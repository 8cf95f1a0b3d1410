use serde::{Deserialize, Serialize};

/// State of one preference control, computed fresh on every change.
/// The host adapter diffs this against its live widgets; nothing here
/// points back at toolkit objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlState {
    pub enabled: bool,
    pub visible: bool,
    pub summary: Option<String>,
}

impl ControlState {
    pub fn enabled() -> Self {
        Self::gated(true)
    }

    pub fn disabled() -> Self {
        Self::gated(false)
    }

    pub fn hidden() -> Self {
        Self {
            enabled: false,
            visible: false,
            summary: None,
        }
    }

    /// Visible control whose enablement follows a gate.
    pub fn gated(enabled: bool) -> Self {
        Self {
            enabled,
            visible: true,
            summary: None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

/// Per-control state of the pulse settings screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PulseView {
    pub navbar_pulse: ControlState,
    pub lockscreen_pulse: ControlState,
    pub smoothing: ControlState,
    pub color_mode: ControlState,
    pub color_picker: ControlState,
    pub lava_speed: ControlState,
    pub render_style: ControlState,
    pub fading_bars: ControlState,
    pub solid_bars: ControlState,
}

/// Per-control state of the navigation bar screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationView {
    pub navbar_visibility: ControlState,
    pub navbar_layout: ControlState,
    pub pulse_category: ControlState,
}

/// Per-control state of the about screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutView {
    pub maintainer: ControlState,
    pub kernel: ControlState,
}
