use settings::{ColorMode, RenderStyle, Snapshot};

use crate::view::{ControlState, PulseView};

/// Project the pulse screen's control state from the current settings.
///
/// Pure and total: every snapshot maps to exactly one view. The two
/// master switches are always available; everything else is gated on
/// pulse being active on at least one surface, then on the color mode
/// and render style.
pub fn project(snap: &Snapshot) -> PulseView {
    let pulse_active = snap.navbar_pulse || snap.lockscreen_pulse;

    let (color_picker, lava_speed) = if pulse_active {
        color_controls(snap.color_mode)
    } else {
        (ControlState::disabled(), ControlState::disabled())
    };

    let (fading_bars, solid_bars) = if pulse_active {
        render_categories(snap.render_style)
    } else {
        (ControlState::disabled(), ControlState::disabled())
    };

    PulseView {
        navbar_pulse: ControlState::enabled(),
        lockscreen_pulse: ControlState::enabled(),
        smoothing: ControlState::gated(pulse_active),
        color_mode: ControlState::gated(pulse_active),
        color_picker,
        lava_speed,
        render_style: ControlState::gated(pulse_active),
        fading_bars,
        solid_bars,
    }
}

/// Color picker and lavalamp speed, gated on the color mode.
pub(crate) fn color_controls(mode: ColorMode) -> (ControlState, ControlState) {
    match mode {
        ColorMode::User => (ControlState::enabled(), ControlState::disabled()),
        ColorMode::Lavalamp => (ControlState::disabled(), ControlState::enabled()),
        ColorMode::Accent | ColorMode::Auto => {
            (ControlState::disabled(), ControlState::disabled())
        }
    }
}

/// Fading-bars and solid-lines categories, gated on the render style.
pub(crate) fn render_categories(style: RenderStyle) -> (ControlState, ControlState) {
    (
        ControlState::gated(style == RenderStyle::FadingBars),
        ControlState::gated(style == RenderStyle::SolidLines),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_snapshot() -> Snapshot {
        Snapshot {
            navbar_pulse: true,
            ..Snapshot::default()
        }
    }

    #[test]
    fn accent_and_auto_disable_both_color_controls() {
        for mode in [ColorMode::Accent, ColorMode::Auto] {
            let view = project(&Snapshot {
                color_mode: mode,
                ..active_snapshot()
            });
            assert!(!view.color_picker.enabled, "{mode}");
            assert!(!view.lava_speed.enabled, "{mode}");
        }
    }

    #[test]
    fn user_mode_enables_exactly_the_color_picker() {
        let view = project(&Snapshot {
            color_mode: ColorMode::User,
            ..active_snapshot()
        });
        assert!(view.color_picker.enabled);
        assert!(!view.lava_speed.enabled);
    }

    #[test]
    fn lavalamp_mode_enables_exactly_the_speed_control() {
        let view = project(&Snapshot {
            color_mode: ColorMode::Lavalamp,
            ..active_snapshot()
        });
        assert!(!view.color_picker.enabled);
        assert!(view.lava_speed.enabled);
    }

    #[test]
    fn everything_gated_is_disabled_while_pulse_is_off() {
        let view = project(&Snapshot::default());
        assert!(!view.smoothing.enabled);
        assert!(!view.color_mode.enabled);
        assert!(!view.color_picker.enabled);
        assert!(!view.lava_speed.enabled);
        assert!(!view.render_style.enabled);
        assert!(!view.fading_bars.enabled);
        assert!(!view.solid_bars.enabled);
        // The master switches stay usable.
        assert!(view.navbar_pulse.enabled);
        assert!(view.lockscreen_pulse.enabled);
    }

    #[test]
    fn either_surface_activates_the_gates() {
        for snap in [
            Snapshot {
                navbar_pulse: true,
                ..Snapshot::default()
            },
            Snapshot {
                lockscreen_pulse: true,
                ..Snapshot::default()
            },
        ] {
            let view = project(&snap);
            assert!(view.smoothing.enabled);
            assert!(view.color_mode.enabled);
            assert!(view.render_style.enabled);
        }
    }

    #[test]
    fn render_style_selects_one_category() {
        let view = project(&Snapshot {
            navbar_pulse: true,
            render_style: RenderStyle::FadingBars,
            ..Snapshot::default()
        });
        assert!(view.fading_bars.enabled);
        assert!(!view.solid_bars.enabled);

        let view = project(&Snapshot {
            navbar_pulse: true,
            render_style: RenderStyle::SolidLines,
            ..Snapshot::default()
        });
        assert!(!view.fading_bars.enabled);
        assert!(view.solid_bars.enabled);
    }

    #[test]
    fn projection_is_deterministic() {
        let snap = Snapshot {
            navbar_pulse: true,
            color_mode: ColorMode::User,
            ..Snapshot::default()
        };
        assert_eq!(project(&snap), project(&snap));
    }
}
