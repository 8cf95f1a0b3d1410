use std::time::Instant;

use settings::{SettingKey, SettingValue, SettingsError, SettingsStore, Snapshot};

use crate::cooldown::NavSwitchGuard;
use crate::gate;
use crate::navigation::{self, NavigationConfig};
use crate::view::{NavigationView, PulseView};

/// A value to persist in the settings store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreWrite {
    pub key: SettingKey,
    pub value: SettingValue,
}

/// Which screen view a change invalidated, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewUpdate {
    Pulse(PulseView),
    Navigation(NavigationView),
    /// No widget changes state (user-color writes, debounced switches).
    None,
}

/// Result of one user-initiated change: at most one store write plus
/// the recomputed view for the host adapter to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeOutcome {
    pub write: Option<StoreWrite>,
    pub update: ViewUpdate,
}

impl ChangeOutcome {
    fn rejected() -> Self {
        Self {
            write: None,
            update: ViewUpdate::None,
        }
    }
}

/// Change handler for the whole surface.
///
/// Owns the per-screen-instance state (the navbar switch guard) and
/// the host's build-time navigation config; everything else is a pure
/// function of the snapshot passed in. The host event loop calls
/// [`apply_change`](Self::apply_change) once per user interaction,
/// persists the returned write, and applies the returned view.
#[derive(Debug, Default)]
pub struct SettingsGate {
    guard: NavSwitchGuard,
    nav_config: NavigationConfig,
}

impl SettingsGate {
    pub fn new(nav_config: NavigationConfig) -> Self {
        Self {
            guard: NavSwitchGuard::new(),
            nav_config,
        }
    }

    pub fn nav_config(&self) -> &NavigationConfig {
        &self.nav_config
    }

    /// Recompute the pulse screen view without changing anything.
    pub fn project(&self, snap: &Snapshot) -> PulseView {
        gate::project(snap)
    }

    /// Recompute the navigation screen view for the current visibility.
    pub fn project_navigation(&self, navbar_showing: bool) -> NavigationView {
        navigation::project_navigation(&self.nav_config, navbar_showing)
    }

    /// Handle one user-initiated change.
    ///
    /// Values are type checked against the key; a mismatch leaves
    /// state untouched. Navbar visibility switches inside the cooldown
    /// window are dropped wholesale (no write, no view change).
    pub fn apply_change(
        &mut self,
        now: Instant,
        snap: &Snapshot,
        key: SettingKey,
        value: SettingValue,
    ) -> Result<ChangeOutcome, SettingsError> {
        SettingsError::check_kind(key, value.kind())?;

        let outcome = match key {
            SettingKey::NavbarForceShow => {
                if !self.guard.try_arm(now) {
                    tracing::debug!("navbar switch dropped inside cooldown window");
                    return Ok(ChangeOutcome::rejected());
                }
                let showing = value.as_bool().unwrap_or(false);
                ChangeOutcome {
                    write: Some(StoreWrite { key, value }),
                    update: ViewUpdate::Navigation(self.project_navigation(showing)),
                }
            }
            SettingKey::NavbarPulseEnabled
            | SettingKey::LockscreenPulseEnabled
            | SettingKey::PulseColorMode
            | SettingKey::PulseRenderStyle => {
                // Project against the snapshot as it will be after the
                // write lands, so the view never lags one event behind.
                let next = apply_to_snapshot(*snap, key, value);
                ChangeOutcome {
                    write: Some(StoreWrite { key, value }),
                    update: ViewUpdate::Pulse(gate::project(&next)),
                }
            }
            SettingKey::PulseColorUser => ChangeOutcome {
                write: Some(StoreWrite { key, value }),
                update: ViewUpdate::None,
            },
        };

        if let Some(write) = &outcome.write {
            tracing::debug!(key = write.key.name(), "change accepted");
        }
        Ok(outcome)
    }

    /// [`apply_change`](Self::apply_change) with the key still in its
    /// store-name form, as toolkit callbacks deliver it. Unrecognized
    /// names fail with [`SettingsError::UnknownKey`].
    pub fn apply_named_change(
        &mut self,
        now: Instant,
        snap: &Snapshot,
        name: &str,
        value: SettingValue,
    ) -> Result<ChangeOutcome, SettingsError> {
        let key = SettingKey::parse(name)?;
        self.apply_change(now, snap, key, value)
    }

    /// Screen teardown: clear the cooldown so no window outlives the
    /// screen instance.
    pub fn teardown(&mut self) {
        self.guard.cancel();
    }
}

fn apply_to_snapshot(mut snap: Snapshot, key: SettingKey, value: SettingValue) -> Snapshot {
    match (key, value) {
        (SettingKey::NavbarForceShow, SettingValue::Bool(v)) => snap.navbar_force_show = v,
        (SettingKey::NavbarPulseEnabled, SettingValue::Bool(v)) => snap.navbar_pulse = v,
        (SettingKey::LockscreenPulseEnabled, SettingValue::Bool(v)) => snap.lockscreen_pulse = v,
        (SettingKey::PulseColorMode, SettingValue::ColorMode(mode)) => snap.color_mode = mode,
        (SettingKey::PulseColorUser, SettingValue::Color(rgb)) => snap.color_user = rgb,
        (SettingKey::PulseRenderStyle, SettingValue::RenderStyle(style)) => {
            snap.render_style = style
        }
        // apply_change type checks before calling in here.
        _ => {}
    }
    snap
}

/// Persist an outcome's write, if it carries one.
pub fn commit(store: &SettingsStore, outcome: &ChangeOutcome) -> Result<(), SettingsError> {
    if let Some(write) = &outcome.write {
        store.put(write.key, write.value)?;
    }
    Ok(())
}
