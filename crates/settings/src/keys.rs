use std::str::FromStr;

use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::SettingsError;
use crate::values::ValueKind;

/// The settings this surface reads and writes. The serialized names are
/// the stable store key names and must not change.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString, EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum SettingKey {
    /// Force-show the navigation bar even when the device would hide it.
    #[strum(serialize = "force_show_navbar")]
    NavbarForceShow,
    NavbarPulseEnabled,
    LockscreenPulseEnabled,
    PulseColorMode,
    /// User-chosen pulse color; meaningful only while the color mode is `User`.
    PulseColorUser,
    PulseRenderStyle,
}

impl SettingKey {
    /// Stable store name of this key.
    pub fn name(&self) -> &'static str {
        match self {
            SettingKey::NavbarForceShow => "force_show_navbar",
            SettingKey::NavbarPulseEnabled => "navbar_pulse_enabled",
            SettingKey::LockscreenPulseEnabled => "lockscreen_pulse_enabled",
            SettingKey::PulseColorMode => "pulse_color_mode",
            SettingKey::PulseColorUser => "pulse_color_user",
            SettingKey::PulseRenderStyle => "pulse_render_style",
        }
    }

    /// The value shape this key accepts.
    pub fn kind(&self) -> ValueKind {
        match self {
            SettingKey::NavbarForceShow
            | SettingKey::NavbarPulseEnabled
            | SettingKey::LockscreenPulseEnabled => ValueKind::Bool,
            SettingKey::PulseColorMode => ValueKind::ColorMode,
            SettingKey::PulseColorUser => ValueKind::Color,
            SettingKey::PulseRenderStyle => ValueKind::RenderStyle,
        }
    }

    /// Resolve a store name back to a key. Unrecognized names are the
    /// `UnknownKey` error condition.
    pub fn parse(name: &str) -> Result<Self, SettingsError> {
        Self::from_str(name).map_err(|_| SettingsError::UnknownKey(name.to_string()))
    }
}
