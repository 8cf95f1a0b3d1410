use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, FromRepr};

use crate::SettingKey;

/// Source of the pulse visualizer color. Wire encoding is the ordinal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, FromRepr,
)]
#[repr(i64)]
pub enum ColorMode {
    Accent = 0,
    User = 1,
    Lavalamp = 2,
    Auto = 3,
}

impl ColorMode {
    /// Decode a stored ordinal. Out-of-range ordinals take the `Accent`
    /// branch, the catch-all of the gating switch.
    pub fn from_wire(raw: i64) -> Self {
        Self::from_repr(raw).unwrap_or(ColorMode::Accent)
    }
}

/// Pulse rendering mode. Wire encoding is the ordinal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, FromRepr,
)]
#[repr(i64)]
pub enum RenderStyle {
    FadingBars = 0,
    SolidLines = 1,
}

impl RenderStyle {
    /// Decode a stored ordinal, falling back to the store default.
    pub fn from_wire(raw: i64) -> Self {
        Self::from_repr(raw).unwrap_or(RenderStyle::SolidLines)
    }
}

/// 24-bit color, stored packed as 0xRRGGBB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn from_wire(raw: i64) -> Self {
        let raw = (raw as u32) & 0x00ff_ffff;
        Self {
            r: (raw >> 16) as u8,
            g: (raw >> 8) as u8,
            b: raw as u8,
        }
    }

    pub fn to_wire(self) -> i64 {
        ((self.r as i64) << 16) | ((self.g as i64) << 8) | self.b as i64
    }
}

/// Shape of a setting value, used for per-key type checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ValueKind {
    Bool,
    ColorMode,
    RenderStyle,
    Color,
}

/// A typed setting value with a flat integer wire encoding: booleans as
/// 0/1, enums as their ordinal, colors packed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingValue {
    Bool(bool),
    ColorMode(ColorMode),
    RenderStyle(RenderStyle),
    Color(Rgb),
}

impl SettingValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            SettingValue::Bool(_) => ValueKind::Bool,
            SettingValue::ColorMode(_) => ValueKind::ColorMode,
            SettingValue::RenderStyle(_) => ValueKind::RenderStyle,
            SettingValue::Color(_) => ValueKind::Color,
        }
    }

    pub fn encode(&self) -> i64 {
        match self {
            SettingValue::Bool(v) => *v as i64,
            SettingValue::ColorMode(mode) => *mode as i64,
            SettingValue::RenderStyle(style) => *style as i64,
            SettingValue::Color(rgb) => rgb.to_wire(),
        }
    }

    /// Decode a raw stored integer into the value shape `key` declares.
    pub fn decode(key: SettingKey, raw: i64) -> Self {
        match key.kind() {
            ValueKind::Bool => SettingValue::Bool(raw != 0),
            ValueKind::ColorMode => SettingValue::ColorMode(ColorMode::from_wire(raw)),
            ValueKind::RenderStyle => SettingValue::RenderStyle(RenderStyle::from_wire(raw)),
            ValueKind::Color => SettingValue::Color(Rgb::from_wire(raw)),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_color_mode(&self) -> Option<ColorMode> {
        match self {
            SettingValue::ColorMode(mode) => Some(*mode),
            _ => None,
        }
    }

    pub fn as_render_style(&self) -> Option<RenderStyle> {
        match self {
            SettingValue::RenderStyle(style) => Some(*style),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Rgb> {
        match self {
            SettingValue::Color(rgb) => Some(*rgb),
            _ => None,
        }
    }
}
