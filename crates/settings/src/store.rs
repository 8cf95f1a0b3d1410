use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::{ColorMode, RenderStyle, Rgb, SettingKey, SettingValue, SettingsError};

/// Builder for `SettingsStore` (single delta file).
pub struct SettingsStoreBuilder {
    settings_file: Option<PathBuf>,
}

impl SettingsStoreBuilder {
    pub fn new() -> Self {
        Self {
            settings_file: None,
        }
    }

    pub fn with_settings_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.settings_file = Some(path.into());
        self
    }

    pub fn build(self) -> Result<SettingsStore, SettingsError> {
        let file_path = self
            .settings_file
            .ok_or(SettingsError::Invalid("settings file not specified"))?;

        if let Some(dir) = file_path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let deltas = read_delta_file(&file_path)?;

        Ok(SettingsStore {
            file_path,
            deltas: RwLock::new(deltas),
            defaults: RwLock::new(HashMap::new()),
        })
    }
}

impl Default for SettingsStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn read_delta_file(path: &Path) -> Result<HashMap<String, i64>, SettingsError> {
    if !path.exists() {
        return Ok(HashMap::new());
    }
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(HashMap::new());
    }
    ron::from_str(&content).map_err(|_| SettingsError::Invalid("parse settings file"))
}

/// Flat key/value settings store.
///
/// Each key has a registered default; only values that differ from
/// their default (deltas) are persisted, as a RON map keyed by the
/// stable store names. Writes go through the per-key type check and
/// are flushed atomically (tmp file + rename).
pub struct SettingsStore {
    file_path: PathBuf,
    deltas: RwLock<HashMap<String, i64>>,
    defaults: RwLock<HashMap<SettingKey, i64>>,
}

impl SettingsStore {
    pub fn builder() -> SettingsStoreBuilder {
        SettingsStoreBuilder::new()
    }

    pub fn file_path(&self) -> &PathBuf {
        &self.file_path
    }

    pub fn is_registered(&self, key: SettingKey) -> bool {
        self.defaults.read().unwrap().contains_key(&key)
    }

    /// Register a key with its default value. First-boot defaults come
    /// from the host; registering twice is a caller bug.
    pub fn register(&self, key: SettingKey, default: SettingValue) -> Result<(), SettingsError> {
        SettingsError::check_kind(key, default.kind())?;
        let mut defaults = self.defaults.write().unwrap();
        if defaults.contains_key(&key) {
            return Err(SettingsError::Invalid("key already registered"));
        }
        defaults.insert(key, default.encode());
        Ok(())
    }

    /// Current value: delta if one was written, else the default.
    pub fn get(&self, key: SettingKey) -> Result<SettingValue, SettingsError> {
        let default = *self
            .defaults
            .read()
            .unwrap()
            .get(&key)
            .ok_or(SettingsError::NotRegistered(key))?;
        let raw = self
            .deltas
            .read()
            .unwrap()
            .get(key.name())
            .copied()
            .unwrap_or(default);
        Ok(SettingValue::decode(key, raw))
    }

    /// Type check, record, and persist a value. A value equal to the
    /// key's default removes the delta instead of storing it.
    pub fn put(&self, key: SettingKey, value: SettingValue) -> Result<(), SettingsError> {
        SettingsError::check_kind(key, value.kind())?;
        let default = *self
            .defaults
            .read()
            .unwrap()
            .get(&key)
            .ok_or(SettingsError::NotRegistered(key))?;

        let raw = value.encode();
        {
            let mut deltas = self.deltas.write().unwrap();
            if raw == default {
                deltas.remove(key.name());
            } else {
                deltas.insert(key.name().to_string(), raw);
            }
        }
        tracing::debug!(key = key.name(), value = raw, "setting written");
        self.persist_deltas()
    }

    /// Re-read the delta file, picking up external modifications.
    pub fn reload(&self) -> Result<(), SettingsError> {
        let new_deltas = read_delta_file(&self.file_path)?;
        *self.deltas.write().unwrap() = new_deltas;
        Ok(())
    }

    /// Drop delta entries whose name no longer parses to a known key.
    /// Returns the number of entries removed (after persisting).
    pub fn prune_stale(&self) -> Result<usize, SettingsError> {
        let removed = {
            let mut deltas = self.deltas.write().unwrap();
            let before = deltas.len();
            deltas.retain(|name, _| SettingKey::parse(name).is_ok());
            before - deltas.len()
        };
        if removed > 0 {
            tracing::debug!(removed, "pruned stale settings");
            self.persist_deltas()?;
        }
        Ok(removed)
    }

    /// Typed snapshot of every gating-relevant setting; the input of
    /// view projection. Requires all keys to be registered.
    pub fn snapshot(&self) -> Result<Snapshot, SettingsError> {
        Ok(Snapshot {
            navbar_force_show: self
                .get(SettingKey::NavbarForceShow)?
                .as_bool()
                .ok_or(SettingsError::Invalid("navbar visibility not a bool"))?,
            navbar_pulse: self
                .get(SettingKey::NavbarPulseEnabled)?
                .as_bool()
                .ok_or(SettingsError::Invalid("navbar pulse not a bool"))?,
            lockscreen_pulse: self
                .get(SettingKey::LockscreenPulseEnabled)?
                .as_bool()
                .ok_or(SettingsError::Invalid("lockscreen pulse not a bool"))?,
            color_mode: self
                .get(SettingKey::PulseColorMode)?
                .as_color_mode()
                .ok_or(SettingsError::Invalid("color mode not a mode"))?,
            color_user: self
                .get(SettingKey::PulseColorUser)?
                .as_color()
                .ok_or(SettingsError::Invalid("user color not a color"))?,
            render_style: self
                .get(SettingKey::PulseRenderStyle)?
                .as_render_style()
                .ok_or(SettingsError::Invalid("render style not a style"))?,
        })
    }

    fn persist_deltas(&self) -> Result<(), SettingsError> {
        let deltas = self.deltas.read().unwrap();

        let pretty = ron::ser::PrettyConfig::default();
        let ron_string = ron::ser::to_string_pretty(&*deltas, pretty)?;

        let tmp = self.file_path.with_extension("tmp");
        fs::write(&tmp, ron_string)?;
        fs::rename(&tmp, &self.file_path)?;
        Ok(())
    }
}

/// Point-in-time values of all gating-relevant settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub navbar_force_show: bool,
    pub navbar_pulse: bool,
    pub lockscreen_pulse: bool,
    pub color_mode: ColorMode,
    pub color_user: Rgb,
    pub render_style: RenderStyle,
}

impl Default for Snapshot {
    /// First-boot defaults: pulse off everywhere, accent color,
    /// solid lines.
    fn default() -> Self {
        Self {
            navbar_force_show: false,
            navbar_pulse: false,
            lockscreen_pulse: false,
            color_mode: ColorMode::Accent,
            color_user: Rgb::new(0x80, 0x80, 0x80),
            render_style: RenderStyle::SolidLines,
        }
    }
}
