//! End-to-end flow over a real store: toolkit event -> apply_change ->
//! commit -> snapshot -> project, the loop the host adapter runs.

use std::time::{Duration, Instant};

use screens::{commit, NavigationConfig, SettingsGate, ViewUpdate};
use settings::{
    ColorMode, RenderStyle, Rgb, SettingKey, SettingValue, SettingsStore,
};
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> SettingsStore {
    let store = SettingsStore::builder()
        .with_settings_file(dir.path().join("settings.ron"))
        .build()
        .unwrap();
    store
        .register(SettingKey::NavbarForceShow, SettingValue::Bool(true))
        .unwrap();
    store
        .register(SettingKey::NavbarPulseEnabled, SettingValue::Bool(false))
        .unwrap();
    store
        .register(SettingKey::LockscreenPulseEnabled, SettingValue::Bool(false))
        .unwrap();
    store
        .register(
            SettingKey::PulseColorMode,
            SettingValue::ColorMode(ColorMode::Accent),
        )
        .unwrap();
    store
        .register(
            SettingKey::PulseColorUser,
            SettingValue::Color(Rgb::new(0x80, 0x80, 0x80)),
        )
        .unwrap();
    store
        .register(
            SettingKey::PulseRenderStyle,
            SettingValue::RenderStyle(RenderStyle::SolidLines),
        )
        .unwrap();
    store
}

#[test]
fn change_commit_reproject_loop() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let mut gate = SettingsGate::new(NavigationConfig::default());

    let snap = store.snapshot().unwrap();
    let outcome = gate
        .apply_change(
            Instant::now(),
            &snap,
            SettingKey::NavbarPulseEnabled,
            SettingValue::Bool(true),
        )
        .unwrap();
    commit(&store, &outcome).unwrap();

    // The view handed back equals a fresh projection of the store.
    let reprojected = gate.project(&store.snapshot().unwrap());
    assert_eq!(outcome.update, ViewUpdate::Pulse(reprojected));
}

#[test]
fn color_mode_survives_screen_reentry() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let mut gate = SettingsGate::new(NavigationConfig::default());

    store
        .put(SettingKey::NavbarPulseEnabled, SettingValue::Bool(true))
        .unwrap();
    let snap = store.snapshot().unwrap();
    let outcome = gate
        .apply_change(
            Instant::now(),
            &snap,
            SettingKey::PulseColorMode,
            SettingValue::ColorMode(ColorMode::User),
        )
        .unwrap();
    commit(&store, &outcome).unwrap();
    gate.teardown();

    // A new screen instance over the same store sees the mode.
    let gate = SettingsGate::new(NavigationConfig::default());
    let view = gate.project(&store.snapshot().unwrap());
    assert!(view.color_picker.enabled);
    assert!(!view.lava_speed.enabled);
}

#[test]
fn debounced_switch_writes_nothing_to_the_store() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let mut gate = SettingsGate::new(NavigationConfig::default());
    let t0 = Instant::now();

    let snap = store.snapshot().unwrap();
    let first = gate
        .apply_change(
            t0,
            &snap,
            SettingKey::NavbarForceShow,
            SettingValue::Bool(false),
        )
        .unwrap();
    commit(&store, &first).unwrap();
    assert_eq!(
        store.get(SettingKey::NavbarForceShow).unwrap(),
        SettingValue::Bool(false)
    );

    // Flip back inside the cooldown: the store keeps the first value.
    let snap = store.snapshot().unwrap();
    let second = gate
        .apply_change(
            t0 + Duration::from_millis(700),
            &snap,
            SettingKey::NavbarForceShow,
            SettingValue::Bool(true),
        )
        .unwrap();
    commit(&store, &second).unwrap();
    assert_eq!(
        store.get(SettingKey::NavbarForceShow).unwrap(),
        SettingValue::Bool(false)
    );

    // Past the window the flip lands.
    let snap = store.snapshot().unwrap();
    let third = gate
        .apply_change(
            t0 + Duration::from_millis(1501),
            &snap,
            SettingKey::NavbarForceShow,
            SettingValue::Bool(true),
        )
        .unwrap();
    commit(&store, &third).unwrap();
    assert_eq!(
        store.get(SettingKey::NavbarForceShow).unwrap(),
        SettingValue::Bool(true)
    );
}

#[test]
fn rejected_write_leaves_store_and_view_alone() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let mut gate = SettingsGate::new(NavigationConfig::default());

    let snap = store.snapshot().unwrap();
    let before = gate.project(&snap);
    let err = gate.apply_change(
        Instant::now(),
        &snap,
        SettingKey::PulseColorMode,
        SettingValue::Bool(true),
    );
    assert!(err.is_err());

    assert_eq!(gate.project(&store.snapshot().unwrap()), before);
    assert!(!store.file_path().exists());
}
