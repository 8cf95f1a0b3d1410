//! Host infrastructure for the settings screens: paths, logging, and
//! store construction with first-boot defaults registered.

mod paths;

use std::marker::PhantomData;
#[cfg(debug_assertions)]
use std::path::PathBuf;

use screens::{NavigationConfig, SettingsGate};
use settings::{
    ColorMode, RenderStyle, Rgb, SettingKey, SettingValue, SettingsError, SettingsStore,
};
use tracing_subscriber::{
    filter::filter_fn, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
    Layer,
};

pub use paths::AppPaths;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Application metadata trait.
///
/// Define the host's identity by implementing this trait. Pure marker,
/// no logic, just constants.
pub trait Application: Sized + 'static {
    const APP_ID: &'static str;
    const PROJECT_ID: &'static str = "slate";
}

/// First-boot defaults the host supplies before any delta exists.
#[derive(Debug, Clone, Copy)]
pub struct Defaults {
    /// Devices without a hardware navbar show it by default.
    pub navbar_shown: bool,
    /// Seed for the user color: the host theme's accent.
    pub accent_color: Rgb,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            navbar_shown: true,
            accent_color: Rgb::new(0x80, 0x80, 0x80),
        }
    }
}

impl Defaults {
    /// Register every key this surface owns with its default value.
    pub fn register(&self, store: &SettingsStore) -> Result<(), SettingsError> {
        store.register(
            SettingKey::NavbarForceShow,
            SettingValue::Bool(self.navbar_shown),
        )?;
        store.register(SettingKey::NavbarPulseEnabled, SettingValue::Bool(false))?;
        store.register(SettingKey::LockscreenPulseEnabled, SettingValue::Bool(false))?;
        store.register(
            SettingKey::PulseColorMode,
            SettingValue::ColorMode(ColorMode::Accent),
        )?;
        store.register(
            SettingKey::PulseColorUser,
            SettingValue::Color(self.accent_color),
        )?;
        store.register(
            SettingKey::PulseRenderStyle,
            SettingValue::RenderStyle(RenderStyle::SolidLines),
        )?;
        Ok(())
    }
}

/// Application infrastructure context.
///
/// Owns the settings store and the logging worker guard; the guard
/// must live as long as the application so log lines are flushed.
pub struct AppContext {
    paths: AppPaths,
    version: &'static str,
    store: SettingsStore,
    nav_config: NavigationConfig,
    _log_guard: tracing_appender::non_blocking::WorkerGuard,
}

impl AppContext {
    pub fn app_id(&self) -> &str {
        self.paths.app_id()
    }

    pub fn version(&self) -> &'static str {
        self.version
    }

    pub fn paths(&self) -> &AppPaths {
        &self.paths
    }

    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    /// A fresh change handler for one screen-entry lifetime.
    pub fn new_gate(&self) -> SettingsGate {
        SettingsGate::new(self.nav_config)
    }
}

/// Builder wiring up paths, logging, and the settings store.
pub struct AppBuilder<A: Application> {
    paths: AppPaths,
    version: &'static str,
    _log_guard: tracing_appender::non_blocking::WorkerGuard,
    _marker: PhantomData<A>,
}

impl<A: Application> AppBuilder<A> {
    /// Resolve paths, ensure directories, and initialize logging
    /// (file + console).
    pub fn new(version: &'static str) -> Result<Self, BoxError> {
        #[cfg(debug_assertions)]
        let paths = AppPaths::with_base_path(
            PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                .join("..")
                .join("..")
                .join(".out"),
            A::APP_ID,
        );
        #[cfg(not(debug_assertions))]
        let paths = AppPaths::new(A::PROJECT_ID, A::APP_ID);

        paths.ensure_directories()?;

        let log_guard = init_tracing(&paths)?;

        Ok(Self {
            paths,
            version,
            _log_guard: log_guard,
            _marker: PhantomData,
        })
    }

    /// Build the context: construct the store over the settings file
    /// and register the host's defaults.
    pub fn build(
        self,
        defaults: Defaults,
        nav_config: NavigationConfig,
    ) -> Result<AppContext, BoxError> {
        let store = SettingsStore::builder()
            .with_settings_file(self.paths.settings_file())
            .build()?;
        defaults.register(&store)?;
        let pruned = store.prune_stale()?;
        tracing::info!(
            app_id = A::APP_ID,
            version = self.version,
            pruned,
            "settings host initialized"
        );

        Ok(AppContext {
            paths: self.paths,
            version: self.version,
            store,
            nav_config,
            _log_guard: self._log_guard,
        })
    }
}

fn init_tracing(
    paths: &AppPaths,
) -> Result<tracing_appender::non_blocking::WorkerGuard, BoxError> {
    let log_file_path = paths.log_file_now();
    let log_dir = log_file_path
        .parent()
        .ok_or("log file path should have a parent directory")?;
    let log_filename = log_file_path
        .file_name()
        .ok_or("log file path should have a filename")?;

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    #[cfg(debug_assertions)]
    let level = LevelFilter::DEBUG;

    #[cfg(not(debug_assertions))]
    let level = LevelFilter::INFO;

    // Separate layers: file (non-blocking) + console (stdout).
    let file_layer = fmt::Layer::default()
        .with_target(false)
        .with_ansi(false)
        .with_writer(non_blocking)
        .with_filter(filter_fn(move |metadata| metadata.level() <= &level));

    let console_layer = fmt::Layer::default()
        .with_target(false)
        .with_filter(filter_fn(move |metadata| metadata.level() <= &level));

    // try_init keeps embedding hosts that already installed a
    // subscriber working; our layers then stay unused.
    let _ = tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .try_init();

    Ok(guard)
}
