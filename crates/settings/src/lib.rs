mod error;
mod keys;
mod store;
mod values;

pub use error::SettingsError;
pub use keys::SettingKey;
pub use store::{SettingsStore, SettingsStoreBuilder, Snapshot};
pub use values::{ColorMode, RenderStyle, Rgb, SettingValue, ValueKind};
