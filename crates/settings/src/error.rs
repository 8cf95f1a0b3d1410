use thiserror::Error;

use crate::{SettingKey, ValueKind};

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("unknown setting: {0}")]
    UnknownKey(String),

    #[error("type mismatch for {key}: expected {expected}, got {got}")]
    TypeMismatch {
        key: SettingKey,
        expected: ValueKind,
        got: ValueKind,
    },

    #[error("setting not registered: {0}")]
    NotRegistered(SettingKey),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ron error: {0}")]
    Ron(#[from] ron::Error),

    #[error("invalid: {0}")]
    Invalid(&'static str),
}

impl SettingsError {
    /// Type check a value against the shape `key` declares.
    pub fn check_kind(key: SettingKey, got: ValueKind) -> Result<(), SettingsError> {
        let expected = key.kind();
        if expected == got {
            Ok(())
        } else {
            Err(SettingsError::TypeMismatch { key, expected, got })
        }
    }
}
