use thiserror::Error;

use crate::model::value::SettingKind;

/// Errors raised when declaring or writing settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("unknown setting: {0}")]
    UnknownSetting(String),

    #[error("setting '{key}' holds {expected} values, got {found}")]
    TypeMismatch {
        key: String,
        expected: SettingKind,
        found: SettingKind,
    },

    #[error("setting '{0}' has no value")]
    Unset(String),

    #[error("setting '{0}' is declared more than once")]
    DuplicateSetting(String),

    #[error("invalid setting key {0:?}: keys must be non-empty and not start with '_'")]
    InvalidKey(String),

    #[error("invalid default for setting '{key}': {reason}")]
    InvalidDefault { key: String, reason: String },
}

/// Errors returned by the host when calling into the front end.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("front end is not loaded")]
    FrontendNotLoaded,

    #[error("front end method not found: {0}")]
    UnknownMethod(String),
}
