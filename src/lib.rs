//! Example host plugin with observable settings.
//!
//! Every write to a declared setting goes through [`PluginSettings`], which
//! records the previous value, stores the new one and notifies each
//! registered [`SettingsObserver`] synchronously, in registration order.

pub mod error;
pub mod model;
pub mod observer;
pub mod plugin;
pub mod settings;

pub use error::{HostError, SettingsError};
pub use model::schema::{Setting, SettingDef, SettingsSchema};
pub use model::style::SettingStyle;
pub use model::value::{SettingKind, SettingType, SettingValue};
pub use observer::{
    CallbackObserver, LogSink, LoggingObserver, SettingsObservable, SettingsObserver, TracingSink,
};
pub use settings::PluginSettings;
