//! Change subscribers for plugin settings.
//!
//! ```text
//! PluginSettings::set ──► SettingsObservable::notify_observers
//!                              ├──► LoggingObserver   (one log line)
//!                              ├──► CallbackObserver  (per-setting fn)
//!                              └──► user observers    (registration order)
//! ```
//!
//! Errors returned by an observer and panics inside one are caught at the
//! registry and logged; the remaining observers still run. The process panic
//! hook still fires for caught panics; [`route_panics_to_tracing`] keeps that
//! output off stderr.

pub mod callback;
pub mod logging;
pub mod observable;
pub mod sink;

use std::any::Any;

use crate::model::value::SettingValue;

pub use callback::{CallbackObserver, SettingCallback};
pub use logging::LoggingObserver;
pub use observable::SettingsObservable;
pub use sink::{LogSink, TracingSink, route_panics_to_tracing};

/// Receives every change made to a setting.
pub trait SettingsObserver {
    /// Called after `setting` has been written.
    ///
    /// `old_value` is `None` when the setting had no value before the write.
    /// Returned errors are logged by the registry and never reach the writer.
    fn update(
        &self,
        setting: &str,
        new_value: &SettingValue,
        old_value: Option<&SettingValue>,
    ) -> anyhow::Result<()>;

    /// Name used in log lines. Defaults to the unqualified type name.
    fn name(&self) -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }
}

impl<F> SettingsObserver for F
where
    F: Fn(&str, &SettingValue, Option<&SettingValue>) -> anyhow::Result<()>,
{
    fn update(
        &self,
        setting: &str,
        new_value: &SettingValue,
        old_value: Option<&SettingValue>,
    ) -> anyhow::Result<()> {
        self(setting, new_value, old_value)
    }

    fn name(&self) -> &'static str {
        "closure"
    }
}

fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
