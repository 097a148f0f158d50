//! # Settings container
//!
//! [`PluginSettings`] holds the current value of every declared setting and
//! routes every write through one path:
//!
//! ```text
//! set / set_value / modify
//!     │  unknown key or wrong kind → SettingsError, nothing notified
//!     ├─► capture old value
//!     ├─► store new value
//!     └─► SettingsObservable::notify_observers(key, new, old)
//! ```
//!
//! The registry, a [`LoggingObserver`] and a [`CallbackObserver`] are created
//! with the container, so both built-in observers see every change.

use std::collections::HashMap;
use std::rc::Rc;

use crate::error::SettingsError;
use crate::model::schema::{Setting, SettingsSchema};
use crate::model::value::{SettingType, SettingValue};
use crate::observer::{
    CallbackObserver, LogSink, LoggingObserver, SettingsObservable, SettingsObserver,
};

pub struct PluginSettings {
    schema: SettingsSchema,
    values: HashMap<String, SettingValue>,
    observable: SettingsObservable,
    callbacks: Rc<CallbackObserver>,
}

impl PluginSettings {
    /// Creates the container with every setting at its declared default.
    pub fn new(schema: SettingsSchema, sink: Rc<dyn LogSink>) -> Self {
        let values = schema
            .iter()
            .filter_map(|def| Some((def.key.clone(), def.default.clone()?)))
            .collect();

        let mut observable = SettingsObservable::new(Rc::clone(&sink));
        let callbacks = Rc::new(CallbackObserver::new(Rc::clone(&sink)));
        observable.add_observer(Rc::new(LoggingObserver::new(sink)));
        observable.add_observer(callbacks.clone());

        Self {
            schema,
            values,
            observable,
            callbacks,
        }
    }

    pub fn schema(&self) -> &SettingsSchema {
        &self.schema
    }

    /// Current value of `setting`, or `None` if it has no value yet.
    pub fn get<T: SettingType>(&self, setting: Setting<T>) -> Option<T> {
        self.values.get(setting.key()).and_then(T::from_value)
    }

    pub fn value(&self, key: &str) -> Option<&SettingValue> {
        self.values.get(key)
    }

    pub fn set<T: SettingType>(
        &mut self,
        setting: Setting<T>,
        value: T,
    ) -> Result<(), SettingsError> {
        self.set_value(setting.key(), value.into_value())
    }

    /// Writes `value` to `key` and notifies every observer.
    ///
    /// Observers are notified even when the value is unchanged.
    pub fn set_value(&mut self, key: &str, value: SettingValue) -> Result<(), SettingsError> {
        let def = self
            .schema
            .get(key)
            .ok_or_else(|| SettingsError::UnknownSetting(key.to_string()))?;
        def.accepts(&value)?;

        let old_value = self.values.insert(key.to_string(), value.clone());
        self.observable.notify_observers(key, &value, old_value.as_ref());
        Ok(())
    }

    /// Read-modify-write of a setting that already has a value.
    pub fn modify<T, F>(&mut self, setting: Setting<T>, f: F) -> Result<(), SettingsError>
    where
        T: SettingType,
        F: FnOnce(T) -> T,
    {
        let current = self
            .get(setting)
            .ok_or_else(|| SettingsError::Unset(setting.key().to_string()))?;
        self.set(setting, f(current))
    }

    pub fn register_callback<F>(&self, key: impl Into<String>, callback: F)
    where
        F: Fn(&str, &SettingValue, Option<&SettingValue>) -> anyhow::Result<()> + 'static,
    {
        self.callbacks.register_callback(key, callback);
    }

    pub fn unregister_callback(&self, key: &str) -> bool {
        self.callbacks.unregister_callback(key)
    }

    pub fn add_observer(&mut self, observer: Rc<dyn SettingsObserver>) -> bool {
        self.observable.add_observer(observer)
    }

    pub fn remove_observer(&mut self, observer: &Rc<dyn SettingsObserver>) -> bool {
        self.observable.remove_observer(observer)
    }

    /// Number of registered observers, built-ins included.
    pub fn observer_count(&self) -> usize {
        self.observable.len()
    }
}
