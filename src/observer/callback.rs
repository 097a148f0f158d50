use std::cell::RefCell;
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use crate::model::value::SettingValue;

use super::sink::LogSink;
use super::{SettingsObserver, panic_message};

/// Function invoked when one specific setting changes.
pub type SettingCallback =
    Rc<dyn Fn(&str, &SettingValue, Option<&SettingValue>) -> anyhow::Result<()>>;

/// Forwards changes to at most one registered function per setting.
///
/// Callback failures are logged here and never reach the registry.
pub struct CallbackObserver {
    callbacks: RefCell<HashMap<String, SettingCallback>>,
    sink: Rc<dyn LogSink>,
}

impl CallbackObserver {
    pub fn new(sink: Rc<dyn LogSink>) -> Self {
        Self {
            callbacks: RefCell::new(HashMap::new()),
            sink,
        }
    }

    /// Registers `callback` for `setting`, replacing any earlier one.
    pub fn register_callback<F>(&self, setting: impl Into<String>, callback: F)
    where
        F: Fn(&str, &SettingValue, Option<&SettingValue>) -> anyhow::Result<()> + 'static,
    {
        let setting = setting.into();
        self.sink.log(&format!("Registered callback for setting: {setting}"));
        self.callbacks.borrow_mut().insert(setting, Rc::new(callback));
    }

    /// Removes the callback for `setting`. Returns `false` if there was none.
    pub fn unregister_callback(&self, setting: &str) -> bool {
        let removed = self.callbacks.borrow_mut().remove(setting).is_some();
        if removed {
            self.sink.log(&format!("Unregistered callback for setting: {setting}"));
        }
        removed
    }

    pub fn has_callback(&self, setting: &str) -> bool {
        self.callbacks.borrow().contains_key(setting)
    }

    pub fn len(&self) -> usize {
        self.callbacks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.borrow().is_empty()
    }
}

impl SettingsObserver for CallbackObserver {
    fn update(
        &self,
        setting: &str,
        new_value: &SettingValue,
        old_value: Option<&SettingValue>,
    ) -> anyhow::Result<()> {
        // Release the map before calling out so callbacks may re-register.
        let Some(callback) = self.callbacks.borrow().get(setting).cloned() else {
            return Ok(());
        };

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            callback(setting, new_value, old_value)
        }));

        let detail = match outcome {
            Ok(Ok(())) => return Ok(()),
            Ok(Err(err)) => format!("{err:#}"),
            Err(payload) => panic_message(payload.as_ref()),
        };
        self.sink.error(&format!("Error in callback for setting '{setting}': {detail}"));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "CallbackObserver"
    }
}
