use std::rc::Rc;

use crate::model::value::SettingValue;

use super::SettingsObserver;
use super::sink::LogSink;

/// Writes one line per setting change.
pub struct LoggingObserver {
    sink: Rc<dyn LogSink>,
}

impl LoggingObserver {
    pub fn new(sink: Rc<dyn LogSink>) -> Self {
        Self { sink }
    }
}

impl SettingsObserver for LoggingObserver {
    fn update(
        &self,
        setting: &str,
        new_value: &SettingValue,
        old_value: Option<&SettingValue>,
    ) -> anyhow::Result<()> {
        let line = match old_value {
            Some(old) => format!("Setting '{setting}' changed from {old} to {new_value}"),
            None => format!("Setting '{setting}' changed to {new_value}"),
        };
        self.sink.log(&line);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "LoggingObserver"
    }
}
