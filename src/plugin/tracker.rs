use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::model::value::SettingValue;
use crate::observer::{LogSink, SettingsObserver};

/// Counts setting changes and remembers the most recent one.
pub struct ChangeTracker {
    change_count: Cell<usize>,
    last_changed: RefCell<Option<String>>,
    sink: Rc<dyn LogSink>,
}

impl ChangeTracker {
    pub fn new(sink: Rc<dyn LogSink>) -> Self {
        Self {
            change_count: Cell::new(0),
            last_changed: RefCell::new(None),
            sink,
        }
    }

    pub fn change_count(&self) -> usize {
        self.change_count.get()
    }

    pub fn last_changed(&self) -> Option<String> {
        self.last_changed.borrow().clone()
    }
}

impl SettingsObserver for ChangeTracker {
    fn update(
        &self,
        setting: &str,
        _: &SettingValue,
        _: Option<&SettingValue>,
    ) -> anyhow::Result<()> {
        let count = self.change_count.get() + 1;
        self.change_count.set(count);
        *self.last_changed.borrow_mut() = Some(setting.to_string());

        self.sink.log(&format!(
            "Custom observer: Total changes: {count}, Last changed: {setting}"
        ));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "ChangeTracker"
    }
}
