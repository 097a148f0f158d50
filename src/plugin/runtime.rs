use std::rc::Rc;
use std::time::Instant;

use anyhow::Result;

use crate::model::config::PluginConfig;
use crate::model::value::SettingValue;
use crate::observer::LogSink;
use crate::plugin::example::{NUMBER_TEXT_INPUT, STRING_TEXT_INPUT, example_schema};
use crate::plugin::host::Host;
use crate::plugin::tracker::ChangeTracker;
use crate::settings::PluginSettings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginStatus {
    Created,
    Loaded,
    FrontendReady,
    Unloaded,
}

/// The example plugin: owns its settings and reacts to host lifecycle hooks.
pub struct Plugin<H: Host> {
    host: H,
    config: PluginConfig,
    settings: PluginSettings,
    tracker: Rc<ChangeTracker>,
    status: PluginStatus,
    sink: Rc<dyn LogSink>,
}

impl<H: Host> Plugin<H> {
    pub fn new(host: H, config: PluginConfig, sink: Rc<dyn LogSink>) -> Result<Self> {
        let settings = PluginSettings::new(example_schema()?, Rc::clone(&sink));
        let tracker = Rc::new(ChangeTracker::new(Rc::clone(&sink)));

        Ok(Self {
            host,
            config,
            settings,
            tracker,
            status: PluginStatus::Created,
            sink,
        })
    }

    pub fn status(&self) -> &PluginStatus {
        &self.status
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn settings(&self) -> &PluginSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut PluginSettings {
        &mut self.settings
    }

    pub fn tracker(&self) -> &ChangeTracker {
        &self.tracker
    }

    /// Load hook: wires callbacks and the tracker, then signals ready.
    ///
    /// The front end is not mounted yet, so the ping is expected to fail;
    /// the failure is logged and loading continues.
    pub fn load(&mut self) -> Result<()> {
        self.register_callbacks();
        self.settings.add_observer(self.tracker.clone());

        if self.config.demo.exercise_on_load {
            self.exercise_settings()?;
        }

        self.sink.log(&format!(
            "bootstrapping example plugin, host {}",
            self.host.version()
        ));

        match self
            .host
            .call_frontend_method(&self.config.frontend.method, &ping_params())
        {
            Ok(value) => self.sink.log(&format!("ponged message -> {value}")),
            Err(err) => self.sink.error(&format!("Failed to ping frontend, {err}")),
        }

        self.host.ready();
        self.status = PluginStatus::Loaded;
        Ok(())
    }

    /// Front-end mounted hook. The host may call it more than once.
    pub fn front_end_loaded(&mut self) {
        self.sink.log("The front end has loaded!");

        let method = &self.config.frontend.method;
        let start = Instant::now();
        match self.host.call_frontend_method(method, &ping_params()) {
            Ok(value) => {
                let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
                self.sink.log(&format!("{method} says -> {value} [{elapsed_ms:.3}ms]"));
                self.status = PluginStatus::FrontendReady;
            }
            Err(err) => self.sink.error(&format!("{method} failed: {err}")),
        }
    }

    pub fn unload(&mut self) {
        self.sink.log("unloading");
        self.status = PluginStatus::Unloaded;
    }

    /// Answers a message sent by the front end.
    pub fn receive_frontend_message(&self, message: &str, status: bool, count: i64) -> bool {
        self.sink.log(&format!("received: [{message:?}, {status}, {count}]"));
        count == self.config.frontend.accept_count
    }

    /// Path of the host installation, as reported by the host.
    pub fn install_path(&self) -> std::path::PathBuf {
        self.sink.log("getting install path");
        self.host.install_path()
    }

    fn register_callbacks(&self) {
        let sink = Rc::clone(&self.sink);
        self.settings.register_callback(NUMBER_TEXT_INPUT.key(), move |setting, new, old| {
            sink.log(&format!(
                "Custom callback: {setting} changed from {} to {new}",
                describe(old)
            ));
            Ok(())
        });

        let sink = Rc::clone(&self.sink);
        self.settings.register_callback(STRING_TEXT_INPUT.key(), move |_, new, old| {
            sink.log(&format!(
                "String setting changed: '{}' -> '{new}'",
                describe(old)
            ));
            Ok(())
        });
    }

    fn exercise_settings(&mut self) -> Result<()> {
        self.sink.log("=== Testing Observer Pattern ===");

        for _ in 0..2 {
            self.settings.modify(NUMBER_TEXT_INPUT, |n| n + 1)?;
            if let Some(value) = self.settings.get(NUMBER_TEXT_INPUT) {
                self.sink.log(&format!("PluginSettings.numberTextInput: {value}"));
            }
        }

        self.settings.set(
            STRING_TEXT_INPUT,
            "Hello from the observer pattern!".to_string(),
        )?;
        self.settings.set(NUMBER_TEXT_INPUT, 2000)?;

        self.sink.log("=== Observer Pattern Test Complete ===");
        Ok(())
    }
}

fn ping_params() -> [SettingValue; 3] {
    [
        SettingValue::Int(18),
        SettingValue::from("USA"),
        SettingValue::Bool(false),
    ]
}

fn describe(value: Option<&SettingValue>) -> String {
    value.map_or_else(|| "<unset>".to_string(), ToString::to_string)
}
