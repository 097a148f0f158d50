use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::HostError;
use crate::model::value::SettingValue;

/// Services the host application offers a plugin.
pub trait Host {
    fn version(&self) -> String;

    /// Install directory of the host application.
    fn install_path(&self) -> PathBuf;

    /// Calls a method exposed by the plugin's front end.
    ///
    /// Fails with [`HostError::FrontendNotLoaded`] until the front end has
    /// mounted.
    fn call_frontend_method(
        &self,
        method: &str,
        params: &[SettingValue],
    ) -> Result<SettingValue, HostError>;

    /// Tells the host the backend finished loading.
    fn ready(&self);
}

/// In-process host used by the example binary and tests.
#[derive(Debug, Default)]
pub struct LocalHost {
    version: String,
    install_path: PathBuf,
    frontend_loaded: Cell<bool>,
    ready: Cell<bool>,
    methods: RefCell<HashMap<String, SettingValue>>,
    calls: RefCell<Vec<String>>,
}

impl LocalHost {
    pub fn new(version: impl Into<String>, install_path: impl Into<PathBuf>) -> Self {
        Self {
            version: version.into(),
            install_path: install_path.into(),
            ..Self::default()
        }
    }

    /// Registers the value a front-end method answers with.
    pub fn expose_method(&self, method: impl Into<String>, response: impl Into<SettingValue>) {
        self.methods
            .borrow_mut()
            .insert(method.into(), response.into());
    }

    pub fn set_frontend_loaded(&self, loaded: bool) {
        self.frontend_loaded.set(loaded);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    /// Front-end methods that were called successfully, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Host for LocalHost {
    fn version(&self) -> String {
        self.version.clone()
    }

    fn install_path(&self) -> PathBuf {
        self.install_path.clone()
    }

    fn call_frontend_method(
        &self,
        method: &str,
        _params: &[SettingValue],
    ) -> Result<SettingValue, HostError> {
        if !self.frontend_loaded.get() {
            return Err(HostError::FrontendNotLoaded);
        }

        let response = self
            .methods
            .borrow()
            .get(method)
            .cloned()
            .ok_or_else(|| HostError::UnknownMethod(method.to_string()))?;
        self.calls.borrow_mut().push(method.to_string());
        Ok(response)
    }

    fn ready(&self) {
        self.ready.set(true);
    }
}
