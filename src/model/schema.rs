use std::collections::HashSet;
use std::fmt;
use std::marker::PhantomData;

use crate::error::SettingsError;

use super::style::SettingStyle;
use super::value::{SettingType, SettingValue};

/// Typed handle for a declared setting.
///
/// Handles are plain keys; reads and writes through [`PluginSettings`]
/// check the key against the schema.
///
/// [`PluginSettings`]: crate::settings::PluginSettings
pub struct Setting<T> {
    key: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T: SettingType> Setting<T> {
    pub const fn new(key: &'static str) -> Self {
        Self {
            key,
            _marker: PhantomData,
        }
    }

    pub const fn key(&self) -> &'static str {
        self.key
    }
}

impl<T> Clone for Setting<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Setting<T> {}

impl<T> fmt::Debug for Setting<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Setting").field(&self.key).finish()
    }
}

/// Declaration of a single setting.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingDef {
    pub key: String,
    pub name: String,
    pub description: String,
    pub style: SettingStyle,
    pub default: Option<SettingValue>,
}

impl SettingDef {
    pub fn new(key: impl Into<String>, name: impl Into<String>, style: SettingStyle) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            description: String::new(),
            style,
            default: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn default_value(mut self, value: impl Into<SettingValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Checks that `value` has the kind this setting stores.
    pub fn accepts(&self, value: &SettingValue) -> Result<(), SettingsError> {
        match self.style.value_kind() {
            Some(expected) if expected != value.kind() => Err(SettingsError::TypeMismatch {
                key: self.key.clone(),
                expected,
                found: value.kind(),
            }),
            _ => Ok(()),
        }
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.key.is_empty() || self.key.starts_with('_') {
            return Err(SettingsError::InvalidKey(self.key.clone()));
        }

        if let Some(default) = &self.default {
            self.style
                .check(default)
                .map_err(|reason| SettingsError::InvalidDefault {
                    key: self.key.clone(),
                    reason,
                })?;
        }

        Ok(())
    }
}

/// Ordered set of setting declarations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsSchema {
    defs: Vec<SettingDef>,
}

impl SettingsSchema {
    /// Builds a schema, rejecting duplicate or private keys and defaults
    /// that do not fit their style.
    pub fn from_defs(defs: Vec<SettingDef>) -> Result<Self, SettingsError> {
        let mut seen = HashSet::new();
        for def in &defs {
            def.validate()?;
            if !seen.insert(def.key.as_str()) {
                return Err(SettingsError::DuplicateSetting(def.key.clone()));
            }
        }

        Ok(Self { defs })
    }

    pub fn get(&self, key: &str) -> Option<&SettingDef> {
        self.defs.iter().find(|def| def.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SettingDef> {
        self.defs.iter()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}
