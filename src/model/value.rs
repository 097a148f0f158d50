use std::fmt;

/// A setting value as seen by observers and callbacks.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

/// Discriminant of a [`SettingValue`], used for type checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKind {
    Bool,
    Int,
    Float,
    Text,
}

impl SettingValue {
    pub fn kind(&self) -> SettingKind {
        match self {
            SettingValue::Bool(_) => SettingKind::Bool,
            SettingValue::Int(_) => SettingKind::Int,
            SettingValue::Float(_) => SettingKind::Float,
            SettingValue::Text(_) => SettingKind::Text,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            SettingValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            SettingValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SettingValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Bool(value) => write!(f, "{value}"),
            SettingValue::Int(value) => write!(f, "{value}"),
            // Debug keeps the fractional part: 1234.0 rather than 1234.
            SettingValue::Float(value) => write!(f, "{value:?}"),
            SettingValue::Text(value) => f.write_str(value),
        }
    }
}

impl fmt::Display for SettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SettingKind::Bool => "boolean",
            SettingKind::Int => "integer",
            SettingKind::Float => "float",
            SettingKind::Text => "text",
        };
        f.write_str(label)
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        SettingValue::Int(value)
    }
}

impl From<i32> for SettingValue {
    fn from(value: i32) -> Self {
        SettingValue::Int(i64::from(value))
    }
}

impl From<f64> for SettingValue {
    fn from(value: f64) -> Self {
        SettingValue::Float(value)
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::Text(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Text(value.to_string())
    }
}

/// Rust types that can be stored in a setting.
///
/// `KIND` is the value kind the type maps to; `None` means any kind is
/// accepted (used by dropdowns, whose choices may mix kinds).
pub trait SettingType: Sized {
    const KIND: Option<SettingKind>;

    fn into_value(self) -> SettingValue;

    fn from_value(value: &SettingValue) -> Option<Self>;
}

impl SettingType for bool {
    const KIND: Option<SettingKind> = Some(SettingKind::Bool);

    fn into_value(self) -> SettingValue {
        SettingValue::Bool(self)
    }

    fn from_value(value: &SettingValue) -> Option<Self> {
        value.as_bool()
    }
}

impl SettingType for i64 {
    const KIND: Option<SettingKind> = Some(SettingKind::Int);

    fn into_value(self) -> SettingValue {
        SettingValue::Int(self)
    }

    fn from_value(value: &SettingValue) -> Option<Self> {
        value.as_int()
    }
}

impl SettingType for f64 {
    const KIND: Option<SettingKind> = Some(SettingKind::Float);

    fn into_value(self) -> SettingValue {
        SettingValue::Float(self)
    }

    fn from_value(value: &SettingValue) -> Option<Self> {
        value.as_float()
    }
}

impl SettingType for String {
    const KIND: Option<SettingKind> = Some(SettingKind::Text);

    fn into_value(self) -> SettingValue {
        SettingValue::Text(self)
    }

    fn from_value(value: &SettingValue) -> Option<Self> {
        value.as_text().map(str::to_string)
    }
}

impl SettingType for SettingValue {
    const KIND: Option<SettingKind> = None;

    fn into_value(self) -> SettingValue {
        self
    }

    fn from_value(value: &SettingValue) -> Option<Self> {
        Some(value.clone())
    }
}
