use super::value::{SettingKind, SettingValue};

/// How a setting is rendered by the host UI.
///
/// Ranges and choices only describe what the UI offers. They are checked
/// against declared defaults, never against runtime writes.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingStyle {
    CheckBox,
    DropDown { items: Vec<SettingValue> },
    NumberSlider { range: (i64, i64), step: i64 },
    FloatSlider { range: (f64, f64), step: f64 },
    NumberTextInput { range: (i64, i64) },
    FloatTextInput { range: (f64, f64) },
    StringTextInput,
}

impl SettingStyle {
    /// Kind of value the style holds. Dropdowns accept any kind.
    pub fn value_kind(&self) -> Option<SettingKind> {
        match self {
            SettingStyle::CheckBox => Some(SettingKind::Bool),
            SettingStyle::DropDown { .. } => None,
            SettingStyle::NumberSlider { .. } | SettingStyle::NumberTextInput { .. } => {
                Some(SettingKind::Int)
            }
            SettingStyle::FloatSlider { .. } | SettingStyle::FloatTextInput { .. } => {
                Some(SettingKind::Float)
            }
            SettingStyle::StringTextInput => Some(SettingKind::Text),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingStyle::CheckBox => "checkbox",
            SettingStyle::DropDown { .. } => "dropdown",
            SettingStyle::NumberSlider { .. } => "number slider",
            SettingStyle::FloatSlider { .. } => "float slider",
            SettingStyle::NumberTextInput { .. } => "number text input",
            SettingStyle::FloatTextInput { .. } => "float text input",
            SettingStyle::StringTextInput => "string text input",
        }
    }

    /// Checks `value` against the style's kind, range and choices.
    pub fn check(&self, value: &SettingValue) -> Result<(), String> {
        if let Some(kind) = self.value_kind() {
            if value.kind() != kind {
                return Err(format!(
                    "{} expects a {kind} value, got {}",
                    self.label(),
                    value.kind()
                ));
            }
        }

        match (self, value) {
            (SettingStyle::DropDown { items }, value) => {
                if items.contains(value) {
                    Ok(())
                } else {
                    Err(format!("{value} is not one of the dropdown items"))
                }
            }
            (
                SettingStyle::NumberSlider { range, .. } | SettingStyle::NumberTextInput { range },
                SettingValue::Int(number),
            ) => check_range(*number, *range),
            (
                SettingStyle::FloatSlider { range, .. } | SettingStyle::FloatTextInput { range },
                SettingValue::Float(number),
            ) => check_range(*number, *range),
            _ => Ok(()),
        }
    }
}

fn check_range<T>(value: T, (min, max): (T, T)) -> Result<(), String>
where
    T: PartialOrd + std::fmt::Debug,
{
    if value < min || value > max {
        return Err(format!("{value:?} is outside {min:?}..={max:?}"));
    }
    Ok(())
}
