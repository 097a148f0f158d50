//! Settings declared by the example plugin.

use crate::error::SettingsError;
use crate::model::schema::{Setting, SettingDef, SettingsSchema};
use crate::model::style::SettingStyle;
use crate::model::value::SettingValue;

const DESCRIPTION: &str = "lorem ipsum dolor sit amet, consectetur adipiscing elit";

pub const CHECKBOX_INPUT: Setting<bool> = Setting::new("checkboxInput");
pub const DROPDOWN_INPUT: Setting<SettingValue> = Setting::new("dropDownInput");
pub const FLOAT_SLIDER_INPUT: Setting<f64> = Setting::new("floatSliderInput");
pub const NUMBER_SLIDER_INPUT: Setting<i64> = Setting::new("numberSliderInput");
pub const NUMBER_TEXT_INPUT: Setting<i64> = Setting::new("numberTextInput");
pub const STRING_TEXT_INPUT: Setting<String> = Setting::new("stringTextInput");
pub const FLOAT_TEXT_INPUT: Setting<f64> = Setting::new("floatTextInput");

pub fn example_schema() -> Result<SettingsSchema, SettingsError> {
    SettingsSchema::from_defs(vec![
        SettingDef::new(CHECKBOX_INPUT.key(), "CheckBox Example", SettingStyle::CheckBox)
            .description(DESCRIPTION)
            .default_value(true),
        SettingDef::new(
            DROPDOWN_INPUT.key(),
            "Dropdown Example",
            SettingStyle::DropDown {
                items: vec!["String Value".into(), false.into(), 69.into()],
            },
        )
        .description(DESCRIPTION)
        .default_value("String Value"),
        SettingDef::new(
            FLOAT_SLIDER_INPUT.key(),
            "Float Slider Example",
            SettingStyle::FloatSlider {
                range: (0.0, 10.0),
                step: 0.5,
            },
        )
        .description(DESCRIPTION)
        .default_value(0.5),
        SettingDef::new(
            NUMBER_SLIDER_INPUT.key(),
            "Number Slider Example",
            SettingStyle::NumberSlider {
                range: (0, 10),
                step: 1,
            },
        )
        .description(DESCRIPTION)
        .default_value(5),
        SettingDef::new(
            NUMBER_TEXT_INPUT.key(),
            "Number Text Input Example",
            SettingStyle::NumberTextInput { range: (0, 10000) },
        )
        .description(DESCRIPTION)
        .default_value(1234),
        SettingDef::new(
            STRING_TEXT_INPUT.key(),
            "String Text Input Example",
            SettingStyle::StringTextInput,
        )
        .description(DESCRIPTION)
        .default_value("Hello World!"),
        SettingDef::new(
            FLOAT_TEXT_INPUT.key(),
            "Float Text Input Example",
            SettingStyle::FloatTextInput {
                range: (0.0, 10000.0),
            },
        )
        .description(DESCRIPTION)
        .default_value(1234.0),
    ])
}
