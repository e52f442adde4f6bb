//! Checks for values that end up in markup attributes.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ConfigError;

lazy_static!{
    static ref CSS_UNIT: Regex = Regex::new(
        r"^(auto|0|[0-9]+(\.[0-9]+)?(px|%|em|rem|vw|vh|vmin|vmax|ch))$"
    ).expect("valid regex");
    static ref DOM_ID: Regex = Regex::new(
        r"^[a-zA-Z][a-zA-Z0-9_-]*$"
    ).expect("valid regex");
    static ref ATTRIBUTE_NAME: Regex = Regex::new(
        r"^[a-zA-Z_:][a-zA-Z0-9_:.-]*$"
    ).expect("valid regex");
}

pub fn is_valid_css_unit(value: &str) -> bool {
    CSS_UNIT.is_match(value)
}

/// `property` is only used for the error message.
pub fn check_css_unit(property: &'static str, value: &str) -> Result<(), ConfigError> {
    if is_valid_css_unit(value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidCssUnit { property, value: value.into() })
    }
}

pub fn is_valid_dom_id(id: &str) -> bool {
    DOM_ID.is_match(id)
}

pub fn check_dom_id(id: &str) -> Result<(), ConfigError> {
    if is_valid_dom_id(id) {
        Ok(())
    } else {
        Err(ConfigError::InvalidDomId(id.into()))
    }
}

pub fn check_attribute_name(name: &str) -> Result<(), ConfigError> {
    if ATTRIBUTE_NAME.is_match(name) {
        Ok(())
    } else {
        Err(ConfigError::InvalidAttributeName(name.into()))
    }
}
