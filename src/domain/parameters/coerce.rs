//! Typed readers over the raw string-to-string parameter map.

use std::collections::HashMap;

use super::{Children, ParameterKey};
use crate::domain::AppError;

/// Raw parameters as handed over by the wiki macro.
pub type RawParameters = HashMap<String, String>;

pub(crate) fn raw<'a>(params: &'a RawParameters, key: ParameterKey) -> Option<&'a str> {
    params.get(key.as_str()).map(String::as_str)
}

/// Base-10 integer; a present but malformed value is an error, never the default.
pub(crate) fn int_or(
    params: &RawParameters,
    key: ParameterKey,
    default: i32,
) -> Result<i32, AppError> {
    match raw(params, key) {
        None => Ok(default),
        Some(value) => parse_int(key, value),
    }
}

pub(crate) fn parse_int(key: ParameterKey, value: &str) -> Result<i32, AppError> {
    value.parse::<i32>().map_err(|_| AppError::invalid_format(key.as_str(), value))
}

/// Only `true` (any case) is true; unknown tokens are false.
pub(crate) fn bool_or(params: &RawParameters, key: ParameterKey, default: bool) -> bool {
    raw(params, key).map(parse_bool).unwrap_or(default)
}

pub(crate) fn parse_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

pub(crate) fn children_or(
    params: &RawParameters,
    key: ParameterKey,
    default: Children,
) -> Children {
    raw(params, key).map(Children::from_raw).unwrap_or(default)
}

pub(crate) fn string(params: &RawParameters, key: ParameterKey) -> Option<String> {
    raw(params, key).map(str::to_string)
}
