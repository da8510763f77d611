//! Method call argument parsing.
//!
//! Hosts are loosely typed: sort orders arrive as enum indexes or names, ids
//! as strings or integers. Everything is normalised here before it reaches a
//! loader.

use bridge_traits::MethodCall;
use core_library::SortOrder;
use serde_json::Value;

use crate::error::{CoreError, Result};

pub const SORT_TYPE: &str = "sort_type";
pub const QUERY: &str = "query";
pub const ARTIST: &str = "artist";
pub const ALBUM_ID: &str = "album_id";
pub const SONG_IDS: &str = "song_ids";

/// Sort order from `sort_type`; absent means `DEFAULT`.
///
/// Unknown indexes and names also fall back to `DEFAULT`. Only a value of the
/// wrong JSON type is rejected.
pub fn sort_type<S: SortOrder>(call: &MethodCall) -> Result<S> {
    match call.argument(SORT_TYPE) {
        None => Ok(S::default_order()),
        Some(Value::Number(number)) => match number.as_i64() {
            Some(index) => Ok(S::from_index(index)),
            // Past i64::MAX, so past every variant.
            None if number.is_u64() => Ok(S::default_order()),
            None => Err(CoreError::invalid_argument(SORT_TYPE, "expected an integer index")),
        },
        Some(Value::String(name)) => Ok(S::from_name(name)),
        Some(other) => Err(CoreError::invalid_argument(
            SORT_TYPE,
            format!("expected an index or a name, got {}", json_type(other)),
        )),
    }
}

/// Required string argument.
pub fn string<'a>(call: &'a MethodCall, name: &str) -> Result<&'a str> {
    match call.argument(name) {
        Some(Value::String(value)) => Ok(value.as_str()),
        Some(other) => Err(CoreError::invalid_argument(
            name,
            format!("expected a string, got {}", json_type(other)),
        )),
        None => Err(CoreError::invalid_argument(name, "argument is required")),
    }
}

/// Required identifier, given either as a string or as an integer.
pub fn id(call: &MethodCall, name: &str) -> Result<String> {
    match call.argument(name) {
        Some(value) => id_value(value).ok_or_else(|| {
            CoreError::invalid_argument(
                name,
                format!("expected a string or an integer, got {}", json_type(value)),
            )
        }),
        None => Err(CoreError::invalid_argument(name, "argument is required")),
    }
}

/// Required list of identifiers. An empty list is accepted.
pub fn id_list(call: &MethodCall, name: &str) -> Result<Vec<String>> {
    let values = match call.argument(name) {
        Some(Value::Array(values)) => values,
        Some(other) => {
            return Err(CoreError::invalid_argument(
                name,
                format!("expected a list, got {}", json_type(other)),
            ))
        }
        None => return Err(CoreError::invalid_argument(name, "argument is required")),
    };

    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            id_value(value).ok_or_else(|| {
                CoreError::invalid_argument(
                    name,
                    format!("element {} is {}, expected a string or an integer", index, json_type(value)),
                )
            })
        })
        .collect()
}

fn id_value(value: &Value) -> Option<String> {
    match value {
        Value::String(id) => Some(id.clone()),
        Value::Number(number) if number.is_i64() || number.is_u64() => Some(number.to_string()),
        _ => None,
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a map",
    }
}
