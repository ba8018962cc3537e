//! Test helpers for integration tests

use anyhow::{anyhow, Result};
use hotel_common::AppConfig;
use serde_json::Value;
use std::collections::HashMap;

/// Build a config from key/value pairs instead of the process environment
pub fn test_config(vars: &[(&str, &str)]) -> Result<AppConfig> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    Ok(AppConfig::from_lookup(|key| vars.get(key).cloned())?)
}

/// Read a string field from a JSON object
pub fn json_str<'a>(value: &'a Value, field: &str) -> Result<&'a str> {
    value
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| anyhow!("missing string field `{field}` in {value}"))
}
