use serde_json::{Map, Value};

use crate::core::formatter::ConfigFormatter;
use crate::core::types::ChartConfig;
use crate::error::ChartResult;

/// Deep-merges `target` onto `origin`; `target` wins every leaf conflict.
///
/// Record-valued fields of `target` merge field by field into the matching
/// `origin` field. Arrays, scalars and `null` replace wholesale. A non-record
/// `origin` counts as an empty record, and a non-record `target` replaces
/// `origin` entirely.
#[must_use]
pub fn merge_config(origin: &ChartConfig, target: &ChartConfig) -> ChartConfig {
    let Value::Object(target_fields) = target else {
        return target.clone();
    };

    let mut merged = match origin {
        Value::Object(origin_fields) => origin_fields.clone(),
        _ => Map::new(),
    };
    for (key, value) in target_fields {
        let next = match (merged.get(key), value) {
            (Some(existing), Value::Object(_)) => merge_config(existing, value),
            _ => value.clone(),
        };
        merged.insert(key.clone(), next);
    }
    Value::Object(merged)
}

/// Merges `target` onto `origin`, then runs `format` over the result.
pub fn format_merge_config(
    origin: &ChartConfig,
    target: &ChartConfig,
    format: Option<&ConfigFormatter>,
) -> ChartResult<ChartConfig> {
    let merged = merge_config(origin, target);
    match format {
        Some(format) => format.apply(merged),
        None => Ok(merged),
    }
}
