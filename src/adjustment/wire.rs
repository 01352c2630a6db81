//! JSON form of adjustment data.
//!
//! A flat object mapping decimal table offsets to month-start MJD values:
//!
//! ```json
//! {"1544":60737,"1545":60766}
//! ```

use serde_json::Value;

use super::AdjustmentData;
use crate::error::CalendarError;

/// Serializes overrides in ascending offset order.
pub fn to_json(data: &AdjustmentData) -> Result<String, CalendarError> {
    Ok(serde_json::to_string(data)?)
}

/// Reads overrides, skipping keys that are not decimal offsets.
///
/// # Errors
/// [`CalendarError::JsonProcessing`] if the text is not a JSON object or an
/// entry's value is not an integer MJD.
pub fn from_json(json: &str) -> Result<AdjustmentData, CalendarError> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Object(entries) = value else {
        return Err(CalendarError::JsonProcessing {
            reason: "adjustment data must be a JSON object".to_string(),
        });
    };

    let mut data = AdjustmentData::new();
    for (key, value) in entries {
        let Ok(offset) = key.trim().parse::<usize>() else {
            continue;
        };
        let start = value
            .as_i64()
            .and_then(|start| i32::try_from(start).ok())
            .ok_or_else(|| CalendarError::JsonProcessing {
                reason: format!("value for offset {offset} is not an integer MJD: {value}"),
            })?;
        data.insert(offset, start);
    }
    Ok(data)
}
