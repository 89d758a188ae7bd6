//! Shape validation for the homework statuses payload.

use serde_json::Value;

use crate::error::WatchError;

/// Check the parsed API payload against the documented shape and return the
/// `homeworks` array.
///
/// Checks run in a fixed order so the first violation wins: object, then
/// `homeworks` present, then `homeworks` is a list, then `current_date`
/// present. `current_date` only has to exist; the loop never consumes it.
pub fn check_response(payload: &Value) -> Result<&[Value], WatchError> {
    let object = payload.as_object().ok_or(WatchError::ResponseNotObject)?;
    let homeworks = object
        .get("homeworks")
        .ok_or(WatchError::MissingHomeworks)?;
    let homeworks = homeworks
        .as_array()
        .ok_or(WatchError::HomeworksNotList)?;
    if !object.contains_key("current_date") {
        return Err(WatchError::MissingCurrentDate);
    }
    Ok(homeworks)
}
