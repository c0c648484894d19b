use serde_json::{Map, Value as JsonValue};

/// Attendance record as served to clients.
///
/// The attendance collection has no fixed schema, so a record is an arbitrary
/// JSON object. Records are produced by the attendance reader, which has already
/// replaced non-finite floats with `null` and rewritten `_id` to a string.
pub type AttendanceRecord = Map<String, JsonValue>;
