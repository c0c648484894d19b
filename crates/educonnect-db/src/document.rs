//! BSON document conversion
//!
//! Stored documents may hold values JSON cannot represent (NaN, infinities,
//! ObjectIds, BSON datetimes). Everything that leaves the service passes
//! through here first.

use chrono::{DateTime, SecondsFormat, Utc};
use educonnect_core::models::{AttendanceRecord, PhotoDocument, PhotoMetadata};
use educonnect_core::AppError;
use mongodb::bson::{self, doc, Bson, Document};
use serde_json::{Number, Value as JsonValue};

const ID_FIELD: &str = "_id";

/// Build the stored form of a photo document.
pub fn photo_to_document(photo: &PhotoDocument) -> Document {
    doc! {
        "filename": photo.filename.clone(),
        "content_type": photo.content_type.clone(),
        "image_data": photo.image_data.clone(),
        "upload_date": bson::DateTime::from_millis(photo.upload_date.timestamp_millis()),
        "file_size": photo.file_size,
    }
}

/// Render a document identifier as a string.
///
/// ObjectIds become their 24-character hex form; string ids are kept as-is;
/// anything else uses its relaxed extended JSON text.
pub fn id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.clone().into_relaxed_extjson().to_string(),
    }
}

fn millis_to_utc(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(millis)
}

fn malformed(field: &str) -> AppError {
    AppError::Database(format!("Malformed photo document: missing or invalid '{}'", field))
}

/// Convert a stored photo document into listing metadata.
///
/// The payload field is never read, so the result cannot carry it even if the
/// document was fetched without a projection.
pub fn photo_metadata_from_document(document: &Document) -> Result<PhotoMetadata, AppError> {
    let id = document
        .get(ID_FIELD)
        .map(id_to_string)
        .ok_or_else(|| malformed(ID_FIELD))?;
    let filename = document
        .get_str("filename")
        .map_err(|_| malformed("filename"))?
        .to_string();
    let content_type = document
        .get_str("content_type")
        .map_err(|_| malformed("content_type"))?
        .to_string();
    let upload_date = match document.get("upload_date") {
        Some(Bson::DateTime(dt)) => millis_to_utc(dt.timestamp_millis()),
        _ => None,
    }
    .ok_or_else(|| malformed("upload_date"))?;
    let file_size = match document.get("file_size") {
        Some(Bson::Int64(n)) => *n,
        Some(Bson::Int32(n)) => i64::from(*n),
        _ => return Err(malformed("file_size")),
    };

    Ok(PhotoMetadata {
        id,
        filename,
        content_type,
        upload_date,
        file_size,
    })
}

/// Convert a BSON value into JSON, replacing non-finite floats with `null`.
///
/// Nested documents and arrays are converted recursively. Datetimes become
/// RFC 3339 strings; other BSON-only types fall back to relaxed extended JSON.
pub fn sanitize_value(value: Bson) -> JsonValue {
    match value {
        Bson::Double(f) => Number::from_f64(f)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        Bson::String(s) => JsonValue::String(s),
        Bson::Boolean(b) => JsonValue::Bool(b),
        Bson::Null | Bson::Undefined => JsonValue::Null,
        Bson::Int32(n) => JsonValue::from(n),
        Bson::Int64(n) => JsonValue::from(n),
        Bson::ObjectId(oid) => JsonValue::String(oid.to_hex()),
        Bson::DateTime(dt) => match millis_to_utc(dt.timestamp_millis()) {
            Some(utc) => JsonValue::String(utc.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => Bson::DateTime(dt).into_relaxed_extjson(),
        },
        Bson::Array(items) => JsonValue::Array(items.into_iter().map(sanitize_value).collect()),
        Bson::Document(document) => JsonValue::Object(sanitize_fields(document)),
        other => other.into_relaxed_extjson(),
    }
}

fn sanitize_fields(document: Document) -> AttendanceRecord {
    document
        .into_iter()
        .map(|(key, value)| (key, sanitize_value(value)))
        .collect()
}

/// Sanitize a top-level stored document and rewrite its `_id` to a string.
pub fn sanitize_document(document: Document) -> AttendanceRecord {
    let id = document.get(ID_FIELD).map(id_to_string);
    let mut record = sanitize_fields(document);
    if let Some(id) = id {
        record.insert(ID_FIELD.to_string(), JsonValue::String(id));
    }
    record
}
