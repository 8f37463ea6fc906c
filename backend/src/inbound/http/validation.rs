//! Shared validation helpers for inbound HTTP handlers.

use serde_json::json;

use crate::domain::Error;
use crate::domain::teacher::TeacherId;

/// Newtype wrapper for request field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) fn empty_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must not be empty")).with_details(json!({
        "field": field,
        "code": "empty_field",
    }))
}

/// Reject empty or whitespace-only required strings.
pub(crate) fn require_non_empty(value: &str, field: FieldName) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(empty_field_error(field));
    }
    Ok(())
}

/// Parse a teacher id from a path segment.
pub(crate) fn parse_teacher_id(value: &str) -> Result<TeacherId, Error> {
    TeacherId::parse(value).map_err(|err| {
        Error::invalid_request(err.to_string()).with_details(json!({
            "field": "teacher_id",
            "value": value,
            "code": "invalid_teacher_id",
        }))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;

    #[test]
    fn rejects_whitespace_only_values() {
        let err = require_non_empty("   ", FieldName::new("name")).expect_err("empty name");
        assert_eq!(err.code, ErrorCode::InvalidRequest);
        let details = err.details.expect("details");
        assert_eq!(details["field"], "name");
        assert_eq!(details["code"], "empty_field");
    }

    #[test]
    fn accepts_non_empty_values() {
        assert!(require_non_empty("Dr. Test", FieldName::new("name")).is_ok());
    }

    #[test]
    fn parse_teacher_id_reports_the_offending_value() {
        let err = parse_teacher_id("nope").expect_err("invalid id");
        assert_eq!(err.code, ErrorCode::InvalidRequest);
        assert_eq!(err.details.expect("details")["value"], "nope");
    }

    #[test]
    fn parse_teacher_id_accepts_uuids() {
        let id = TeacherId::random();
        assert_eq!(parse_teacher_id(&id.to_string()).expect("valid"), id);
    }
}
