//! Employee model and related types.
//!
//! This module defines the Employee struct and the RecordId identifier used
//! to link attendance entries back to roster records.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// An identifier as it appears in roster and attendance records.
///
/// Upstream record stores emit identifiers either as JSON numbers or as
/// strings. Both forms are kept as-is so that results echo the original
/// value; any JSON number is accepted, including floats and integers beyond
/// the `i64` range. A number and a string never compare equal, even if they
/// print the same.
///
/// # Example
///
/// ```
/// use attendance_analyzer::models::RecordId;
///
/// let numeric: RecordId = serde_json::from_str("42").unwrap();
/// let text: RecordId = serde_json::from_str("\"42\"").unwrap();
/// assert_eq!(numeric, RecordId::from(42));
/// assert_ne!(numeric, text);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// A numeric identifier.
    Number(Number),
    /// A textual identifier.
    Text(String),
}

// JSON numbers are never NaN, so equality is total.
impl Eq for RecordId {}

impl Hash for RecordId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            RecordId::Number(n) => n.to_string().hash(state),
            RecordId::Text(s) => s.hash(state),
        }
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Number(Number::from(value))
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

/// Represents an employee on the roster.
///
/// Only `record_id` and `country` are interpreted. The remaining identity
/// fields are carried into results exactly as the roster supplies them,
/// whatever their JSON type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee record.
    pub record_id: RecordId,
    /// The employee's full name.
    pub name: Value,
    /// The employee's work ID number.
    pub work_id_number: Value,
    /// The employee's email address.
    pub email_address: Value,
    /// The country code the employee works in (e.g., "US").
    pub country: String,
    /// The employee's phone number.
    pub phone_number: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_deserialize_employee_with_numeric_ids() {
        let json = r#"{
            "record_id": 101,
            "name": "Ada Byron",
            "work_id_number": 5001,
            "email_address": "ada@example.com",
            "country": "US",
            "phone_number": "555-0101"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.record_id, RecordId::from(101));
        assert_eq!(employee.work_id_number, 5001);
        assert_eq!(employee.country, "US");
    }

    #[test]
    fn test_deserialize_employee_with_text_ids() {
        let json = r#"{
            "record_id": "emp_001",
            "name": "Grace Hopper",
            "work_id_number": "W-77",
            "email_address": "grace@example.com",
            "country": "CA",
            "phone_number": "555-0199"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.record_id, RecordId::from("emp_001"));
        assert_eq!(employee.work_id_number, "W-77");
    }

    #[test]
    fn test_loose_identity_fields_pass_through() {
        let value = json!({
            "record_id": 18446744073709551615u64,
            "name": "Alan Turing",
            "work_id_number": 3.5,
            "email_address": null,
            "country": "GB",
            "phone_number": 4420790000u64
        });

        let employee: Employee = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(employee.record_id.to_string(), "18446744073709551615");
        assert!(employee.email_address.is_null());
        assert_eq!(serde_json::to_value(&employee).unwrap(), value);
    }

    #[test]
    fn test_float_record_id_is_accepted() {
        let id: RecordId = serde_json::from_str("7.5").unwrap();
        assert_eq!(id.to_string(), "7.5");
        assert_ne!(id, RecordId::from(7));
    }

    #[test]
    fn test_missing_identity_field_is_rejected() {
        let json = r#"{"record_id": 1, "name": "Ada Byron", "country": "US"}"#;
        assert!(serde_json::from_str::<Employee>(json).is_err());
    }

    #[test]
    fn test_record_id_serializes_in_original_form() {
        assert_eq!(serde_json::to_string(&RecordId::from(7)).unwrap(), "7");
        assert_eq!(
            serde_json::to_string(&RecordId::from("7")).unwrap(),
            "\"7\""
        );
    }

    #[test]
    fn test_numeric_and_text_ids_are_distinct() {
        assert_ne!(RecordId::from(7), RecordId::from("7"));
        assert_eq!(RecordId::from(7).to_string(), RecordId::from("7").to_string());

        let ids: HashSet<RecordId> = [RecordId::from(7), RecordId::from("7"), RecordId::from(7)]
            .into_iter()
            .collect();
        assert_eq!(ids.len(), 2);
    }
}
