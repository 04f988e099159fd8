//! Reference data supplied by the remote event and weather feeds.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A weather observation for one country and date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Country code the observation applies to.
    pub country: String,
    /// Calendar date, beginning with the four-digit year.
    pub date: String,
    /// Categorical condition (e.g., "blizzard", "sunny").
    pub condition: String,
}

/// A public or company event for one country and date.
///
/// Only `country` and `event_date` are interpreted. The record as received,
/// interpreted fields included, is kept in `details` and written back out
/// unchanged, in its original field order.
///
/// # Example
///
/// ```
/// use attendance_analyzer::models::EventRecord;
///
/// let event: EventRecord = serde_json::from_str(r#"{
///     "event_name": "Independence Day",
///     "country": "US",
///     "event_date": "2023-07-04"
/// }"#).unwrap();
/// assert_eq!(event.country, "US");
/// assert_eq!(
///     serde_json::to_string(&event).unwrap(),
///     r#"{"event_name":"Independence Day","country":"US","event_date":"2023-07-04"}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct EventRecord {
    /// Country code the event applies to.
    pub country: String,
    /// Calendar date of the event.
    pub event_date: String,
    /// The complete record, carried through verbatim.
    pub details: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for EventRecord {
    type Error = String;

    fn try_from(details: Map<String, Value>) -> Result<Self, Self::Error> {
        let text_field = |name: &str| match details.get(name) {
            Some(Value::String(value)) => Ok(value.clone()),
            Some(_) => Err(format!("field `{}` must be a string", name)),
            None => Err(format!("missing field `{}`", name)),
        };

        Ok(Self {
            country: text_field("country")?,
            event_date: text_field("event_date")?,
            details,
        })
    }
}

impl From<EventRecord> for Map<String, Value> {
    fn from(event: EventRecord) -> Self {
        event.details
    }
}
