//! Event matching by country and date.
//!
//! Events recorded for an employee's country on an attendance date are
//! collected as events the employee attended, and their presence also
//! excuses the day from absenteeism.

use std::collections::HashMap;

use crate::models::EventRecord;

/// Returns the events whose `event_date` and `country` equal the targets.
///
/// Source order is kept and duplicates are not removed.
///
/// # Example
///
/// ```
/// use attendance_analyzer::analysis::match_events;
/// use attendance_analyzer::models::EventRecord;
///
/// let events: Vec<EventRecord> = serde_json::from_str(r#"[
///     {"country": "US", "event_date": "2023-07-04", "name": "Parade"},
///     {"country": "CA", "event_date": "2023-07-04", "name": "Picnic"}
/// ]"#).unwrap();
///
/// let matched = match_events(&events, "2023-07-04", "US");
/// assert_eq!(matched.len(), 1);
/// assert_eq!(matched[0].details["name"], "Parade");
/// ```
pub fn match_events<'a>(
    events: &'a [EventRecord],
    date: &str,
    country: &str,
) -> Vec<&'a EventRecord> {
    events
        .iter()
        .filter(|event| event.event_date == date && event.country == country)
        .collect()
}

/// Events grouped by country and date for repeated lookups.
///
/// [`EventIndex::lookup`] returns exactly what [`match_events`] would for
/// the same slice, in the same order, without rescanning the feed.
#[derive(Debug, Clone, Default)]
pub struct EventIndex<'a> {
    by_country: HashMap<&'a str, HashMap<&'a str, Vec<&'a EventRecord>>>,
}

impl<'a> EventIndex<'a> {
    /// Indexes a feed.
    pub fn build(events: &'a [EventRecord]) -> Self {
        let mut by_country: HashMap<&'a str, HashMap<&'a str, Vec<&'a EventRecord>>> =
            HashMap::new();

        for event in events {
            by_country
                .entry(event.country.as_str())
                .or_default()
                .entry(event.event_date.as_str())
                .or_default()
                .push(event);
        }

        Self { by_country }
    }

    /// Returns the events for `date` in `country`.
    pub fn lookup(&self, date: &str, country: &str) -> &[&'a EventRecord] {
        self.by_country
            .get(country)
            .and_then(|by_date| by_date.get(date))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(country: &str, date: &str, name: &str) -> EventRecord {
        serde_json::from_value(json!({
            "country": country,
            "event_date": date,
            "event_name": name
        }))
        .unwrap()
    }

    fn sample_events() -> Vec<EventRecord> {
        vec![
            event("US", "2023-07-04", "Parade"),
            event("US", "2023-07-04", "Fireworks"),
            event("CA", "2023-07-04", "Picnic"),
            event("US", "2023-07-05", "Cleanup"),
            event("US", "2023-07-04", "Parade"),
        ]
    }

    // ==========================================================================
    // EM-001: matches on both country and date, in source order
    // ==========================================================================
    #[test]
    fn test_em_001_matches_in_source_order() {
        let events = sample_events();
        let matched = match_events(&events, "2023-07-04", "US");

        let names: Vec<_> = matched
            .iter()
            .map(|e| e.details["event_name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Parade", "Fireworks", "Parade"]);
    }

    // ==========================================================================
    // EM-002: no match yields an empty list
    // ==========================================================================
    #[test]
    fn test_em_002_no_match() {
        let events = sample_events();
        assert!(match_events(&events, "2023-04-01", "US").is_empty());
        assert!(match_events(&events, "2023-07-05", "CA").is_empty());
    }

    // ==========================================================================
    // EM-003: index agrees with linear scan
    // ==========================================================================
    #[test]
    fn test_em_003_index_agrees_with_scan() {
        let events = sample_events();
        let index = EventIndex::build(&events);

        for (date, country) in [
            ("2023-07-04", "US"),
            ("2023-07-04", "CA"),
            ("2023-07-05", "US"),
            ("2023-07-05", "CA"),
            ("2023-12-25", "GB"),
        ] {
            let scanned = match_events(&events, date, country);
            assert_eq!(index.lookup(date, country), scanned.as_slice());
        }
    }

    #[test]
    fn test_empty_index_lookup() {
        let index = EventIndex::build(&[]);
        assert!(index.lookup("2023-07-04", "US").is_empty());
    }
}
