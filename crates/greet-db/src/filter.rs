//! Search filter to SQL predicate translation.
//!
//! Condition text only ever comes from the static literals below; every
//! user-supplied value travels in `Predicate::params` as a bound parameter.

use chrono::NaiveDate;
use rusqlite::types::Value;

use crate::models::DATE_FORMAT;
use crate::{Result, StoreError};

/// Optional search criteria. All present fields must match (logical AND).
/// An empty string counts as "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GreetingFilter {
    /// Exact match on `first_name`.
    pub first_name: Option<String>,
    /// Exact match on `last_name`.
    pub last_name: Option<String>,
    /// Inclusive lower bound on the date part of `timestamp`, `YYYY-MM-DD`.
    pub start_date: Option<String>,
    /// Inclusive upper bound on the date part of `timestamp`, `YYYY-MM-DD`.
    pub end_date: Option<String>,
}

impl GreetingFilter {
    pub fn is_empty(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.start_date,
            &self.end_date,
        ]
        .into_iter()
        .all(|field| supplied(field).is_none())
    }
}

/// WHERE conditions plus their positional parameters, index-aligned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predicate {
    pub conditions: Vec<&'static str>,
    pub params: Vec<Value>,
}

impl Predicate {
    /// `""` when there are no conditions, otherwise `" WHERE a AND b ..."`.
    pub fn where_clause(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.conditions.join(" AND "))
        }
    }

    fn push(&mut self, condition: &'static str, value: String) {
        self.conditions.push(condition);
        self.params.push(Value::Text(value));
    }
}

/// Build the predicate for `filter`, in the fixed order first_name,
/// last_name, start_date, end_date.
pub fn build_predicate(filter: &GreetingFilter) -> Result<Predicate> {
    let mut predicate = Predicate::default();

    if let Some(first_name) = supplied(&filter.first_name) {
        predicate.push("first_name = ?", first_name.to_owned());
    }
    if let Some(last_name) = supplied(&filter.last_name) {
        predicate.push("last_name = ?", last_name.to_owned());
    }
    if let Some(start) = supplied(&filter.start_date) {
        let date = parse_date("start_date", start)?;
        predicate.push("date(timestamp) >= ?", date.format(DATE_FORMAT).to_string());
    }
    if let Some(end) = supplied(&filter.end_date) {
        let date = parse_date("end_date", end)?;
        predicate.push("date(timestamp) <= ?", date.format(DATE_FORMAT).to_string());
    }

    Ok(predicate)
}

/// Strict `YYYY-MM-DD`. chrono skips padding spaces and accepts a signed
/// year, so the digit layout is checked before parsing.
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate> {
    let invalid = || StoreError::InvalidFilter {
        field,
        value: value.to_owned(),
    };
    let well_formed = value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}

fn supplied(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> Value {
        Value::Text(value.to_owned())
    }

    #[test]
    fn empty_filter_has_no_where_clause() {
        let predicate = build_predicate(&GreetingFilter::default()).unwrap();
        assert!(predicate.conditions.is_empty());
        assert!(predicate.params.is_empty());
        assert_eq!(predicate.where_clause(), "");
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let filter = GreetingFilter {
            first_name: Some(String::new()),
            end_date: Some(String::new()),
            ..Default::default()
        };
        assert!(filter.is_empty());
        assert_eq!(build_predicate(&filter).unwrap(), Predicate::default());
    }

    #[test]
    fn all_fields_in_fixed_order() {
        let filter = GreetingFilter {
            end_date: Some("2024-01-31".into()),
            start_date: Some("2024-01-01".into()),
            last_name: Some("Lee".into()),
            first_name: Some("Ann".into()),
        };
        let predicate = build_predicate(&filter).unwrap();

        assert_eq!(
            predicate.conditions,
            vec![
                "first_name = ?",
                "last_name = ?",
                "date(timestamp) >= ?",
                "date(timestamp) <= ?",
            ]
        );
        assert_eq!(
            predicate.params,
            vec![
                text("Ann"),
                text("Lee"),
                text("2024-01-01"),
                text("2024-01-31"),
            ]
        );
        assert_eq!(
            predicate.where_clause(),
            " WHERE first_name = ? AND last_name = ? AND date(timestamp) >= ? AND date(timestamp) <= ?"
        );
    }

    #[test]
    fn user_values_never_reach_condition_text() {
        let filter = GreetingFilter {
            last_name: Some("x' OR '1'='1".into()),
            ..Default::default()
        };
        let predicate = build_predicate(&filter).unwrap();
        assert_eq!(predicate.where_clause(), " WHERE last_name = ?");
        assert_eq!(predicate.params, vec![text("x' OR '1'='1")]);
    }

    #[test]
    fn malformed_dates_are_rejected() {
        for bad in [
            "01-2024-01",
            "2024-1-5",
            "2024-13-01",
            "2024-02-30",
            "yesterday",
            "2024- 1-05",
            "2024-01- 5",
            " 2024-1-05",
            "+024-01-05",
        ] {
            let filter = GreetingFilter {
                start_date: Some(bad.into()),
                ..Default::default()
            };
            match build_predicate(&filter) {
                Err(StoreError::InvalidFilter { field, value }) => {
                    assert_eq!(field, "start_date");
                    assert_eq!(value, bad);
                }
                other => panic!("expected InvalidFilter for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn valid_dates_parse() {
        assert_eq!(
            parse_date("start_date", "2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn end_date_error_names_end_date() {
        let filter = GreetingFilter {
            start_date: Some("2024-01-01".into()),
            end_date: Some("2024/01/31".into()),
            ..Default::default()
        };
        let err = build_predicate(&filter).unwrap_err();
        assert!(matches!(err, StoreError::InvalidFilter { field: "end_date", .. }));
    }
}
