//! Precipitation records as served by the static `data.json` resource.

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// One month's precipitation measurement.
///
/// Records are kept in the order they were served; that order is the
/// display order of the bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationRecord {
    /// Calendar month name, e.g. "January"
    pub month: String,
    /// Precipitation in millimetres
    pub precipitation_mm: f64,
}

/// Envelope of the JSON document: `{ "precipitation_data": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationPayload {
    pub precipitation_data: Vec<PrecipitationRecord>,
}

/// Parse the body of `data.json` into its list of records.
///
/// Field values are taken as-is: no range or month-name checks are applied.
pub fn parse_payload(body: &str) -> anyhow::Result<Vec<PrecipitationRecord>> {
    let payload: PrecipitationPayload =
        serde_json::from_str(body).context("malformed precipitation payload")?;
    log::debug!(
        "parsed {} precipitation records",
        payload.precipitation_data.len()
    );
    Ok(payload.precipitation_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::month_color::{color_for_month, MONTH_COLORS};

    static FIXTURE: &str = include_str!("../../fixtures/data.json");

    #[test]
    fn test_parse_payload_keeps_order() {
        let body = r#"{"precipitation_data":[
            {"month":"July","precipitation_mm":40},
            {"month":"January","precipitation_mm":15.5}
        ]}"#;
        let records = parse_payload(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].month, "July");
        assert_eq!(records[0].precipitation_mm, 40.0);
        assert_eq!(records[1].month, "January");
        assert_eq!(records[1].precipitation_mm, 15.5);
    }

    #[test]
    fn test_parse_payload_empty_list() {
        let records = parse_payload(r#"{"precipitation_data":[]}"#).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_payload_does_not_validate_values() {
        let body = r#"{"precipitation_data":[{"month":"Smarch","precipitation_mm":-3}]}"#;
        let records = parse_payload(body).unwrap();
        assert_eq!(records[0].month, "Smarch");
        assert_eq!(records[0].precipitation_mm, -3.0);
    }

    #[test]
    fn test_parse_payload_rejects_malformed_body() {
        assert!(parse_payload("<!doctype html><html></html>").is_err());
        assert!(parse_payload(r#"{"data":[]}"#).is_err());
        assert!(parse_payload(r#"{"precipitation_data":[{"month":"May"}]}"#).is_err());
    }

    #[test]
    fn test_fixture_has_every_month() {
        let records = parse_payload(FIXTURE).unwrap();
        assert_eq!(records.len(), 12);
        let months: Vec<&str> = records.iter().map(|r| r.month.as_str()).collect();
        let calendar: Vec<&str> = MONTH_COLORS.iter().map(|(m, _)| m.name()).collect();
        assert_eq!(months, calendar);
        for r in &records {
            assert!(color_for_month(&r.month).is_some(), "{} has no color", r.month);
            assert!(r.precipitation_mm >= 0.0);
        }
    }
}
