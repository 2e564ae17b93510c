//! Flight payload reshaping.
//!
//! AviationStack returns a deeply nested JSON document per flight. This
//! module flattens each entry into a [`FlightRecord`] and accumulates a
//! [`FlightSummary`], substituting `"Unknown"` for anything the provider
//! omits so callers never have to null-check individual fields.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fallback for provider fields that are missing, null, or not a string.
pub const UNKNOWN: &str = "Unknown";

/// Status string AviationStack uses for flights currently in the air.
pub const ACTIVE_STATUS: &str = "active";

/// One side of a flight: departure or arrival.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightEndpoint {
    pub airport: String,
    pub iata: String,
    pub scheduled: String,
    pub actual: String,
}

/// A single flight, flattened from one element of the provider's `data` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub airline: String,
    pub flight_number: String,
    pub departure: FlightEndpoint,
    pub arrival: FlightEndpoint,
    /// Provider status string, verbatim (e.g. "active", "landed", "scheduled")
    pub status: String,
}

/// Aggregate counts over one reshaped payload.
///
/// A flight is active iff its status equals exactly "active"; every other
/// status, including unknown ones, counts as grounded. The invariant
/// `total_flights == active_flights + grounded_flights` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightSummary {
    pub total_flights: u64,
    pub active_flights: u64,
    pub grounded_flights: u64,
}

/// The reshaped result: flattened records plus their summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightReport {
    pub flights: Vec<FlightRecord>,
    pub summary: FlightSummary,
}

/// Reshape a raw AviationStack payload into typed records and a summary.
///
/// A payload without a `data` array yields an empty report with a zeroed
/// summary; that is not an error. Pure and deterministic.
pub fn reshape(raw: &Value) -> FlightReport {
    let mut report = FlightReport::default();

    let Some(data) = raw.get("data").and_then(Value::as_array) else {
        return report;
    };

    for flight in data {
        let record = FlightRecord {
            airline: string_at(flight, &["airline", "name"]),
            flight_number: string_at(flight, &["flight", "iata"]),
            departure: endpoint_at(flight, "departure"),
            arrival: endpoint_at(flight, "arrival"),
            status: string_at(flight, &["flight_status"]),
        };

        report.summary.total_flights += 1;
        if record.status == ACTIVE_STATUS {
            report.summary.active_flights += 1;
        } else {
            report.summary.grounded_flights += 1;
        }

        report.flights.push(record);
    }

    report
}

/// Extract a string at a nested key path, defaulting to [`UNKNOWN`] when any
/// key along the path is absent or the final value is not a string.
fn string_at(value: &Value, path: &[&str]) -> String {
    let mut current = value;
    for key in path {
        match current.get(key) {
            Some(next) => current = next,
            None => return UNKNOWN.to_string(),
        }
    }
    current
        .as_str()
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn endpoint_at(flight: &Value, key: &str) -> FlightEndpoint {
    FlightEndpoint {
        airport: string_at(flight, &[key, "airport"]),
        iata: string_at(flight, &[key, "iata"]),
        scheduled: string_at(flight, &[key, "scheduled"]),
        actual: string_at(flight, &[key, "actual"]),
    }
}
