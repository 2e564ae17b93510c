//! Output formatting helpers for CLI commands

use crate::dispatch::ModelDescriptor;
use crate::flights::{FlightRecord, FlightSummary, ACTIVE_STATUS};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde_json::json;

/// Format model descriptors as a table
pub fn format_models_table(models: &[ModelDescriptor]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Model", "Name", "Version", "Description"]);

    for m in models {
        table.add_row(vec![
            Cell::new(&m.id),
            Cell::new(&m.name),
            Cell::new(&m.version),
            Cell::new(&m.description),
        ]);
    }

    table.to_string()
}

/// Format model descriptors as JSON
pub fn format_models_json(models: &[ModelDescriptor]) -> String {
    serde_json::to_string_pretty(&json!({
        "models": models
    }))
    .unwrap()
}

/// Format reshaped flight records as a table
pub fn format_flights_table(flights: &[FlightRecord]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Flight", "Airline", "From", "To", "Status"]);

    for f in flights {
        let status_str = if f.status == ACTIVE_STATUS {
            f.status.green().to_string()
        } else {
            f.status.yellow().to_string()
        };

        table.add_row(vec![
            Cell::new(&f.flight_number),
            Cell::new(&f.airline),
            Cell::new(format!("{} ({})", f.departure.airport, f.departure.iata)),
            Cell::new(format!("{} ({})", f.arrival.airport, f.arrival.iata)),
            Cell::new(status_str),
        ]);
    }

    table.to_string()
}

/// Format the one-line summary banner shown above the flights table
pub fn format_probe_summary(summary: &FlightSummary) -> String {
    format!(
        "{} {} flights ({} active, {} grounded)",
        "✓".green(),
        summary.total_flights,
        summary.active_flights,
        summary.grounded_flights
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::descriptors;
    use crate::flights::FlightEndpoint;

    fn create_test_record() -> FlightRecord {
        FlightRecord {
            airline: "Turkish Airlines".to_string(),
            flight_number: "TK1934".to_string(),
            departure: FlightEndpoint {
                airport: "Istanbul Airport".to_string(),
                iata: "IST".to_string(),
                scheduled: "2025-03-01T10:30:00+00:00".to_string(),
                actual: "2025-03-01T10:42:00+00:00".to_string(),
            },
            arrival: FlightEndpoint {
                airport: "Heathrow".to_string(),
                iata: "LHR".to_string(),
                scheduled: "2025-03-01T13:50:00+00:00".to_string(),
                actual: "Unknown".to_string(),
            },
            status: "active".to_string(),
        }
    }

    #[test]
    fn test_format_models_table() {
        let output = format_models_table(&descriptors());
        assert!(output.contains("Model"));
        assert!(output.contains("flight-info"));
        assert!(output.contains("1.0.0"));
    }

    #[test]
    fn test_format_models_json_valid() {
        let output = format_models_json(&descriptors());
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["models"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_format_flights_table_empty() {
        let output = format_flights_table(&[]);
        assert!(output.contains("Flight")); // Header present
    }

    #[test]
    fn test_format_flights_table_with_data() {
        let output = format_flights_table(&[create_test_record()]);
        assert!(output.contains("TK1934"));
        assert!(output.contains("IST"));
        assert!(output.contains("active"));
    }

    #[test]
    fn test_format_probe_summary() {
        let summary = FlightSummary {
            total_flights: 3,
            active_flights: 1,
            grounded_flights: 2,
        };
        let output = format_probe_summary(&summary);
        assert!(output.contains("3 flights"));
        assert!(output.contains("1 active"));
        assert!(output.contains("2 grounded"));
    }
}
