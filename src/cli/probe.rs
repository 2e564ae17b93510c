//! Probe command implementation

use crate::cli::output::{format_flights_table, format_probe_summary};
use crate::cli::ProbeArgs;
use crate::config::GatewayConfig;
use crate::flights;
use crate::upstream::AviationClient;

/// Handle `skybridge probe` command
pub async fn handle_probe(args: &ProbeArgs) -> Result<String, Box<dyn std::error::Error>> {
    let config = if args.config.exists() {
        GatewayConfig::load(Some(&args.config))?
    } else {
        GatewayConfig::default()
    };
    let config = config.with_env_overrides();

    let client = AviationClient::new(&config.upstream);
    probe_with(&client, &args.flight_iata, args.raw).await
}

/// Fetch one flight lookup and render it for the terminal.
async fn probe_with(
    client: &AviationClient,
    flight_iata: &str,
    raw: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    let payload = client.fetch_flights(flight_iata).await?;

    if raw {
        return Ok(serde_json::to_string_pretty(&payload)?);
    }

    let report = flights::reshape(&payload);
    let mut output = format_probe_summary(&report.summary);
    output.push('\n');
    output.push_str(&format_flights_table(&report.flights));

    Ok(output)
}
