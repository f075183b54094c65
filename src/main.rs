use clap::Parser;
use spotwx::{DisplayMode, ForecastRequest, Model, SpotWx, Timezone};
use std::path::PathBuf;

/// Fetch a SpotWx weather-model forecast and save it as a CSV file.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Destination CSV file (must end in .csv)
    csv_path: PathBuf,

    /// Forecast model, e.g. hrdps, rdps, gdps, gfs
    model: Model,

    /// Latitude in decimal degrees
    #[arg(allow_negative_numbers = true)]
    lat: f64,

    /// Longitude in decimal degrees
    #[arg(allow_negative_numbers = true)]
    lon: f64,

    /// Time zone for forecast hours, e.g. America/Edmonton
    timezone: Timezone,

    /// Provider display mode: table or table_prometheus
    display: DisplayMode,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let request = ForecastRequest::builder()
        .csv_path(cli.csv_path)
        .model(cli.model)
        .lat(cli.lat)
        .lon(cli.lon)
        .timezone(cli.timezone)
        .display(cli.display)
        .build()?;

    let client = SpotWx::new()?;
    let rows = client.save_csv(&request)?;
    println!(
        "CSV file has been saved successfully ({rows} rows to {}).",
        request.csv_path().display()
    );
    Ok(())
}
