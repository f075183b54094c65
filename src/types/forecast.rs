//! The hourly forecast record scraped from the provider's embedded dataset.

use serde::{Deserialize, Serialize};

/// One hourly forecast entry.
///
/// Field values pass through exactly as the provider emits them; no unit or
/// number conversion is applied on the way to the CSV file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct ForecastRow {
    /// Hourly index within the forecast run.
    pub hourly: String,
    /// Local hour label.
    pub hour: String,
    /// Air temperature.
    pub temp: String,
    /// Relative humidity.
    pub rh: String,
    /// Wind direction.
    pub wd: String,
    /// Wind speed.
    pub ws: String,
    /// Precipitation.
    pub precip: String,
}

impl ForecastRow {
    /// CSV header of the output artifact, in field order.
    pub const HEADER: [&'static str; 7] = ["HOURLY", "HOUR", "TEMP", "RH", "WD", "WS", "PRECIP"];

    pub(crate) fn from_cells(cells: [String; 7]) -> Self {
        let [hourly, hour, temp, rh, wd, ws, precip] = cells;
        Self {
            hourly,
            hour,
            temp,
            rh,
            wd,
            ws,
            precip,
        }
    }
}
