//! The validated, immutable forecast request and its query-URL builder.

use crate::types::display::DisplayMode;
use crate::types::model::Model;
use crate::types::timezone::Timezone;
use bon::bon;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Base endpoint for the provider's grib index product pages.
pub const PROVIDER_URL: &str = "https://spotwx.com/products/grib_index.php";

/// A rejected request parameter.
///
/// Raised during request construction, before any network activity. Each
/// variant names the offending parameter; the closed-vocabulary variants
/// also report the full accepted set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("csv_path must point to a .csv file, got '{}'", .0.display())]
    CsvExtension(PathBuf),

    #[error("unknown model '{given}', expected one of: {expected}")]
    UnknownModel { given: String, expected: String },

    #[error("unknown timezone '{given}', expected one of: {expected}")]
    UnknownTimezone { given: String, expected: String },

    #[error("unknown display mode '{given}', expected one of: {expected}")]
    UnknownDisplay { given: String, expected: String },
}

impl RequestError {
    pub(crate) fn unknown_model(given: &str) -> Self {
        RequestError::UnknownModel {
            given: given.to_string(),
            expected: Model::ALL.map(Model::name).join(", "),
        }
    }

    pub(crate) fn unknown_timezone(given: &str) -> Self {
        RequestError::UnknownTimezone {
            given: given.to_string(),
            expected: Timezone::ALL.map(Timezone::name).join(", "),
        }
    }

    pub(crate) fn unknown_display(given: &str) -> Self {
        RequestError::UnknownDisplay {
            given: given.to_string(),
            expected: DisplayMode::ALL.map(DisplayMode::name).join(", "),
        }
    }
}

/// A validated forecast request.
///
/// Built once via [`ForecastRequest::builder`] and never mutated afterwards;
/// every subsequent step (URL construction, retrieval, extraction, output)
/// reads from this value.
///
/// # Examples
///
/// ```
/// use spotwx::{ForecastRequest, Model, Timezone};
///
/// let request = ForecastRequest::builder()
///     .csv_path("out.csv")
///     .model(Model::Gfs)
///     .lat(51.0)
///     .lon(-114.0)
///     .timezone(Timezone::Edmonton)
///     .build()?;
/// assert!(request.url().contains("model=gfs_pgrb2"));
/// # Ok::<(), spotwx::RequestError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRequest {
    csv_path: PathBuf,
    model: Model,
    lat: f64,
    lon: f64,
    zone: Option<String>,
    timezone: Timezone,
    display: DisplayMode,
}

#[bon]
impl ForecastRequest {
    /// Validates the parameters and builds the request.
    ///
    /// `display` defaults to [`DisplayMode::TablePrometheus`]; `zone` is an
    /// optional provider region code and is normally left unset.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::CsvExtension`] if `csv_path` does not end in
    /// `.csv`.
    #[builder]
    pub fn new(
        #[builder(into)] csv_path: PathBuf,
        model: Model,
        lat: f64,
        lon: f64,
        #[builder(into)] zone: Option<String>,
        timezone: Timezone,
        display: Option<DisplayMode>,
    ) -> Result<Self, RequestError> {
        if csv_path.extension().and_then(|ext| ext.to_str()) != Some("csv") {
            return Err(RequestError::CsvExtension(csv_path));
        }
        Ok(Self {
            csv_path,
            model,
            lat,
            lon,
            zone,
            timezone,
            display: display.unwrap_or_default(),
        })
    }

    /// Destination path of the CSV artifact.
    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    /// Requested forecast model.
    pub fn model(&self) -> Model {
        self.model
    }

    /// Requested display mode.
    pub fn display(&self) -> DisplayMode {
        self.display
    }

    /// The provider query URL for this request.
    ///
    /// Parameters appear in the provider's fixed order (`model`, `title` for
    /// meteocode products, `lat`, `lon`, `zone` when set, `tz`, `display`);
    /// absent optional components are omitted entirely. Identical requests
    /// produce byte-identical URLs.
    pub fn url(&self) -> String {
        self.url_with_base(PROVIDER_URL)
    }

    pub(crate) fn url_with_base(&self, base: &str) -> String {
        let mut url = format!("{base}?model={}", self.model.code());
        if let Some(title) = self.model.title_code() {
            url.push_str(&format!("&title={title}"));
        }
        url.push_str(&format!("&lat={}&lon={}", coord(self.lat), coord(self.lon)));
        if let Some(zone) = &self.zone {
            url.push_str(&format!("&zone={zone}"));
        }
        url.push_str(&format!(
            "&tz={}&display={}",
            self.timezone.name(),
            self.display.name()
        ));
        url
    }
}

/// Renders a coordinate the way the provider expects it: whole numbers keep
/// a trailing `.0` (`lat=51.0`, not `lat=51`).
fn coord(value: f64) -> String {
    format!("{value:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gfs_request() -> ForecastRequest {
        ForecastRequest::builder()
            .csv_path("out.csv")
            .model(Model::Gfs)
            .lat(51.0)
            .lon(-114.0)
            .timezone(Timezone::Edmonton)
            .display(DisplayMode::Table)
            .build()
            .expect("valid request")
    }

    #[test]
    fn gfs_url_matches_provider_vocabulary() {
        assert_eq!(
            gfs_request().url(),
            "https://spotwx.com/products/grib_index.php\
             ?model=gfs_pgrb2&lat=51.0&lon=-114.0&tz=America/Edmonton&display=table"
        );
    }

    #[test]
    fn url_is_deterministic() {
        assert_eq!(gfs_request().url(), gfs_request().url());
    }

    #[test]
    fn meteocode_url_carries_title_between_model_and_lat() {
        let request = ForecastRequest::builder()
            .csv_path("bulletin.csv")
            .model(Model::ShortMeteocode)
            .lat(49.25)
            .lon(-123.1)
            .timezone(Timezone::Vancouver)
            .build()
            .expect("valid request");
        assert_eq!(
            request.url(),
            "https://spotwx.com/products/grib_index.php\
             ?model=meteocode&title=FPVR14&lat=49.25&lon=-123.1\
             &tz=America/Vancouver&display=table_prometheus"
        );
    }

    #[test]
    fn zone_appears_between_lon_and_tz_when_set() {
        let request = ForecastRequest::builder()
            .csv_path("out.csv")
            .model(Model::Rdps)
            .lat(53.5)
            .lon(-113.5)
            .zone("abc")
            .timezone(Timezone::Edmonton)
            .build()
            .expect("valid request");
        assert!(request
            .url()
            .contains("&lon=-113.5&zone=abc&tz=America/Edmonton"));
    }

    #[test]
    fn display_defaults_to_table_prometheus() {
        let request = ForecastRequest::builder()
            .csv_path("out.csv")
            .model(Model::Hrdps)
            .lat(50.0)
            .lon(-120.0)
            .timezone(Timezone::Vancouver)
            .build()
            .expect("valid request");
        assert_eq!(request.display(), DisplayMode::TablePrometheus);
        assert!(request.url().ends_with("&display=table_prometheus"));
    }

    #[test]
    fn whole_number_coordinates_keep_their_decimal_point() {
        assert_eq!(coord(51.0), "51.0");
        assert_eq!(coord(-114.0), "-114.0");
        assert_eq!(coord(49.25), "49.25");
    }

    #[test]
    fn rejects_path_without_csv_extension() {
        let err = ForecastRequest::builder()
            .csv_path("forecast.txt")
            .model(Model::Gfs)
            .lat(51.0)
            .lon(-114.0)
            .timezone(Timezone::Edmonton)
            .build()
            .unwrap_err();
        assert_eq!(err, RequestError::CsvExtension(PathBuf::from("forecast.txt")));
        assert!(err.to_string().contains(".csv"));
    }

    #[test]
    fn rejects_path_with_no_extension_at_all() {
        let err = ForecastRequest::builder()
            .csv_path("forecast")
            .model(Model::Gfs)
            .lat(51.0)
            .lon(-114.0)
            .timezone(Timezone::Edmonton)
            .build()
            .unwrap_err();
        assert!(matches!(err, RequestError::CsvExtension(_)));
    }
}
