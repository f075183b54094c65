//! This module provides the main entry point for fetching SpotWx forecast
//! data: one blocking GET against the provider, extraction of the embedded
//! dataset, and CSV output.

use crate::error::SpotWxError;
use crate::fetch::fetch_html;
use crate::output::write_rows;
use crate::request::{ForecastRequest, PROVIDER_URL};
use crate::scrape::extract_rows;
use crate::types::forecast::ForecastRow;
use log::{debug, info};
use reqwest::blocking::Client;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The client for SpotWx forecast pages.
///
/// Holds the blocking HTTP client and the provider base endpoint. Create an
/// instance with [`SpotWx::new()`] for the production endpoint or
/// [`SpotWx::with_base_url()`] to point at a different one (tests use this
/// with a local mock server).
///
/// # Examples
///
/// ```no_run
/// use spotwx::{ForecastRequest, Model, SpotWx, SpotWxError, Timezone};
///
/// fn run() -> Result<(), SpotWxError> {
///     let request = ForecastRequest::builder()
///         .csv_path("calgary.csv")
///         .model(Model::Gfs)
///         .lat(51.0)
///         .lon(-114.0)
///         .timezone(Timezone::Edmonton)
///         .build()?;
///     let client = SpotWx::new()?;
///     let rows = client.save_csv(&request)?;
///     println!("saved {rows} forecast rows");
///     Ok(())
/// }
/// ```
pub struct SpotWx {
    http: Client,
    base_url: String,
}

impl SpotWx {
    /// Creates a client against the production SpotWx endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SpotWxError::ClientInit`] if the HTTP client cannot be
    /// built.
    pub fn new() -> Result<Self, SpotWxError> {
        Self::with_base_url(PROVIDER_URL)
    }

    /// Creates a client against a custom base endpoint.
    ///
    /// The endpoint stands in for the provider's grib index page; request
    /// query strings are appended to it unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SpotWxError::ClientInit`] if the HTTP client cannot be
    /// built.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, SpotWxError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("spotwx/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(SpotWxError::ClientInit)?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Fetches the forecast page for `request` and extracts its rows.
    ///
    /// # Errors
    ///
    /// Returns [`SpotWxError::Fetch`] for network failures and non-success
    /// HTTP statuses (terminal, never retried), and [`SpotWxError::Scrape`]
    /// when the page carries no parseable dataset.
    pub fn fetch_forecast(
        &self,
        request: &ForecastRequest,
    ) -> Result<Vec<ForecastRow>, SpotWxError> {
        let url = request.url_with_base(&self.base_url);
        debug!("fetching forecast from {url}");
        let html = fetch_html(&self.http, &url)?;
        let rows = extract_rows(&html)?;
        debug!("extracted {} forecast rows", rows.len());
        Ok(rows)
    }

    /// Fetches the forecast and writes it to the request's CSV path.
    ///
    /// Nothing is written unless retrieval and extraction both succeed; on
    /// success the file is created (or overwritten) exactly once. Returns
    /// the number of data rows written.
    ///
    /// # Errors
    ///
    /// Everything [`SpotWx::fetch_forecast`] returns, plus
    /// [`SpotWxError::Write`] for output file failures.
    pub fn save_csv(&self, request: &ForecastRequest) -> Result<usize, SpotWxError> {
        let rows = self.fetch_forecast(request)?;
        write_rows(request.csv_path(), &rows)?;
        info!(
            "wrote {} forecast rows to {}",
            rows.len(),
            request.csv_path().display()
        );
        Ok(rows.len())
    }
}
