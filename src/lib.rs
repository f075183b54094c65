//! Fetch SpotWx weather-model forecast data and save it as a CSV file.
//!
//! The flow is strictly sequential and synchronous: validate the request,
//! build the provider query URL, issue one blocking GET, extract the
//! dataset embedded in the returned HTML, and write the rows as CSV with
//! the header `HOURLY,HOUR,TEMP,RH,WD,WS,PRECIP`. There are no retries and
//! no caching; a failed step ends the invocation with an explicit error.
//!
//! ```no_run
//! use spotwx::{ForecastRequest, Model, SpotWx, SpotWxError, Timezone};
//!
//! fn main() -> Result<(), SpotWxError> {
//!     let request = ForecastRequest::builder()
//!         .csv_path("out.csv")
//!         .model(Model::Gfs)
//!         .lat(51.0)
//!         .lon(-114.0)
//!         .timezone(Timezone::Edmonton)
//!         .build()?;
//!     let rows = SpotWx::new()?.save_csv(&request)?;
//!     println!("saved {rows} forecast rows");
//!     Ok(())
//! }
//! ```

mod error;
mod fetch;
mod output;
mod request;
mod scrape;
mod spotwx;
mod types;

pub use error::SpotWxError;
pub use fetch::FetchError;
pub use output::WriteError;
pub use request::{ForecastRequest, RequestError, PROVIDER_URL};
pub use scrape::{extract_rows, ScrapeError};
pub use spotwx::SpotWx;

pub use types::display::DisplayMode;
pub use types::forecast::ForecastRow;
pub use types::model::Model;
pub use types::timezone::Timezone;
