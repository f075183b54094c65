use crate::fetch::FetchError;
use crate::output::WriteError;
use crate::request::RequestError;
use crate::scrape::ScrapeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpotWxError {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Scrape(#[from] ScrapeError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error("failed to initialize HTTP client")]
    ClientInit(#[source] reqwest::Error),
}
