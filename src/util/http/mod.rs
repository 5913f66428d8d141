use std::time::Instant;

use once_cell::sync::{Lazy, OnceCell};
use reqwest::{header, Client};
use serde::de::DeserializeOwned;

use crate::{crawler::FetchError, logging::Logger};

/// A singleton instance of the reqwest client.
static CLIENT: OnceCell<Client> = OnceCell::new();

static LOGGER: Lazy<Logger> = Lazy::new(|| Logger::new("http"));

/// Returns the reqwest client singleton instance or creates one if it doesn't exist.
fn get_client() -> Result<&'static Client, reqwest::Error> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            // ===== 壓縮 =====
            .brotli(true)
            .gzip(true)
            // ===== Cookie 和重定向 =====
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
    })
}

/// Performs an HTTP GET request and deserializes the JSON response into the
/// specified type.
///
/// A non-2xx status is an error; the body is read as text and parsed with
/// `serde_json` so the offending payload can be reported when it does not
/// match the expected shape.
pub async fn get_use_json<RES: DeserializeOwned>(
    url: &str,
    headers: Option<header::HeaderMap>,
) -> Result<RES, FetchError> {
    let mut rb = get_client()?.get(url);

    if let Some(h) = headers {
        rb = rb.headers(h);
    }

    let start = Instant::now();
    let response = rb.send().await?.error_for_status()?;
    let body = response.text().await?;
    LOGGER.info(format!("GET:{} {} ms", url, start.elapsed().as_millis()));

    serde_json::from_str(&body).map_err(FetchError::from)
}
