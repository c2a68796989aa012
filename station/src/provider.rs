//! OpenWeatherMap One Call 3.0 client.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info, warn};
use weather_reporter_common::traits::{FetchError, WeatherSource};

pub const ONE_CALL_ENDPOINT: &str = "https://api.openweathermap.org/data/3.0/onecall";

/// Request URL for a location, metric units, alerts excluded.
pub fn one_call_url(
    latitude: f64,
    longitude: f64,
    api_key: &str,
) -> String {
    format!("{ONE_CALL_ENDPOINT}?lat={latitude}&lon={longitude}&units=metric&exclude=alerts&appid={api_key}")
}

/// Blocking fetcher with a bounded per-request timeout.
pub struct OneCallClient {
    client: Client,
    url: String,
    latitude: f64,
    longitude: f64,
}

impl OneCallClient {
    pub fn new(
        latitude: f64,
        longitude: f64,
        api_key: &str,
        timeout: Duration,
    ) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: one_call_url(latitude, longitude, api_key),
            latitude,
            longitude,
        })
    }
}

fn classify(e: &reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else if let Some(status) = e.status() {
        FetchError::Status(status.as_u16())
    } else if e.is_body() || e.is_decode() {
        FetchError::Body
    } else {
        FetchError::Connection
    }
}

impl WeatherSource for OneCallClient {
    fn fetch(&mut self) -> Result<String, FetchError> {
        debug!(lat = self.latitude, lon = self.longitude, "fetching One Call forecast");

        let response = self.client.get(&self.url).send().map_err(|e| {
            warn!("forecast request failed: {e}");
            classify(&e)
        })?;

        let status = response.status();
        info!(status = status.as_u16(), "One Call response");
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response.text().map_err(|e| {
            warn!("failed to read forecast body: {e}");
            classify(&e)
        })
    }
}
