use async_trait::async_trait;

use crate::error::Error;
use crate::models::weather::WeatherSample;

/// Current-conditions lookup for a coordinate pair.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, lat: f64, lon: f64) -> Result<WeatherSample, Error>;
}
