use async_trait::async_trait;
use reqwest::Client;

use wardrobe_common::error::Error;
use wardrobe_common::models::WeatherSample;
use wardrobe_common::traits::WeatherProvider;

/// Map a metric temperature and a coarse condition word onto the short
/// tag the prompt builder consumes: a temperature bucket plus optional
/// `-rainy` / `-sunny` suffixes.
pub fn weather_tag(temp_c: f64, condition: &str) -> String {
    let mut tag = if temp_c < 10.0 {
        "cold"
    } else if temp_c < 20.0 {
        "chilly"
    } else {
        "warm"
    }
    .to_string();

    let cond = condition.to_lowercase();
    if cond.contains("rain") {
        tag.push_str("-rainy");
    }
    if cond.contains("clear") {
        tag.push_str("-sunny");
    }
    tag
}

/// Configuration for the OpenWeather current-conditions endpoint
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub api_key: String,
    pub api_base: Option<String>,
}

/// OpenWeather-backed implementation of [`WeatherProvider`].
pub struct OpenWeatherClient {
    config: WeatherConfig,
    client: Client,
}

impl OpenWeatherClient {
    pub fn new(config: WeatherConfig) -> Self {
        let client = Client::new();
        Self { config, client }
    }

    fn api_base(&self) -> String {
        self.config
            .api_base
            .clone()
            .unwrap_or_else(|| "https://api.openweathermap.org/data/2.5".to_string())
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current(&self, lat: f64, lon: f64) -> Result<WeatherSample, Error> {
        let url = format!(
            "{}/weather?lat={}&lon={}&appid={}&units=metric",
            self.api_base(),
            lat,
            lon,
            self.config.api_key
        );

        let data = self
            .client
            .get(&url)
            .send()
            .await?
            .json::<serde_json::Value>()
            .await?;

        // Missing fields fall back to a mild default rather than failing.
        let temp_c = data["main"]["temp"].as_f64().unwrap_or(20.0);
        let condition = data["weather"][0]["main"]
            .as_str()
            .unwrap_or("")
            .to_string();

        Ok(WeatherSample { temp_c, condition })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_buckets() {
        assert_eq!(weather_tag(-3.0, ""), "cold");
        assert_eq!(weather_tag(9.9, ""), "cold");
        assert_eq!(weather_tag(10.0, ""), "chilly");
        assert_eq!(weather_tag(19.9, ""), "chilly");
        assert_eq!(weather_tag(20.0, ""), "warm");
        assert_eq!(weather_tag(31.0, ""), "warm");
    }

    #[test]
    fn condition_suffixes() {
        assert_eq!(weather_tag(5.0, "Rain"), "cold-rainy");
        assert_eq!(weather_tag(25.0, "Clear"), "warm-sunny");
        assert_eq!(weather_tag(15.0, "Clouds"), "chilly");
        // Substring match, case-insensitive
        assert_eq!(weather_tag(15.0, "light rain"), "chilly-rainy");
    }
}
