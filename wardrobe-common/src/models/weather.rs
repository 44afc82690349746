use serde::{Deserialize, Serialize};

/// What the weather collaborator reports for a location: a metric
/// temperature and a coarse condition word such as "Rain" or "Clear".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSample {
    pub temp_c: f64,
    pub condition: String,
}
