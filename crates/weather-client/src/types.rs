//! wttr.in `format=j1` response types.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherReport {
    #[serde(default)]
    pub current_condition: Vec<CurrentCondition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentCondition {
    #[serde(rename = "temp_C")]
    pub temp_c: String,
    #[serde(rename = "temp_F")]
    pub temp_f: Option<String>,
    #[serde(rename = "weatherDesc", default)]
    pub weather_desc: Vec<TextValue>,
}

impl CurrentCondition {
    /// First description wttr.in gives, e.g. "Partly cloudy".
    pub fn description(&self) -> &str {
        self.weather_desc
            .first()
            .map(|d| d.value.trim())
            .unwrap_or("unknown")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextValue {
    pub value: String,
}
