//! Request payloads and response bodies for the five backend endpoints.
//!
//! DESIGN
//! ======
//! The backend composes its answers from external AI services, so response
//! shapes are only loosely guaranteed. Every optional field deserializes
//! through `#[serde(default)]` (and monetary fields through a
//! string-or-number adapter) so a sparse body never fails to parse; the
//! renderer substitutes "Not available" for whatever is missing.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Error body the backend sends for 4xx/5xx responses.
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// Payload shared by the weather-irrigation and smart-market endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRegionPayload {
    pub crop_name: String,
    pub region: String,
}

/// Farmer profile sent to the government scheme endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemePayload {
    pub farmer_name: String,
    pub region: String,
    pub crop: String,
    pub farm_size: String,
    pub need: String,
}

/// Cost breakdown sent to the profit prediction endpoint.
///
/// `total_cost` is computed client-side as the sum of the itemized costs
/// and sent along with them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfitPayload {
    pub crop: String,
    pub region: String,
    pub farm_size: String,
    pub expected_yield: String,
    pub seed_cost: f64,
    pub fertilizer_cost: f64,
    pub irrigation_cost: f64,
    pub labor_cost: f64,
    pub pesticide_cost: f64,
    pub equipment_cost: f64,
    pub other_cost: f64,
    pub total_cost: f64,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Diagnosis returned by `POST /crop-doctor`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropDiagnosis {
    pub disease_name: String,
    pub severity: String,
    pub recommended_treatment: String,
}

/// Full advisory returned by `POST /weather-irrigation`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherAdvice {
    #[serde(default)]
    pub crop_name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub weather_data: WeatherData,
    #[serde(default)]
    pub irrigation_schedule: Vec<IrrigationAction>,
    #[serde(default)]
    pub risk_alerts: Vec<String>,
    #[serde(default)]
    pub protective_measures: Vec<String>,
    #[serde(default)]
    pub water_conservation_tips: Vec<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub warning: Option<String>,
    #[serde(default)]
    pub sources: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    #[serde(default)]
    pub current_conditions: CurrentConditions,
    #[serde(default)]
    pub daily_forecast: Vec<ForecastDay>,
    #[serde(default)]
    pub agricultural_metrics: AgriculturalMetrics,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentConditions {
    #[serde(default)]
    pub temperature: Option<String>,
    #[serde(default)]
    pub humidity: Option<String>,
    #[serde(default)]
    pub wind_speed: Option<String>,
    #[serde(default)]
    pub rainfall_last_24h: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastDay {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub conditions: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgriculturalMetrics {
    #[serde(default)]
    pub soil_moisture_trend: Option<String>,
    #[serde(default)]
    pub evaporation_rate: Option<String>,
    #[serde(default)]
    pub drought_risk: Option<String>,
    #[serde(default)]
    pub pest_risk: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IrrigationAction {
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub water_liters: f64,
    #[serde(default)]
    pub timing: String,
    #[serde(default)]
    pub reason: String,
}

/// Market analysis returned by `POST /smart-market`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketAnalysis {
    #[serde(default)]
    pub crop_name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub trend_info: TrendInfo,
    #[serde(default)]
    pub recommended_action: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub rationale: Option<String>,
    #[serde(default)]
    pub alternate_markets: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub sources: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendInfo {
    #[serde(default)]
    pub current_price_range: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub trend_direction: Option<String>,
    #[serde(default)]
    pub month_over_month_change_percent: Option<String>,
    #[serde(default)]
    pub supply_status: Option<String>,
    #[serde(default)]
    pub demand_status: Option<String>,
    #[serde(default)]
    pub market_yard: Option<String>,
}

/// Scheme lookup result returned by `POST /govt-schemes`.
///
/// When the backend's recommendation step fails it still returns 200 with
/// the raw scheme list and a soft `error` string; the page shows that as a
/// warning above the results.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeReport {
    #[serde(default)]
    pub matched_schemes: Vec<Scheme>,
    #[serde(default)]
    pub personalized_recommendation: String,
    #[serde(default)]
    pub next_steps: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub sources: Vec<String>,
}

/// One government scheme.
///
/// The backend's fallback path forwards upstream data verbatim, which names
/// the scheme under `scheme_name` instead of `name`; the alias accepts both.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheme {
    #[serde(default, alias = "scheme_name")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub eligibility: Option<String>,
    #[serde(default)]
    pub benefits: Option<String>,
    #[serde(default)]
    pub application_process: Option<String>,
    #[serde(default)]
    pub official_link: Option<String>,
}

/// Profit prediction returned by `POST /crop-profit`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitPrediction {
    #[serde(default)]
    pub crop_name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub estimated_yield: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub market_price: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub total_cost: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub expected_revenue: Option<String>,
    #[serde(default, alias = "estimated_profit", deserialize_with = "string_or_number")]
    pub expected_profit: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub roi: Option<String>,
    #[serde(default)]
    pub risk_factors: Vec<String>,
    #[serde(default)]
    pub recommendation: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub sources: Vec<String>,
}

/// Accept a string, integer, or float and keep its verbatim text form.
///
/// The backend's monetary fields are usually formatted strings ("₹50,000")
/// but arrive as bare numbers when the formatting step is skipped.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(other) => Some(other.to_string()),
    })
}
