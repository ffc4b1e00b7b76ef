use super::*;

// =============================================================
// Sparse bodies deserialize with defaults
// =============================================================

#[test]
fn weather_advice_tolerates_empty_body() {
    let advice: WeatherAdvice = serde_json::from_str("{}").unwrap();
    assert!(advice.irrigation_schedule.is_empty());
    assert!(advice.weather_data.current_conditions.temperature.is_none());
    assert!(advice.warning.is_none());
}

#[test]
fn weather_advice_parses_full_body() {
    let body = serde_json::json!({
        "crop_name": "Rice",
        "region": "Kerala",
        "weather_data": {
            "current_conditions": {
                "temperature": "31°C",
                "humidity": "78%",
                "wind_speed": "12 km/h",
                "rainfall_last_24h": "4 mm"
            },
            "daily_forecast": [
                {"date": "Mon 25 Aug", "conditions": "Scattered showers"}
            ],
            "agricultural_metrics": {"drought_risk": "Low"}
        },
        "irrigation_schedule": [
            {"day": "Daily", "action": "Monitor soil moisture", "water_liters": 120.0,
             "timing": "Early morning", "reason": "High evaporation"}
        ],
        "risk_alerts": ["Heavy rain expected Thursday"],
        "notes": "Monsoon onset confirmed",
        "sources": ["Perplexity Weather Analysis"]
    });
    let advice: WeatherAdvice = serde_json::from_value(body).unwrap();
    assert_eq!(
        advice.weather_data.current_conditions.temperature.as_deref(),
        Some("31°C")
    );
    assert_eq!(advice.weather_data.daily_forecast.len(), 1);
    assert_eq!(advice.irrigation_schedule[0].action, "Monitor soil moisture");
    assert_eq!(advice.risk_alerts.len(), 1);
}

#[test]
fn market_analysis_without_advice_section_parses() {
    // The backend omits the advice fields entirely when only the price
    // feed answered.
    let body = serde_json::json!({
        "crop_name": "Onion",
        "region": "Maharashtra",
        "trend_info": {
            "current_price_range": "₹1,200-₹1,500 per quintal",
            "trend_direction": "increasing"
        },
        "sources": ["perplexity"]
    });
    let analysis: MarketAnalysis = serde_json::from_value(body).unwrap();
    assert_eq!(
        analysis.trend_info.trend_direction.as_deref(),
        Some("increasing")
    );
    assert!(analysis.recommended_action.is_none());
    assert!(analysis.confidence.is_none());
    assert!(analysis.alternate_markets.is_empty());
}

#[test]
fn scheme_report_accepts_fallback_scheme_name_key() {
    let body = serde_json::json!({
        "matched_schemes": [
            {"scheme_name": "PM-KISAN", "description": "Income support"}
        ],
        "error": "Unable to generate personalized recommendations."
    });
    let report: SchemeReport = serde_json::from_value(body).unwrap();
    assert_eq!(report.matched_schemes[0].name, "PM-KISAN");
    assert!(report.matched_schemes[0].official_link.is_none());
    assert!(report.error.is_some());
}

// =============================================================
// String-or-number monetary fields
// =============================================================

#[test]
fn profit_prediction_keeps_numeric_fields_verbatim() {
    let body = serde_json::json!({"roi": 12.5, "estimated_profit": 500});
    let prediction: ProfitPrediction = serde_json::from_value(body).unwrap();
    assert_eq!(prediction.roi.as_deref(), Some("12.5"));
    // `estimated_profit` is the older name for `expected_profit`.
    assert_eq!(prediction.expected_profit.as_deref(), Some("500"));
}

#[test]
fn profit_prediction_keeps_formatted_strings() {
    let body = serde_json::json!({
        "crop_name": "Wheat",
        "region": "Punjab",
        "expected_profit": "₹45,000",
        "total_cost": 60000,
        "risk_factors": ["Market volatility", "Weather uncertainty"]
    });
    let prediction: ProfitPrediction = serde_json::from_value(body).unwrap();
    assert_eq!(prediction.expected_profit.as_deref(), Some("₹45,000"));
    assert_eq!(prediction.total_cost.as_deref(), Some("60000"));
    assert_eq!(prediction.risk_factors.len(), 2);
}

#[test]
fn profit_payload_round_trips() {
    let payload = ProfitPayload {
        crop: "Wheat".to_owned(),
        region: "Punjab".to_owned(),
        farm_size: "3 acres".to_owned(),
        expected_yield: "20 quintals per acre".to_owned(),
        seed_cost: 1500.0,
        fertilizer_cost: 2500.5,
        irrigation_cost: 1000.0,
        labor_cost: 4000.0,
        pesticide_cost: 800.0,
        equipment_cost: 0.0,
        other_cost: 0.0,
        total_cost: 9800.5,
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["total_cost"], 9800.5);
    assert_eq!(value["crop"], "Wheat");
}

#[test]
fn error_body_parses_detail() {
    let body: ErrorBody =
        serde_json::from_str(r#"{"detail": "Invalid file type."}"#).unwrap();
    assert_eq!(body.detail, "Invalid file type.");
}
