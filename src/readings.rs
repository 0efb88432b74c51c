//! Named readings extracted from an inverter list response.

use serde_json::Value;

/// One observable reading with a display name and unit.
pub struct Reading {
    pub key: &'static str,
    pub name: &'static str,
    pub unit: &'static str,
    pub value: Option<f64>,
}

/// Response keys exposed as readings.
const READING_KEYS: &[(&str, &str, &str)] = &[
    ("etoday", "Energy Today", "kWh"),
    ("etotal1", "Total Energy", "kWh"),
    ("gridPurchasedTodayEnergy", "Grid Purchased Today", "kWh"),
    ("gridSellTodayEnergy", "Grid Sell Today", "kWh"),
    ("batteryTodayChargeEnergy", "Battery Charge Today", "kWh"),
    ("batteryTodayDischargeEnergy", "Battery Discharge Today", "kWh"),
    ("homeLoadTodayEnergy", "Home Load Today", "kWh"),
];

/// The first inverter record of a list response, if any.
fn first_record(document: &Value) -> Option<&Value> {
    document.get("data")?.get("page")?.get("records")?.get(0)
}

/// Extract the known readings from the first record of the document.
///
/// A missing key, a non-numeric value, or an absent record yields a reading
/// without a value rather than an error.
#[must_use]
pub fn extract(document: &Value) -> Vec<Reading> {
    let record = first_record(document);
    READING_KEYS
        .iter()
        .map(|&(key, name, unit)| Reading {
            key,
            name,
            unit,
            value: record.and_then(|record| record.get(key)).and_then(Value::as_f64),
        })
        .collect()
}
