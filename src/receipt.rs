// 🧾 Swap Receipt
// Summary of one successful swap: returned to the caller AND written to the sink.
//
// Text form (four lines):
//   Battery B1 swapped by Driver Alice at Station S1.
//   Energy used: 20 kWh.
//   Distance traveled: 50.
//   Cost: $2.

use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// UUID v4, unique per swap
    pub receipt_id: String,
    pub battery_id: String,
    /// Display name of the driver, not the driver id
    pub driver_name: String,
    pub station_id: String,
    pub energy_used: f64,
    /// Driver's cumulative distance after this swap, not this swap's distance
    pub distance_traveled: f64,
    pub cost: f64,
    pub issued_at: DateTime<Utc>,
}

impl Receipt {
    pub fn new(
        battery_id: String,
        driver_name: String,
        station_id: String,
        energy_used: f64,
        distance_traveled: f64,
        cost: f64,
    ) -> Self {
        Receipt {
            receipt_id: uuid::Uuid::new_v4().to_string(),
            battery_id,
            driver_name,
            station_id,
            energy_used,
            distance_traveled,
            cost,
            issued_at: Utc::now(),
        }
    }

    /// Human-readable text, as written to the sink
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl std::fmt::Display for Receipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Battery {} swapped by Driver {} at Station {}.",
            self.battery_id, self.driver_name, self.station_id
        )?;
        writeln!(f, "Energy used: {} kWh.", self.energy_used)?;
        writeln!(f, "Distance traveled: {}.", self.distance_traveled)?;
        write!(f, "Cost: ${}.", self.cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Receipt {
        Receipt::new(
            "B1".to_string(),
            "Alice".to_string(),
            "S1".to_string(),
            20.0,
            50.0,
            2.0,
        )
    }

    #[test]
    fn test_render_layout() {
        let text = sample().render();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Battery B1 swapped by Driver Alice at Station S1.",
                "Energy used: 20 kWh.",
                "Distance traveled: 50.",
                "Cost: $2.",
            ]
        );
    }

    #[test]
    fn test_render_keeps_fractions() {
        let mut receipt = sample();
        receipt.energy_used = 12.5;
        receipt.cost = 1.25;

        let text = receipt.render();
        assert!(text.contains("Energy used: 12.5 kWh."));
        assert!(text.contains("Cost: $1.25."));
    }

    #[test]
    fn test_receipt_ids_are_unique() {
        assert_ne!(sample().receipt_id, sample().receipt_id);
    }

    #[test]
    fn test_to_json() {
        let receipt = sample();
        let json = receipt.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["battery_id"], "B1");
        assert_eq!(value["driver_name"], "Alice");
        assert_eq!(value["cost"], 2.0);

        let back: Receipt = serde_json::from_str(&json).unwrap();
        assert_eq!(back, receipt);
    }
}
