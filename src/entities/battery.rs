// 🔋 Battery Entity - charge state + assignment
//
// Energy level is an opaque number supplied by callers. It is decremented by
// every swap and may go negative: a negative level is an overdraft that is
// reported (`is_depleted`), never clamped.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Battery {
    /// Stable identity - never changes
    pub id: String,

    /// Remaining charge; no floor is enforced
    pub energy_level: f64,

    /// Driver holding this battery after its last swap (None until first swap)
    pub driver_id: Option<String>,

    /// Station of the last swap (None until first swap)
    pub station_id: Option<String>,
}

impl Battery {
    /// Create a battery with no assignment
    pub fn new(id: String, energy_level: f64) -> Self {
        Battery {
            id,
            energy_level,
            driver_id: None,
            station_id: None,
        }
    }

    /// Create a battery with zero charge
    pub fn uncharged(id: String) -> Self {
        Self::new(id, 0.0)
    }

    /// Record a new holder. Overwrites any previous assignment without checks.
    pub fn assign(&mut self, driver_id: String, station_id: String) {
        self.driver_id = Some(driver_id);
        self.station_id = Some(station_id);
    }

    /// Subtract `energy_used` from the level.
    ///
    /// Negative usage raises the level; usage above the level drives it negative.
    pub fn consume(&mut self, energy_used: f64) {
        self.energy_level -= energy_used;
    }

    pub fn is_assigned(&self) -> bool {
        self.driver_id.is_some()
    }

    /// Level below zero (overdraft)
    pub fn is_depleted(&self) -> bool {
        self.energy_level < 0.0
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_battery_creation() {
        let battery = Battery::new("B1".to_string(), 100.0);

        assert_eq!(battery.id, "B1");
        assert_eq!(battery.energy_level, 100.0);
        assert!(battery.driver_id.is_none());
        assert!(battery.station_id.is_none());
        assert!(!battery.is_assigned());
    }

    #[test]
    fn test_uncharged_battery() {
        let battery = Battery::uncharged("B0".to_string());
        assert_eq!(battery.energy_level, 0.0);
        assert!(!battery.is_depleted());
    }

    #[test]
    fn test_consume_can_go_negative() {
        let mut battery = Battery::new("B1".to_string(), 10.0);

        battery.consume(25.0);

        assert_eq!(battery.energy_level, -15.0);
        assert!(battery.is_depleted());
    }

    #[test]
    fn test_negative_usage_raises_level() {
        let mut battery = Battery::new("B1".to_string(), 10.0);
        battery.consume(-5.0);
        assert_eq!(battery.energy_level, 15.0);
    }

    #[test]
    fn test_assign_overwrites() {
        let mut battery = Battery::new("B1".to_string(), 50.0);

        battery.assign("D1".to_string(), "S1".to_string());
        battery.assign("D2".to_string(), "S2".to_string());

        assert!(battery.is_assigned());
        assert_eq!(battery.driver_id.as_deref(), Some("D2"));
        assert_eq!(battery.station_id.as_deref(), Some("S2"));
    }
}
