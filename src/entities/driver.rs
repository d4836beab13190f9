// 🚗 Driver Entity - cumulative statistics
//
// All statistics are accumulators: each update adds its argument, with no
// sign or magnitude validation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    /// Stable identity - never changes
    pub id: String,

    /// Display name used on receipts
    pub name: String,

    /// Sum of energy used across swaps
    pub total_energy_consumed: f64,

    /// Sum of the battery's remaining level after each swap.
    ///
    /// Despite the name this is NOT an expected-consumption figure; it adds
    /// the post-swap charge of the battery involved.
    pub total_theoretical_energy_consumed: f64,

    /// Sum of distance across swaps
    pub distance_traveled: f64,
}

impl Driver {
    pub fn new(id: String, name: String) -> Self {
        Driver {
            id,
            name,
            total_energy_consumed: 0.0,
            total_theoretical_energy_consumed: 0.0,
            distance_traveled: 0.0,
        }
    }

    pub fn add_energy_consumed(&mut self, energy: f64) {
        self.total_energy_consumed += energy;
    }

    pub fn add_theoretical_energy_consumed(&mut self, energy: f64) {
        self.total_theoretical_energy_consumed += energy;
    }

    pub fn add_distance(&mut self, distance: f64) {
        self.distance_traveled += distance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_starts_at_zero() {
        let driver = Driver::new("D1".to_string(), "Alice".to_string());

        assert_eq!(driver.name, "Alice");
        assert_eq!(driver.total_energy_consumed, 0.0);
        assert_eq!(driver.total_theoretical_energy_consumed, 0.0);
        assert_eq!(driver.distance_traveled, 0.0);
    }

    #[test]
    fn test_accumulators_add() {
        let mut driver = Driver::new("D1".to_string(), "Alice".to_string());

        driver.add_energy_consumed(20.0);
        driver.add_energy_consumed(10.0);
        driver.add_theoretical_energy_consumed(80.0);
        driver.add_theoretical_energy_consumed(70.0);
        driver.add_distance(50.0);
        driver.add_distance(5.0);

        assert_eq!(driver.total_energy_consumed, 30.0);
        assert_eq!(driver.total_theoretical_energy_consumed, 150.0);
        assert_eq!(driver.distance_traveled, 55.0);
    }

    #[test]
    fn test_accumulators_accept_negative() {
        let mut driver = Driver::new("D1".to_string(), "Alice".to_string());
        driver.add_distance(-3.0);
        assert_eq!(driver.distance_traveled, -3.0);
    }
}
