// 💵 Cost Calculator
// The reduced profile: energy in, dollars out, no entity tracking.
// The registry prices its swaps through the same type.

use crate::config::DEFAULT_CONVERSION_RATE;
use crate::sink::ReceiptSink;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostCalculator {
    conversion_rate: f64,
}

impl CostCalculator {
    pub fn new(conversion_rate: f64) -> Self {
        CostCalculator { conversion_rate }
    }

    pub fn conversion_rate(&self) -> f64 {
        self.conversion_rate
    }

    /// cost = energy_used * conversion_rate
    pub fn cost(&self, energy_used: f64) -> f64 {
        energy_used * self.conversion_rate
    }

    /// Compute the cost and write `Cost: $<cost>.` to the sink
    pub fn report(&self, energy_used: f64, sink: &dyn ReceiptSink) -> f64 {
        let cost = self.cost(energy_used);
        sink.write(&format!("Cost: ${}.", cost));
        cost
    }
}

impl Default for CostCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_CONVERSION_RATE)
    }
}
