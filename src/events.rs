// 📜 Swap Ledger
// Append-only record of successful swaps. Failed swaps leave no trace here.

use crate::receipt::Receipt;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapEvent {
    pub event_id: String,
    pub timestamp: DateTime<Utc>,
    /// Receipts carry the driver's name; the ledger keeps the id for lookups
    pub driver_id: String,
    pub receipt: Receipt,
    pub battery_energy_after: f64,
}

impl SwapEvent {
    pub fn new(driver_id: String, receipt: Receipt, battery_energy_after: f64) -> Self {
        SwapEvent {
            event_id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            driver_id,
            receipt,
            battery_energy_after,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SwapLedger {
    events: Vec<SwapEvent>,
}

impl SwapLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: SwapEvent) {
        self.events.push(event);
    }

    /// All events, oldest first
    pub fn events(&self) -> &[SwapEvent] {
        &self.events
    }

    pub fn for_battery(&self, battery_id: &str) -> Vec<&SwapEvent> {
        self.events
            .iter()
            .filter(|e| e.receipt.battery_id == battery_id)
            .collect()
    }

    pub fn for_driver(&self, driver_id: &str) -> Vec<&SwapEvent> {
        self.events
            .iter()
            .filter(|e| e.driver_id == driver_id)
            .collect()
    }

    /// Sum of all receipt costs
    pub fn total_revenue(&self) -> f64 {
        self.events.iter().map(|e| e.receipt.cost).sum()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
