// 🔄 Swap Registry - owns every battery, driver and station
//
// Registration appends (duplicate ids are accepted; lookups take the first
// match). `swap` validates all three ids BEFORE touching any state, then
// applies the updates in a fixed order:
//
//   1. battery.consume(energy_used)
//   2. battery.assign(driver_id, station_id)
//   3. cost = energy_used * conversion_rate
//   4. driver.add_energy_consumed(energy_used)
//   5. driver.add_theoretical_energy_consumed(battery.energy_level)  <- post-swap level
//   6. driver.add_distance(distance_traveled)
//
// Nothing after validation can fail, so there is no rollback.

use crate::config::RegistryConfig;
use crate::cost::CostCalculator;
use crate::entities::{Battery, Driver, Station};
use crate::error::{EntityKind, Result, SwapError};
use crate::events::{SwapEvent, SwapLedger};
use crate::receipt::Receipt;
use crate::sink::ReceiptSink;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

// ============================================================================
// SNAPSHOT
// ============================================================================

/// Point-in-time copy of the registry's collections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub conversion_rate: f64,
    pub batteries: Vec<Battery>,
    pub drivers: Vec<Driver>,
    pub stations: Vec<Station>,
}

// ============================================================================
// SWAP REGISTRY
// ============================================================================

/// The whole bookkeeping model.
///
/// `swap` takes `&mut self`, so two swaps can never interleave on one registry.
/// Share across threads with `Arc<Mutex<SwapRegistry>>`.
pub struct SwapRegistry {
    batteries: Vec<Battery>,
    drivers: Vec<Driver>,
    stations: Vec<Station>,
    pricing: CostCalculator,
    ledger: SwapLedger,
    sink: Box<dyn ReceiptSink>,
}

impl SwapRegistry {
    /// Registry with the default conversion rate (0.1)
    pub fn new(sink: impl ReceiptSink + 'static) -> Self {
        Self::with_config(RegistryConfig::default(), sink)
    }

    pub fn with_config(config: RegistryConfig, sink: impl ReceiptSink + 'static) -> Self {
        SwapRegistry {
            batteries: Vec::new(),
            drivers: Vec::new(),
            stations: Vec::new(),
            pricing: CostCalculator::new(config.conversion_rate),
            ledger: SwapLedger::new(),
            sink: Box::new(sink),
        }
    }

    pub fn conversion_rate(&self) -> f64 {
        self.pricing.conversion_rate()
    }

    // ========================================================================
    // REGISTRATION
    // ========================================================================

    pub fn register_battery(&mut self, id: &str, energy_level: f64) {
        if self.find_battery(id).is_some() {
            warn!(battery_id = id, "battery id already registered, earlier entry shadows this one");
        }
        debug!(battery_id = id, energy_level, "registered battery");
        self.batteries.push(Battery::new(id.to_string(), energy_level));
    }

    pub fn register_driver(&mut self, id: &str, name: &str) {
        if self.find_driver(id).is_some() {
            warn!(driver_id = id, "driver id already registered, earlier entry shadows this one");
        }
        debug!(driver_id = id, name, "registered driver");
        self.drivers.push(Driver::new(id.to_string(), name.to_string()));
    }

    pub fn register_station(&mut self, id: &str, swap_capacity: f64) {
        if self.find_station(id).is_some() {
            warn!(station_id = id, "station id already registered, earlier entry shadows this one");
        }
        debug!(station_id = id, swap_capacity, "registered station");
        self.stations.push(Station::new(id.to_string(), swap_capacity));
    }

    // ========================================================================
    // SWAP
    // ========================================================================

    /// Swap `battery_id` to `driver_id` at `station_id`.
    ///
    /// Returns the receipt and writes its text to the sink. Fails with
    /// `SwapError::NotFound` (no state touched) if any id is unknown.
    pub fn swap(
        &mut self,
        battery_id: &str,
        driver_id: &str,
        station_id: &str,
        energy_used: f64,
        distance_traveled: f64,
    ) -> Result<Receipt> {
        let (battery_idx, driver_idx) = self.locate(battery_id, driver_id, station_id)?;

        let battery = &mut self.batteries[battery_idx];
        battery.consume(energy_used);
        battery.assign(driver_id.to_string(), station_id.to_string());

        let cost = self.pricing.cost(energy_used);

        let driver = &mut self.drivers[driver_idx];
        driver.add_energy_consumed(energy_used);
        driver.add_theoretical_energy_consumed(battery.energy_level);
        driver.add_distance(distance_traveled);

        let energy_after = battery.energy_level;
        if battery.is_depleted() {
            warn!(battery_id, energy_level = energy_after, "battery energy level is negative after swap");
        }

        let receipt = Receipt::new(
            battery_id.to_string(),
            driver.name.clone(),
            station_id.to_string(),
            energy_used,
            driver.distance_traveled,
            cost,
        );

        info!(battery_id, driver_id, station_id, energy_used, cost, "battery swapped");

        self.sink.write(&receipt.render());
        self.ledger
            .record(SwapEvent::new(driver_id.to_string(), receipt.clone(), energy_after));

        Ok(receipt)
    }

    /// Resolve battery and driver positions, and check the station exists
    fn locate(&self, battery_id: &str, driver_id: &str, station_id: &str) -> Result<(usize, usize)> {
        let battery_idx = self.batteries.iter().position(|b| b.id == battery_id);
        let driver_idx = self.drivers.iter().position(|d| d.id == driver_id);
        let station_known = self.stations.iter().any(|s| s.id == station_id);

        let missing = match (battery_idx, driver_idx, station_known) {
            (Some(b), Some(d), true) => return Ok((b, d)),
            (None, _, _) => (EntityKind::Battery, battery_id),
            (_, None, _) => (EntityKind::Driver, driver_id),
            (_, _, false) => (EntityKind::Station, station_id),
        };

        warn!(kind = missing.0.as_str(), id = missing.1, "swap rejected: unknown entity");
        Err(SwapError::NotFound {
            kind: missing.0,
            id: missing.1.to_string(),
        })
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn find_battery(&self, id: &str) -> Option<&Battery> {
        self.batteries.iter().find(|b| b.id == id)
    }

    pub fn find_driver(&self, id: &str) -> Option<&Driver> {
        self.drivers.iter().find(|d| d.id == id)
    }

    pub fn find_station(&self, id: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.id == id)
    }

    /// Insertion order
    pub fn batteries(&self) -> &[Battery] {
        &self.batteries
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Batteries whose last swap happened at `station_id`
    pub fn batteries_at_station(&self, station_id: &str) -> Vec<&Battery> {
        self.batteries
            .iter()
            .filter(|b| b.station_id.as_deref() == Some(station_id))
            .collect()
    }

    /// Batteries currently assigned to `driver_id`
    pub fn batteries_for_driver(&self, driver_id: &str) -> Vec<&Battery> {
        self.batteries
            .iter()
            .filter(|b| b.driver_id.as_deref() == Some(driver_id))
            .collect()
    }

    /// Batteries in overdraft (negative energy level)
    pub fn depleted_batteries(&self) -> Vec<&Battery> {
        self.batteries.iter().filter(|b| b.is_depleted()).collect()
    }

    // ========================================================================
    // LEDGER
    // ========================================================================

    pub fn events(&self) -> &[SwapEvent] {
        self.ledger.events()
    }

    pub fn events_for_battery(&self, battery_id: &str) -> Vec<&SwapEvent> {
        self.ledger.for_battery(battery_id)
    }

    pub fn events_for_driver(&self, driver_id: &str) -> Vec<&SwapEvent> {
        self.ledger.for_driver(driver_id)
    }

    pub fn total_revenue(&self) -> f64 {
        self.ledger.total_revenue()
    }

    // ========================================================================
    // EXPORT
    // ========================================================================

    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            conversion_rate: self.conversion_rate(),
            batteries: self.batteries.clone(),
            drivers: self.drivers.clone(),
            stations: self.stations.clone(),
        }
    }

    pub fn snapshot_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }
}

// ============================================================================
// TESTS
// ============================================================================
