// ⛽ Station Entity
//
// `swap_capacity` is recorded at creation but nothing reads or enforces it:
// swaps never count against it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    pub swap_capacity: f64,
}

impl Station {
    pub fn new(id: String, swap_capacity: f64) -> Self {
        Station { id, swap_capacity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_creation() {
        let station = Station::new("S1".to_string(), 5.0);
        assert_eq!(station.id, "S1");
        assert_eq!(station.swap_capacity, 5.0);
    }
}
