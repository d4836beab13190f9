// Battery Swap - Core Library
// In-memory bookkeeping for a battery-swap operation: batteries, drivers,
// stations, and the swap transaction that ties them together.

pub mod config;
pub mod cost;
pub mod entities;
pub mod error;
pub mod events;
pub mod receipt;
pub mod registry;
pub mod sink;

// Re-export commonly used types
pub use config::{RegistryConfig, CONVERSION_RATE_ENV, DEFAULT_CONVERSION_RATE};
pub use cost::CostCalculator;
pub use entities::{Battery, Driver, Station};
pub use error::{EntityKind, Result, SwapError};
pub use events::{SwapEvent, SwapLedger};
pub use receipt::Receipt;
pub use registry::{RegistrySnapshot, SwapRegistry};
pub use sink::{MemorySink, ReceiptSink, StdoutSink, TracingSink};
