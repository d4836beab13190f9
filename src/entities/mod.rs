// Entity Models
// Three record types tracked by the swap registry:
//
// - Battery: charge level + current assignment
// - Driver:  cumulative consumption and distance
// - Station: identity + swap capacity
//
// Identity (`id`) never changes once created. Entities are never deleted.

pub mod battery;
pub mod driver;
pub mod station;

pub use battery::Battery;
pub use driver::Driver;
pub use station::Station;
