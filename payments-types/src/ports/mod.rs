//! Port traits (interfaces for adapters).
//!
//! Wall-clock time and identifier generation are the only outside resources
//! the domain touches. Factories take them through these traits so callers
//! can inject deterministic versions.

mod clock;
mod ids;

pub use clock::{Clock, FixedClock, SystemClock};
pub use ids::{FixedIdGenerator, IdGenerator, UuidGenerator};
