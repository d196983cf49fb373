// FilterTrack - maintenance event tracking on SQLite

pub mod clock;
pub mod config;
pub mod error;
pub mod export;
pub mod record;
pub mod render;
pub mod store;

// Re-export main types for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ExitStatus, StoreError};
pub use record::{FilterChange, FilterChangeUpdate, NewFilterChange, UpdateOutcome};
pub use store::Store;
