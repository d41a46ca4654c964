//! Per-room daily update storage.
//!
//! Updates are grouped by room, username and calendar day and kept in a
//! key-value "brain" behind the [`Brain`] trait, one record per room. The
//! default [`MemoryBrain`] keeps everything in process memory; swapping in
//! a persistent backend is a matter of implementing the trait.

mod brain;
mod error;
mod store;
mod types;

pub use brain::{Brain, MemoryBrain};
pub use error::StoreError;
pub use store::{DayRemoval, UpdateStore};
pub use types::{RoomRecord, UserRecord};
