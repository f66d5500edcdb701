//! Tabdock Tab Retention
//!
//! Decides which tab contents stay mounted as the user moves between tabs.
//! The default tabs are always kept together; on top of them a single slot
//! remembers the most recent non-default choice. Observers receive an
//! immutable snapshot on every change.

mod cache;
mod error;
mod policy;
mod state;

pub use cache::{SubscriptionId, TabRetentionCache};
pub use error::RetentionError;
pub use policy::{RetentionPolicy, DEFAULT_CAPACITY, DEFAULT_TABS};
pub use state::{RetentionChange, RetentionState};

pub type Result<T> = std::result::Result<T, RetentionError>;
