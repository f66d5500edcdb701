//! Tabdock Core
//!
//! Wires the retention cache and the layout planner to a content provider.
//! The host owns all tab state; the rendering layer only reads snapshots
//! and geometry from it.

mod config;
mod error;
mod host;
mod provider;

pub use config::Config;
pub use error::CoreError;
pub use host::{BarItem, ScrollRequest, TabHost};
pub use provider::TabContentProvider;

// Re-export core components
pub use tabdock_catalog::{CatalogError, TabCatalog, TabId, TabInfo};
pub use tabdock_layout::{FadeMask, ItemGeometry, LayoutMetrics, LayoutPlan, Rect, TabBarLayoutPlanner};
pub use tabdock_retention::{
    RetentionChange, RetentionError, RetentionPolicy, RetentionState, SubscriptionId,
    TabRetentionCache,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Install the global `tracing` subscriber, writing to stderr.
///
/// `RUST_LOG` wins when set; otherwise `default_directive` applies (e.g.
/// `"info"` or `"tabdock_retention=debug"`). Returns false when a subscriber
/// was already installed.
pub fn init_logging(default_directive: &str) -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice_is_noop() {
        init_logging("debug");
        assert!(!init_logging("info"));
    }
}
