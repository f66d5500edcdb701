//! Tabdock Tab Catalog
//!
//! The fixed set of tabs the bar can show. Each tab carries a display
//! label and an icon reference; there is no behaviour beyond lookup.

mod catalog;
mod error;
mod tab;

pub use catalog::{TabCatalog, TabInfo};
pub use error::CatalogError;
pub use tab::TabId;
