//! Tabdock Tab Bar Layout
//!
//! Decides whether the tab bar fits its container or has to scroll, and
//! produces per-item geometry for either case. Everything here is a pure
//! function of the item count, the container width and [`LayoutMetrics`].

mod metrics;
mod plan;
mod planner;

pub use metrics::LayoutMetrics;
pub use plan::{FadeMask, ItemGeometry, LayoutPlan, Rect};
pub use planner::TabBarLayoutPlanner;
