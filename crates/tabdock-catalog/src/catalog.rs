//! Static lookup table from tab to its display metadata

use serde::Serialize;

use crate::tab::TabId;

/// One row of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TabInfo {
    pub id: TabId,
    pub label: &'static str,
    pub icon: &'static str,
}

impl TabInfo {
    const fn row(id: TabId, label: &'static str, icon: &'static str) -> Self {
        Self { id, label, icon }
    }
}

static CATALOG: [TabInfo; 11] = [
    TabInfo::row(TabId::Reflect, "Reflect", "menucard.fill"),
    TabInfo::row(TabId::Plots, "Plots", "chart.xyaxis.line"),
    TabInfo::row(TabId::Experiments, "Experiments", "testtube.2"),
    TabInfo::row(TabId::Insights, "Insights", "lightbulb.fill"),
    TabInfo::row(TabId::History, "History", "clock"),
    TabInfo::row(TabId::Goals, "Goals", "target"),
    TabInfo::row(TabId::Metrics, "Metrics", "compass.drawing"),
    TabInfo::row(TabId::Events, "Events", "calendar.badge.plus"),
    TabInfo::row(TabId::Reports, "Reports", "chart.line.uptrend.xyaxis"),
    TabInfo::row(TabId::Timers, "Timers", "stopwatch"),
    TabInfo::row(TabId::TabSelection, "Edit", "rectangle.stack.badge.plus"),
];

/// Read-only access to the tab catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct TabCatalog;

impl TabCatalog {
    /// All rows, in bar order
    pub fn all() -> &'static [TabInfo] {
        &CATALOG
    }

    pub fn lookup(tab: TabId) -> &'static TabInfo {
        &CATALOG[tab.index()]
    }

    pub fn count() -> usize {
        CATALOG.len()
    }
}
