//! Tab identifiers
//!
//! Declaration order is the canonical bar order and the total order used
//! by `Ord`.

use serde::{Deserialize, Serialize};

use crate::catalog::TabCatalog;
use crate::error::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabId {
    Reflect,
    Plots,
    Experiments,
    Insights,
    History,
    Goals,
    Metrics,
    Events,
    Reports,
    Timers,
    /// The tab-arrangement editor, labelled "Edit"
    TabSelection,
}

impl TabId {
    /// Every tab, in bar order
    pub const ALL: [TabId; 11] = [
        TabId::Reflect,
        TabId::Plots,
        TabId::Experiments,
        TabId::Insights,
        TabId::History,
        TabId::Goals,
        TabId::Metrics,
        TabId::Events,
        TabId::Reports,
        TabId::Timers,
        TabId::TabSelection,
    ];

    /// Position of this tab in [`TabId::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TabId::Reflect => "reflect",
            TabId::Plots => "plots",
            TabId::Experiments => "experiments",
            TabId::Insights => "insights",
            TabId::History => "history",
            TabId::Goals => "goals",
            TabId::Metrics => "metrics",
            TabId::Events => "events",
            TabId::Reports => "reports",
            TabId::Timers => "timers",
            TabId::TabSelection => "tab_selection",
        }
    }

    /// Text shown under the icon
    pub fn label(&self) -> &'static str {
        TabCatalog::lookup(*self).label
    }

    /// Symbol name of the tab icon
    pub fn icon(&self) -> &'static str {
        TabCatalog::lookup(*self).icon
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TabId {
    type Err = CatalogError;

    /// Accepts either the identifier (`tab_selection`) or the label (`Edit`),
    /// ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        TabId::ALL
            .iter()
            .copied()
            .find(|tab| {
                tab.as_str().eq_ignore_ascii_case(needle) || tab.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| CatalogError::UnknownTab(s.to_string()))
    }
}
