//! Retention snapshots

use serde::{Deserialize, Serialize};
use tabdock_catalog::TabId;

/// Immutable view of which tabs are mounted and which one is selected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetentionState {
    /// Currently active tab, always present in `retained`
    pub selected: TabId,
    /// Tabs whose content stays mounted, in display order
    pub retained: Vec<TabId>,
    /// Most recent selection outside the default group
    pub last_non_default: Option<TabId>,
}

impl RetentionState {
    pub(crate) fn initial(default_tabs: &[TabId], selected: TabId) -> Self {
        Self {
            selected,
            retained: default_tabs.to_vec(),
            last_non_default: None,
        }
    }

    pub fn is_retained(&self, tab: TabId) -> bool {
        self.retained.contains(&tab)
    }

    pub fn is_selected(&self, tab: TabId) -> bool {
        self.selected == tab
    }
}

/// Published to observers whenever the selection or the retained set moves
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RetentionChange {
    pub state: RetentionState,
    /// Tabs that entered `retained`, in retained order
    pub mounted: Vec<TabId>,
    /// Tabs that left `retained`, in their previous order
    pub unmounted: Vec<TabId>,
}

impl RetentionChange {
    pub(crate) fn between(previous: &RetentionState, next: &RetentionState) -> Self {
        let mounted = next
            .retained
            .iter()
            .filter(|tab| !previous.retained.contains(tab))
            .copied()
            .collect();
        let unmounted = previous
            .retained
            .iter()
            .filter(|tab| !next.retained.contains(tab))
            .copied()
            .collect();

        Self {
            state: next.clone(),
            mounted,
            unmounted,
        }
    }

    /// True when only the selection moved
    pub fn is_selection_only(&self) -> bool {
        self.mounted.is_empty() && self.unmounted.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_between_snapshots() {
        let previous = RetentionState {
            selected: TabId::Goals,
            retained: vec![TabId::Reflect, TabId::Plots, TabId::Goals],
            last_non_default: Some(TabId::Goals),
        };
        let next = RetentionState {
            selected: TabId::History,
            retained: vec![TabId::Reflect, TabId::Plots, TabId::History],
            last_non_default: Some(TabId::History),
        };

        let change = RetentionChange::between(&previous, &next);
        assert_eq!(change.mounted, vec![TabId::History]);
        assert_eq!(change.unmounted, vec![TabId::Goals]);
        assert!(!change.is_selection_only());
        assert!(change.state.is_selected(TabId::History));
    }

    #[test]
    fn test_state_serializes_identifiers() {
        let state = RetentionState::initial(&[TabId::Reflect, TabId::Plots], TabId::Reflect);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["selected"], "reflect");
        assert_eq!(json["retained"][1], "plots");
        assert!(json["last_non_default"].is_null());
    }
}
