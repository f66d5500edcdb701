//! Retention policy
//!
//! The default tab group and the total number of tab contents that may be
//! mounted at once.

use serde::{Deserialize, Serialize};
use tabdock_catalog::TabId;

use crate::error::RetentionError;
use crate::Result;

pub const DEFAULT_CAPACITY: usize = 5;

pub const DEFAULT_TABS: [TabId; 4] = [
    TabId::Reflect,
    TabId::Plots,
    TabId::Experiments,
    TabId::Insights,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetentionPolicy {
    /// Tabs that are always retained as a group, in order
    pub default_tabs: Vec<TabId>,
    /// Upper bound on retained tabs
    pub capacity: usize,
}

impl RetentionPolicy {
    pub fn new(default_tabs: Vec<TabId>, capacity: usize) -> Result<Self> {
        let policy = Self {
            default_tabs,
            capacity,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// The default group must be non-empty, free of duplicates, and leave
    /// at least one slot for a non-default tab.
    pub fn validate(&self) -> Result<()> {
        if self.default_tabs.is_empty() {
            return Err(RetentionError::InvalidPolicy(
                "default tabs cannot be empty".to_string(),
            ));
        }

        for (i, tab) in self.default_tabs.iter().enumerate() {
            if self.default_tabs[..i].contains(tab) {
                return Err(RetentionError::InvalidPolicy(format!(
                    "default tab listed twice: {}",
                    tab
                )));
            }
        }

        if self.default_tabs.len() >= self.capacity {
            return Err(RetentionError::InvalidPolicy(format!(
                "capacity {} leaves no room beyond {} default tabs",
                self.capacity,
                self.default_tabs.len()
            )));
        }

        Ok(())
    }

    pub fn is_default(&self, tab: TabId) -> bool {
        self.default_tabs.contains(&tab)
    }

    /// Tab selected before any user input
    pub fn initial_tab(&self) -> TabId {
        self.default_tabs.first().copied().unwrap_or(TabId::Reflect)
    }
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self {
            default_tabs: DEFAULT_TABS.to_vec(),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_valid() {
        let policy = RetentionPolicy::default();
        assert!(policy.validate().is_ok());
        assert_eq!(policy.capacity, 5);
        assert_eq!(policy.initial_tab(), TabId::Reflect);
        assert!(policy.is_default(TabId::Insights));
        assert!(!policy.is_default(TabId::Goals));
    }

    #[test]
    fn test_rejects_empty_defaults() {
        assert!(RetentionPolicy::new(Vec::new(), 5).is_err());
    }

    #[test]
    fn test_rejects_duplicate_defaults() {
        let result = RetentionPolicy::new(vec![TabId::Reflect, TabId::Plots, TabId::Reflect], 5);
        assert!(matches!(result, Err(RetentionError::InvalidPolicy(_))));
    }

    #[test]
    fn test_rejects_capacity_without_spare_slot() {
        assert!(RetentionPolicy::new(DEFAULT_TABS.to_vec(), 4).is_err());
        assert!(RetentionPolicy::new(DEFAULT_TABS.to_vec(), 3).is_err());
        assert!(RetentionPolicy::new(DEFAULT_TABS.to_vec(), 6).is_ok());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let policy: RetentionPolicy = serde_json::from_str(r#"{"capacity": 7}"#).unwrap();
        assert_eq!(policy.default_tabs, DEFAULT_TABS.to_vec());
        assert_eq!(policy.capacity, 7);
    }
}
