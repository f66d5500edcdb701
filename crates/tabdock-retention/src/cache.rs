//! Tab Retention Cache
//!
//! Owns the current selection and the bounded set of retained tabs, and
//! publishes a [`RetentionChange`] to subscribers whenever either moves.

use parking_lot::{Mutex, RwLock};
use std::collections::VecDeque;
use std::sync::Arc;

use tabdock_catalog::TabId;

use crate::policy::RetentionPolicy;
use crate::state::{RetentionChange, RetentionState};
use crate::Result;

type Callback = Arc<dyn Fn(&RetentionChange) + Send + Sync>;

/// Handle returned by [`TabRetentionCache::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback)>,
}

/// Selections made while subscribers are being notified wait here
#[derive(Default)]
struct Dispatch {
    active: bool,
    pending: VecDeque<TabId>,
}

/// Ends a dispatch round that unwound out of a subscriber, dropping the
/// selections queued during it.
struct DispatchGuard<'a> {
    dispatch: &'a Mutex<Dispatch>,
    armed: bool,
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            let mut dispatch = self.dispatch.lock();
            dispatch.active = false;
            dispatch.pending.clear();
        }
    }
}

pub struct TabRetentionCache {
    policy: Arc<RetentionPolicy>,
    state: Arc<RwLock<RetentionState>>,
    subscribers: Arc<RwLock<Subscribers>>,
    dispatch: Arc<Mutex<Dispatch>>,
}

impl TabRetentionCache {
    pub fn new(policy: RetentionPolicy) -> Result<Self> {
        policy.validate()?;
        Ok(Self::with_valid_policy(policy))
    }

    fn with_valid_policy(policy: RetentionPolicy) -> Self {
        let state = RetentionState::initial(&policy.default_tabs, policy.initial_tab());

        tracing::debug!(
            selected = %state.selected,
            retained = ?state.retained,
            capacity = policy.capacity,
            "Created retention cache"
        );

        Self {
            policy: Arc::new(policy),
            state: Arc::new(RwLock::new(state)),
            subscribers: Arc::new(RwLock::new(Subscribers::default())),
            dispatch: Arc::new(Mutex::new(Dispatch::default())),
        }
    }

    pub fn policy(&self) -> &RetentionPolicy {
        &self.policy
    }

    pub fn current_state(&self) -> RetentionState {
        self.state.read().clone()
    }

    pub fn is_default(&self, tab: TabId) -> bool {
        self.policy.is_default(tab)
    }

    pub fn is_retained(&self, tab: TabId) -> bool {
        self.state.read().is_retained(tab)
    }

    /// Make `tab` the current selection and update the retained set.
    ///
    /// Subscribers are notified before this returns. When called from
    /// inside a subscriber, the selection is queued and applied once the
    /// current round of notifications finishes; the returned state is then
    /// the one in effect at the time of the call.
    pub fn select(&self, tab: TabId) -> RetentionState {
        {
            let mut dispatch = self.dispatch.lock();
            if dispatch.active {
                tracing::debug!(tab = %tab, "Queued selection made during notification");
                dispatch.pending.push_back(tab);
                drop(dispatch);
                return self.current_state();
            }
            dispatch.active = true;
        }

        let mut guard = DispatchGuard {
            dispatch: &self.dispatch,
            armed: true,
        };

        let mut next = Some(tab);
        while let Some(tab) = next {
            if let Some(change) = self.apply(tab) {
                self.publish(&change);
            }

            let mut dispatch = self.dispatch.lock();
            next = dispatch.pending.pop_front();
            if next.is_none() {
                dispatch.active = false;
            }
        }
        guard.armed = false;

        self.current_state()
    }

    /// Register an observer. Callbacks run synchronously, in registration
    /// order, with no internal lock held.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&RetentionChange) + Send + Sync + 'static,
    {
        let mut subscribers = self.subscribers.write();
        let id = SubscriptionId(subscribers.next_id);
        subscribers.next_id += 1;
        subscribers.entries.push((id, Arc::new(callback)));

        tracing::trace!(subscription = id.0, "Added retention subscriber");

        id
    }

    /// Returns false if the subscription was already gone
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.write();
        let before = subscribers.entries.len();
        subscribers.entries.retain(|(entry_id, _)| *entry_id != id);
        let removed = subscribers.entries.len() != before;

        if removed {
            tracing::trace!(subscription = id.0, "Removed retention subscriber");
        }

        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().entries.len()
    }

    /// Apply the retention rules for one selection. Returns `None` when
    /// nothing observable changed.
    fn apply(&self, tab: TabId) -> Option<RetentionChange> {
        let mut state = self.state.write();
        let previous = state.clone();
        let capacity = self.policy.capacity;

        state.selected = tab;

        if self.policy.is_default(tab) {
            state.retained = self.policy.default_tabs.clone();
            if let Some(last) = state.last_non_default {
                if state.retained.len() < capacity {
                    state.retained.push(last);
                }
            }
        } else {
            if !state.retained.contains(&tab) {
                if state.retained.len() >= capacity {
                    if let Some(evicted) = state.retained.pop() {
                        tracing::debug!(evicted = %evicted, incoming = %tab, "Evicted retained tab");
                    }
                }
                state.retained.push(tab);
            }
            state.last_non_default = Some(tab);
        }

        if state.selected == previous.selected && state.retained == previous.retained {
            return None;
        }

        tracing::debug!(
            from = %previous.selected,
            to = %state.selected,
            retained = ?state.retained,
            "Tab selection changed"
        );

        Some(RetentionChange::between(&previous, &state))
    }

    fn publish(&self, change: &RetentionChange) {
        let callbacks: Vec<Callback> = self
            .subscribers
            .read()
            .entries
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();

        for callback in callbacks {
            callback(change);
        }
    }
}

impl Default for TabRetentionCache {
    fn default() -> Self {
        Self::with_valid_policy(RetentionPolicy::default())
    }
}

impl Clone for TabRetentionCache {
    fn clone(&self) -> Self {
        Self {
            policy: Arc::clone(&self.policy),
            state: Arc::clone(&self.state),
            subscribers: Arc::clone(&self.subscribers),
            dispatch: Arc::clone(&self.dispatch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::DEFAULT_TABS;

    fn defaults_then(extra: TabId) -> Vec<TabId> {
        let mut tabs = DEFAULT_TABS.to_vec();
        tabs.push(extra);
        tabs
    }

    fn recorder(cache: &TabRetentionCache) -> Arc<Mutex<Vec<RetentionChange>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        cache.subscribe(move |change| sink.lock().push(change.clone()));
        seen
    }

    #[test]
    fn test_initial_state() {
        let cache = TabRetentionCache::default();
        let state = cache.current_state();
        assert_eq!(state.selected, TabId::Reflect);
        assert_eq!(state.retained, DEFAULT_TABS.to_vec());
        assert_eq!(state.last_non_default, None);
    }

    #[test]
    fn test_selection_scenarios() {
        let cache = TabRetentionCache::default();

        let state = cache.select(TabId::Reflect);
        assert_eq!(state.retained, DEFAULT_TABS.to_vec());
        assert_eq!(state.selected, TabId::Reflect);

        let state = cache.select(TabId::Goals);
        assert_eq!(state.retained, defaults_then(TabId::Goals));
        assert_eq!(state.selected, TabId::Goals);
        assert_eq!(state.last_non_default, Some(TabId::Goals));

        // Goals is evicted to make room
        let state = cache.select(TabId::History);
        assert_eq!(state.retained, defaults_then(TabId::History));
        assert_eq!(state.last_non_default, Some(TabId::History));

        let state = cache.select(TabId::Plots);
        assert_eq!(state.retained, defaults_then(TabId::History));
        assert_eq!(state.selected, TabId::Plots);
        assert_eq!(state.last_non_default, Some(TabId::History));
    }

    #[test]
    fn test_reselecting_retained_extra_keeps_position() {
        let cache = TabRetentionCache::default();
        cache.select(TabId::Timers);
        cache.select(TabId::Insights);
        let state = cache.select(TabId::Timers);
        assert_eq!(state.retained, defaults_then(TabId::Timers));
        assert_eq!(state.selected, TabId::Timers);
    }

    #[test]
    fn test_invariants_hold_for_all_short_sequences() {
        for a in TabId::ALL {
            for b in TabId::ALL {
                for c in TabId::ALL {
                    let cache = TabRetentionCache::default();
                    for tab in [a, b, c] {
                        let state = cache.select(tab);
                        assert!(state.retained.len() <= 5);
                        assert!(state.is_retained(state.selected));
                        assert_eq!(state.selected, tab);

                        let mut unique = state.retained.clone();
                        unique.sort();
                        unique.dedup();
                        assert_eq!(unique.len(), state.retained.len());

                        if cache.is_default(tab) {
                            assert_eq!(&state.retained[..4], &DEFAULT_TABS[..]);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_select_is_idempotent() {
        for first in TabId::ALL {
            for tab in TabId::ALL {
                let cache = TabRetentionCache::default();
                cache.select(first);
                let once = cache.select(tab);
                let twice = cache.select(tab);
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    fn test_larger_capacity_keeps_more_extras() {
        let policy = RetentionPolicy::new(DEFAULT_TABS.to_vec(), 6).unwrap();
        let cache = TabRetentionCache::new(policy).unwrap();
        cache.select(TabId::Goals);
        cache.select(TabId::History);
        let state = cache.select(TabId::Metrics);
        assert_eq!(state.retained.len(), 6);
        assert_eq!(state.retained[4], TabId::Goals);
        assert_eq!(state.retained[5], TabId::Metrics);
    }

    #[test]
    fn test_invalid_policy_rejected() {
        let policy = RetentionPolicy {
            default_tabs: DEFAULT_TABS.to_vec(),
            capacity: 4,
        };
        assert!(TabRetentionCache::new(policy).is_err());
    }

    #[test]
    fn test_subscribers_see_mounts_and_unmounts() {
        let cache = TabRetentionCache::default();
        let seen = recorder(&cache);

        cache.select(TabId::Goals);
        cache.select(TabId::History);
        cache.select(TabId::Plots);

        let seen = seen.lock();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0].mounted, vec![TabId::Goals]);
        assert!(seen[0].unmounted.is_empty());
        assert_eq!(seen[1].mounted, vec![TabId::History]);
        assert_eq!(seen[1].unmounted, vec![TabId::Goals]);
        assert!(seen[2].is_selection_only());
        assert_eq!(seen[2].state.selected, TabId::Plots);
    }

    #[test]
    fn test_no_publication_without_change() {
        let cache = TabRetentionCache::default();
        let seen = recorder(&cache);

        cache.select(TabId::Reflect);
        cache.select(TabId::Goals);
        cache.select(TabId::Goals);

        assert_eq!(seen.lock().len(), 1);
    }

    #[test]
    fn test_unsubscribe() {
        let cache = TabRetentionCache::default();
        let seen = Arc::new(Mutex::new(0usize));
        let sink = Arc::clone(&seen);
        let id = cache.subscribe(move |_| *sink.lock() += 1);

        cache.select(TabId::Goals);
        assert!(cache.unsubscribe(id));
        assert!(!cache.unsubscribe(id));
        cache.select(TabId::History);

        assert_eq!(*seen.lock(), 1);
        assert_eq!(cache.subscriber_count(), 0);
    }

    #[test]
    fn test_select_from_subscriber_is_queued_in_order() {
        let cache = TabRetentionCache::default();
        let handle = cache.clone();
        cache.subscribe(move |change| {
            if change.state.selected == TabId::Goals {
                handle.select(TabId::History);
            }
        });
        let seen = recorder(&cache);

        let state = cache.select(TabId::Goals);
        assert_eq!(state.selected, TabId::History);

        let order: Vec<TabId> = seen.lock().iter().map(|c| c.state.selected).collect();
        assert_eq!(order, vec![TabId::Goals, TabId::History]);
    }

    #[test]
    fn test_panicking_subscriber_does_not_wedge_cache() {
        let cache = TabRetentionCache::default();
        let id = cache.subscribe(|_| panic!("subscriber failed"));

        let handle = cache.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            handle.select(TabId::Goals);
        }));
        assert!(result.is_err());

        assert!(cache.unsubscribe(id));
        let state = cache.select(TabId::History);
        assert_eq!(state.selected, TabId::History);
        assert_eq!(state.retained, defaults_then(TabId::History));
    }

    #[test]
    fn test_clones_share_state() {
        let cache = TabRetentionCache::default();
        let other = cache.clone();
        other.select(TabId::Events);
        assert!(cache.is_retained(TabId::Events));
        assert_eq!(cache.current_state().selected, TabId::Events);
    }
}
