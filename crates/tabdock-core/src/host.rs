//! Tab host
//!
//! Owns the retention cache, the layout plan and the mounted content
//! views. The rendering layer drives it with taps and resizes and reads
//! back bar items, views and scroll requests.

use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use tabdock_catalog::{TabCatalog, TabId, TabInfo};
use tabdock_layout::{ItemGeometry, LayoutPlan, Rect, TabBarLayoutPlanner};
use tabdock_retention::{RetentionChange, RetentionState, SubscriptionId, TabRetentionCache};

use crate::config::Config;
use crate::provider::TabContentProvider;
use crate::Result;

/// Ask the renderer to bring a tab into view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub tab: TabId,
    /// Target horizontal offset of the scrolling row
    pub offset: f32,
    /// Transition smoothly rather than jumping
    pub animated: bool,
}

/// One entry of the tab bar as the renderer should draw it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarItem {
    pub info: &'static TabInfo,
    pub selected: bool,
    pub geometry: ItemGeometry,
}

pub struct TabHost<P: TabContentProvider> {
    cache: TabRetentionCache,
    subscription: SubscriptionId,
    /// Changes published by the cache, waiting to be applied to `views`
    inbox: Arc<Mutex<VecDeque<RetentionChange>>>,
    provider: P,
    views: HashMap<TabId, P::View>,
    planner: TabBarLayoutPlanner,
    bar_tabs: Vec<TabId>,
    width: f32,
    plan: LayoutPlan,
}

impl<P: TabContentProvider> TabHost<P> {
    pub fn new(config: Config, mut provider: P) -> Result<Self> {
        config.validate()?;

        let cache = TabRetentionCache::new(config.retention)?;

        let inbox = Arc::new(Mutex::new(VecDeque::new()));
        let sink = Arc::clone(&inbox);
        let subscription = cache.subscribe(move |change: &RetentionChange| {
            sink.lock().push_back(change.clone());
        });

        let mut views = HashMap::new();
        for tab in cache.current_state().retained {
            views.insert(tab, provider.make_view(tab));
        }

        let planner = TabBarLayoutPlanner::new(config.layout);
        let bar_tabs = dedup_tabs(config.bar_tabs);
        let width = TabBarLayoutPlanner::clamp_width(config.initial_width);
        let plan = planner.plan(bar_tabs.len(), width);

        tracing::info!(
            mounted = views.len(),
            bar_tabs = bar_tabs.len(),
            width,
            scrolling = plan.scrolling,
            "Initialized tab host"
        );

        Ok(Self {
            cache,
            subscription,
            inbox,
            provider,
            views,
            planner,
            bar_tabs,
            width,
            plan,
        })
    }

    /// Select a tab, as if the user tapped it in the bar.
    ///
    /// Returns where the bar should scroll when the selection moved and the
    /// bar is currently scrolling.
    pub fn tap(&mut self, tab: TabId) -> Option<ScrollRequest> {
        let before = self.cache.current_state().selected;
        let state = self.cache.select(tab);
        self.sync_views();

        if state.selected == before {
            return None;
        }

        self.scroll_request_for(state.selected)
    }

    /// Apply pending retention changes to the mounted views. Selections made
    /// directly on [`TabHost::cache`] take effect here.
    pub fn sync_views(&mut self) -> usize {
        let changes: Vec<RetentionChange> = self.inbox.lock().drain(..).collect();

        for change in &changes {
            for &tab in &change.unmounted {
                if let Some(view) = self.views.remove(&tab) {
                    self.provider.release_view(tab, view);
                    tracing::debug!(tab = %tab, "Unmounted tab view");
                }
            }

            for &tab in &change.mounted {
                if !self.views.contains_key(&tab) {
                    let view = self.provider.make_view(tab);
                    self.views.insert(tab, view);
                    tracing::debug!(tab = %tab, "Mounted tab view");
                }
            }
        }

        changes.len()
    }

    /// Update the container width. Returns false when nothing changed.
    pub fn resize(&mut self, width: f32) -> bool {
        let width = TabBarLayoutPlanner::clamp_width(width);
        if width == self.width {
            return false;
        }

        self.width = width;
        self.replan();
        true
    }

    /// Replace the tabs shown in the bar. Repeated tabs keep their first
    /// position.
    pub fn set_bar_tabs<I>(&mut self, tabs: I)
    where
        I: IntoIterator<Item = TabId>,
    {
        self.bar_tabs = dedup_tabs(tabs);
        self.replan();
    }

    pub fn state(&self) -> RetentionState {
        self.cache.current_state()
    }

    pub fn plan(&self) -> &LayoutPlan {
        &self.plan
    }

    pub fn cache(&self) -> &TabRetentionCache {
        &self.cache
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn bar_tabs(&self) -> &[TabId] {
        &self.bar_tabs
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn bar_items(&self) -> Vec<BarItem> {
        let selected = self.cache.current_state().selected;

        self.bar_tabs
            .iter()
            .zip(self.plan.items.iter())
            .map(|(&tab, geometry)| BarItem {
                info: TabCatalog::lookup(tab),
                selected: tab == selected,
                geometry: *geometry,
            })
            .collect()
    }

    /// Indicator frame under the selected tab, if the bar shows it
    pub fn indicator_frame(&self) -> Option<Rect> {
        let selected = self.cache.current_state().selected;
        let index = self.bar_tabs.iter().position(|&tab| tab == selected)?;
        self.plan.indicator_frame(index)
    }

    /// Retained tabs that have a mounted view, in retained order
    pub fn mounted_tabs(&self) -> Vec<TabId> {
        self.cache
            .current_state()
            .retained
            .into_iter()
            .filter(|tab| self.views.contains_key(tab))
            .collect()
    }

    pub fn view(&self, tab: TabId) -> Option<&P::View> {
        self.views.get(&tab)
    }

    fn scroll_request_for(&self, tab: TabId) -> Option<ScrollRequest> {
        if !self.plan.scrolling {
            return None;
        }

        let index = self.bar_tabs.iter().position(|&t| t == tab)?;

        Some(ScrollRequest {
            tab,
            offset: self.plan.scroll_target(index),
            animated: true,
        })
    }

    fn replan(&mut self) {
        self.plan = self.planner.plan(self.bar_tabs.len(), self.width);

        tracing::debug!(
            bar_tabs = self.bar_tabs.len(),
            width = self.width,
            scrolling = self.plan.scrolling,
            "Replanned tab bar"
        );
    }
}

impl<P: TabContentProvider> Drop for TabHost<P> {
    fn drop(&mut self) {
        self.cache.unsubscribe(self.subscription);
    }
}

fn dedup_tabs<I>(tabs: I) -> Vec<TabId>
where
    I: IntoIterator<Item = TabId>,
{
    let mut out: Vec<TabId> = Vec::new();
    for tab in tabs {
        if !out.contains(&tab) {
            out.push(tab);
        }
    }
    out
}
