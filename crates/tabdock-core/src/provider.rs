//! Content provider seam
//!
//! The host never looks inside a view; it only creates one when a tab is
//! mounted and hands it back when the tab is unmounted.

use tabdock_catalog::TabId;

pub trait TabContentProvider {
    type View;

    /// Build the content for a tab that has just been retained
    fn make_view(&mut self, tab: TabId) -> Self::View;

    /// Called with the view of a tab that left the retained set
    fn release_view(&mut self, tab: TabId, view: Self::View) {
        let _ = tab;
        drop(view);
    }
}
