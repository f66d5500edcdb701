//! Layout plan produced for one render

use serde::Serialize;

use crate::metrics::LayoutMetrics;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Horizontal placement of one tab item, in content coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItemGeometry {
    pub index: usize,
    pub x: f32,
    pub width: f32,
}

impl ItemGeometry {
    pub fn center(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Widths of the gradients masking both ends of a scrolling bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FadeMask {
    pub leading: f32,
    pub trailing: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutPlan {
    /// Items overflow the container and the bar scrolls horizontally
    pub scrolling: bool,
    pub item_width: f32,
    /// Distance between adjacent items
    pub spacing: f32,
    pub required_width: f32,
    /// Container width after clamping
    pub available_width: f32,
    /// Width of the item row; exceeds `available_width` only when scrolling
    pub content_width: f32,
    pub content_height: f32,
    pub items: Vec<ItemGeometry>,
    pub fade: Option<FadeMask>,
    pub max_scroll_offset: f32,
    #[serde(skip)]
    pub(crate) metrics: LayoutMetrics,
}

impl LayoutPlan {
    pub fn item(&self, index: usize) -> Option<&ItemGeometry> {
        self.items.get(index)
    }

    /// Scroll offset that centers item `index` in the viewport, clamped to
    /// the scrollable range. Always 0 for a bar that fits.
    pub fn scroll_target(&self, index: usize) -> f32 {
        if !self.scrolling {
            return 0.0;
        }

        match self.items.get(index) {
            Some(item) => {
                (item.center() - self.available_width / 2.0).clamp(0.0, self.max_scroll_offset)
            }
            None => 0.0,
        }
    }

    /// Frame of the selection indicator under item `index`, in content
    /// coordinates.
    pub fn indicator_frame(&self, index: usize) -> Option<Rect> {
        let item = self.items.get(index)?;
        let width = self.metrics.indicator_width;
        let height = self.metrics.indicator_height;

        Some(Rect {
            x: item.center() - width / 2.0,
            y: (self.content_height - self.metrics.indicator_inset - height).max(0.0),
            width,
            height,
        })
    }
}
