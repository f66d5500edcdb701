//! Tab Bar Layout Planner
//!
//! Two strategies:
//! - the row fits: items keep their width and the leftover space is split
//!   evenly between them, inside the edge padding
//! - the row overflows: items are packed with fixed spacing, the row
//!   scrolls, and both ends fade out

use crate::metrics::LayoutMetrics;
use crate::plan::{FadeMask, ItemGeometry, LayoutPlan};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TabBarLayoutPlanner {
    metrics: LayoutMetrics,
}

impl TabBarLayoutPlanner {
    pub fn new(metrics: LayoutMetrics) -> Self {
        Self { metrics }
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    /// Width the row needs to show `tab_count` items without scrolling
    pub fn required_width(&self, tab_count: usize) -> f32 {
        let m = &self.metrics;
        let padding = m.edge_padding * 2.0;

        if tab_count == 0 {
            return padding;
        }

        let count = tab_count as f32;
        count * m.item_width + (count - 1.0) * m.item_spacing + padding
    }

    /// Container width as the planner sees it: negative, NaN and infinite
    /// widths become zero.
    pub fn clamp_width(width: f32) -> f32 {
        if width.is_finite() {
            width.max(0.0)
        } else {
            0.0
        }
    }

    /// Plan the bar for `tab_count` items in a container `available_width`
    /// wide, after [`TabBarLayoutPlanner::clamp_width`].
    pub fn plan(&self, tab_count: usize, available_width: f32) -> LayoutPlan {
        let m = &self.metrics;
        let available_width = Self::clamp_width(available_width);
        let required_width = self.required_width(tab_count);
        let scrolling = required_width > available_width;

        let (spacing, items) = if scrolling {
            (m.item_spacing, self.packed_items(tab_count))
        } else {
            self.distributed_items(tab_count, available_width)
        };

        let (content_width, fade, max_scroll_offset) = if scrolling {
            let fade = FadeMask {
                leading: m.fade_width(),
                trailing: m.fade_width(),
            };
            (required_width, Some(fade), required_width - available_width)
        } else {
            (available_width, None, 0.0)
        };

        tracing::trace!(
            tab_count,
            available_width,
            required_width,
            scrolling,
            "Planned tab bar"
        );

        LayoutPlan {
            scrolling,
            item_width: m.item_width,
            spacing,
            required_width,
            available_width,
            content_width,
            content_height: m.content_height,
            items,
            fade,
            max_scroll_offset,
            metrics: self.metrics,
        }
    }

    fn packed_items(&self, tab_count: usize) -> Vec<ItemGeometry> {
        let m = &self.metrics;
        let stride = m.item_width + m.item_spacing;

        (0..tab_count)
            .map(|index| ItemGeometry {
                index,
                x: m.edge_padding + index as f32 * stride,
                width: m.item_width,
            })
            .collect()
    }

    fn distributed_items(&self, tab_count: usize, available_width: f32) -> (f32, Vec<ItemGeometry>) {
        let m = &self.metrics;

        match tab_count {
            0 => (0.0, Vec::new()),
            1 => {
                let item = ItemGeometry {
                    index: 0,
                    x: (available_width - m.item_width) / 2.0,
                    width: m.item_width,
                };
                (0.0, vec![item])
            }
            _ => {
                let inner = available_width - m.edge_padding * 2.0;
                let gaps = (tab_count - 1) as f32;
                let spacing = (inner - tab_count as f32 * m.item_width) / gaps;
                let stride = m.item_width + spacing;

                let items = (0..tab_count)
                    .map(|index| ItemGeometry {
                        index,
                        x: m.edge_padding + index as f32 * stride,
                        width: m.item_width,
                    })
                    .collect();
                (spacing, items)
            }
        }
    }
}
