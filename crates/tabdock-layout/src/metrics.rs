//! Fixed measurements of the tab bar

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    /// Width of every tab item
    pub item_width: f32,
    /// Gap between items when the bar scrolls
    pub item_spacing: f32,
    /// Padding on each side of the item row
    pub edge_padding: f32,
    /// Height of the item row
    pub content_height: f32,
    pub indicator_width: f32,
    pub indicator_height: f32,
    /// Distance from the bottom of the row to the indicator
    pub indicator_inset: f32,
}

impl LayoutMetrics {
    /// Width of the fade applied to each end of a scrolling bar
    pub fn fade_width(&self) -> f32 {
        self.edge_padding * 2.0
    }

    /// Returns the name of the first field that is negative or not finite
    pub fn invalid_field(&self) -> Option<&'static str> {
        let fields = [
            ("item_width", self.item_width),
            ("item_spacing", self.item_spacing),
            ("edge_padding", self.edge_padding),
            ("content_height", self.content_height),
            ("indicator_width", self.indicator_width),
            ("indicator_height", self.indicator_height),
            ("indicator_inset", self.indicator_inset),
        ];

        fields
            .iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
            .map(|(name, _)| *name)
    }
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            item_width: 70.0,
            item_spacing: 8.0,
            edge_padding: 16.0,
            content_height: 64.0,
            indicator_width: 32.0,
            indicator_height: 3.0,
            indicator_inset: 3.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let metrics = LayoutMetrics::default();
        assert_eq!(metrics.item_width, 70.0);
        assert_eq!(metrics.fade_width(), 32.0);
        assert_eq!(metrics.invalid_field(), None);
    }

    #[test]
    fn test_invalid_field() {
        let metrics = LayoutMetrics {
            item_spacing: -1.0,
            ..Default::default()
        };
        assert_eq!(metrics.invalid_field(), Some("item_spacing"));

        let metrics = LayoutMetrics {
            indicator_inset: f32::NAN,
            ..Default::default()
        };
        assert_eq!(metrics.invalid_field(), Some("indicator_inset"));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let metrics: LayoutMetrics = serde_json::from_str(r#"{"item_width": 80}"#).unwrap();
        assert_eq!(metrics.item_width, 80.0);
        assert_eq!(metrics.edge_padding, 16.0);
    }
}
