//! Animated item style model shared by presets and plugins.

use serde::{Deserialize, Serialize};

/// A single transform operation. Operations apply in list order.
/// Rotation and skew angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransformOp {
    TranslateX(f64),
    TranslateY(f64),
    Scale(f64),
    ScaleX(f64),
    ScaleY(f64),
    Rotate(f64),
    RotateX(f64),
    RotateY(f64),
    RotateZ(f64),
    SkewX(f64),
    SkewY(f64),
    Perspective(f64),
}

/// Overflow behavior for an item's content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    Visible,
    Hidden,
}

/// Style fragment produced by an animation preset or plugin for one item.
/// All fields are optional; an empty style leaves the item visually inert.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemStyle {
    /// Ordered transform list
    pub transform: Vec<TransformOp>,
    /// Opacity in [0, 1] at rest; brief overshoot above 1 is tolerated mid-animation
    pub opacity: Option<f64>,
    /// Stacking order
    pub z_index: Option<i32>,
    /// Corner radius in pixels
    pub border_radius: Option<f64>,
    /// Content overflow behavior
    pub overflow: Option<Overflow>,
    /// Android elevation shadow
    pub elevation: Option<f64>,
}

impl ItemStyle {
    /// Create an empty style
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no field is set
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.transform.is_empty()
            && self.opacity.is_none()
            && self.z_index.is_none()
            && self.border_radius.is_none()
            && self.overflow.is_none()
            && self.elevation.is_none()
    }

    /// Set opacity
    #[inline]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Set z-index
    #[inline]
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = Some(z_index);
        self
    }

    /// Append a transform operation
    #[inline]
    pub fn with_transform(mut self, op: TransformOp) -> Self {
        self.transform.push(op);
        self
    }

    /// Merge a later style fragment into this one.
    ///
    /// Scalar fields follow last-writer-wins: a field set in `other`
    /// overrides the current value, an unset field leaves it untouched.
    /// Transform lists concatenate, earlier entries applying first.
    pub fn merge(&mut self, other: ItemStyle) {
        self.transform.extend(other.transform);
        if other.opacity.is_some() {
            self.opacity = other.opacity;
        }
        if other.z_index.is_some() {
            self.z_index = other.z_index;
        }
        if other.border_radius.is_some() {
            self.border_radius = other.border_radius;
        }
        if other.overflow.is_some() {
            self.overflow = other.overflow;
        }
        if other.elevation.is_some() {
            self.elevation = other.elevation;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_style() {
        let style = ItemStyle::new();
        assert!(style.is_empty());
        assert!(!style.with_opacity(1.0).is_empty());
    }

    #[test]
    fn test_merge_last_writer_wins() {
        let mut base = ItemStyle::new().with_opacity(0.5).with_z_index(10);
        base.merge(ItemStyle::new().with_opacity(0.9));

        assert_eq!(base.opacity, Some(0.9));
        // Unset fields in the later fragment leave earlier values intact
        assert_eq!(base.z_index, Some(10));
    }

    #[test]
    fn test_merge_concatenates_transforms() {
        let mut base = ItemStyle::new().with_transform(TransformOp::Scale(0.9));
        base.merge(ItemStyle::new().with_transform(TransformOp::TranslateX(20.0)));

        assert_eq!(
            base.transform,
            vec![TransformOp::Scale(0.9), TransformOp::TranslateX(20.0)]
        );
    }

    #[test]
    fn test_serialization() {
        let style = ItemStyle::new()
            .with_transform(TransformOp::TranslateX(12.0))
            .with_transform(TransformOp::Rotate(45.0))
            .with_opacity(0.8);

        let json = serde_json::to_string(&style).unwrap();
        let back: ItemStyle = serde_json::from_str(&json).unwrap();
        assert_eq!(style, back);
    }
}
