//! Resolved surface offsets and animation origin.

use core::fmt;

/// Horizontal offset from one viewport edge. Exactly one side is ever set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HorizontalOffset {
    /// Distance from the viewport's left edge to the surface's left edge.
    Left(f64),
    /// Distance from the viewport's right edge to the surface's right edge.
    Right(f64),
}

/// Vertical offset from one viewport edge. Exactly one side is ever set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VerticalOffset {
    /// Distance from the viewport's top edge to the surface's top edge.
    Top(f64),
    /// Distance from the viewport's bottom edge to the surface's bottom edge.
    Bottom(f64),
}

/// Surface position: one horizontal and one vertical offset.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub horizontal: HorizontalOffset,
    pub vertical: VerticalOffset,
}

impl Position {
    #[must_use]
    pub const fn new(horizontal: HorizontalOffset, vertical: VerticalOffset) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    #[must_use]
    pub fn left(&self) -> Option<f64> {
        match self.horizontal {
            HorizontalOffset::Left(v) => Some(v),
            HorizontalOffset::Right(_) => None,
        }
    }

    #[must_use]
    pub fn right(&self) -> Option<f64> {
        match self.horizontal {
            HorizontalOffset::Right(v) => Some(v),
            HorizontalOffset::Left(_) => None,
        }
    }

    #[must_use]
    pub fn top(&self) -> Option<f64> {
        match self.vertical {
            VerticalOffset::Top(v) => Some(v),
            VerticalOffset::Bottom(_) => None,
        }
    }

    #[must_use]
    pub fn bottom(&self) -> Option<f64> {
        match self.vertical {
            VerticalOffset::Bottom(v) => Some(v),
            VerticalOffset::Top(_) => None,
        }
    }

    /// `(property, pixels)` pairs for the two set sides, horizontal first.
    ///
    /// Adapters should clear the two sides not listed.
    #[must_use]
    pub fn css_properties(&self) -> [(&'static str, f64); 2] {
        let h = match self.horizontal {
            HorizontalOffset::Left(v) => ("left", v),
            HorizontalOffset::Right(v) => ("right", v),
        };
        let v = match self.vertical {
            VerticalOffset::Top(v) => ("top", v),
            VerticalOffset::Bottom(v) => ("bottom", v),
        };
        [h, v]
    }
}

/// Horizontal component of the transform origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OriginX {
    Left,
    Center,
    Right,
}

/// Vertical component of the transform origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OriginY {
    Top,
    Bottom,
}

/// CSS `transform-origin` keyword pair, e.g. `"right top"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransformOrigin {
    pub x: OriginX,
    pub y: OriginY,
}

impl TransformOrigin {
    #[must_use]
    pub const fn new(x: OriginX, y: OriginY) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for TransformOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = match self.x {
            OriginX::Left => "left",
            OriginX::Center => "center",
            OriginX::Right => "right",
        };
        let y = match self.y {
            OriginY::Top => "top",
            OriginY::Bottom => "bottom",
        };
        write!(f, "{x} {y}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_report_only_the_set_side() {
        let p = Position::new(HorizontalOffset::Right(20.0), VerticalOffset::Top(10.0));
        assert_eq!(p.right(), Some(20.0));
        assert_eq!(p.left(), None);
        assert_eq!(p.top(), Some(10.0));
        assert_eq!(p.bottom(), None);
    }

    #[test]
    fn css_properties_order() {
        let p = Position::new(HorizontalOffset::Left(1.0), VerticalOffset::Bottom(2.0));
        assert_eq!(p.css_properties(), [("left", 1.0), ("bottom", 2.0)]);
    }

    #[test]
    fn transform_origin_display() {
        let o = TransformOrigin::new(OriginX::Right, OriginY::Bottom);
        assert_eq!(o.to_string(), "right bottom");
        let o = TransformOrigin::new(OriginX::Center, OriginY::Top);
        assert_eq!(o.to_string(), "center top");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_names_offsets_by_side() {
        let p = Position::new(HorizontalOffset::Right(20.0), VerticalOffset::Bottom(4.5));
        let value = serde_json::to_value(p).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "horizontal": { "right": 20.0 }, "vertical": { "bottom": 4.5 } })
        );
        let back: Position = serde_json::from_value(value).unwrap();
        assert_eq!(back, p);
        let both = r#"{ "horizontal": { "left": 1.0, "right": 2.0 }, "vertical": { "top": 0.0 } }"#;
        assert!(serde_json::from_str::<Position>(both).is_err());
    }
}
