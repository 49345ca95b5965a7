use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const TRANSPARENT: &str = "transparent";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Freehand,
    Line,
    Rectangle,
    Ellipse,
}

/// One drawable on the canvas. `fill` is either a color string or
/// `"transparent"`; an absent fill renders the same as transparent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Shape {
    pub id: String,
    pub kind: ShapeKind,
    pub fill: Option<String>,
    pub stroke: String,
    pub points: Vec<(f64, f64)>,
}

impl Shape {
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            fill: None,
            stroke: "#000000".to_string(),
            points: Vec::new(),
        }
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = stroke.into();
        self
    }

    pub fn with_points(mut self, points: Vec<(f64, f64)>) -> Self {
        self.points = points;
        self
    }
}

/// Toggles the fill of the shape with the given id between transparent and
/// the active drawing color. Returns a fresh collection so the caller can
/// swap it wholesale for a UI refresh; an unknown id leaves the collection
/// unchanged.
pub fn toggle_fill(shapes: &[Shape], id: &str, active_color: &str) -> Vec<Shape> {
    let mut updated = shapes.to_vec();

    if let Some(shape) = updated.iter_mut().find(|shape| shape.id == id) {
        let filled = shape
            .fill
            .as_deref()
            .map(|fill| fill != TRANSPARENT)
            .unwrap_or(false);

        shape.fill = Some(if filled {
            TRANSPARENT.to_string()
        } else {
            active_color.to_string()
        });
    }

    updated
}
