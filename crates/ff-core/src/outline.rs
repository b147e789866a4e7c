//! Garment outline geometry table.
//!
//! Each garment maps to a closed polyline in canvas space (400 × 500).
//! Jacket and custom fall back to the reference rectangle.

use crate::model::{Color, GarmentKind, Theme};
use kurbo::{BezPath, Point, Rect, Shape};

/// Outline stroke width in canvas pixels.
pub const OUTLINE_LINE_WIDTH: f64 = 2.0;

/// Dash pattern: 5 on, 5 off.
pub const OUTLINE_DASH: [f64; 2] = [5.0, 5.0];

const SHIRT: &[(f64, f64)] = &[
    (100.0, 80.0),
    (300.0, 80.0),
    (320.0, 100.0),
    (320.0, 200.0),
    (300.0, 220.0),
    (300.0, 400.0),
    (100.0, 400.0),
    (100.0, 220.0),
    (80.0, 200.0),
    (80.0, 100.0),
];

const PANT: &[(f64, f64)] = &[
    (150.0, 50.0),
    (250.0, 50.0),
    (260.0, 250.0),
    (230.0, 450.0),
    (200.0, 450.0),
    (200.0, 250.0),
    (170.0, 450.0),
    (140.0, 450.0),
    (140.0, 250.0),
];

const DRESS: &[(f64, f64)] = &[
    (120.0, 80.0),
    (280.0, 80.0),
    (300.0, 100.0),
    (320.0, 400.0),
    (80.0, 400.0),
    (100.0, 100.0),
];

/// Reference rectangle used for garments without a dedicated silhouette.
pub const FALLBACK_RECT: Rect = Rect::new(80.0, 80.0, 320.0, 400.0);

/// Vertices of the garment silhouette, in drawing order.
pub fn outline_vertices(garment: GarmentKind) -> Vec<Point> {
    let table = match garment {
        GarmentKind::Shirt => SHIRT,
        GarmentKind::Pant => PANT,
        GarmentKind::Dress => DRESS,
        GarmentKind::Jacket | GarmentKind::Custom => {
            let r = FALLBACK_RECT;
            return vec![
                Point::new(r.x0, r.y0),
                Point::new(r.x1, r.y0),
                Point::new(r.x1, r.y1),
                Point::new(r.x0, r.y1),
            ];
        }
    };
    table.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

/// Closed path for the garment silhouette.
pub fn outline_path(garment: GarmentKind) -> BezPath {
    let mut path = BezPath::new();
    let mut vertices = outline_vertices(garment).into_iter();
    if let Some(first) = vertices.next() {
        path.move_to(first);
        for p in vertices {
            path.line_to(p);
        }
        path.close_path();
    }
    path
}

/// The decorative, non-interactive silhouette drawn beneath user content.
#[derive(Debug, Clone, PartialEq)]
pub struct GarmentOutline {
    pub garment: GarmentKind,
    pub theme: Theme,
    pub path: BezPath,
    pub stroke_color: Color,
    pub line_width: f64,
    pub dash: [f64; 2],
}

impl GarmentOutline {
    pub fn new(garment: GarmentKind, theme: Theme) -> Self {
        Self {
            garment,
            theme,
            path: outline_path(garment),
            stroke_color: theme.outline_stroke(),
            line_width: OUTLINE_LINE_WIDTH,
            dash: OUTLINE_DASH,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.path.bounding_box()
    }
}
