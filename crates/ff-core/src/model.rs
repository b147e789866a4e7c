//! Core data model for the design studio.
//!
//! The canvas holds an ordered list of `DesignObject`s. Index 0 is reserved
//! for the garment outline; everything after it is user content in paint
//! order (last = topmost).

use crate::error::GarmentParseError;
use crate::id::ObjectId;
use crate::outline::GarmentOutline;
use image::RgbaImage;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color. Stored as 4 × f32 [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

fn hex_nibble(c: u8) -> Option<u8> {
    (c as char).to_digit(16).map(|d| d as u8)
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    /// Parse `#RGB`, `#RGBA`, `#RRGGBB`, or `#RRGGBBAA`. The `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let digits = hex
            .bytes()
            .map(hex_nibble)
            .collect::<Option<Vec<u8>>>()?;

        let channels: Vec<u8> = match digits.len() {
            3 | 4 => digits.iter().map(|d| d * 17).collect(),
            6 | 8 => digits.chunks(2).map(|p| p[0] << 4 | p[1]).collect(),
            _ => return None,
        };
        let a = channels.get(3).copied().unwrap_or(255);
        Some(Self::rgba(
            channels[0] as f32 / 255.0,
            channels[1] as f32 / 255.0,
            channels[2] as f32 / 255.0,
            a as f32 / 255.0,
        ))
    }

    /// Emit as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = [self.r, self.g, self.b, self.a].map(|c| (c * 255.0).round() as u8);
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

// ─── Theme ───────────────────────────────────────────────────────────────

/// Light/dark canvas palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_flag(is_dark: bool) -> Self {
        if is_dark { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Canvas background fill.
    pub fn background(self) -> Color {
        match self {
            Theme::Light => Color::rgb8(0xF9, 0xFA, 0xFB),
            Theme::Dark => Color::rgb8(0x1F, 0x29, 0x37),
        }
    }

    /// Dashed outline stroke.
    pub fn outline_stroke(self) -> Color {
        match self {
            Theme::Light => Color::rgb8(0x9C, 0xA3, 0xAF),
            Theme::Dark => Color::rgb8(0x6B, 0x72, 0x80),
        }
    }

    /// Backdrop behind the preview glyph.
    pub fn preview_base(self) -> Color {
        match self {
            Theme::Light => Color::rgb8(0xF3, 0xF4, 0xF6),
            Theme::Dark => Color::rgb8(0x37, 0x41, 0x51),
        }
    }
}

// ─── Garments ────────────────────────────────────────────────────────────

/// The garment silhouette being designed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GarmentKind {
    #[default]
    Shirt,
    Pant,
    Dress,
    Jacket,
    Custom,
}

impl GarmentKind {
    /// Catalog order.
    pub const ALL: [GarmentKind; 5] = [
        GarmentKind::Shirt,
        GarmentKind::Pant,
        GarmentKind::Dress,
        GarmentKind::Jacket,
        GarmentKind::Custom,
    ];

    pub fn id(self) -> &'static str {
        match self {
            GarmentKind::Shirt => "shirt",
            GarmentKind::Pant => "pant",
            GarmentKind::Dress => "dress",
            GarmentKind::Jacket => "jacket",
            GarmentKind::Custom => "custom",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            GarmentKind::Shirt => "Shirt",
            GarmentKind::Pant => "Pant",
            GarmentKind::Dress => "Dress",
            GarmentKind::Jacket => "Jacket",
            GarmentKind::Custom => "Custom",
        }
    }

    /// Glyph shown in the preview panel.
    pub fn glyph(self) -> &'static str {
        match self {
            GarmentKind::Shirt => "👕",
            GarmentKind::Pant => "👖",
            GarmentKind::Dress => "👗",
            GarmentKind::Jacket => "🧥",
            GarmentKind::Custom => "👘",
        }
    }
}

impl FromStr for GarmentKind {
    type Err = GarmentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GarmentKind::ALL
            .into_iter()
            .find(|g| g.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GarmentParseError(s.to_string()))
    }
}

impl fmt::Display for GarmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// ─── Font / Text ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub size: f32,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: "Inter".into(),
            size: 24.0,
        }
    }
}

impl FontSpec {
    /// CSS shorthand, e.g. `24px Inter, sans-serif`.
    pub fn css(&self) -> String {
        format!("{}px {}, sans-serif", self.size, self.family)
    }
}

// ─── Design objects ──────────────────────────────────────────────────────

/// A freehand brush stroke in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub points: Vec<Point>,
    pub color: Color,
    pub width: f64,
}

/// A run of text anchored at its baseline-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub content: String,
    pub position: Point,
    pub color: Color,
    pub font: FontSpec,
}

/// A decoded image placed on the canvas.
///
/// `pixels` is already resampled to display resolution
/// (`natural_* × scale`), so renderers blit it as-is.
#[derive(Debug, Clone)]
pub struct PlacedImage {
    pub position: Point,
    pub scale: f64,
    pub natural_width: u32,
    pub natural_height: u32,
    pub pixels: Arc<RgbaImage>,
}

impl PlacedImage {
    pub fn display_size(&self) -> (f64, f64) {
        (
            self.natural_width as f64 * self.scale,
            self.natural_height as f64 * self.scale,
        )
    }
}

#[derive(Debug, Clone)]
pub enum ObjectKind {
    Outline(GarmentOutline),
    Stroke(Stroke),
    Text(TextRun),
    Image(PlacedImage),
}

impl ObjectKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Outline(_) => "outline",
            Self::Stroke(_) => "stroke",
            Self::Text(_) => "text",
            Self::Image(_) => "image",
        }
    }
}

/// Anything on the canvas: the outline or user content.
#[derive(Debug, Clone)]
pub struct DesignObject {
    pub id: ObjectId,
    pub kind: ObjectKind,
}

impl DesignObject {
    pub fn new(id: ObjectId, kind: ObjectKind) -> Self {
        Self { id, kind }
    }

    /// Wrap `kind` under a freshly minted id labelled with its kind.
    pub fn fresh(kind: ObjectKind) -> Self {
        Self::new(ObjectId::next(kind.name()), kind)
    }

    pub fn is_outline(&self) -> bool {
        matches!(self.kind, ObjectKind::Outline(_))
    }

    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn color(&self) -> Option<Color> {
        match &self.kind {
            ObjectKind::Outline(o) => Some(o.stroke_color),
            ObjectKind::Stroke(s) => Some(s.color),
            ObjectKind::Text(t) => Some(t.color),
            ObjectKind::Image(_) => None,
        }
    }

    /// Axis-aligned bounding box in canvas coordinates.
    pub fn bounds(&self) -> Rect {
        match &self.kind {
            ObjectKind::Outline(o) => o.bounds(),
            ObjectKind::Stroke(s) => {
                let Some(first) = s.points.first() else {
                    return Rect::ZERO;
                };
                let rect = s
                    .points
                    .iter()
                    .fold(Rect::from_points(*first, *first), |r, p| {
                        r.union_pt(*p)
                    });
                rect.inflate(s.width / 2.0, s.width / 2.0)
            }
            ObjectKind::Text(t) => {
                // Approximate advance: 0.6em per character.
                let size = t.font.size as f64;
                let width = t.content.chars().count() as f64 * size * 0.6;
                Rect::new(
                    t.position.x,
                    t.position.y - size,
                    t.position.x + width,
                    t.position.y,
                )
            }
            ObjectKind::Image(img) => {
                let (w, h) = img.display_size();
                Rect::from_origin_size(img.position, (w, h))
            }
        }
    }
}
