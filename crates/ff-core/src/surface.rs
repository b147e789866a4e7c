//! Canvas surface: ordered object list with a reserved outline slot.
//!
//! `objects[0]` is always the garment outline. User content follows in
//! paint order, so the last element is topmost. The surface enforces this
//! itself; callers never touch the list directly.

use crate::error::DecodeError;
use crate::id::ObjectId;
use crate::model::*;
use crate::outline::GarmentOutline;
use image::imageops::FilterType;
use kurbo::Point;
use std::sync::Arc;

pub const CANVAS_WIDTH: f64 = 400.0;
pub const CANVAS_HEIGHT: f64 = 500.0;

/// Brush parameters used while drawing mode is armed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushSpec {
    pub color: Color,
    pub width: f64,
}

/// How an inserted image is sized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageScale {
    /// Multiply natural dimensions by this factor.
    Factor(f64),
    /// Scale so the longer side equals this many canvas pixels.
    FitWithin(f64),
}

impl From<f64> for ImageScale {
    fn from(factor: f64) -> Self {
        ImageScale::Factor(factor)
    }
}

impl ImageScale {
    /// Resolve to a positive factor. The result never lets the displayed
    /// image exceed the canvas.
    fn resolve(self, width: u32, height: u32) -> f64 {
        let (w, h) = (width.max(1) as f64, height.max(1) as f64);
        let factor = match self {
            ImageScale::Factor(f) => f,
            ImageScale::FitWithin(side) => side / w.max(h),
        };
        let factor = if factor.is_finite() && factor > 0.0 {
            factor
        } else {
            log::warn!("invalid image scale {factor}, using 1.0");
            1.0
        };

        let limit = (CANVAS_WIDTH / w).min(CANVAS_HEIGHT / h);
        if factor > limit {
            log::warn!("image scale {factor} exceeds canvas, clamped to {limit}");
            limit
        } else {
            factor
        }
    }
}

/// Display dimension in whole pixels, at least 1 and at most `max`.
fn display_dim(natural: u32, scale: f64, max: f64) -> u32 {
    (natural as f64 * scale).round().clamp(1.0, max) as u32
}

/// The drawing capability the tool layer depends on.
pub trait CanvasOps {
    /// Commit a freehand stroke. Returns `None` for an empty point list.
    fn add_freehand_stroke(&mut self, points: &[Point], color: Color, width: f64)
    -> Option<ObjectId>;

    fn add_text(&mut self, content: &str, position: Point, color: Color, font: FontSpec)
    -> ObjectId;

    /// Decode and place an image. On error the surface is unchanged.
    fn add_image(
        &mut self,
        bytes: &[u8],
        position: Point,
        scale: ImageScale,
    ) -> Result<ObjectId, DecodeError>;

    /// Remove the topmost user object. Never removes the outline.
    fn remove_last(&mut self) -> Option<DesignObject>;

    /// Re-append a previously removed user object on top.
    fn restore(&mut self, object: DesignObject);

    fn clear_all_except_outline(&mut self);

    /// Replace the outline for a garment/theme pair, keeping it bottommost.
    fn set_outline(&mut self, garment: GarmentKind, theme: Theme);

    /// Arm (`Some`) or disarm (`None`) freehand drawing mode.
    fn set_drawing_mode(&mut self, brush: Option<BrushSpec>);
}

#[derive(Debug, Clone)]
pub struct CanvasSurface {
    objects: Vec<DesignObject>,
    garment: GarmentKind,
    theme: Theme,
    drawing: Option<BrushSpec>,
    selected: Option<ObjectId>,
}

impl Default for CanvasSurface {
    fn default() -> Self {
        Self::new(GarmentKind::default(), Theme::default())
    }
}

impl CanvasSurface {
    pub fn new(garment: GarmentKind, theme: Theme) -> Self {
        let outline = GarmentOutline::new(garment, theme);
        let outline = DesignObject::fresh(ObjectKind::Outline(outline));
        Self {
            objects: vec![outline],
            garment,
            theme,
            drawing: None,
            selected: None,
        }
    }

    /// All objects, outline first.
    pub fn objects(&self) -> &[DesignObject] {
        &self.objects
    }

    /// User content only, bottom to top.
    pub fn user_objects(&self) -> &[DesignObject] {
        &self.objects[1..]
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// The surface always holds its outline, so it is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn outline(&self) -> &GarmentOutline {
        match &self.objects[0].kind {
            ObjectKind::Outline(o) => o,
            _ => unreachable!("slot 0 always holds the outline"),
        }
    }

    pub fn garment(&self) -> GarmentKind {
        self.garment
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn background(&self) -> Color {
        self.theme.background()
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.set_outline(self.garment, theme);
    }

    pub fn set_garment(&mut self, garment: GarmentKind) {
        self.set_outline(garment, self.theme);
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing.is_some()
    }

    pub fn brush(&self) -> Option<BrushSpec> {
        self.drawing
    }

    pub fn selected(&self) -> Option<ObjectId> {
        self.selected
    }

    pub fn get(&self, id: ObjectId) -> Option<&DesignObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Select the topmost user object under `point`.
    ///
    /// Suspended while drawing mode is armed; the outline is never selectable.
    pub fn select_at(&mut self, point: Point) -> Option<ObjectId> {
        if self.drawing.is_some() {
            return None;
        }
        self.selected = self
            .user_objects()
            .iter()
            .rev()
            .find(|o| o.bounds().contains(point))
            .map(|o| o.id);
        self.selected
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    fn push(&mut self, object: DesignObject) -> ObjectId {
        let id = object.id;
        log::debug!("canvas add {} {}", id.kind(), id);
        self.objects.push(object);
        id
    }
}

impl CanvasOps for CanvasSurface {
    fn add_freehand_stroke(
        &mut self,
        points: &[Point],
        color: Color,
        width: f64,
    ) -> Option<ObjectId> {
        if points.is_empty() {
            return None;
        }
        let stroke = Stroke {
            points: points.to_vec(),
            color,
            width,
        };
        Some(self.push(DesignObject::fresh(ObjectKind::Stroke(stroke))))
    }

    fn add_text(
        &mut self,
        content: &str,
        position: Point,
        color: Color,
        font: FontSpec,
    ) -> ObjectId {
        let run = TextRun {
            content: content.to_string(),
            position,
            color,
            font,
        };
        self.push(DesignObject::fresh(ObjectKind::Text(run)))
    }

    fn add_image(
        &mut self,
        bytes: &[u8],
        position: Point,
        scale: ImageScale,
    ) -> Result<ObjectId, DecodeError> {
        let decoded = image::load_from_memory(bytes).inspect_err(|e| {
            log::warn!("image decode failed ({} bytes): {e}", bytes.len());
        })?;
        let rgba = decoded.to_rgba8();
        let (natural_width, natural_height) = rgba.dimensions();
        let scale = scale.resolve(natural_width, natural_height);

        let target_w = display_dim(natural_width, scale, CANVAS_WIDTH);
        let target_h = display_dim(natural_height, scale, CANVAS_HEIGHT);
        let pixels = if (target_w, target_h) == (natural_width, natural_height) {
            rgba
        } else {
            image::imageops::resize(&rgba, target_w, target_h, FilterType::Triangle)
        };

        let placed = PlacedImage {
            position,
            scale,
            natural_width,
            natural_height,
            pixels: Arc::new(pixels),
        };
        Ok(self.push(DesignObject::fresh(ObjectKind::Image(placed))))
    }

    fn remove_last(&mut self) -> Option<DesignObject> {
        if self.objects.len() <= 1 {
            return None;
        }
        let removed = self.objects.pop()?;
        if self.selected == Some(removed.id) {
            self.selected = None;
        }
        log::debug!("canvas remove {} {}", removed.id.kind(), removed.id);
        Some(removed)
    }

    fn restore(&mut self, object: DesignObject) {
        if object.is_outline() {
            log::warn!("refusing to restore an outline as user content");
            return;
        }
        self.push(object);
    }

    fn clear_all_except_outline(&mut self) {
        self.objects.truncate(1);
        self.selected = None;
        log::debug!("canvas cleared");
    }

    fn set_outline(&mut self, garment: GarmentKind, theme: Theme) {
        self.garment = garment;
        self.theme = theme;
        let outline = GarmentOutline::new(garment, theme);
        self.objects[0] = DesignObject::fresh(ObjectKind::Outline(outline));
        log::debug!("canvas outline -> {garment} ({theme:?})");
    }

    fn set_drawing_mode(&mut self, brush: Option<BrushSpec>) {
        if brush.is_some() {
            self.selected = None;
        }
        self.drawing = brush;
    }
}
