//! Canvas2D software renderer.
//!
//! Paints the surface in list order onto an HTML `<canvas>` via
//! `CanvasRenderingContext2d`: background, dashed outline, then user
//! content bottom to top.
//!
//! Images are uploaded once into a scratch `<canvas>` per object and
//! painted with `drawImage`, so transparent pixels composite over whatever
//! lies beneath.

use ff_core::id::ObjectId;
use ff_core::model::{Color, DesignObject, ObjectKind, PlacedImage, Stroke, TextRun};
use ff_core::outline::GarmentOutline;
use ff_core::surface::{CANVAS_HEIGHT, CANVAS_WIDTH, CanvasSurface};
use kurbo::{BezPath, PathEl, Rect};
use std::cell::RefCell;
use std::collections::HashMap;
use wasm_bindgen::{Clamped, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

const SELECTION_COLOR: &str = "#4FC3F7";

/// Per-object render resources, dropped once their object leaves the
/// surface.
#[derive(Debug)]
pub struct ScratchCache<T> {
    entries: RefCell<HashMap<ObjectId, T>>,
}

impl<T> Default for ScratchCache<T> {
    fn default() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
        }
    }
}

impl<T: Clone> ScratchCache<T> {
    /// Cached entry for `id`, building it on first use. A failed build is
    /// not cached, so the next frame retries.
    pub fn get_or_build(&self, id: ObjectId, build: impl FnOnce() -> Option<T>) -> Option<T> {
        if let Some(hit) = self.entries.borrow().get(&id) {
            return Some(hit.clone());
        }
        let built = build()?;
        self.entries.borrow_mut().insert(id, built.clone());
        Some(built)
    }

    pub fn retain_live(&self, live: &[ObjectId]) {
        self.entries.borrow_mut().retain(|id, _| live.contains(id));
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub type ImageCache = ScratchCache<HtmlCanvasElement>;

pub fn render_surface(ctx: &CanvasRenderingContext2d, surface: &CanvasSurface, images: &ImageCache) {
    ctx.set_fill_style_str(&surface.background().to_hex());
    ctx.fill_rect(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT);

    for object in surface.objects() {
        render_object(ctx, object, images);
    }

    if let Some(selected) = surface.selected().and_then(|id| surface.get(id)) {
        draw_selection_box(ctx, selected.bounds());
    }

    images.retain_live(&image_ids(surface));
}

fn image_ids(surface: &CanvasSurface) -> Vec<ObjectId> {
    surface
        .user_objects()
        .iter()
        .filter(|o| matches!(o.kind, ObjectKind::Image(_)))
        .map(|o| o.id)
        .collect()
}

fn render_object(ctx: &CanvasRenderingContext2d, object: &DesignObject, images: &ImageCache) {
    match &object.kind {
        ObjectKind::Outline(outline) => draw_outline(ctx, outline),
        ObjectKind::Stroke(stroke) => draw_stroke(ctx, stroke),
        ObjectKind::Text(text) => draw_text(ctx, text),
        ObjectKind::Image(image) => {
            let Some(scratch) = images.get_or_build(object.id, || upload_image(image)) else {
                return;
            };
            let _ = ctx.draw_image_with_html_canvas_element(
                &scratch,
                image.position.x,
                image.position.y,
            );
        }
    }
}

// ─── Drawing primitives ─────────────────────────────────────────────────

fn draw_outline(ctx: &CanvasRenderingContext2d, outline: &GarmentOutline) {
    ctx.save();
    ctx.set_stroke_style_str(&outline.stroke_color.to_hex());
    ctx.set_line_width(outline.line_width);
    let _ = ctx.set_line_dash(&js_sys::Array::of2(
        &outline.dash[0].into(),
        &outline.dash[1].into(),
    ));
    trace_path(ctx, &outline.path);
    ctx.stroke();
    ctx.restore();
}

fn draw_stroke(ctx: &CanvasRenderingContext2d, stroke: &Stroke) {
    let Some((first, rest)) = stroke.points.split_first() else {
        return;
    };
    ctx.save();
    ctx.set_stroke_style_str(&css_color(stroke.color));
    ctx.set_line_width(stroke.width);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    if rest.is_empty() {
        // A single tap still leaves a dot.
        ctx.line_to(first.x, first.y);
    }
    for p in rest {
        ctx.line_to(p.x, p.y);
    }
    ctx.stroke();
    ctx.restore();
}

fn draw_text(ctx: &CanvasRenderingContext2d, text: &TextRun) {
    ctx.save();
    ctx.set_font(&text.font.css());
    ctx.set_fill_style_str(&css_color(text.color));
    ctx.set_text_baseline("alphabetic");
    let _ = ctx.fill_text(&text.content, text.position.x, text.position.y);
    ctx.restore();
}

/// Copy decoded pixels into a fresh transparent `<canvas>` of the same
/// size.
fn upload_image(image: &PlacedImage) -> Option<HtmlCanvasElement> {
    let pixels = &image.pixels;
    let document = web_sys::window().and_then(|w| w.document())?;
    let scratch = document
        .create_element("canvas")
        .ok()?
        .dyn_into::<HtmlCanvasElement>()
        .ok()?;
    scratch.set_width(pixels.width());
    scratch.set_height(pixels.height());

    let scratch_ctx = scratch
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;
    let data = ImageData::new_with_u8_clamped_array_and_sh(
        Clamped(pixels.as_raw().as_slice()),
        pixels.width(),
        pixels.height(),
    );
    match data {
        Ok(data) => {
            // The scratch canvas starts fully transparent, so a straight
            // copy is exact here.
            scratch_ctx.put_image_data(&data, 0.0, 0.0).ok()?;
            Some(scratch)
        }
        Err(e) => {
            log::warn!("failed to build ImageData: {e:?}");
            None
        }
    }
}

fn draw_selection_box(ctx: &CanvasRenderingContext2d, b: Rect) {
    ctx.save();
    ctx.set_stroke_style_str(SELECTION_COLOR);
    ctx.set_line_width(1.5);
    let _ = ctx.set_line_dash(&js_sys::Array::of2(&4.0.into(), &3.0.into()));
    ctx.stroke_rect(b.x0 - 2.0, b.y0 - 2.0, b.width() + 4.0, b.height() + 4.0);
    ctx.restore();
}

fn trace_path(ctx: &CanvasRenderingContext2d, path: &BezPath) {
    ctx.begin_path();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => ctx.move_to(p.x, p.y),
            PathEl::LineTo(p) => ctx.line_to(p.x, p.y),
            PathEl::QuadTo(c, p) => ctx.quadratic_curve_to(c.x, c.y, p.x, p.y),
            PathEl::CurveTo(c1, c2, p) => ctx.bezier_curve_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y),
            PathEl::ClosePath => ctx.close_path(),
        }
    }
}

/// `rgba()` so translucent colors keep their alpha.
pub fn css_color(c: Color) -> String {
    if c.a >= 1.0 {
        return c.to_hex();
    }
    format!(
        "rgba({}, {}, {}, {})",
        (c.r * 255.0).round() as u8,
        (c.g * 255.0).round() as u8,
        (c.b * 255.0).round() as u8,
        c.a
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scratch_cache_builds_once_and_drops_dead_entries() {
        let cache: ScratchCache<u32> = ScratchCache::default();
        let (a, b) = (ObjectId::intern("image_a"), ObjectId::intern("image_b"));
        let mut builds = 0;

        assert_eq!(cache.get_or_build(a, || { builds += 1; Some(1) }), Some(1));
        assert_eq!(cache.get_or_build(a, || { builds += 1; Some(2) }), Some(1));
        assert_eq!(builds, 1);

        assert_eq!(cache.get_or_build(b, || None), None);
        assert_eq!(cache.len(), 1, "failed builds are not cached");
        assert_eq!(cache.get_or_build(b, || Some(7)), Some(7));

        cache.retain_live(&[b]);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get_or_build(a, || Some(3)), Some(3));
        cache.retain_live(&[]);
        assert!(cache.is_empty());
    }

    #[test]
    fn opaque_color_is_hex() {
        assert_eq!(css_color(Color::rgb8(0x3B, 0x82, 0xF6)), "#3B82F6");
    }

    #[test]
    fn translucent_color_is_rgba() {
        assert_eq!(css_color(Color::rgba(1.0, 0.0, 0.0, 0.5)), "rgba(255, 0, 0, 0.5)");
    }
}
