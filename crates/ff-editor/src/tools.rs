//! Tool controller for canvas interactions.
//!
//! One tool is active at a time and transitions happen only on explicit
//! tool selection. The controller talks to the surface through
//! `CanvasOps`, never through a concrete drawing object.
//!
//! | Tool | On enter | On leave |
//! |------|----------|----------|
//! | **Select** | — | — |
//! | **Brush** | Arm drawing mode | Disarm, drop unfinished gesture |
//! | **Text** | Open text form | Close form |
//! | **Image** | Request file prompt | Drop pending prompt |
//! | **Color** | Show picker | — |

use crate::input::InputEvent;
use ff_core::id::ObjectId;
use ff_core::model::{Color, FontSpec};
use ff_core::surface::{BrushSpec, CanvasOps, ImageScale};
use ff_core::{DecodeError, Point};
use smallvec::SmallVec;

pub const DEFAULT_COLOR: Color = Color::rgb8(0x3B, 0x82, 0xF6);
pub const DEFAULT_BRUSH_WIDTH: f64 = 5.0;
pub const TEXT_INSERT_POINT: Point = Point::new(100.0, 100.0);
pub const IMAGE_INSERT_POINT: Point = Point::new(50.0, 50.0);
/// Inserted images are scaled so their longer side spans this many pixels.
pub const IMAGE_FIT_BOX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToolKind {
    #[default]
    Select,
    Brush,
    Text,
    Image,
    Color,
}

impl ToolKind {
    pub fn id(self) -> &'static str {
        match self {
            ToolKind::Select => "select",
            ToolKind::Brush => "brush",
            ToolKind::Text => "text",
            ToolKind::Image => "image",
            ToolKind::Color => "color",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "select" => Some(ToolKind::Select),
            "brush" => Some(ToolKind::Brush),
            "text" => Some(ToolKind::Text),
            "image" => Some(ToolKind::Image),
            "color" => Some(ToolKind::Color),
            _ => None,
        }
    }
}

/// Which tool a color change belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChannel {
    Brush,
    Text,
}

/// Open text-entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextForm {
    pub draft: String,
}

// ─── Brush gesture ───────────────────────────────────────────────────────

/// Collects pointer positions for one freehand drag.
#[derive(Debug, Default)]
struct BrushGesture {
    drawing: bool,
    points: SmallVec<[Point; 64]>,
}

impl BrushGesture {
    fn begin(&mut self, p: Point) {
        self.drawing = true;
        self.points.clear();
        self.points.push(p);
    }

    fn extend(&mut self, p: Point) {
        if self.drawing && self.points.last() != Some(&p) {
            self.points.push(p);
        }
    }

    fn finish(&mut self) -> Option<SmallVec<[Point; 64]>> {
        if !self.drawing {
            return None;
        }
        self.drawing = false;
        Some(std::mem::take(&mut self.points))
    }

    fn abandon(&mut self) {
        self.drawing = false;
        self.points.clear();
    }
}

// ─── Controller ──────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct ToolController {
    active: ToolKind,
    previous: ToolKind,
    brush_color: Color,
    brush_width: f64,
    text_color: Color,
    font: FontSpec,
    text_form: Option<TextForm>,
    awaiting_file: bool,
    gesture: BrushGesture,
}

impl Default for ToolController {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolController {
    pub fn new() -> Self {
        Self {
            active: ToolKind::Select,
            previous: ToolKind::Select,
            brush_color: DEFAULT_COLOR,
            brush_width: DEFAULT_BRUSH_WIDTH,
            text_color: DEFAULT_COLOR,
            font: FontSpec::default(),
            text_form: None,
            awaiting_file: false,
            gesture: BrushGesture::default(),
        }
    }

    pub fn active(&self) -> ToolKind {
        self.active
    }

    pub fn previous(&self) -> ToolKind {
        self.previous
    }

    pub fn brush_color(&self) -> Color {
        self.brush_color
    }

    pub fn brush_width(&self) -> f64 {
        self.brush_width
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn text_form(&self) -> Option<&TextForm> {
        self.text_form.as_ref()
    }

    /// True while the image tool is waiting for the host's file picker.
    pub fn awaiting_file(&self) -> bool {
        self.awaiting_file
    }

    pub fn is_stroking(&self) -> bool {
        self.gesture.drawing
    }

    fn brush_spec(&self) -> BrushSpec {
        BrushSpec {
            color: self.brush_color,
            width: self.brush_width,
        }
    }

    /// Switch tools. Leaves the current tool, then enters `tool`.
    pub fn select_tool<C: CanvasOps + ?Sized>(&mut self, tool: ToolKind, canvas: &mut C) {
        self.leave(canvas);
        if tool != self.active {
            self.previous = self.active;
        }
        self.active = tool;
        match tool {
            ToolKind::Brush => canvas.set_drawing_mode(Some(self.brush_spec())),
            ToolKind::Text => self.text_form = Some(TextForm::default()),
            ToolKind::Image => self.awaiting_file = true,
            ToolKind::Select | ToolKind::Color => {}
        }
        log::debug!("tool {} -> {}", self.previous.id(), tool.id());
    }

    fn leave<C: CanvasOps + ?Sized>(&mut self, canvas: &mut C) {
        match self.active {
            ToolKind::Brush => {
                self.gesture.abandon();
                canvas.set_drawing_mode(None);
            }
            ToolKind::Text => self.text_form = None,
            ToolKind::Image => self.awaiting_file = false,
            ToolKind::Select | ToolKind::Color => {}
        }
    }

    /// Swap back to the previously active tool.
    pub fn toggle_last_tool<C: CanvasOps + ?Sized>(&mut self, canvas: &mut C) {
        let target = self.previous;
        self.select_tool(target, canvas);
    }

    pub fn set_draft(&mut self, text: &str) {
        if let Some(form) = self.text_form.as_mut() {
            form.draft = text.to_string();
        }
    }

    /// Create a text object from `content` and return to select.
    ///
    /// Ignored unless the text form is open; blank content keeps the form open.
    pub fn confirm_text<C: CanvasOps + ?Sized>(
        &mut self,
        content: &str,
        canvas: &mut C,
    ) -> Option<ObjectId> {
        if self.text_form.is_none() {
            return None;
        }
        if content.trim().is_empty() {
            return None;
        }
        let id = canvas.add_text(content, TEXT_INSERT_POINT, self.text_color, self.font.clone());
        self.select_tool(ToolKind::Select, canvas);
        Some(id)
    }

    pub fn cancel_text<C: CanvasOps + ?Sized>(&mut self, canvas: &mut C) {
        if self.text_form.is_some() {
            self.select_tool(ToolKind::Select, canvas);
        }
    }

    /// Deliver the file picker's result.
    ///
    /// `None` means the picker was cancelled. Either way the controller
    /// returns to select; a decode failure leaves the canvas untouched.
    pub fn provide_image<C: CanvasOps + ?Sized>(
        &mut self,
        bytes: Option<&[u8]>,
        canvas: &mut C,
    ) -> Result<Option<ObjectId>, DecodeError> {
        if !self.awaiting_file {
            return Ok(None);
        }
        let result = match bytes {
            Some(bytes) => canvas
                .add_image(bytes, IMAGE_INSERT_POINT, ImageScale::FitWithin(IMAGE_FIT_BOX))
                .map(Some),
            None => Ok(None),
        };
        self.select_tool(ToolKind::Select, canvas);
        result
    }

    /// Change the color of one channel. Existing objects keep their color.
    pub fn set_color<C: CanvasOps + ?Sized>(
        &mut self,
        channel: ColorChannel,
        color: Color,
        canvas: &mut C,
    ) {
        match channel {
            ColorChannel::Brush => {
                self.brush_color = color;
                if self.active == ToolKind::Brush {
                    canvas.set_drawing_mode(Some(self.brush_spec()));
                }
            }
            ColorChannel::Text => self.text_color = color,
        }
    }

    pub fn set_brush_width<C: CanvasOps + ?Sized>(&mut self, width: f64, canvas: &mut C) {
        if !(width.is_finite() && width > 0.0) {
            return;
        }
        self.brush_width = width;
        if self.active == ToolKind::Brush {
            canvas.set_drawing_mode(Some(self.brush_spec()));
        }
    }

    /// Feed a pointer event. Only the brush tool consumes pointer input;
    /// a completed drag commits one stroke and returns its id.
    pub fn handle<C: CanvasOps + ?Sized>(
        &mut self,
        event: &InputEvent,
        canvas: &mut C,
    ) -> Option<ObjectId> {
        if self.active != ToolKind::Brush {
            return None;
        }
        match event {
            InputEvent::PointerDown { x, y } => {
                self.gesture.begin(Point::new(*x, *y));
                None
            }
            InputEvent::PointerMove { x, y } => {
                self.gesture.extend(Point::new(*x, *y));
                None
            }
            InputEvent::PointerUp { x, y } => {
                self.gesture.extend(Point::new(*x, *y));
                self.commit_stroke(canvas)
            }
            InputEvent::PointerLeave => self.commit_stroke(canvas),
        }
    }

    fn commit_stroke<C: CanvasOps + ?Sized>(&mut self, canvas: &mut C) -> Option<ObjectId> {
        let points = self.gesture.finish()?;
        canvas.add_freehand_stroke(&points, self.brush_color, self.brush_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ff_core::model::ObjectKind;
    use ff_core::surface::CanvasSurface;

    fn down(x: f64, y: f64) -> InputEvent {
        InputEvent::from_pointer_down(x, y)
    }

    fn mv(x: f64, y: f64) -> InputEvent {
        InputEvent::from_pointer_move(x, y)
    }

    #[test]
    fn brush_arms_and_disarms_drawing_mode() {
        let mut canvas = CanvasSurface::default();
        let mut tools = ToolController::new();

        tools.select_tool(ToolKind::Brush, &mut canvas);
        assert_eq!(
            canvas.brush(),
            Some(BrushSpec {
                color: DEFAULT_COLOR,
                width: DEFAULT_BRUSH_WIDTH
            })
        );

        tools.select_tool(ToolKind::Select, &mut canvas);
        assert!(!canvas.is_drawing());
    }

    #[test]
    fn brush_drag_commits_single_stroke() {
        let mut canvas = CanvasSurface::default();
        let mut tools = ToolController::new();
        tools.select_tool(ToolKind::Brush, &mut canvas);

        assert!(tools.handle(&down(10.0, 10.0), &mut canvas).is_none());
        assert!(tools.handle(&mv(20.0, 15.0), &mut canvas).is_none());
        assert!(tools.handle(&mv(20.0, 15.0), &mut canvas).is_none());
        let id = tools
            .handle(&InputEvent::from_pointer_up(30.0, 25.0), &mut canvas)
            .expect("stroke committed on release");

        match &canvas.get(id).unwrap().kind {
            ObjectKind::Stroke(s) => {
                assert_eq!(s.points.len(), 3, "duplicate move point collapsed");
                assert_eq!(s.color, DEFAULT_COLOR);
            }
            other => panic!("expected stroke, got {other:?}"),
        }
        assert_eq!(canvas.user_objects().len(), 1);
    }

    #[test]
    fn pointer_input_ignored_outside_brush() {
        let mut canvas = CanvasSurface::default();
        let mut tools = ToolController::new();
        tools.handle(&down(10.0, 10.0), &mut canvas);
        tools.handle(&InputEvent::from_pointer_up(20.0, 20.0), &mut canvas);
        assert!(canvas.user_objects().is_empty());
    }

    #[test]
    fn switching_tools_mid_stroke_drops_gesture() {
        let mut canvas = CanvasSurface::default();
        let mut tools = ToolController::new();
        tools.select_tool(ToolKind::Brush, &mut canvas);
        tools.handle(&down(0.0, 0.0), &mut canvas);
        tools.select_tool(ToolKind::Select, &mut canvas);
        assert!(!tools.is_stroking());
        assert!(tools.handle(&InputEvent::PointerLeave, &mut canvas).is_none());
        assert!(canvas.user_objects().is_empty());
    }

    #[test]
    fn text_confirm_inserts_at_default_point_and_returns_to_select() {
        let mut canvas = CanvasSurface::default();
        let mut tools = ToolController::new();
        tools.select_tool(ToolKind::Text, &mut canvas);
        assert!(tools.text_form().is_some());

        let id = tools.confirm_text("Team Tigers", &mut canvas).unwrap();
        match &canvas.get(id).unwrap().kind {
            ObjectKind::Text(t) => {
                assert_eq!(t.content, "Team Tigers");
                assert_eq!(t.position, TEXT_INSERT_POINT);
                assert_eq!(t.font, FontSpec::default());
            }
            other => panic!("expected text, got {other:?}"),
        }
        assert_eq!(tools.active(), ToolKind::Select);
        assert!(tools.text_form().is_none());
    }

    #[test]
    fn blank_text_keeps_form_open() {
        let mut canvas = CanvasSurface::default();
        let mut tools = ToolController::new();
        tools.select_tool(ToolKind::Text, &mut canvas);
        assert!(tools.confirm_text("   ", &mut canvas).is_none());
        assert_eq!(tools.active(), ToolKind::Text);
        assert!(canvas.user_objects().is_empty());
    }

    #[test]
    fn confirm_without_form_is_ignored() {
        let mut canvas = CanvasSurface::default();
        let mut tools = ToolController::new();
        assert!(tools.confirm_text("stray", &mut canvas).is_none());
        assert!(canvas.user_objects().is_empty());
    }

    #[test]
    fn image_cancel_returns_to_select_without_mutation() {
        let mut canvas = CanvasSurface::default();
        let mut tools = ToolController::new();
        tools.select_tool(ToolKind::Image, &mut canvas);
        assert!(tools.awaiting_file());

        assert!(matches!(tools.provide_image(None, &mut canvas), Ok(None)));
        assert_eq!(tools.active(), ToolKind::Select);
        assert!(canvas.user_objects().is_empty());
    }

    #[test]
    fn bad_image_bytes_return_decode_error() {
        let mut canvas = CanvasSurface::default();
        let mut tools = ToolController::new();
        tools.select_tool(ToolKind::Image, &mut canvas);
        assert!(tools.provide_image(Some(b"\x00\x01garbage"), &mut canvas).is_err());
        assert_eq!(tools.active(), ToolKind::Select);
        assert_eq!(canvas.len(), 1);
    }

    #[test]
    fn brush_color_updates_live_brush_only() {
        let mut canvas = CanvasSurface::default();
        let mut tools = ToolController::new();
        tools.select_tool(ToolKind::Brush, &mut canvas);
        let red = Color::from_hex("#EF4444").unwrap();

        tools.set_color(ColorChannel::Brush, red, &mut canvas);
        assert_eq!(canvas.brush().map(|b| b.color), Some(red));
        assert_eq!(tools.text_color(), DEFAULT_COLOR);
    }

    #[test]
    fn text_color_does_not_recolor_existing_text() {
        let mut canvas = CanvasSurface::default();
        let mut tools = ToolController::new();
        tools.select_tool(ToolKind::Text, &mut canvas);
        let first = tools.confirm_text("First", &mut canvas).unwrap();

        let green = Color::from_hex("#10B981").unwrap();
        tools.set_color(ColorChannel::Text, green, &mut canvas);
        tools.select_tool(ToolKind::Text, &mut canvas);
        let second = tools.confirm_text("Second", &mut canvas).unwrap();

        assert_eq!(canvas.get(first).unwrap().color(), Some(DEFAULT_COLOR));
        assert_eq!(canvas.get(second).unwrap().color(), Some(green));
        assert!(!canvas.is_drawing(), "text color must not arm the brush");
    }

    #[test]
    fn toggle_last_tool_swaps() {
        let mut canvas = CanvasSurface::default();
        let mut tools = ToolController::new();
        tools.select_tool(ToolKind::Brush, &mut canvas);
        tools.select_tool(ToolKind::Color, &mut canvas);
        tools.toggle_last_tool(&mut canvas);
        assert_eq!(tools.active(), ToolKind::Brush);
        assert!(canvas.is_drawing());
        assert_eq!(tools.previous(), ToolKind::Color);
    }

    #[test]
    fn tool_ids_round_trip() {
        for tool in [
            ToolKind::Select,
            ToolKind::Brush,
            ToolKind::Text,
            ToolKind::Image,
            ToolKind::Color,
        ] {
            assert_eq!(ToolKind::from_id(tool.id()), Some(tool));
        }
        assert_eq!(ToolKind::from_id("pen"), None);
    }
}
