//! WASM bridge for the design studio: exposes a `DesignSession` to
//! JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The page owns the DOM
//! controls and forwards every interaction here; rendering goes through
//! [`StudioCanvas::render`].

mod render2d;

use ff_assist::{AssistError, GenerateRequest, decode_reply};
use ff_core::model::{Color, GarmentKind, Theme};
use ff_core::sizing::{MeasurementField, SizeMode, SizeToken};
use ff_core::surface::{CANVAS_HEIGHT, CANVAS_WIDTH};
use ff_editor::input::InputEvent;
use ff_editor::tools::{ColorChannel, ToolKind};
use ff_editor::DesignSession;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// The main WASM-facing studio controller.
#[wasm_bindgen]
pub struct StudioCanvas {
    session: DesignSession,
    images: render2d::ImageCache,
}

impl Default for StudioCanvas {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl StudioCanvas {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook_setup();
        Self {
            session: DesignSession::new(),
            images: render2d::ImageCache::default(),
        }
    }

    pub fn width(&self) -> f64 {
        CANVAS_WIDTH
    }

    pub fn height(&self) -> f64 {
        CANVAS_HEIGHT
    }

    pub fn render(&self, ctx: &CanvasRenderingContext2d) {
        render2d::render_surface(ctx, self.session.surface(), &self.images);
    }

    // ─── Garment & theme ─────────────────────────────────────────────────

    /// Switch garment by id (`shirt`, `pant`, ...). Returns `false` for an
    /// unknown id.
    pub fn set_garment(&mut self, id: &str) -> bool {
        match id.parse::<GarmentKind>() {
            Ok(garment) => {
                self.session.select_garment(garment);
                true
            }
            Err(e) => {
                log::warn!("{e}");
                false
            }
        }
    }

    pub fn garment(&self) -> String {
        self.session.garment().id().to_string()
    }

    /// JSON list of `{id, name, glyph}` for the garment picker.
    pub fn garment_catalog(&self) -> String {
        let entries: Vec<_> = GarmentKind::ALL
            .iter()
            .map(|g| {
                serde_json::json!({
                    "id": g.id(),
                    "name": g.display_name(),
                    "glyph": g.glyph(),
                })
            })
            .collect();
        serde_json::Value::Array(entries).to_string()
    }

    pub fn set_theme(&mut self, is_dark: bool) {
        self.session.set_theme(Theme::from_dark_flag(is_dark));
    }

    /// Flip the theme. Returns `true` if it is now dark.
    pub fn toggle_theme(&mut self) -> bool {
        self.session.toggle_theme().is_dark()
    }

    // ─── Tools ───────────────────────────────────────────────────────────

    pub fn set_tool(&mut self, id: &str) -> bool {
        let Some(tool) = ToolKind::from_id(id) else {
            return false;
        };
        self.session.select_tool(tool);
        true
    }

    pub fn active_tool(&self) -> String {
        self.session.tools().active().id().to_string()
    }

    /// Whether the image tool is waiting for the host to supply a file.
    pub fn awaiting_file(&self) -> bool {
        self.session.tools().awaiting_file()
    }

    pub fn text_form_open(&self) -> bool {
        self.session.tools().text_form().is_some()
    }

    /// Set the brush or text color from a hex string. `channel` is
    /// `"brush"` or `"text"`.
    pub fn set_color(&mut self, channel: &str, hex: &str) -> bool {
        let channel = match channel {
            "brush" => ColorChannel::Brush,
            "text" => ColorChannel::Text,
            _ => return false,
        };
        let Some(color) = Color::from_hex(hex) else {
            return false;
        };
        self.session.set_color(channel, color);
        true
    }

    pub fn set_brush_width(&mut self, width: f64) {
        self.session.set_brush_width(width);
    }

    pub fn set_text_draft(&mut self, text: &str) {
        self.session.set_text_draft(text);
    }

    /// Returns `true` if text was placed.
    pub fn confirm_text(&mut self, content: &str) -> bool {
        self.session.confirm_text(content).is_some()
    }

    pub fn cancel_text(&mut self) {
        self.session.cancel_text();
    }

    /// Hand over the chosen file's bytes; an empty slice means the picker
    /// was cancelled. Errors are returned as a message string.
    pub fn provide_image(&mut self, bytes: &[u8]) -> Result<bool, JsValue> {
        let bytes = (!bytes.is_empty()).then_some(bytes);
        self.session
            .provide_image(bytes)
            .map(|id| id.is_some())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    // ─── Pointer & keyboard ─────────────────────────────────────────────

    /// Returns `true` if a new object was committed.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.session
            .pointer(&InputEvent::from_pointer_down(x, y))
            .is_some()
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.session
            .pointer(&InputEvent::from_pointer_move(x, y))
            .is_some()
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) -> bool {
        self.session
            .pointer(&InputEvent::from_pointer_up(x, y))
            .is_some()
    }

    pub fn pointer_leave(&mut self) -> bool {
        self.session.pointer(&InputEvent::PointerLeave).is_some()
    }

    pub fn handle_key(&mut self, key: &str, ctrl: bool, shift: bool, meta: bool) -> bool {
        self.session.handle_key(key, ctrl, shift, meta)
    }

    /// Id of the selected object, if any.
    pub fn selected_id(&self) -> Option<String> {
        self.session
            .surface()
            .selected()
            .map(|id| id.as_str().to_string())
    }

    // ─── History ─────────────────────────────────────────────────────────

    pub fn undo(&mut self) -> bool {
        self.session.undo().is_some()
    }

    pub fn redo(&mut self) -> bool {
        self.session.redo().is_some()
    }

    pub fn can_undo(&self) -> bool {
        self.session.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.session.can_redo()
    }

    pub fn clear_canvas(&mut self) {
        self.session.clear_canvas();
    }

    /// Number of user objects above the outline.
    pub fn object_count(&self) -> usize {
        self.session.surface().user_objects().len()
    }

    // ─── Sizing ──────────────────────────────────────────────────────────

    pub fn set_size_mode(&mut self, custom: bool) {
        let mode = if custom {
            SizeMode::Custom
        } else {
            SizeMode::Standard
        };
        self.session.sizing.set_mode(mode);
    }

    pub fn select_size(&mut self, token: &str) -> bool {
        match token.parse::<SizeToken>() {
            Ok(token) => {
                self.session.sizing.select_standard(token);
                true
            }
            Err(e) => {
                log::warn!("{e}");
                false
            }
        }
    }

    /// Set one custom measurement (`chest`, `waist`, `height`, `shoulder`).
    pub fn set_measurement(&mut self, field: &str, value: f32) -> Result<(), JsValue> {
        let field = measurement_field(field)
            .ok_or_else(|| JsValue::from_str(&format!("unknown measurement: {field}")))?;
        self.session
            .sizing
            .set_measurement(field, value)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn clear_measurement(&mut self, field: &str) {
        if let Some(field) = measurement_field(field) {
            self.session.sizing.clear_measurement(field);
        }
    }

    // ─── Notes, preview, FAQ ─────────────────────────────────────────────

    /// Returns `true` if the text was truncated to the limit.
    pub fn set_notes(&mut self, text: &str) -> bool {
        self.session.set_notes(text)
    }

    pub fn notes(&self) -> String {
        self.session.notes().as_str().to_string()
    }

    pub fn notes_counter(&self) -> String {
        self.session.notes().counter_label()
    }

    /// Flip the preview. Returns `true` if it now shows the back.
    pub fn toggle_preview(&mut self) -> bool {
        self.session.preview.toggle();
        self.session.preview.mirrored()
    }

    pub fn preview_caption(&self) -> String {
        self.session.preview.caption(self.session.garment())
    }

    pub fn preview_toggle_label(&self) -> String {
        self.session.preview.toggle_label().to_string()
    }

    /// Fill behind the preview glyph for the current theme.
    pub fn preview_backdrop(&self) -> String {
        self.session.theme().preview_base().to_hex()
    }

    pub fn toggle_faq(&mut self, index: usize) {
        self.session.faq.toggle(index);
    }

    pub fn expanded_faq(&self) -> Option<usize> {
        self.session.faq.expanded_index()
    }

    // ─── Assistant ───────────────────────────────────────────────────────
    //
    // The page performs the HTTP call: `*_submit` returns the JSON request
    // body to POST (or `undefined` when there is nothing to send), and the
    // reply comes back through `*_resolve` with its status and body text,
    // or `*_fail` when the fetch itself rejected.

    pub fn chat_open(&mut self) {
        self.session.chat.open();
    }

    pub fn chat_close(&mut self) {
        self.session.chat.close();
    }

    pub fn chat_toggle_minimized(&mut self) {
        self.session.chat.toggle_minimized();
    }

    pub fn chat_is_open(&self) -> bool {
        self.session.chat.is_open()
    }

    pub fn chat_is_minimized(&self) -> bool {
        self.session.chat.is_minimized()
    }

    pub fn chat_loading(&self) -> bool {
        self.session.chat.loading()
    }

    /// JSON list of `{role, text}`.
    pub fn chat_messages(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.session.chat.messages()).map_err(json_error)
    }

    pub fn chat_submit(&mut self, text: &str) -> Result<Option<String>, JsValue> {
        self.session
            .chat
            .submit(text)
            .map(|prompt| request_body(&prompt))
            .transpose()
    }

    pub fn chat_resolve(&mut self, status: u16, body: &str) {
        self.session.chat.resolve(decode_reply(status, body.as_bytes()));
    }

    pub fn chat_fail(&mut self, message: &str) {
        self.session
            .chat
            .resolve(Err(AssistError::Network(message.to_string())));
    }

    /// Start refining the open text form's draft.
    pub fn refine_submit(&mut self) -> Result<Option<String>, JsValue> {
        self.session
            .request_refinement()
            .map(|prompt| request_body(&prompt))
            .transpose()
    }

    pub fn refine_resolve(&mut self, status: u16, body: &str) {
        self.session
            .suggestions
            .resolve(decode_reply(status, body.as_bytes()));
    }

    pub fn refine_fail(&mut self, message: &str) {
        self.session
            .suggestions
            .resolve(Err(AssistError::Network(message.to_string())));
    }

    pub fn refine_loading(&self) -> bool {
        self.session.suggestions.loading()
    }

    /// JSON list of suggestion strings.
    pub fn suggestions(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.session.suggestions.suggestions()).map_err(json_error)
    }

    /// Place suggestion `index` on the canvas as text. Returns `true` if a
    /// text object was created.
    pub fn apply_suggestion(&mut self, index: usize) -> bool {
        self.session.apply_suggestion(index).is_some()
    }

    pub fn dismiss_suggestions(&mut self) {
        self.session.suggestions.dismiss();
    }

    // ─── Order ───────────────────────────────────────────────────────────

    /// JSON `{garment, size, design, notesPreview}` for the summary panel.
    pub fn order_summary(&self) -> String {
        let s = self.session.order_summary();
        serde_json::json!({
            "garment": s.garment,
            "size": s.size,
            "design": s.design,
            "notesPreview": s.notes_preview,
        })
        .to_string()
    }

    /// Snapshot the order and pass its JSON to `on_complete`.
    pub fn place_order(&self, on_complete: &js_sys::Function) -> Result<(), JsValue> {
        let mut json = None;
        self.session.place_order(|record| json = Some(record.to_json()));
        let json = json
            .ok_or_else(|| JsValue::from_str("order was not produced"))?
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        on_complete.call1(&JsValue::NULL, &JsValue::from_str(&json))?;
        Ok(())
    }
}

fn request_body(prompt: &str) -> Result<String, JsValue> {
    GenerateRequest::from_prompt(prompt).to_json().map_err(json_error)
}

fn json_error(e: serde_json::Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn measurement_field(name: &str) -> Option<MeasurementField> {
    MeasurementField::ALL
        .into_iter()
        .find(|f| f.name().eq_ignore_ascii_case(name.trim()))
}

/// Set up a panic hook that logs to the browser console.
fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("FashionForge WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn garment_and_tool_ids_round_trip() {
        let mut canvas = StudioCanvas::new();
        assert!(canvas.set_garment("Dress"));
        assert_eq!(canvas.garment(), "dress");
        assert!(!canvas.set_garment("hat"));
        assert!(canvas.set_tool("brush"));
        assert_eq!(canvas.active_tool(), "brush");
        assert!(!canvas.set_tool("lasso"));
    }

    #[test]
    fn brush_drag_commits_stroke() {
        let mut canvas = StudioCanvas::new();
        canvas.set_tool("brush");
        assert!(!canvas.pointer_down(10.0, 10.0));
        assert!(!canvas.pointer_move(20.0, 25.0));
        assert!(canvas.pointer_up(30.0, 40.0));
        assert_eq!(canvas.object_count(), 1);
        assert!(canvas.undo());
        assert_eq!(canvas.object_count(), 0);
        assert!(canvas.can_redo());
    }

    #[test]
    fn measurement_names_resolve() {
        assert_eq!(measurement_field(" Chest "), Some(MeasurementField::Chest));
        assert_eq!(measurement_field("hips"), None);
    }

    #[test]
    fn summary_json_fields() {
        let mut canvas = StudioCanvas::new();
        canvas.select_size("m");
        let v: serde_json::Value = serde_json::from_str(&canvas.order_summary()).unwrap();
        assert_eq!(v["size"], "M");
        assert_eq!(v["design"], "Custom design");
        assert_eq!(v["notesPreview"], serde_json::Value::Null);
    }

    #[test]
    fn refine_round_trip_places_text() {
        let mut canvas = StudioCanvas::new();
        assert_eq!(canvas.refine_submit().ok().flatten(), None);

        canvas.set_tool("text");
        canvas.set_text_draft("Team Tigers");
        let body = canvas.refine_submit().ok().flatten().unwrap();
        let request: serde_json::Value = serde_json::from_str(&body).unwrap();
        let prompt = request["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.ends_with("Team Tigers"));
        assert!(canvas.refine_loading());

        canvas.refine_resolve(
            200,
            r#"{"candidates":[{"content":{"parts":[{"text":"Tigers United\nRoar On"}]}}]}"#,
        );
        assert!(!canvas.refine_loading());
        let list: Vec<String> = serde_json::from_str(&canvas.suggestions().unwrap()).unwrap();
        assert_eq!(list, vec!["Tigers United", "Roar On"]);

        assert!(canvas.apply_suggestion(0));
        assert_eq!(canvas.object_count(), 1);
        assert_eq!(canvas.active_tool(), "select");
    }

    #[test]
    fn chat_error_status_appends_fallback() {
        let mut canvas = StudioCanvas::new();
        canvas.chat_open();
        assert!(canvas.chat_submit("  ").ok().flatten().is_none());
        assert!(canvas.chat_submit("Best fabric?").ok().flatten().is_some());
        assert!(canvas.chat_loading());

        canvas.chat_resolve(500, "internal");
        assert!(!canvas.chat_loading());
        let messages: serde_json::Value =
            serde_json::from_str(&canvas.chat_messages().unwrap()).unwrap();
        let messages = messages.as_array().unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[2]["text"], ff_assist::FALLBACK_REPLY);
    }

    #[test]
    fn preview_backdrop_follows_theme() {
        let mut canvas = StudioCanvas::new();
        assert_eq!(canvas.preview_backdrop(), "#F3F4F6");
        canvas.toggle_theme();
        assert_eq!(canvas.preview_backdrop(), "#374151");
    }

    #[test]
    fn catalog_lists_every_garment() {
        let canvas = StudioCanvas::new();
        let v: serde_json::Value = serde_json::from_str(&canvas.garment_catalog()).unwrap();
        assert_eq!(v.as_array().map(Vec::len), Some(GarmentKind::ALL.len()));
    }
}
