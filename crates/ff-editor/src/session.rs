//! Design session: the single owner of all studio state.
//!
//! Hosts (the WASM bridge, tests) mutate the studio only through this
//! type. It routes pointer input to selection or the active tool, keeps the
//! outline in step with garment and theme, places refined suggestions as
//! text, and snapshots orders.

use crate::commands::History;
use crate::input::InputEvent;
use crate::shortcuts::{ShortcutAction, ShortcutMap};
use crate::tools::{ColorChannel, ToolController, ToolKind};
use ff_assist::{ChatPanel, SuggestionPanel};
use ff_core::faq::FaqAccordion;
use ff_core::id::ObjectId;
use ff_core::model::{Color, GarmentKind, Theme};
use ff_core::notes::NotesText;
use ff_core::order::{self, OrderRecord, OrderSummary};
use ff_core::preview::GarmentPreview;
use ff_core::sizing::SizingForm;
use ff_core::surface::{CanvasOps, CanvasSurface};
use ff_core::{DecodeError, Point};

#[derive(Default)]
pub struct DesignSession {
    garment: GarmentKind,
    theme: Theme,
    surface: CanvasSurface,
    tools: ToolController,
    history: History,
    pub sizing: SizingForm,
    notes: NotesText,
    pub preview: GarmentPreview,
    pub faq: FaqAccordion,
    pub chat: ChatPanel,
    pub suggestions: SuggestionPanel,
}

impl DesignSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn garment(&self) -> GarmentKind {
        self.garment
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn surface(&self) -> &CanvasSurface {
        &self.surface
    }

    pub fn tools(&self) -> &ToolController {
        &self.tools
    }

    pub fn notes(&self) -> &NotesText {
        &self.notes
    }

    pub fn can_undo(&self) -> bool {
        !self.surface.user_objects().is_empty()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ─── Garment & theme ─────────────────────────────────────────────────

    pub fn select_garment(&mut self, garment: GarmentKind) {
        if garment == self.garment {
            return;
        }
        self.garment = garment;
        self.surface.set_outline(garment, self.theme);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if theme == self.theme {
            return;
        }
        self.theme = theme;
        self.surface.set_outline(self.garment, theme);
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.theme.toggled());
        self.theme
    }

    // ─── Tools ───────────────────────────────────────────────────────────

    pub fn select_tool(&mut self, tool: ToolKind) {
        self.tools.select_tool(tool, &mut self.surface);
    }

    pub fn set_color(&mut self, channel: ColorChannel, color: Color) {
        self.tools.set_color(channel, color, &mut self.surface);
    }

    pub fn set_brush_width(&mut self, width: f64) {
        self.tools.set_brush_width(width, &mut self.surface);
    }

    pub fn set_text_draft(&mut self, text: &str) {
        self.tools.set_draft(text);
    }

    pub fn confirm_text(&mut self, content: &str) -> Option<ObjectId> {
        let id = self.tools.confirm_text(content, &mut self.surface)?;
        self.history.record_addition();
        Some(id)
    }

    pub fn cancel_text(&mut self) {
        self.suggestions.dismiss();
        self.tools.cancel_text(&mut self.surface);
    }

    // ─── Refinement ──────────────────────────────────────────────────────

    /// Start refining the open text form's draft. Returns the prompt, or
    /// `None` when no form is open or the draft is blank.
    pub fn request_refinement(&mut self) -> Option<String> {
        let draft = self.tools.text_form()?.draft.clone();
        self.suggestions.request(&draft)
    }

    /// Place the chosen suggestion as text, exactly as if it had been typed
    /// and confirmed. Leaves the text tool for select.
    pub fn apply_suggestion(&mut self, index: usize) -> Option<ObjectId> {
        let text = self.suggestions.pick(index)?;
        if self.tools.text_form().is_none() {
            self.select_tool(ToolKind::Text);
        }
        self.confirm_text(&text)
    }

    pub fn provide_image(&mut self, bytes: Option<&[u8]>) -> Result<Option<ObjectId>, DecodeError> {
        let id = self.tools.provide_image(bytes, &mut self.surface)?;
        if id.is_some() {
            self.history.record_addition();
        }
        Ok(id)
    }

    /// Route a pointer event: select mode hit-tests on press, the brush
    /// consumes the whole gesture. Returns a newly committed object id.
    pub fn pointer(&mut self, event: &InputEvent) -> Option<ObjectId> {
        if self.tools.active() == ToolKind::Select {
            if let InputEvent::PointerDown { x, y } = event {
                self.surface.select_at(Point::new(*x, *y));
            }
            return None;
        }
        let id = self.tools.handle(event, &mut self.surface)?;
        self.history.record_addition();
        Some(id)
    }

    // ─── History ─────────────────────────────────────────────────────────

    pub fn undo(&mut self) -> Option<&'static str> {
        self.history.undo(&mut self.surface)
    }

    pub fn redo(&mut self) -> Option<&'static str> {
        self.history.redo(&mut self.surface)
    }

    pub fn clear_canvas(&mut self) {
        self.history.clear(&mut self.surface);
    }

    /// Resolve and apply a keyboard shortcut. Returns whether it was bound.
    pub fn handle_key(&mut self, key: &str, ctrl: bool, shift: bool, meta: bool) -> bool {
        let Some(action) = ShortcutMap::resolve(key, ctrl, shift, meta) else {
            return false;
        };
        match action {
            ShortcutAction::Tool(tool) => self.select_tool(tool),
            ShortcutAction::ToggleLastTool => self.tools.toggle_last_tool(&mut self.surface),
            ShortcutAction::Undo => {
                self.undo();
            }
            ShortcutAction::Redo => {
                self.redo();
            }
            ShortcutAction::ClearCanvas => self.clear_canvas(),
            ShortcutAction::Cancel => {
                self.surface.clear_selection();
                self.select_tool(ToolKind::Select);
            }
        }
        true
    }

    // ─── Notes & order ───────────────────────────────────────────────────

    /// Replace the notes text. Returns `true` if it had to be truncated.
    pub fn set_notes(&mut self, text: &str) -> bool {
        self.notes.set(text)
    }

    pub fn order_summary(&self) -> OrderSummary {
        OrderSummary::new(self.garment, self.sizing.selection().as_ref(), &self.notes)
    }

    pub fn place_order<F: FnOnce(OrderRecord)>(&self, on_complete: F) {
        order::place_order(
            self.garment,
            self.sizing.selection(),
            &self.notes,
            &self.surface,
            on_complete,
        );
    }
}
