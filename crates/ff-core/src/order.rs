//! Order aggregation.
//!
//! `place_order` is presentation-only: it snapshots the session into an
//! `OrderRecord`, logs it, and hands it to the caller. Nothing is persisted
//! or sent anywhere.

use crate::model::GarmentKind;
use crate::notes::NotesText;
use crate::sizing::SizeSelection;
use crate::surface::CanvasSurface;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const DESIGN_LABEL: &str = "Custom design";
pub const SIZE_NOT_SELECTED: &str = "Not selected";
pub const NOTES_PREVIEW_CHARS: usize = 100;

/// Stand-in for the design artwork; no export pipeline exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DesignPlaceholder {
    pub label: &'static str,
    pub object_count: usize,
}

impl DesignPlaceholder {
    pub fn from_surface(surface: &CanvasSurface) -> Self {
        Self {
            label: DESIGN_LABEL,
            object_count: surface.user_objects().len(),
        }
    }
}

/// Read-only snapshot assembled at submission time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub garment_type: GarmentKind,
    pub size: Option<SizeSelection>,
    pub notes: NotesText,
    pub design: DesignPlaceholder,
    pub created_at: DateTime<Utc>,
}

impl OrderRecord {
    pub fn snapshot(
        garment: GarmentKind,
        size: Option<SizeSelection>,
        notes: &NotesText,
        surface: &CanvasSurface,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            garment_type: garment,
            size,
            notes: notes.clone(),
            design: DesignPlaceholder::from_surface(surface),
            created_at,
        }
    }

    pub fn size_label(&self) -> &'static str {
        self.size.as_ref().map_or(SIZE_NOT_SELECTED, |s| s.label())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Build the order snapshot and pass it to `on_complete`.
pub fn place_order<F>(
    garment: GarmentKind,
    size: Option<SizeSelection>,
    notes: &NotesText,
    surface: &CanvasSurface,
    on_complete: F,
) where
    F: FnOnce(OrderRecord),
{
    let record = OrderRecord::snapshot(garment, size, notes, surface, Utc::now());
    match record.to_json() {
        Ok(json) => log::info!("order placed: {json}"),
        Err(e) => log::warn!("order placed (unserializable: {e})"),
    }
    on_complete(record);
}

/// Display rows for the order summary panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub garment: &'static str,
    pub size: &'static str,
    pub design: &'static str,
    pub notes_preview: Option<String>,
}

impl OrderSummary {
    pub fn new(garment: GarmentKind, size: Option<&SizeSelection>, notes: &NotesText) -> Self {
        Self {
            garment: garment.display_name(),
            size: size.map_or(SIZE_NOT_SELECTED, |s| s.label()),
            design: DESIGN_LABEL,
            notes_preview: (!notes.is_empty()).then(|| notes.preview(NOTES_PREVIEW_CHARS)),
        }
    }
}
