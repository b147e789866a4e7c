//! Static garment preview with a front/back flip.
//!
//! The preview shows the catalog glyph only; it does not mirror canvas
//! contents.

use crate::model::GarmentKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewSide {
    #[default]
    Front,
    Back,
}

impl ViewSide {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewSide::Front => "front",
            ViewSide::Back => "back",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GarmentPreview {
    side: ViewSide,
}

impl GarmentPreview {
    pub fn side(&self) -> ViewSide {
        self.side
    }

    pub fn toggle(&mut self) -> ViewSide {
        self.side = match self.side {
            ViewSide::Front => ViewSide::Back,
            ViewSide::Back => ViewSide::Front,
        };
        self.side
    }

    /// The back view is rendered as a horizontal mirror of the glyph.
    pub fn mirrored(&self) -> bool {
        self.side == ViewSide::Back
    }

    pub fn toggle_label(&self) -> &'static str {
        match self.side {
            ViewSide::Front => "Show Back",
            ViewSide::Back => "Show Front",
        }
    }

    pub fn caption(&self, garment: GarmentKind) -> String {
        format!("{} Preview - {} side", garment.display_name(), self.side.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_round_trip() {
        let mut preview = GarmentPreview::default();
        assert_eq!(preview.toggle_label(), "Show Back");
        assert_eq!(preview.toggle(), ViewSide::Back);
        assert!(preview.mirrored());
        assert_eq!(preview.toggle_label(), "Show Front");
        assert_eq!(preview.toggle(), ViewSide::Front);
    }

    #[test]
    fn caption_names_garment_and_side() {
        let mut preview = GarmentPreview::default();
        preview.toggle();
        assert_eq!(preview.caption(GarmentKind::Jacket), "Jacket Preview - back side");
    }
}
