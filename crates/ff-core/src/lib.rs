pub mod error;
pub mod faq;
pub mod id;
pub mod model;
pub mod notes;
pub mod order;
pub mod outline;
pub mod preview;
pub mod sizing;
pub mod surface;

pub use error::{DecodeError, GarmentParseError, SizeError};
pub use id::ObjectId;
pub use model::*;
pub use notes::{NOTES_MAX_CHARS, NotesText};
pub use order::{OrderRecord, OrderSummary, place_order};
pub use outline::GarmentOutline;
pub use sizing::{MeasurementField, Measurements, SizeMode, SizeSelection, SizeToken, SizingForm};
pub use surface::{BrushSpec, CANVAS_HEIGHT, CANVAS_WIDTH, CanvasOps, CanvasSurface, ImageScale};

// Re-export geometry types so downstream crates don't need a direct dependency
pub use kurbo::{Point, Rect};
