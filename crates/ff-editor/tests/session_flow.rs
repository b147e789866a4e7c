//! Integration tests: design session end to end (ff-editor).
//!
//! Drives the session the way the browser host does and checks surface,
//! history, and order state across crate boundaries.

use ff_core::model::{GarmentKind, ObjectKind, Theme};
use ff_core::sizing::{MeasurementField, SizeToken};
use ff_editor::input::InputEvent;
use ff_editor::{ColorChannel, DesignSession, ToolKind};
use image::{ImageFormat, Rgba, RgbaImage};
use pretty_assertions::assert_eq;
use std::io::Cursor;

fn logo_png() -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    RgbaImage::from_pixel(40, 20, Rgba([255, 255, 255, 0]))
        .write_to(&mut buf, ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}

fn drag(session: &mut DesignSession, from: (f64, f64), to: (f64, f64)) {
    session.pointer(&InputEvent::from_pointer_down(from.0, from.1));
    session.pointer(&InputEvent::from_pointer_move(
        (from.0 + to.0) / 2.0,
        (from.1 + to.1) / 2.0,
    ));
    session.pointer(&InputEvent::from_pointer_up(to.0, to.1));
}

fn kinds(session: &DesignSession) -> Vec<&'static str> {
    session.surface().objects().iter().map(|o| o.kind_name()).collect()
}

#[test]
fn full_design_flow_keeps_outline_bottommost() {
    let mut session = DesignSession::new();

    session.select_tool(ToolKind::Brush);
    drag(&mut session, (120.0, 150.0), (200.0, 180.0));

    session.select_tool(ToolKind::Text);
    session.confirm_text("Team Tigers").unwrap();

    session.select_tool(ToolKind::Image);
    session.provide_image(Some(logo_png().as_slice())).unwrap().unwrap();

    session.select_garment(GarmentKind::Dress);
    session.toggle_theme();

    assert_eq!(kinds(&session), vec!["outline", "stroke", "text", "image"]);
    assert_eq!(session.surface().outline().garment, GarmentKind::Dress);
    assert_eq!(session.surface().theme(), Theme::Dark);
}

#[test]
fn undo_redo_round_trip() {
    let mut session = DesignSession::new();
    session.select_tool(ToolKind::Text);
    session.confirm_text("A").unwrap();
    session.select_tool(ToolKind::Text);
    session.confirm_text("B").unwrap();

    assert_eq!(session.undo(), Some("text"));
    assert_eq!(session.undo(), Some("text"));
    assert_eq!(session.undo(), None, "outline is never undone");
    assert_eq!(session.surface().len(), 1);

    assert_eq!(session.redo(), Some("text"));
    match &session.surface().user_objects()[0].kind {
        ObjectKind::Text(t) => assert_eq!(t.content, "A"),
        other => panic!("expected text, got {other:?}"),
    }
}

#[test]
fn new_object_discards_redo() {
    let mut session = DesignSession::new();
    session.select_tool(ToolKind::Brush);
    drag(&mut session, (0.0, 0.0), (10.0, 10.0));
    session.undo();
    assert!(session.can_redo());

    drag(&mut session, (5.0, 5.0), (15.0, 15.0));
    assert!(!session.can_redo());
}

#[test]
fn select_mode_picks_topmost_object() {
    let mut session = DesignSession::new();
    session.select_tool(ToolKind::Text);
    session.confirm_text("Under").unwrap();
    session.select_tool(ToolKind::Text);
    let top = session.confirm_text("Over").unwrap();

    session.pointer(&InputEvent::from_pointer_down(105.0, 90.0));
    assert_eq!(session.surface().selected(), Some(top));
}

#[test]
fn brush_color_change_only_affects_future_strokes() {
    let mut session = DesignSession::new();
    session.select_tool(ToolKind::Brush);
    drag(&mut session, (0.0, 0.0), (10.0, 10.0));

    let red = ff_core::Color::from_hex("#EF4444").unwrap();
    session.set_color(ColorChannel::Brush, red);
    drag(&mut session, (20.0, 20.0), (30.0, 30.0));

    let colors: Vec<_> = session
        .surface()
        .user_objects()
        .iter()
        .map(|o| o.color().unwrap().to_hex())
        .collect();
    assert_eq!(colors, vec!["#3B82F6".to_string(), "#EF4444".to_string()]);
}

#[test]
fn shortcuts_drive_session() {
    let mut session = DesignSession::new();
    assert!(session.handle_key("b", false, false, false));
    assert_eq!(session.tools().active(), ToolKind::Brush);
    drag(&mut session, (0.0, 0.0), (10.0, 10.0));

    assert!(session.handle_key("z", true, false, false));
    assert_eq!(session.surface().len(), 1);
    assert!(session.handle_key("z", true, true, false));
    assert_eq!(session.surface().len(), 2);

    assert!(session.handle_key("Backspace", false, false, true));
    assert_eq!(session.surface().len(), 1);
    assert!(!session.can_redo());

    assert!(session.handle_key("Escape", false, false, false));
    assert_eq!(session.tools().active(), ToolKind::Select);
    assert!(!session.handle_key("F13", false, false, false));
}

#[test]
fn order_reflects_session_state() {
    let mut session = DesignSession::new();
    session.select_garment(GarmentKind::Jacket);
    session.sizing.select_standard(SizeToken::XL);
    session.set_notes("Use eco-friendly fabric");

    let mut placed = None;
    session.place_order(|record| placed = Some(record));
    let record = placed.unwrap();
    assert_eq!(record.garment_type, GarmentKind::Jacket);
    assert_eq!(record.size_label(), "XL");
    assert_eq!(record.notes.as_str(), "Use eco-friendly fabric");

    let summary = session.order_summary();
    assert_eq!(summary.garment, "Jacket");
    assert_eq!(summary.size, "XL");
}

#[test]
fn custom_measurements_flow_into_summary() {
    let mut session = DesignSession::new();
    for (field, value) in MeasurementField::ALL.into_iter().zip([90.0, 80.0, 175.0, 45.0]) {
        session.sizing.set_measurement(field, value).unwrap();
    }
    assert_eq!(session.order_summary().size, "Custom measurements");
}

#[test]
fn notes_are_capped() {
    let mut session = DesignSession::new();
    assert!(session.set_notes(&"x".repeat(501)));
    assert_eq!(session.notes().len(), 500);
}

#[test]
fn refined_suggestion_is_placed_as_text() {
    let mut session = DesignSession::new();
    assert_eq!(session.request_refinement(), None, "no text form open");

    session.select_tool(ToolKind::Text);
    session.set_text_draft("Team Tigers");
    let prompt = session.request_refinement().unwrap();
    assert!(prompt.ends_with("Team Tigers"));
    assert!(session.suggestions.loading());

    session.suggestions.resolve(Ok(
        "Team Tigers Forever\nRoar of the Tigers\nTigers United".to_string(),
    ));
    assert_eq!(session.suggestions.suggestions().len(), 3);

    let id = session.apply_suggestion(1).unwrap();
    let placed = session.surface().get(id).unwrap();
    match &placed.kind {
        ObjectKind::Text(t) => {
            assert_eq!(t.content, "Roar of the Tigers");
            assert_eq!((t.position.x, t.position.y), (100.0, 100.0));
            assert_eq!(t.font.family, "Inter");
        }
        other => panic!("expected text, got {other:?}"),
    }
    assert_eq!(session.tools().active(), ToolKind::Select);
    assert!(session.suggestions.suggestions().is_empty());
    assert!(session.can_undo());
}

#[test]
fn applying_missing_suggestion_is_noop() {
    let mut session = DesignSession::new();
    assert_eq!(session.apply_suggestion(0), None);
    assert_eq!(session.surface().len(), 1);
    assert_eq!(session.tools().active(), ToolKind::Select);
}

#[test]
fn cancelling_text_dismisses_suggestions() {
    let mut session = DesignSession::new();
    session.select_tool(ToolKind::Text);
    session.set_text_draft("Go Team");
    session.request_refinement();
    session.suggestions.resolve(Ok("Go Team Go".to_string()));

    session.cancel_text();
    assert!(session.suggestions.suggestions().is_empty());
}
