//! Integration tests for squeeze-core.
//!
//! These tests verify the public API works correctly end-to-end.

use squeeze_core::{
    BuiltinMotions, Canvas, Color, Constraints, CornerRadius, DrawCommand, Easing, MotionFactory,
    Path, Point, RecordingCanvas, Rect, Size,
};

// =============================================================================
// Color Integration Tests
// =============================================================================

#[test]
fn test_color_roundtrip_hex() {
    let original = Color::rgb(0.15, 0.76, 0.51);
    let hex = original.to_hex();
    let parsed = Color::from_hex(&hex).expect("valid hex");

    assert!((original.r - parsed.r).abs() < 0.01);
    assert!((original.g - parsed.g).abs() < 0.01);
    assert!((original.b - parsed.b).abs() < 0.01);
}

// =============================================================================
// Path Integration Tests
// =============================================================================

#[test]
fn test_pill_mask_from_two_halves() {
    let size = Size::new(300.0, 60.0);
    let gap = 30.0;
    let half = (size.width - gap) / 2.0;
    let radius = size.height / 2.0;

    let mut mask = Path::rounded_rect(Rect::new(0.0, 0.0, half, size.height), CornerRadius::left(radius));
    mask.append(&Path::rounded_rect(
        Rect::new(half + gap, 0.0, half, size.height),
        CornerRadius::right(radius),
    ));

    let bounds = mask.control_bounds().expect("non-empty");
    assert_eq!(bounds, Rect::new(0.0, 0.0, 300.0, 60.0));
    assert_eq!(mask.flatten(8).len(), 2);

    // each half loses the two corner cut-offs of one cap
    let cap_loss = (4.0 - std::f32::consts::PI) * radius * radius / 2.0;
    let expected = 2.0f32.mul_add(half * size.height, -2.0 * cap_loss);
    assert!((mask.area(32) - expected).abs() / expected < 0.01);
}

#[test]
fn test_paint_into_recording_canvas() {
    let mut canvas = RecordingCanvas::new();
    let clip = Path::rounded_rect(Rect::new(0.0, 0.0, 100.0, 40.0), CornerRadius::uniform(20.0));
    let mut lens = Path::new();
    lens.move_to(Point::new(50.0, 0.0))
        .quad_to(Point::new(70.0, 10.0), Point::new(80.0, 20.0))
        .quad_to(Point::new(70.0, 30.0), Point::new(50.0, 40.0))
        .close();

    canvas.push_clip_path(&clip);
    canvas.fill_path(&lens, Color::WHITE);
    canvas.pop_clip();

    let commands = canvas.take_commands();
    assert_eq!(commands.len(), 3);
    match &commands[1] {
        DrawCommand::Fill { path, .. } => assert!(path.area(16) > 0.0),
        other => panic!("Expected Fill, got {other:?}"),
    }
}

// =============================================================================
// Animation Integration Tests
// =============================================================================

#[test]
fn test_motion_frames_reach_target() {
    let factory = BuiltinMotions;
    let mut motion = factory.eased(30.0, 175.5, 0.3, Easing::EaseInOut);
    let mut frames = 0;
    while !motion.is_settled() {
        motion.advance(1.0 / 60.0);
        frames += 1;
        assert!(frames < 100, "eased motion never settled");
    }
    assert_eq!(motion.sample(), Some(175.5));
    assert!((17..=19).contains(&frames));
}

#[test]
fn test_spring_motion_settles_within_duration() {
    let mut motion = BuiltinMotions.spring(175.5, 270.0, 1.0, 0.2);
    for _ in 0..61 {
        motion.advance(1.0 / 60.0);
    }
    assert!(motion.is_settled());
    assert_eq!(motion.sample(), Some(270.0));
}

// =============================================================================
// Constraints Integration Tests
// =============================================================================

#[test]
fn test_constraints_layout_flow() {
    let viewport = Size::new(800.0, 600.0);
    let root = Constraints::loose(viewport);

    let switch_size = root.constrain(Size::new(300.0, 60.0));
    assert_eq!(switch_size, Size::new(300.0, 60.0));

    let greedy = root.constrain(Size::new(1000.0, 800.0));
    assert_eq!(greedy, viewport);
}
