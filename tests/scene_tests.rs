use std::sync::Arc;

use vecscene::{
    Brush, CanvasError, Color, DrawCommand, DrawError, Element, Ellipse, Group, Image,
    ImageCanvas, ImageElement, NullPlatform, OperationType, Path, Pen, Platform, Point,
    RecordingCanvas, RecordingPlatform, Rect, Rectangle, RenderOptions, Size, Transform, render,
};

const EPSILON: f64 = 1e-9;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn draw(element: impl Into<Element>) -> RecordingCanvas {
    init_tracing();
    let mut canvas = RecordingCanvas::new();
    element.into().draw(&mut canvas).unwrap();
    canvas
}

fn kinds(canvas: &RecordingCanvas) -> Vec<&'static str> {
    canvas
        .commands()
        .iter()
        .map(|c| match c {
            DrawCommand::Line { .. } => "line",
            DrawCommand::Rectangle { .. } => "rect",
            DrawCommand::Ellipse { .. } => "ellipse",
            DrawCommand::Path { .. } => "path",
            DrawCommand::Image { .. } => "image",
        })
        .collect()
}

fn unit_square() -> Rect {
    Rect::from_size(Size::square(1.0))
}

// =============================================================================
// Traversal order
// =============================================================================

#[test]
fn children_paint_in_insertion_order_regardless_of_type() {
    let mut triangle = Path::new();
    triangle
        .move_to((0.0, 0.0), false)
        .line_to((1.0, 0.0), false)
        .close();

    let group = Group::new()
        .with_child(Ellipse::new(unit_square()))
        .with_child(triangle)
        .with_child(Rectangle::new(unit_square()));

    assert_eq!(kinds(&draw(group)), vec!["ellipse", "path", "rect"]);
}

#[test]
fn nested_groups_flatten_depth_first() {
    let inner = Group::new()
        .with_child(Rectangle::new(unit_square()))
        .with_child(Ellipse::new(unit_square()));
    let outer = Group::new()
        .with_child(Ellipse::new(unit_square()))
        .with_child(inner)
        .with_child(Rectangle::new(unit_square()));

    assert_eq!(kinds(&draw(outer)), vec!["ellipse", "rect", "ellipse", "rect"]);
}

#[test]
fn empty_group_draws_nothing() {
    let canvas = draw(Group::new());
    assert!(canvas.commands().is_empty());

    let nested = Group::new().with_child(Group::new()).with_child(Group::new());
    assert!(draw(nested).commands().is_empty());
}

// =============================================================================
// Transform composition
// =============================================================================

#[test]
fn grandchild_transform_is_ancestor_then_middle_then_own() {
    let ancestor = Transform::translate(100.0, 50.0);
    let middle = Transform::rotate(90.0);
    let own = Transform::scale(2.0, 3.0);

    let leaf = Ellipse::new(unit_square()).with_transform(own);
    let tree = Group::new()
        .with_transform(ancestor)
        .with_child(Group::new().with_transform(middle).with_child(leaf));

    let canvas = draw(tree);
    let effective = canvas.commands()[0].transform();
    let expected = ancestor * middle * own;
    assert!(effective.approx_eq(&expected, EPSILON), "{effective} != {expected}");

    // (1, 0) scales to (2, 0), rotates to (0, 2), then translates.
    let p = effective.transform_point(Point::new(1.0, 0.0));
    assert!(p.approx_eq(Point::new(100.0, 52.0), EPSILON), "{p}");
}

#[test]
fn ambient_transform_is_applied_before_root() {
    init_tracing();
    let rect = Rectangle::new(unit_square()).with_transform(Transform::translate(1.0, 1.0));
    let mut canvas = RecordingCanvas::new();
    Element::from(rect)
        .draw_with(&mut canvas, Transform::scale_uniform(10.0))
        .unwrap();

    let t = canvas.commands()[0].transform();
    assert_eq!(t.transform_point(Point::ORIGIN), Point::new(10.0, 10.0));
}

#[test]
fn siblings_do_not_inherit_each_others_transforms() {
    let group = Group::new()
        .with_child(Rectangle::new(unit_square()).with_transform(Transform::translate(5.0, 0.0)))
        .with_child(Rectangle::new(unit_square()));

    let canvas = draw(group);
    assert_eq!(canvas.commands()[0].transform(), Transform::translate(5.0, 0.0));
    assert_eq!(canvas.commands()[1].transform(), Transform::IDENTITY);
}

#[test]
fn scene_draw_log() {
    let mut stroke = Path::new()
        .with_pen(Pen::new(Color::BLUE, 2.0))
        .with_transform(Transform::translate(5.0, 5.0));
    stroke.move_to((0.0, 0.0), false).line_to((10.0, 0.0), false);

    let scene = Group::new()
        .with_transform(Transform::translate(10.0, 20.0))
        .with_child(Rectangle::new(Rect::from_xywh(0.0, 0.0, 50.0, 50.0)).with_brush(Color::RED))
        .with_child(
            Group::new()
                .with_transform(Transform::scale_uniform(2.0))
                .with_child(Ellipse::new(Rect::from_xywh(0.0, 0.0, 10.0, 10.0)).with_pen(Pen::default())),
        )
        .with_child(stroke);

    let canvas = draw(scene);
    insta::assert_snapshot!(canvas.to_string().trim_end(), @r##"
    rect [0, 0, 50, 50] pen=none brush=#ff0000 matrix(1, 0, 0, 1, 10, 20)
    ellipse [0, 0, 10, 10] pen=#000000/1 brush=none matrix(2, 0, 0, 2, 10, 20)
    path "M 0 0 L 10 0" pen=#0000ff/2 brush=none matrix(1, 0, 0, 1, 15, 25)
    "##);
}

// =============================================================================
// Failure propagation
// =============================================================================

#[test]
fn failing_grandchild_aborts_the_whole_render() {
    init_tracing();
    let inner = Group::new()
        .with_child(Rectangle::new(unit_square()))
        .with_child(Ellipse::new(unit_square()));
    let outer = Group::new()
        .with_child(inner)
        .with_child(Rectangle::new(unit_square()));

    let mut canvas = RecordingCanvas::failing_after(1);
    let err = Element::from(outer).draw(&mut canvas).unwrap_err();

    assert!(matches!(err, DrawError::Canvas(CanvasError::Backend { .. })));
    assert_eq!(kinds(&canvas), vec!["rect"]);
}

// =============================================================================
// Path data through the tree
// =============================================================================

#[test]
fn parsed_path_draws_absolute_commands() {
    let path = Path::parse("m 10 10 h").err();
    assert!(path.is_some(), "h is outside the command vocabulary");

    let path = Path::parse("m 10 10 l 10 0 l 0 10 z")
        .unwrap()
        .with_brush(Brush::radial(
            Point::new(0.5, 1.0),
            Size::square(1.0),
            Color::YELLOW,
            Color::BLUE,
        ));
    assert_eq!(
        path.operation_types().collect::<Vec<_>>(),
        vec![
            OperationType::MoveTo,
            OperationType::LineTo,
            OperationType::LineTo,
            OperationType::Close
        ]
    );

    let canvas = draw(path);
    let DrawCommand::Path { commands, brush, .. } = &canvas.commands()[0] else {
        panic!("expected a path");
    };
    assert_eq!(commands[2].end_point(), Some(Point::new(20.0, 20.0)));
    assert!(matches!(brush, Some(Brush::RadialGradient { .. })));
}

// =============================================================================
// Orchestration
// =============================================================================

#[test]
fn render_fills_background_first() {
    init_tracing();
    let options = RenderOptions::new(Size::square(100.0))
        .with_transparency(false)
        .with_background(Color::DARK_GRAY);
    let scene = Element::from(Ellipse::new(Rect::new(Point::new(10.0, 20.0), Size::new(30.0, 40.0))));

    let image = render(&RecordingPlatform, &scene, &options).unwrap();
    assert_eq!(image.size(), Size::square(100.0));

    let rendered: Vec<String> = image.commands().iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "rect [0, 0, 100, 100] pen=none brush=#404040 matrix(1, 0, 0, 1, 0, 0)",
            "ellipse [10, 20, 30, 40] pen=none brush=none matrix(1, 0, 0, 1, 0, 0)",
        ]
    );
}

#[test]
fn render_on_null_platform() {
    let image = NullPlatform
        .create_image(&[Color::RED, Color::GREEN, Color::BLUE, Color::YELLOW], 2)
        .unwrap();
    let scene = Element::from(ImageElement::new(
        Arc::new(image),
        Rect::from_size(Size::new(200.0, 100.0)),
    ));

    let options = RenderOptions::new(Size::new(200.0, 100.0)).with_scale(2.0);
    let result = render(&NullPlatform, &scene, &options).unwrap();
    assert_eq!(result.size(), Size::new(200.0, 100.0));
    assert_eq!(result.scale(), 2.0);
    assert!(result.save_as_png(std::path::Path::new("unused.png")).is_ok());
}

#[test]
fn image_canvas_reads_back_what_was_drawn() {
    let mut canvas = RecordingPlatform.create_image_canvas(Size::square(50.0), 1.0, true);
    Element::from(Rectangle::new(unit_square()))
        .draw(&mut canvas)
        .unwrap();
    assert_eq!(canvas.size(), Size::square(50.0));
    assert_eq!(canvas.image().commands().len(), 1);
}
