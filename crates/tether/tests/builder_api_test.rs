//! Integration tests for the LayoutBuilder API

use tether::{
    ErrorCode, LayoutBuilder, TetherError,
    alignable::{Alignable, Bounded},
    builder::{ElementBuilder, RectBuilder, TextBuilder},
    config::{AppConfig, StyleConfig, TextMetrics},
    geometry::Bounds,
    identifier::ElementId,
    surface::Surface,
};

const HUD: &str = r##"
    width = 320
    height = 240

    [[elements]]
    id = "bar"
    kind = "rect"
    width = 100
    height = 8
    color = "#30c030"
    align = { horizontal = "center", vertical = "bottom", vertical_offset = -4 }

    [[elements]]
    id = "level"
    kind = "text"
    text = "12"
    color = "#80ff20"
    shadow = true
    z_index = 1
    align = { to = "bar", horizontal = "centerOnCenter", vertical = "bottomOnTop", vertical_offset = -1 }
"##;

#[test]
fn test_parse_and_render() {
    let builder = LayoutBuilder::default();
    let surface = builder.parse(HUD).expect("Failed to parse scene");

    let bar = surface.element(ElementId::new("bar")).unwrap();
    assert_eq!(bar.scaled_bounds(), Bounds::new(110, 228, 100, 8));

    let level = surface.element(ElementId::new("level")).unwrap();
    assert_eq!(level.scaled_bounds(), Bounds::new(154, 218, 12, 9));

    let svg = builder.render_svg(&surface).expect("Failed to render");
    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert_eq!(svg.matches("<text").count(), 2, "level text and its shadow");
}

#[test]
fn test_custom_text_metrics() {
    let config = AppConfig::new(TextMetrics::new(8, 16), StyleConfig::default());
    let surface = LayoutBuilder::new(config).parse(HUD).unwrap();
    let level = surface.element(ElementId::new("level")).unwrap();
    assert_eq!(level.scaled_bounds().size().width(), 16);
    assert_eq!(level.scaled_bottom(), 227);
}

#[test]
fn test_invalid_background_color() {
    let config = AppConfig::new(
        TextMetrics::default(),
        StyleConfig::default().with_background_color("nope"),
    );
    let builder = LayoutBuilder::new(config);
    let surface = builder.parse(HUD).unwrap();
    let err = builder.render_svg(&surface).unwrap_err();
    assert!(matches!(err, TetherError::Config(_)));
}

#[test]
fn test_invalid_pair_reported_with_span() {
    let source = HUD.replace("bottomOnTop", "bottomOnMiddle");
    let err = LayoutBuilder::default().parse(&source).unwrap_err();
    let TetherError::Alignment { element, err } = err else {
        panic!("expected alignment error, got {err:?}");
    };
    assert_eq!(element, "level");
    assert_eq!(err.code(), ErrorCode::E001);
    assert_eq!(&err.rule()[err.span().range()], "Middle");
}

#[test]
fn test_export_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hud.svg");
    let path = path.to_str().unwrap();

    let builder = LayoutBuilder::default();
    let surface = builder.parse(HUD).unwrap();
    builder.export_svg(&surface, path).unwrap();

    let written = std::fs::read_to_string(path).unwrap();
    assert_eq!(written, builder.render_svg(&surface).unwrap());
}

#[test]
fn test_programmatic_layout() {
    let mut surface = Surface::new(200, 100);
    let panel = RectBuilder::for_surface(&surface)
        .with_size(50, 20)
        .build_and_add(&mut surface, "panel");
    surface
        .align_element(panel, "center", 5, "top", 0)
        .unwrap();

    let mut caption = TextBuilder::for_surface(&surface).with_text("ok").build();
    let panel_bounds = surface.element(panel).unwrap().scaled_bounds();
    caption
        .align_to(&panel_bounds, "leftOnRight", 0, "centerOnCenter", 0)
        .unwrap();
    let caption = surface.add_element(caption);

    assert_eq!(surface.element(panel).unwrap().scaled_left(), 80);
    let caption = surface.element(caption).unwrap();
    assert_eq!(caption.scaled_left(), 130);
    assert_eq!(caption.scaled_top(), 6);
}
