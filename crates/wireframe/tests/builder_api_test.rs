//! Integration tests for the WireframeBuilder API

use serde_json::{Value, json};

use wireframe::{
    WireframeBuilder, WireframeError,
    config::{AppConfig, LayoutConfig, StyleConfig},
    semantic::Document,
};

const BLUEPRINT: &str = r#"{
    "name": "Invoicer",
    "stories": [{"id": "s1", "title": "Send an invoice"}],
    "screens": [
        {
            "id": "dashboard",
            "name": "Dashboard",
            "path": "/",
            "components": [
                {"id": "c1", "type": "card", "label": "Outstanding", "props": {"currency": "EUR"}},
                {"id": "c2", "type": "navbar", "label": "Top"}
            ]
        },
        {
            "id": "settings",
            "name": "Settings",
            "path": "/settings",
            "components": [
                {"id": "c3", "type": "form", "label": "Profile"}
            ]
        }
    ],
    "userFlow": {"nodes": [], "edges": []}
}"#;

#[test]
fn test_builder_api_exists() {
    let _builder = WireframeBuilder::default();
}

#[test]
fn test_parse_bare_array() {
    let builder = WireframeBuilder::default();
    let document = builder
        .parse(r#"[{"type": "card", "label": "A"}]"#)
        .expect("Failed to parse");
    assert!(matches!(document, Document::Shapes(ref shapes) if shapes.len() == 1));
}

#[test]
fn test_parse_invalid_json_keeps_source() {
    let source = "[{\"type\": \"card\",]";
    let err = WireframeBuilder::default().parse(source).unwrap_err();

    match err {
        WireframeError::Json { src, .. } => assert_eq!(src, source),
        other => panic!("Expected Json error, got {other:?}"),
    }
}

#[test]
fn test_parse_rejects_unrelated_json() {
    let result = WireframeBuilder::default().parse(r#"{"nodes": []}"#);
    assert!(matches!(result, Err(WireframeError::Json { .. })));
}

#[test]
fn test_layout_shape_list_keeps_envelope() {
    let builder = WireframeBuilder::default();
    let document = builder
        .parse(r#"{"requestId": "r-42", "shapes": [{"type": "navbar", "label": "Top"}]}"#)
        .unwrap();
    let json = builder.render_json(&builder.layout(document)).unwrap();

    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["requestId"], "r-42");
    assert_eq!(value["shapes"][0]["width"], json!(1024.0));
    assert_eq!(value["shapes"][0]["height"], json!(56.0));
}

#[test]
fn test_layout_blueprint_per_screen() {
    let builder = WireframeBuilder::default();
    let document = builder.layout(builder.parse(BLUEPRINT).unwrap());
    let value: Value = serde_json::from_str(&builder.render_json(&document).unwrap()).unwrap();

    assert_eq!(value["name"], "Invoicer");
    assert_eq!(value["stories"][0]["title"], "Send an invoice");
    assert_eq!(value["userFlow"], json!({"nodes": [], "edges": []}));

    let dashboard = &value["screens"][0]["components"];
    assert_eq!(dashboard[0]["id"], "c2");
    assert_eq!(dashboard[0]["position"], json!({"x": 0.0, "y": 0.0}));
    assert_eq!(dashboard[1]["id"], "c1");
    assert_eq!(dashboard[1]["props"], json!({"currency": "EUR"}));
    assert_eq!(dashboard[1]["position"], json!({"x": 16.0, "y": 72.0}));

    // Each screen starts from an empty canvas.
    let settings = &value["screens"][1]["components"];
    assert_eq!(settings[0]["position"], json!({"x": 16.0, "y": 16.0}));
    assert_eq!(settings[0]["size"], json!({"width": 992.0, "height": 280.0}));
}

#[test]
fn test_render_svg_selects_screen() {
    let builder = WireframeBuilder::default();
    let document = builder.layout(builder.parse(BLUEPRINT).unwrap());

    let first = builder.render_svg(&document, None).unwrap();
    assert!(first.contains("<svg"));
    assert!(first.contains("Outstanding"));

    let settings = builder.render_svg(&document, Some("settings")).unwrap();
    assert!(settings.contains("Profile"));
    assert!(!settings.contains("Outstanding"));

    let err = builder.render_svg(&document, Some("billing")).unwrap_err();
    assert!(matches!(err, WireframeError::Screen(_)), "{err:?}");
}

#[test]
fn test_builder_rejects_invalid_background_color() {
    let config = AppConfig::new(
        LayoutConfig::default(),
        StyleConfig::default().with_background_color("not-a-color"),
    );

    let err = WireframeBuilder::new(config).unwrap_err();
    assert!(matches!(err, WireframeError::Config(_)), "{err:?}");
}

#[test]
fn test_builder_rejects_invalid_canvas() {
    for layout in [
        LayoutConfig::new(1024.0, 768.0, f32::NAN),
        LayoutConfig::new(1024.0, 768.0, -1.0),
        LayoutConfig::new(0.0, 768.0, 16.0),
        LayoutConfig::new(f32::INFINITY, 768.0, 16.0),
    ] {
        let err = WireframeBuilder::new(AppConfig::new(layout, StyleConfig::default())).unwrap_err();
        assert!(matches!(err, WireframeError::Config(_)), "{layout:?}: {err:?}");
    }
}

#[test]
fn test_builder_uses_configured_canvas() {
    let config = AppConfig::new(LayoutConfig::new(800.0, 600.0, 8.0), StyleConfig::default());
    let builder = WireframeBuilder::new(config).unwrap();

    let document = builder
        .parse(r#"[{"type": "navbar", "label": "Top"}, {"type": "text", "label": "Hi"}]"#)
        .unwrap();
    let json = builder.render_json(&builder.layout(document)).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value[0]["width"], json!(800.0));
    assert_eq!(value[1]["x"], json!(8.0));
    assert_eq!(value[1]["y"], json!(64.0));
    assert_eq!(value[1]["width"], json!(784.0));
}

#[test]
fn test_layout_is_deterministic() {
    let builder = WireframeBuilder::default();
    let document = builder.parse(BLUEPRINT).unwrap();

    let first = builder.layout(document.clone());
    let second = builder.layout(document);
    assert_eq!(first, second);
}
