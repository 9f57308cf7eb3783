//! Integration tests for the SunburstBuilder API
//!
//! These tests drive the whole pipeline through the public API.

use std::f64::consts::{FRAC_PI_2, PI};

use float_cmp::assert_approx_eq;

use sunburst::{
    SunburstBuilder, SunburstError,
    config::{AppConfig, ColumnConfig, LayoutConfig, OutputFormat, RenderConfig, ZeroTotalPolicy},
    record::Record,
    tree::Node,
};

fn records(entries: &[(&str, &str)]) -> Vec<Record> {
    entries
        .iter()
        .map(|(path, value)| Record::from_pairs([("Path", *path), ("Value", *value)]))
        .collect()
}

fn laid_out(builder: &SunburstBuilder, entries: &[(&str, &str)]) -> Node {
    let mut root = builder.build_tree(&records(entries));
    builder.layout(&mut root).expect("layout succeeds");
    root
}

#[test]
fn test_default_builder_uses_default_config() {
    let builder = SunburstBuilder::default();
    let config = builder.config();

    assert_eq!(config.columns(), &ColumnConfig::default());
    assert_eq!(config.layout(), &LayoutConfig::default());
    assert_eq!(config.render(), &RenderConfig::default());
    assert_eq!(config.render().format(), OutputFormat::Drawio);
}

#[test]
fn test_blank_path_column_falls_back_to_first_column() {
    let records = vec![Record::from_pairs([
        ("Name", "Ops/Infra"),
        ("Path", ""),
        ("Value", "5"),
    ])];
    let root = SunburstBuilder::default().build_tree(&records);

    assert_eq!(root.count(), 3);
    assert_eq!(root.value(), 5.0);
    assert_eq!(root.find(&["Ops", "Infra"]).map(Node::value), Some(5.0));
}

#[test]
fn test_worked_example() {
    let builder = SunburstBuilder::default();
    let root = laid_out(&builder, &[("A/B", "10"), ("A/C", "30"), ("D", "10")]);

    assert_eq!(root.value(), 50.0);
    assert_eq!(root.count(), 5);

    let a = root.child("A").expect("A exists");
    let d = root.child("D").expect("D exists");
    let b = a.child("B").expect("B exists");
    let c = a.child("C").expect("C exists");

    assert_eq!(a.value(), 40.0);
    assert_eq!(a.level(), 1);
    assert_eq!(b.level(), 2);

    let a_span = a.placement().expect("A placed").span();
    assert_approx_eq!(f64, a_span.start(), 0.0);
    assert_approx_eq!(f64, a_span.end(), 0.8 * 2.0 * PI, epsilon = 1e-12);

    let d_span = d.placement().expect("D placed").span();
    assert_approx_eq!(f64, d_span.start(), 0.8 * 2.0 * PI, epsilon = 1e-12);
    assert_approx_eq!(f64, d_span.end(), 2.0 * PI, epsilon = 1e-12);

    let b_span = b.placement().expect("B placed").span();
    let c_span = c.placement().expect("C placed").span();
    assert_approx_eq!(f64, b_span.width(), 0.25 * a_span.width(), epsilon = 1e-12);
    assert_approx_eq!(f64, c_span.start(), b_span.end(), epsilon = 1e-12);
    assert_approx_eq!(f64, c_span.end(), a_span.end(), epsilon = 1e-12);

    assert_eq!(root.x(), Some(2000.0));
    assert_eq!(root.y(), Some(2000.0));
    let b_x = b.x().expect("B placed");
    assert_approx_eq!(f64, b_x, 2000.0 + 320.0 * b_span.mid().cos(), epsilon = 1e-9);
}

#[test]
fn test_duplicate_paths_accumulate() {
    let builder = SunburstBuilder::default();
    let root = builder.build_tree(&records(&[("X/Y", "2"), ("X/Y", "3")]));

    assert_eq!(root.count(), 3);
    assert_eq!(root.find(&["X", "Y"]).map(Node::value), Some(5.0));
    assert_eq!(root.value(), 5.0);
}

#[test]
fn test_segment_hygiene() {
    let builder = SunburstBuilder::default();
    let root = builder.build_tree(&records(&[(" /A// B /", "1"), ("A/B", "1")]));

    assert_eq!(root.count(), 3);
    assert_eq!(root.find(&["A", "B"]).map(Node::value), Some(2.0));
}

#[test]
fn test_missing_value_defaults_to_one() {
    let builder = SunburstBuilder::default();
    let root = builder.build_tree(&records(&[("P", ""), ("Q", "abc"), ("R", "$1,200")]));

    assert_eq!(root.child("P").map(Node::value), Some(1.0));
    assert_eq!(root.child("Q").map(Node::value), Some(1.0));
    assert_eq!(root.child("R").map(Node::value), Some(1200.0));
}

#[test]
fn test_empty_input_places_root_only() {
    let builder = SunburstBuilder::default();
    let root = laid_out(&builder, &[]);

    assert_eq!(root.count(), 1);
    assert_eq!(root.value(), 0.0);
    assert_eq!(root.x(), Some(2000.0));

    let document = builder.render(&root).expect("render succeeds");
    assert_eq!(document.matches(r#"vertex="1""#).count(), 1);
    assert_eq!(document.matches(r#"edge="1""#).count(), 0);
}

#[test]
fn test_custom_columns() {
    let config = AppConfig::new(
        ColumnConfig::new("category", "amount", 0, 1),
        LayoutConfig::default(),
        RenderConfig::default(),
    );
    let builder = SunburstBuilder::new(config);
    let rows = vec![
        Record::from_pairs([("Category", "food/fruit"), ("Amount", "3")]),
        Record::from_pairs([("Category", "food/bread"), ("Amount", "1")]),
    ];

    let root = builder.build_tree(&rows);
    assert_eq!(root.find(&["food", "fruit"]).map(Node::value), Some(3.0));
    assert_eq!(root.value(), 4.0);
}

#[test]
fn test_custom_angles_and_spacing() {
    let layout = LayoutConfig::new(100.0, 500.0).with_angles(0.0, PI);
    let config = AppConfig::new(ColumnConfig::default(), layout, RenderConfig::default());
    let builder = SunburstBuilder::new(config);
    let root = laid_out(&builder, &[("only", "1")]);

    let only = root.child("only").expect("child exists");
    // Half-circle span, so the single child sits straight below the center.
    assert_approx_eq!(f64, only.x().expect("placed"), 500.0 + 100.0 * FRAC_PI_2.cos(), epsilon = 1e-9);
    assert_approx_eq!(f64, only.y().expect("placed"), 600.0, epsilon = 1e-9);
}

#[test]
fn test_reject_policy_reports_layout_error() {
    let layout = LayoutConfig::default().with_zero_total(ZeroTotalPolicy::Reject);
    let config = AppConfig::new(ColumnConfig::default(), layout, RenderConfig::default());
    let builder = SunburstBuilder::new(config);

    let mut root = builder.build_tree(&records(&[("A", "0"), ("B", "0")]));
    let result = builder.layout(&mut root);

    assert!(matches!(result, Err(SunburstError::Layout(_))));
    assert!(root.iter().all(|node| node.placement().is_none()));
}

#[test]
fn test_equal_split_is_reported() {
    let builder = SunburstBuilder::default();
    let mut root = builder.build_tree(&records(&[("A", "0"), ("B", "0")]));
    let report = builder.layout(&mut root).expect("equal split succeeds");

    assert!(report.has_warnings());
    assert_eq!(report.placed(), 3);
    let a_span = root.child("A").and_then(Node::placement).expect("placed").span();
    assert_approx_eq!(f64, a_span.width(), PI, epsilon = 1e-12);
}

#[test]
fn test_invalid_config_is_rejected_before_layout() {
    let layout = LayoutConfig::new(-1.0, 2000.0);
    let config = AppConfig::new(ColumnConfig::default(), layout, RenderConfig::default());
    let builder = SunburstBuilder::new(config);

    let mut root = builder.build_tree(&records(&[("A", "1")]));
    assert!(matches!(
        builder.layout(&mut root),
        Err(SunburstError::Config(_))
    ));
}

#[test]
fn test_process_drawio() {
    let builder = SunburstBuilder::default();
    let document = builder
        .process(&records(&[("A/B", "10"), ("A/C", "30"), ("D", "10")]))
        .expect("process succeeds");

    assert!(document.contains(r#"<mxfile host="Electron" agent="SunburstCLI">"#));
    assert_eq!(document.matches(r#"vertex="1""#).count(), 5);
    assert_eq!(document.matches(r#"edge="1""#).count(), 4);
    assert!(document.contains(r#"value="Center&#10;(50)""#));
    assert!(document.contains(r#"source="root" target="node_1""#));
}

#[test]
fn test_process_svg() {
    let render = RenderConfig::default().with_format(OutputFormat::Svg);
    let config = AppConfig::default().with_render(render);
    let builder = SunburstBuilder::new(config);

    let document = builder
        .process(&records(&[("A/B", "10"), ("D", "10")]))
        .expect("process succeeds");

    assert!(document.contains("<svg"), "Output should contain SVG tag");
    assert!(document.contains("</svg>"), "Output should be complete SVG");
    assert_eq!(document.matches("<circle").count(), 4);
}

#[test]
fn test_render_refuses_unplaced_tree() {
    let builder = SunburstBuilder::default();
    let root = builder.build_tree(&records(&[("A", "1")]));

    assert!(matches!(
        builder.render(&root),
        Err(SunburstError::Export(_))
    ));
}
