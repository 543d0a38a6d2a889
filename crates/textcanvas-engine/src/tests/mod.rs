//! Cross-module tests.
//!
//! Fixture scripts (.toml) and their snapshots (.snap) are co-located in
//! `fixtures/`.

use pretty_assertions::assert_eq;

use crate::{
    canvas::Canvas,
    line::{Line, LineContent},
    script::{RenderOptions, Script},
    style::WhiteSpace,
    whitespace::Segment,
};

// Fixture-based snapshot tests

#[test]
fn fixture_white_space_borderline() {
    assert_fixture("white_space_borderline");
}

#[test]
fn fixture_nested_list() {
    assert_fixture("nested_list");
}

#[test]
fn fixture_entities_and_blocks() {
    assert_fixture("entities_and_blocks");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let source = std::fs::read_to_string(format!("{fixtures_dir}/{name}.toml")).unwrap();
    let script: Script = toml::from_str(&source).unwrap();

    let text = script.render(&RenderOptions::default()).unwrap();
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, text);
    });
}

// Both renderers must agree on collapsing

#[test]
fn canvas_and_line_collapse_normal_text_identically() {
    let inputs = [
        "  alpha   beta ",
        "\tone\ntwo  three\n",
        "single",
        "   ",
        "a\u{2003}\u{3000}b",
    ];
    for input in inputs {
        let mut canvas = Canvas::new();
        canvas.write_inline(&WhiteSpace::Normal, input);

        let mut line = Line::new();
        line.content = LineContent::from(vec![Segment::Normal(input.to_string())]);

        assert_eq!(canvas.get_text(), line.get_text(), "input {input:?}");
    }
}

#[test]
fn empty_preformatted_fragment_adds_no_space_in_either_renderer() {
    let segments = vec![
        Segment::Pre(String::new()),
        Segment::Normal(" a ".to_string()),
        Segment::Pre(String::new()),
        Segment::Normal("b".to_string()),
    ];

    let mut canvas = Canvas::new();
    for segment in &segments {
        canvas.write_inline(&segment.white_space(), segment.text());
    }

    let mut line = Line::new();
    line.content = LineContent::from(segments);

    assert_eq!(canvas.get_text(), "a b");
    assert_eq!(line.get_text(), "a b");
}

#[test]
fn canvas_and_line_preserve_preformatted_text() {
    let pre = "  keep \t this\n  as is";

    let mut canvas = Canvas::new();
    canvas.write_block(&WhiteSpace::Pre, pre);

    let mut line = Line::new();
    line.content = LineContent::from(vec![Segment::Pre(pre.to_string())]);

    assert_eq!(canvas.get_text(), pre);
    assert_eq!(line.get_text(), pre);
}

#[test]
fn rendered_line_survives_canvas_as_block() {
    let mut line = Line::indented(4, "1. ").unwrap();
    line.content = LineContent::from_marked("see\0 a\nb \0below");

    let mut canvas = Canvas::new();
    canvas.write_inline(&WhiteSpace::Normal, "Steps:");
    canvas.write_block(&WhiteSpace::Pre, &line.get_text());

    assert_eq!(canvas.get_text(), "Steps:\n 1. see  a\n    b  below");
}
