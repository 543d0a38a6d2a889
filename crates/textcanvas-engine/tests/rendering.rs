use textcanvas_engine::{Canvas, Line, LineContent, LineError, Segment, WhiteSpace};

/// Inline fragments of one block collapse to single spaces.
#[test]
fn inline_block_collapses() {
    let mut canvas = Canvas::new();
    canvas.write_inline(&WhiteSpace::Normal, "  a   b ");
    canvas.write_inline(&WhiteSpace::Normal, "c");
    assert_eq!(canvas.get_text(), "a b c");
}

/// Whitespace after a preformatted run is collapsed on its own, never merged
/// into the run's trailing whitespace.
#[test]
fn preformatted_run_inside_normal_text() {
    let mut canvas = Canvas::new();
    canvas.write_inline(&WhiteSpace::Normal, "x  ");
    canvas.write_inline(&WhiteSpace::Pre, "  y\n  z  ");
    canvas.write_inline(&WhiteSpace::Normal, "  w");
    assert_eq!(canvas.get_text(), "x   y\n  z   w");
}

#[test]
fn all_preformatted_block_is_unchanged() {
    let text = "\t a  b\n\n c";
    let mut canvas = Canvas::new();
    canvas.write_block(&WhiteSpace::Pre, text);
    canvas.flush_inline();
    assert_eq!(canvas.blocks(), [text]);
}

#[test]
fn list_line_with_margin() {
    let mut line = Line::indented(4, "-").unwrap();
    line.margin_before = 1;
    line.content = LineContent::from_marked("alpha   beta");
    assert_eq!(line.get_text(), "\n   -alpha beta");
}

/// Empty preformatted segments contribute nothing, not an extra space.
#[test]
fn line_from_explicit_segments() {
    let mut line = Line::indented(2, "").unwrap();
    line.content.push_normal(" a ");
    line.content.push(Segment::Pre("b\nc".into()));
    line.content.push_pre("");
    line.content.push_normal("d");
    assert_eq!(line.get_text(), "  a b\n  c d");
}

#[test]
fn bullet_longer_than_padding_is_a_contract_violation() {
    let err = Line::indented(2, "iv. ").unwrap_err();
    assert!(matches!(err, LineError::BulletWiderThanPadding { .. }));
}
