use devdom::{render_lines, render_text, Element};

#[test]
fn test_column_stacks_children() {
    let root = Element::col()
        .child(Element::text("one"))
        .child(Element::text("two"));

    assert_eq!(render_text(&root), "one\ntwo");
}

#[test]
fn test_column_gap_inserts_blank_lines() {
    let root = Element::col()
        .gap(1)
        .child(Element::text("one"))
        .child(Element::text("two"));

    assert_eq!(render_lines(&root), vec!["one", "", "two"]);
}

#[test]
fn test_row_pads_to_widest_line() {
    let left = Element::col()
        .child(Element::text("a"))
        .child(Element::text("longer"));
    let right = Element::col().child(Element::text("x"));
    let root = Element::row().gap(2).child(left).child(right);

    assert_eq!(render_lines(&root), vec!["a       x", "longer"]);
}

#[test]
fn test_nested_rows_and_columns() {
    let pane = |name: &str| Element::col().child(Element::text(name));
    let root = Element::col()
        .child(Element::text("title"))
        .child(Element::row().gap(1).child(pane("L")).child(pane("R")));

    assert_eq!(render_text(&root), "title\nL R");
}
