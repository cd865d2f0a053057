use super::*;
use crate::document::{Document, NodeId};

fn texts(doc: &mut Document, labels: &[&str]) -> Vec<NodeId> {
    labels.iter().map(|l| doc.create_text(l).unwrap()).collect()
}

/// Cells of a horizontal box, in order.
fn h_cells(doc: &Document, container: NodeId) -> Vec<NodeId> {
    let rows = doc.children(&container);
    assert_eq!(rows.len(), 1, "horizontal box has exactly one row");
    doc.children(&rows[0])
}

/// The single cell of each row of a vertical box, in order.
fn v_cells(doc: &Document, container: NodeId) -> Vec<NodeId> {
    doc.children(&container)
        .into_iter()
        .map(|row| {
            let cells = doc.children(&row);
            assert_eq!(cells.len(), 1, "each vertical row has exactly one cell");
            cells[0]
        })
        .collect()
}

// =============================================================
// Grouping counts
// =============================================================

#[test]
fn h_box_groupings_match_inputs() {
    for (lead, trail) in [(0, 0), (1, 0), (0, 2), (2, 3)] {
        let mut doc = Document::new();
        let leading = texts(&mut doc, &vec!["l"; lead]);
        let trailing = texts(&mut doc, &vec!["t"; trail]);
        let primary = doc.create_text("p").unwrap();
        let container = h_box(&mut doc, &leading, &primary, &trailing).unwrap();
        assert_eq!(h_cells(&doc, container).len(), lead + trail + 1);
    }
}

#[test]
fn v_box_groupings_match_inputs() {
    for (lead, trail) in [(0, 0), (2, 0), (0, 1), (3, 2)] {
        let mut doc = Document::new();
        let leading = texts(&mut doc, &vec!["l"; lead]);
        let trailing = texts(&mut doc, &vec!["t"; trail]);
        let primary = doc.create_text("p").unwrap();
        let container = v_box(&mut doc, &leading, &primary, &trailing).unwrap();
        assert_eq!(doc.children(&container).len(), lead + trail + 1);
        assert_eq!(v_cells(&doc, container).len(), lead + trail + 1);
    }
}

// =============================================================
// Order and sizing
// =============================================================

#[test]
fn h_box_keeps_order_and_expands_primary() {
    let mut doc = Document::new();
    let leading = texts(&mut doc, &["a", "b"]);
    let primary = doc.create_text("P").unwrap();
    let trailing = texts(&mut doc, &["c"]);
    let container = h_box(&mut doc, &leading, &primary, &trailing).unwrap();

    let cells = h_cells(&doc, container);
    let contents: Vec<String> = cells.iter().map(|c| doc.text_content(*c)).collect();
    assert_eq!(contents, ["a", "b", "P", "c"]);

    let widths: Vec<Option<String>> = cells.iter().map(|c| doc.style(*c, "width")).collect();
    assert_eq!(widths, [None, None, Some("100%".to_owned()), None]);
}

#[test]
fn v_box_keeps_order_and_expands_primary() {
    let mut doc = Document::new();
    let leading = texts(&mut doc, &["top"]);
    let primary = doc.create_text("P").unwrap();
    let trailing = texts(&mut doc, &["b1", "b2"]);
    let container = v_box(&mut doc, &leading, &primary, &trailing).unwrap();

    let cells = v_cells(&doc, container);
    let contents: Vec<String> = cells.iter().map(|c| doc.text_content(*c)).collect();
    assert_eq!(contents, ["top", "P", "b1", "b2"]);

    let heights: Vec<Option<String>> = cells.iter().map(|c| doc.style(*c, "height")).collect();
    assert_eq!(heights, [None, Some("100%".to_owned()), None, None]);
}

#[test]
fn containers_use_table_display() {
    let mut doc = Document::new();
    let primary = doc.create_text("p").unwrap();
    let container = v_box(&mut doc, &[], &primary, &[]).unwrap();
    assert_eq!(doc.style(container, "display").as_deref(), Some("table"));
    assert_eq!(doc.style(container, "width").as_deref(), Some("100%"));
    assert_eq!(doc.style(container, "height").as_deref(), Some("100%"));

    let row = doc.children(&container)[0];
    assert_eq!(doc.style(row, "display").as_deref(), Some("table-row"));
    let cell = doc.children(&row)[0];
    assert_eq!(doc.style(cell, "display").as_deref(), Some("table-cell"));
}

#[test]
fn units_are_moved_into_container() {
    let mut doc = Document::new();
    let holder = doc.create_element("div").unwrap();
    let unit = doc.create_text("u").unwrap();
    doc.append_child(&holder, &unit).unwrap();

    let container = h_box(&mut doc, &[], &unit, &[]).unwrap();
    assert!(doc.children(&holder).is_empty());
    assert_eq!(doc.text_content(container), "u");
}

#[test]
fn stack_matches_named_builders() {
    let mut doc = Document::new();
    let a = doc.create_text("a").unwrap();
    let container = stack(&mut doc, Axis::Horizontal, &[], &a, &[]).unwrap();
    assert_eq!(h_cells(&doc, container).len(), 1);
}

// =============================================================
// inset
// =============================================================

#[test]
fn inset_wraps_single_unit_with_border() {
    let mut doc = Document::new();
    let content = doc.create_element("select").unwrap();
    let frame = inset(&mut doc, &content).unwrap();
    assert_eq!(doc.children(&frame), vec![content]);
    assert_eq!(doc.style(frame, "border").as_deref(), Some("2px inset"));
    assert_eq!(doc.style(frame, "box-sizing").as_deref(), Some("border-box"));
}

#[test]
fn layout_rejects_non_element_failures() {
    let mut doc = Document::new();
    let root = doc.root();
    // The document node cannot be moved into a cell.
    assert_eq!(h_box(&mut doc, &[], &root, &[]), Err(DomError::Hierarchy));
}
