#![cfg(test)]

use crate::interface::{LayoutNode, RenderStatus};
use crate::nodes::{Record, StreamingRow, TableRow, VerticalNode};
use crate::test_utils::RecordingCanvas;
use quire_types::{Alignment, Borders, Region, Stroke, TextStyle};

fn columns() -> TableRow {
    let mut row = TableRow::new();
    row.add_text_cell("Name", TextStyle::default(), Alignment::Left, 8);
    row.add_text_cell("Qty", TextStyle::default(), Alignment::Right, 4);
    row
}

fn inventory(count: usize) -> Vec<Record> {
    (1..=count)
        .map(|i| vec![format!("item{}", i), i.to_string()])
        .collect()
}

fn table(count: usize) -> VerticalNode {
    let body = StreamingRow::new(columns(), inventory(count).into_iter());
    VerticalNode::new().with_child(columns()).with_child(body)
}

#[test]
fn test_streamed_table_spans_pages() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut canvas = RecordingCanvas::new();
    let mut node = table(5);

    // Header plus three records fill the first page.
    let first = node.render(&mut canvas, Region::new(0, 0, 12, 40)).unwrap();
    assert_eq!(first.status, RenderStatus::Incomplete);
    assert_eq!(
        canvas.texts(),
        vec!["Name", "Qty", "item1", "1", "item2", "2", "item3", "3"]
    );

    canvas.clear();
    let second = node.render(&mut canvas, Region::new(0, 0, 12, 40)).unwrap();
    assert_eq!(second.status, RenderStatus::Done);
    assert_eq!(second.height(), 20);
    assert_eq!(
        canvas.placed_texts(),
        vec![
            ("item4", 0.0, 0.0),
            ("4", 11.0, 0.0),
            ("item5", 0.0, 10.0),
            ("5", 11.0, 10.0),
        ]
    );
}

#[test]
fn test_empty_table_body() {
    let mut canvas = RecordingCanvas::new();
    let mut node = table(0);

    let outcome = node.render(&mut canvas, Region::new(0, 0, 12, 40)).unwrap();
    assert_eq!(outcome.status, RenderStatus::Done);
    assert_eq!(outcome.height(), 10);
    assert_eq!(canvas.texts(), vec!["Name", "Qty"]);
}

#[test]
fn test_each_streamed_record_draws_its_borders() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut canvas = RecordingCanvas::new();
    let mut row = columns();
    row.style_mut().border = Borders::all(Stroke::default());
    let mut node = StreamingRow::new(row, inventory(3).into_iter());

    let outcome = node.render(&mut canvas, Region::new(0, 0, 12, 100)).unwrap();
    assert_eq!(outcome.status, RenderStatus::Done);
    assert_eq!(canvas.lines().len(), 12);
    // The third record's box starts below the first two.
    assert_eq!(canvas.lines()[8].y1, 20);
}

#[test]
fn test_wrapping_cell_carries_record_to_next_page() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut canvas = RecordingCanvas::new();
    let records: Vec<Record> = vec![
        vec!["a long name".into(), "1".into()],
        vec!["b".into(), "2".into()],
    ];
    let mut node = StreamingRow::new(columns(), records.into_iter());

    let first = node.render(&mut canvas, Region::new(0, 0, 12, 10)).unwrap();
    assert_eq!(first.status, RenderStatus::Incomplete);
    assert_eq!(canvas.texts(), vec!["a long", "1"]);
    assert!(node.can_begin_render(&canvas, Region::new(0, 0, 12, 10)));

    canvas.clear();
    let second = node.render(&mut canvas, Region::new(0, 0, 12, 20)).unwrap();
    assert_eq!(second.status, RenderStatus::Done);
    assert_eq!(canvas.texts(), vec!["name", "b", "2"]);
}
