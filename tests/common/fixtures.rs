use serde_json::{Value, json};

/// A document on pages of `width` x `height` characters without margins
pub fn document(width: i32, height: i32, content: Vec<Value>) -> Value {
    json!({
        "page": {
            "size": { "width": width, "height": height },
            "margins": "0"
        },
        "content": content
    })
}

/// A document with page margins given in shorthand
pub fn document_with_margins(width: i32, height: i32, margins: &str, content: Vec<Value>) -> Value {
    json!({
        "page": {
            "size": { "width": width, "height": height },
            "margins": margins
        },
        "content": content
    })
}

/// Create a simple text node
pub fn text(text: &str) -> Value {
    json!({ "type": "Text", "text": text })
}

/// Create a text node with a style
pub fn styled_text(text: &str, style: Value) -> Value {
    json!({ "type": "Text", "text": text, "style": style })
}

/// A text node of fixed width, for use inside rows
pub fn cell(text: &str, width: i32) -> Value {
    json!({ "type": "Text", "text": text, "style": { "width": width } })
}

pub fn vertical(children: Vec<Value>) -> Value {
    json!({ "type": "Vertical", "children": children })
}

pub fn styled_vertical(style: Value, children: Vec<Value>) -> Value {
    json!({ "type": "Vertical", "style": style, "children": children })
}

pub fn row(children: Vec<Value>) -> Value {
    json!({ "type": "Row", "children": children })
}

/// A table from `(header, width)` columns and its records
pub fn table(columns: &[(&str, i32)], records: Vec<Vec<String>>) -> Value {
    let columns: Vec<Value> = columns
        .iter()
        .map(|(header, width)| json!({ "header": header, "width": width }))
        .collect();
    json!({ "type": "Table", "columns": columns, "records": records })
}

/// `count` numbered lines, one per logical line
pub fn numbered_lines(count: usize) -> String {
    (1..=count)
        .map(|i| format!("line {}", i))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `count` two-field records: a name and its index
pub fn records(count: usize) -> Vec<Vec<String>> {
    (1..=count)
        .map(|i| vec![format!("item {}", i), i.to_string()])
        .collect()
}
