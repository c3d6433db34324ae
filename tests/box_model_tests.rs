mod common;

use common::fixtures::*;
use common::{TestResult, print_json};
use serde_json::json;

#[test]
fn test_border_with_inner_margin() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let content = vec![styled_text("hi", json!({ "border": true, "margin": "1" }))];
    let printed = print_json(&document(6, 5, content))?;

    assert_eq!(printed.lines(0)[..3], ["+----+", "|hi  |", "+----+"]);
    Ok(())
}

#[test]
fn test_padding_sits_outside_the_border() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let style = json!({ "border": true, "padding": "1", "margin": "1" });
    let content = vec![styled_text("hi", style), text("next")];
    let printed = print_json(&document(8, 8, content))?;

    assert_eq!(
        printed.lines(0)[..6],
        ["", " +----+", " |hi  |", " +----+", "", "next"]
    );
    Ok(())
}

#[test]
fn test_individual_border_sides() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let style = json!({
        "margin": "1 0",
        "borders": { "top": { "show": true }, "bottom": { "show": true } }
    });
    let printed = print_json(&document(5, 4, vec![styled_text("abc", style)]))?;

    assert_eq!(printed.lines(0)[..3], ["-----", "abc", "-----"]);
    Ok(())
}

#[test]
fn test_zero_width_stroke_is_not_drawn() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let style = json!({
        "margin": "1",
        "borders": { "top": { "show": true, "stroke": { "width": 0 } } }
    });
    let printed = print_json(&document(5, 4, vec![styled_text("abc", style)]))?;

    assert_eq!(printed.lines(0)[..2], ["", " abc"]);
    Ok(())
}

#[test]
fn test_text_alignment() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let content = vec![
        styled_text("ab", json!({ "alignment": "left" })),
        styled_text("ab", json!({ "alignment": "center" })),
        styled_text("ab", json!({ "alignment": "right" })),
    ];
    let printed = print_json(&document(10, 3, content))?;

    assert_eq!(printed.lines(0), vec!["ab", "    ab", "        ab"]);
    Ok(())
}

#[test]
fn test_row_alignment_moves_columns() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let content = vec![json!({
        "type": "Row",
        "style": { "alignment": "center" },
        "children": [cell("ab", 2), cell("cd", 2)]
    })];
    let printed = print_json(&document(10, 1, content))?;

    assert_eq!(printed.lines(0), vec!["   abcd"]);
    Ok(())
}

#[test]
fn test_vertical_margin_offsets_children() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let content = vec![
        styled_vertical(json!({ "margin": "1 2" }), vec![text("a"), text("b")]),
        text("c"),
    ];
    let printed = print_json(&document(10, 6, content))?;

    assert_eq!(printed.lines(0)[..5], ["", "  a", "  b", "", "c"]);
    Ok(())
}

#[test]
fn test_row_of_columns() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let left = cell("one two", 4);
    let right = json!({
        "type": "Vertical",
        "style": { "width": 5 },
        "children": [text("x"), text("y"), text("z")]
    });
    let printed = print_json(&document(9, 4, vec![row(vec![left, right]), text("end")]))?;

    assert_eq!(printed.lines(0), vec!["one x", "two y", "    z", "end"]);
    Ok(())
}

#[test]
fn test_text_width_limits_wrapping() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let printed = print_json(&document(20, 4, vec![cell("aaaa bbbb cccc", 5), text("end")]))?;

    assert_eq!(printed.lines(0), vec!["aaaa", "bbbb", "cccc", "end"]);
    Ok(())
}
