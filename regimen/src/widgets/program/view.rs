//! Plain-text rendering of a program.

use std::fmt::Write as _;

use super::ProgramWidget;
use super::reducer::ProgramCtx;

/// Render every block and its visible rows as an indented outline.
///
/// Rows are indented by `indent` spaces per nesting level. Collapsed rows
/// that hide children are marked with `+`, expanded ones with `-`.
pub fn outline(widget: &ProgramWidget, ctx: &ProgramCtx, indent: usize) -> String {
    let mut out = String::new();
    for block in widget.blocks() {
        let _ = writeln!(out, "{}", block.name());
        for row in widget.rows(block.id(), ctx) {
            let marker = match (row.collapsible, row.collapsed) {
                (true, true) => "+ ",
                (true, false) => "- ",
                (false, _) => "",
            };
            let pad = " ".repeat(indent * (row.depth + 1));
            let _ = writeln!(out, "{pad}{marker}{}", row.label);
        }
    }
    out
}
