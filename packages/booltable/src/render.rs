use std::fmt::Write;

use crate::table::TruthTable;

fn bit(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

pub fn markdown(table: &TruthTable) -> String {
    let mut output = String::new();

    for label in &table.header {
        let _ = write!(output, "|{label}");
    }
    output.push_str("|\n");

    for _ in &table.header {
        output.push_str("|:-:");
    }
    output.push_str("|\n");

    for row in &table.rows {
        for &value in row {
            let _ = write!(output, "|{}", bit(value));
        }
        output.push_str("|\n");
    }

    output
}

/// Renders the table as HTML markup, one `true`/`false` class per cell.
pub fn html(table: &TruthTable) -> String {
    let mut output = String::from("<table>");

    output.push_str("<tr>");
    for label in &table.header {
        let _ = write!(output, "<th>{}</th>", escape(label));
    }
    output.push_str("</tr>");

    for row in &table.rows {
        output.push_str("<tr>");
        for &value in row {
            let _ = write!(output, "<td class='{value}'>{}</td>", bit(value));
        }
        output.push_str("</tr>");
    }

    output.push_str("</table>");
    output
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
