//! Spreadsheet to markdown tables

use crate::extract::Sheet;

/// Render sheets as `## Sheet: <name>` sections, each holding one table.
///
/// The first non-blank line of a sheet is the header; blank lines are
/// skipped. A sheet with no content renders as its heading alone.
pub fn sheets_to_markdown(sheets: &[Sheet]) -> String {
    let mut markdown = String::new();

    for sheet in sheets {
        markdown.push_str(&format!("## Sheet: {}\n\n", sheet.name));

        let mut rows = sheet
            .csv
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(split_row);

        if let Some(header) = rows.next() {
            push_row(&mut markdown, &header);
            let separator = vec!["---".to_string(); header.len()];
            push_row(&mut markdown, &separator);
            for row in rows {
                push_row(&mut markdown, &row);
            }
        }
        markdown.push('\n');
    }

    markdown
}

fn push_row(markdown: &mut String, cells: &[String]) {
    markdown.push_str(&format!("| {} |\n", cells.join(" | ")));
}

/// Split one comma-separated line into trimmed cells, honouring quotes.
pub(crate) fn split_row(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if quoted && chars.peek() == Some(&'"') => {
                cell.push('"');
                chars.next();
            }
            '"' => quoted = !quoted,
            ',' if !quoted => cells.push(std::mem::take(&mut cell)),
            _ => cell.push(c),
        }
    }
    cells.push(cell);

    cells
        .into_iter()
        .map(|c| c.trim().replace('|', "\\|"))
        .collect()
}
