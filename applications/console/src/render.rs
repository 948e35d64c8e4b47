/// Plain-text table rendering for list-view rows
use roster_listview::Row;

const HEADERS: [&str; 4] = ["ID", "NAME", "USERNAME", "EMAIL"];

/// Format the rows as a fixed-width text table, one line per row, in
/// the order given. Pure function of its input.
pub fn format_table(rows: &[Row]) -> String {
    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.len()).collect();
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|row| {
            [
                row.id.to_string(),
                row.name.clone(),
                row.username.clone(),
                row.email.clone(),
            ]
        })
        .collect();

    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    for (i, header) in HEADERS.iter().enumerate() {
        out.push_str(&format!("{:<width$}  ", header, width = widths[i]));
    }
    out.push('\n');

    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            out.push_str(&format!("{:<width$}  ", cell, width = widths[i]));
        }
        out.push('\n');
    }

    if rows.is_empty() {
        out.push_str("(no users)\n");
    }

    out
}
