//! Plain aligned tables for terminal output.

/// Minimum column width, so short headers still leave room for values.
const MIN_WIDTH: usize = 4;

/// Render rows under `headers`, columns separated by two spaces.
///
/// Cells longer than `max_cell` characters are cut with an ellipsis.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<String>], max_cell: Option<usize>) -> String {
    if rows.is_empty() {
        return String::from("(no rows)");
    }

    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| max_cell.map_or_else(|| cell.clone(), |max| truncate(cell, max)))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain([header.chars().count(), MIN_WIDTH])
                .max()
                .unwrap_or(MIN_WIDTH)
        })
        .collect();

    let header_line = join_cells(headers.iter().map(|h| (*h).to_string()), &widths);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        lines.push(join_cells(row.into_iter(), &widths));
    }
    lines.join("\n")
}

fn join_cells(cells: impl Iterator<Item = String>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            if looks_numeric(&cell) {
                format!("{}{cell}", " ".repeat(pad))
            } else {
                format!("{cell}{}", " ".repeat(pad))
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Cut `value` to at most `max` characters, ending in `…` when shortened.
#[must_use]
pub fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = value.chars().take(max - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit())
}
