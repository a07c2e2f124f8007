use crate::report::ReportRow;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// Render rows as a grid table.
///
/// ```text
/// +------------+-------+-------------------+
/// | handler    | total | avg_response_time |
/// +============+=======+===================+
/// | /endpoint1 |     2 |             0.300 |
/// +------------+-------+-------------------+
/// ```
///
/// Columns whose cells are all numbers are right aligned. Cell text is never
/// reformatted.
pub fn render_table(headers: &[&str], rows: &[ReportRow]) -> String {
    let cells: Vec<[String; 3]> = rows.iter().map(ReportRow::cells).collect();
    let columns = headers.len().max(if cells.is_empty() { 0 } else { 3 });

    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            let header = headers.get(col).map_or(0, |h| text_width(h));
            cells
                .iter()
                .map(|row| row.get(col).map_or(0, |c| text_width(c)))
                .fold(header, usize::max)
        })
        .collect();

    let aligns: Vec<Align> = (0..columns)
        .map(|col| {
            let numeric = !cells.is_empty()
                && cells
                    .iter()
                    .all(|row| row.get(col).is_some_and(|c| c.parse::<f64>().is_ok()));
            if numeric { Align::Right } else { Align::Left }
        })
        .collect();

    let mut out = String::new();
    out.push_str(&border(&widths, '-'));

    let header_cells: Vec<&str> = (0..columns)
        .map(|col| headers.get(col).copied().unwrap_or(""))
        .collect();
    out.push_str(&line(&header_cells, &widths, &aligns));
    out.push_str(&border(&widths, '='));

    for row in &cells {
        let row_cells: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push_str(&line(&row_cells, &widths, &aligns));
        out.push_str(&border(&widths, '-'));
    }

    out
}

/// Render and write the table to `out`.
pub fn write_report<W: Write>(out: &mut W, headers: &[&str], rows: &[ReportRow]) -> io::Result<()> {
    out.write_all(render_table(headers, rows).as_bytes())?;
    out.flush()
}

fn text_width(s: &str) -> usize {
    s.chars().count()
}

fn border(widths: &[usize], fill: char) -> String {
    let mut s = String::from("+");
    for w in widths {
        s.extend(std::iter::repeat_n(fill, w + 2));
        s.push('+');
    }
    s.push('\n');
    s
}

fn line(cells: &[&str], widths: &[usize], aligns: &[Align]) -> String {
    let mut s = String::from("|");
    for ((cell, width), align) in cells.iter().zip(widths).zip(aligns) {
        let pad = width - text_width(cell);
        match align {
            Align::Left => s.push_str(&format!(" {cell}{} |", " ".repeat(pad))),
            Align::Right => s.push_str(&format!(" {}{cell} |", " ".repeat(pad))),
        }
    }
    s.push('\n');
    s
}
