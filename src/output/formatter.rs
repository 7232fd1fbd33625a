use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::scoring::ScoreTable;

const SEPARATOR: &str = "  ";
/// Widest rendered cell: "5.00"
const CELL_WIDTH: usize = 4;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Format a mean for display: two decimals, or "-" when missing
pub fn format_score(score: Option<f64>) -> String {
    match score {
        Some(v) => format!("{:.2}", v),
        None => "-".to_string(),
    }
}

/// Format the score table for the terminal, sized to the current terminal
pub fn format_score_table(table: &ScoreTable, use_colors: bool) -> String {
    render_score_table(table, use_colors, get_terminal_width())
}

/// Format the score table with columns: Index, then one per scale.
///
/// Full scale names are used as headers when the table fits in `max_width`
/// (or `max_width` is None, e.g. a pipe); otherwise the abbreviations.
pub fn render_score_table(table: &ScoreTable, use_colors: bool, max_width: Option<usize>) -> String {
    if table.is_empty() {
        return "No responses found.".to_string();
    }

    let index_width = table.len().to_string().len() + 1;
    let full: Vec<&str> = table.scales.iter().map(|s| s.name).collect();
    let short: Vec<&str> = table.scales.iter().map(|s| s.abbreviation).collect();

    let headers = match max_width {
        Some(width) if table_width(index_width, &full) > width => short,
        _ => full,
    };
    let widths: Vec<usize> = headers.iter().map(|h| h.len().max(CELL_WIDTH)).collect();

    let mut lines = Vec::with_capacity(table.len() + 2);

    let header_cells: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:>width$}", h, width = w))
        .collect();
    let header = format!(
        "{:>width$}{}{}",
        "#",
        SEPARATOR,
        header_cells.join(SEPARATOR),
        width = index_width
    );
    if use_colors {
        lines.push(header.bold().to_string());
    } else {
        lines.push(header);
    }

    for (idx, row) in table.rows.iter().enumerate() {
        // 1-based index, right-aligned with trailing dot
        let index_str = format!("{:>width$}", format!("{}.", idx + 1), width = index_width);
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(score, w)| {
                let padded = format!("{:>width$}", format_score(*score), width = w);
                if use_colors && score.is_none() {
                    padded.dimmed().to_string()
                } else {
                    padded
                }
            })
            .collect();

        if use_colors {
            lines.push(format!("{}{}{}", index_str.dimmed(), SEPARATOR, cells.join(SEPARATOR)));
        } else {
            lines.push(format!("{}{}{}", index_str, SEPARATOR, cells.join(SEPARATOR)));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "{} respondents x {} scales",
        table.len(),
        table.scales.len()
    ));

    lines.join("\n")
}

fn table_width(index_width: usize, headers: &[&str]) -> usize {
    index_width
        + headers
            .iter()
            .map(|h| SEPARATOR.len() + h.len().max(CELL_WIDTH))
            .sum::<usize>()
}
