use crate::responses::{Response, ResponseTable};

/// Reverse-key the listed items of one respondent
pub fn reverse_response(response: &Response, reversed_items: &[u8]) -> Response {
    let mut out = response.clone();
    for &item in reversed_items {
        out.set(item, response.get(item).map(|v| v.reversed()));
    }
    out
}

/// Return a copy of `table` with every item in `reversed_items` flipped.
///
/// Missing values stay missing and unlisted items pass through untouched.
/// Apply exactly once before aggregation: a second pass undoes the first.
pub fn apply_reversal(table: &ResponseTable, reversed_items: &[u8]) -> ResponseTable {
    ResponseTable::new(
        table
            .rows
            .iter()
            .map(|row| reverse_response(row, reversed_items))
            .collect(),
    )
}
