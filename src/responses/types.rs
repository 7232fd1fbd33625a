use std::fmt;

use crate::inventory::{Likert, ITEM_COUNT};

/// One respondent's answers, indexed by item number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    values: [Option<Likert>; ITEM_COUNT],
}

impl Default for Response {
    fn default() -> Self {
        Self::new()
    }
}

impl Response {
    /// A respondent with every item missing
    pub fn new() -> Self {
        Self {
            values: [None; ITEM_COUNT],
        }
    }

    /// A respondent who answered `value` on every item
    pub fn uniform(value: Likert) -> Self {
        Self {
            values: [Some(value); ITEM_COUNT],
        }
    }

    /// Value for item `item` (1-based). Unknown item numbers read as missing.
    pub fn get(&self, item: u8) -> Option<Likert> {
        Self::slot(item).and_then(|i| self.values[i])
    }

    pub fn set(&mut self, item: u8, value: Option<Likert>) {
        if let Some(i) = Self::slot(item) {
            self.values[i] = value;
        }
    }

    pub fn answered(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    fn slot(item: u8) -> Option<usize> {
        let i = usize::from(item).checked_sub(1)?;
        (i < ITEM_COUNT).then_some(i)
    }
}

/// All respondents, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseTable {
    pub rows: Vec<Response>,
}

impl ResponseTable {
    pub fn new(rows: Vec<Response>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A cell that held something other than a 1-5 response.
/// The value is treated as missing; this records where it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedCell {
    /// 1-based data row (header excluded)
    pub row: usize,
    pub column: String,
    pub raw: String,
}

impl fmt::Display for MalformedCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {}, column {}: '{}' is not a response between 1 and 5",
            self.row, self.column, self.raw
        )
    }
}

/// Result of loading a response file
#[derive(Debug, Clone, Default)]
pub struct LoadedResponses {
    pub table: ResponseTable,
    pub malformed: Vec<MalformedCell>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_response_is_all_missing() {
        let response = Response::new();
        assert_eq!(response.answered(), 0);
        assert_eq!(response.get(1), None);
        assert_eq!(response.get(100), None);
    }

    #[test]
    fn test_set_and_get() {
        let mut response = Response::new();
        response.set(42, Likert::new(4));
        assert_eq!(response.get(42), Likert::new(4));
        assert_eq!(response.answered(), 1);
    }

    #[test]
    fn test_out_of_range_items_ignored() {
        let mut response = Response::uniform(Likert::new(2).unwrap());
        response.set(0, Likert::new(5));
        response.set(101, Likert::new(5));
        assert_eq!(response.get(0), None);
        assert_eq!(response.get(101), None);
        assert_eq!(response.answered(), 100);
    }

    #[test]
    fn test_malformed_cell_display() {
        let cell = MalformedCell {
            row: 3,
            column: "q17".to_string(),
            raw: "abc".to_string(),
        };
        assert_eq!(
            cell.to_string(),
            "row 3, column q17: 'abc' is not a response between 1 and 5"
        );
    }
}
