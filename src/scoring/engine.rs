use super::reversal::apply_reversal;
use crate::inventory::{Likert, Scale, REVERSED_ITEMS};
use crate::responses::{Response, ResponseTable};

/// Per-respondent scale means. Rows follow the input order, columns follow `scales`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTable {
    pub scales: Vec<Scale>,
    pub rows: Vec<Vec<Option<f64>>>,
}

impl ScoreTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        self.scales.iter().map(|s| s.name).collect()
    }

    /// Score for respondent `row` (0-based) on the scale called `name`
    pub fn get(&self, row: usize, name: &str) -> Option<f64> {
        let col = self.scales.iter().position(|s| s.name == name)?;
        self.rows.get(row)?.get(col).copied().flatten()
    }
}

/// Arithmetic mean of the present values; `None` when nothing is present.
pub fn mean_ignoring_missing<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<Likert>>,
{
    let (sum, count) = values
        .into_iter()
        .flatten()
        .fold((0.0, 0u32), |(sum, count), v| (sum + f64::from(v), count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / f64::from(count))
    }
}

/// Score one (already reversed) respondent on one scale
pub fn scale_score(response: &Response, scale: &Scale) -> Option<f64> {
    mean_ignoring_missing(scale.items.iter().map(|&item| response.get(item)))
}

/// Average each scale's items for every respondent.
///
/// Expects `table` to be reversal-applied already.
pub fn aggregate(table: &ResponseTable, scales: &[Scale]) -> ScoreTable {
    let rows = table
        .rows
        .iter()
        .map(|response| {
            scales
                .iter()
                .map(|scale| scale_score(response, scale))
                .collect()
        })
        .collect();

    ScoreTable {
        scales: scales.to_vec(),
        rows,
    }
}

/// Reverse-key the raw responses, then aggregate
pub fn score_responses(raw: &ResponseTable, scales: &[Scale]) -> ScoreTable {
    let reversed = apply_reversal(raw, &REVERSED_ITEMS);
    aggregate(&reversed, scales)
}
