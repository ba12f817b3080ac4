use crate::datamodel::{AggregatedCell, IntervalLabel, MetricKey, MetricSpec, Presentation};
use crate::error::ReportError;
use std::collections::HashMap;

/// One pivoted row: a metric, its per-interval values aligned with the
/// matrix columns, and the spec governing totals and rendering.
#[derive(Debug, Clone)]
pub struct ReportRow {
    key: MetricKey,
    spec: MetricSpec,
    values: Vec<Option<f64>>,
}

impl ReportRow {
    pub fn key(&self) -> &MetricKey {
        &self.key
    }

    pub fn presentation(&self) -> Presentation {
        self.spec.presentation
    }

    /// Raw cell values aligned with `ReportMatrix::columns`. `None` means
    /// the metric had no data for that interval.
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Total over the row's non-empty cells, using the metric's total rule.
    /// Empty cells are excluded, never counted as zero.
    pub fn total(&self) -> Option<f64> {
        let present: Vec<f64> = self.values.iter().filter_map(|v| *v).collect();
        self.spec.total_rule.apply(&present)
    }
}

/// Metric-by-interval pivot of the aggregated cells.
///
/// Rows keep the order metrics first appeared in, columns the order
/// intervals first appeared in. The matrix stores raw values only;
/// presentation is applied by the renderer, per row, at output time.
#[derive(Debug, Clone)]
pub struct ReportMatrix {
    columns: Vec<IntervalLabel>,
    rows: Vec<ReportRow>,
}

impl ReportMatrix {
    pub fn from_cells(cells: Vec<AggregatedCell>) -> Result<ReportMatrix, ReportError> {
        let mut column_index: HashMap<IntervalLabel, usize> = HashMap::new();
        let mut columns: Vec<IntervalLabel> = Vec::new();
        for cell in &cells {
            if !column_index.contains_key(&cell.interval) {
                column_index.insert(cell.interval.clone(), columns.len());
                columns.push(cell.interval.clone());
            }
        }

        let mut row_index: HashMap<MetricKey, usize> = HashMap::new();
        let mut rows: Vec<ReportRow> = Vec::new();
        for cell in cells {
            let position = match row_index.get(&cell.key) {
                Some(&position) => position,
                None => {
                    let position = rows.len();
                    row_index.insert(cell.key.clone(), position);
                    rows.push(ReportRow {
                        spec: MetricSpec::lookup(&cell.key),
                        key: cell.key.clone(),
                        values: vec![None; columns.len()],
                    });
                    position
                }
            };
            let row = &mut rows[position];
            let column = column_index[&cell.interval];
            if row.values[column].is_some() {
                return Err(ReportError::duplicate_cell(
                    cell.key.to_string(),
                    cell.interval.as_str(),
                ));
            }
            row.values[column] = Some(cell.value);
        }

        tracing::debug!(
            rows = rows.len(),
            columns = columns.len(),
            "built report matrix"
        );
        Ok(ReportMatrix { columns, rows })
    }

    pub fn columns(&self) -> &[IntervalLabel] {
        &self.columns
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
