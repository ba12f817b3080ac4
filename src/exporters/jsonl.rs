use crate::config;
use crate::report::ReportMatrix;
use anyhow::Result;
use serde_json::json;

/// Converter for a ReportMatrix to JSON Lines format
pub struct JsonlConverter;

impl JsonlConverter {
    /// Convert the matrix to JSON Lines (one JSON object per metric row).
    /// Cell values are rendered with the row's presentation rule; the raw
    /// total is kept alongside its rendered form so consumers can keep
    /// computing without re-parsing formatted strings.
    pub fn to_jsonl(matrix: &ReportMatrix) -> Result<String> {
        let config = config::get()?;
        let mut jsonl_output = String::new();

        for row in matrix.rows() {
            let presentation = row.presentation();
            let mut values = serde_json::Map::new();
            for (column, value) in matrix.columns().iter().zip(row.values()) {
                let rendered = match value {
                    Some(value) => json!(presentation.render(*value, config.decimals)),
                    None => serde_json::Value::Null,
                };
                values.insert(column.as_str().to_string(), rendered);
            }
            let total = row.total();
            let line = json!({
                "metric": row.key().to_string(),
                "values": values,
                "total": total,
                "total_rendered": total.map(|total| presentation.render(total, config.decimals)),
            });
            jsonl_output.push_str(&line.to_string());
            jsonl_output.push('\n');
        }

        Ok(jsonl_output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datamodel::{AggregatedCell, IntervalLabel, MetricKey};

    fn cell(base: &str, interval: &str, value: f64) -> AggregatedCell {
        AggregatedCell::new(MetricKey::new(base), IntervalLabel::new(interval), value)
    }

    #[test]
    fn test_one_line_per_metric() {
        crate::config::load_configuration_for_tests().unwrap();
        let matrix = ReportMatrix::from_cells(vec![
            cell("SERVICE_LEVEL", "I1", 80.0),
            cell("CONTACTS_ABANDONED", "I1", 3.0),
        ])
        .unwrap();

        let jsonl_output = JsonlConverter::to_jsonl(&matrix).unwrap();
        assert_eq!(jsonl_output.lines().count(), 2);

        let first: serde_json::Value = serde_json::from_str(jsonl_output.lines().next().unwrap()).unwrap();
        assert_eq!(first["metric"], "SERVICE_LEVEL");
        assert_eq!(first["values"]["I1"], "80.00%");
        assert_eq!(first["total"], 80.0);
        assert_eq!(first["total_rendered"], "80.00%");
    }

    #[test]
    fn test_missing_cell_is_null() {
        crate::config::load_configuration_for_tests().unwrap();
        let matrix = ReportMatrix::from_cells(vec![
            cell("SERVICE_LEVEL", "I1", 80.0),
            cell("CONTACTS_ABANDONED", "I1", 3.0),
            cell("CONTACTS_ABANDONED", "I2", 5.0),
        ])
        .unwrap();

        let jsonl_output = JsonlConverter::to_jsonl(&matrix).unwrap();
        let first: serde_json::Value = serde_json::from_str(jsonl_output.lines().next().unwrap()).unwrap();
        assert_eq!(first["metric"], "SERVICE_LEVEL");
        assert!(first["values"]["I2"].is_null());
        // Total computed from the raw present values, not the rendered ones
        assert_eq!(first["total"], 80.0);
    }
}
