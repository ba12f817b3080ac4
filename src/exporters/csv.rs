use crate::config;
use crate::report::ReportMatrix;
use anyhow::Result;

/// Converter for a ReportMatrix to CSV format
pub struct CsvConverter;

impl CsvConverter {
    /// Render the matrix as CSV: one header row with the interval columns
    /// and the total column, then one row per metric. Each row's
    /// presentation rule is applied to its cells and total at this point
    /// only; the matrix itself keeps raw values. Missing cells render as
    /// empty fields.
    pub fn to_csv(matrix: &ReportMatrix) -> Result<String> {
        let config = config::get()?;
        let mut csv_output = String::new();

        csv_output.push_str("Metric Name");
        for column in matrix.columns() {
            csv_output.push(',');
            csv_output.push_str(&escape_csv(column.as_str()));
        }
        csv_output.push(',');
        csv_output.push_str(&escape_csv(&config.total_label));
        csv_output.push('\n');

        for row in matrix.rows() {
            let presentation = row.presentation();
            csv_output.push_str(&escape_csv(&row.key().to_string()));
            for value in row.values() {
                csv_output.push(',');
                if let Some(value) = value {
                    csv_output
                        .push_str(&escape_csv(&presentation.render(*value, config.decimals)));
                }
            }
            csv_output.push(',');
            if let Some(total) = row.total() {
                csv_output.push_str(&escape_csv(&presentation.render(total, config.decimals)));
            }
            csv_output.push('\n');
        }

        Ok(csv_output)
    }
}

/// Escape quotes and wrap in quotes if needed
fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
