use anyhow::Result;
use clap::{Parser, ValueEnum};
use hifitime::Epoch;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "connect-report", version)]
#[command(about = "Pivoted contact-center metric reports from raw analytics API output")]
pub struct Cli {
    /// Path to a JSON file with the raw metric data response
    pub input: PathBuf,

    /// Output file path, defaults to report_<today>.<format> in the
    /// current directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Jsonl,
}

impl OutputFormat {
    pub fn extension(&self) -> &str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Jsonl => "jsonl",
        }
    }
}

impl Cli {
    /// Explicit output path if given, otherwise a dated default file name.
    pub fn output_path(&self) -> Result<PathBuf> {
        if let Some(output) = &self.output {
            return Ok(output.clone());
        }
        let (year, month, day, ..) = Epoch::now()?.to_gregorian_utc();
        Ok(PathBuf::from(format!(
            "report_{:04}-{:02}-{:02}.{}",
            year,
            month,
            day,
            self.format.extension()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_output_path_wins() {
        let cli = Cli::parse_from(["connect-report", "input.json", "-o", "out.csv"]);
        assert_eq!(cli.output_path().unwrap(), PathBuf::from("out.csv"));
    }

    #[test]
    fn test_default_output_path_follows_format() {
        let cli = Cli::parse_from(["connect-report", "input.json", "--format", "jsonl"]);
        let path = cli.output_path().unwrap();
        let name = path.to_string_lossy();
        assert!(name.starts_with("report_"));
        assert!(name.ends_with(".jsonl"));
    }
}
