pub mod csv;
pub mod jsonl;

pub use csv::CsvConverter;
pub use jsonl::JsonlConverter;
