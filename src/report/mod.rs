pub mod matrix;

pub use matrix::{ReportMatrix, ReportRow};
