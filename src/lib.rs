#![forbid(unsafe_code)]

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod datamodel;
pub mod error;
pub mod exporters;
pub mod parsing;
pub mod report;
