#![warn(clippy::pedantic)]

pub mod config;
pub mod driver;
pub mod error;
pub mod render_csv;
pub mod render_json;
pub mod sink;

pub use config::{DriverConfig, OutputFormat};
pub use driver::run;
pub use error::{DriverError, FormatError};
pub use render_csv::CsvRenderer;
pub use render_json::JsonRenderer;
pub use sink::Sink;
