pub mod config;
pub mod runner;

pub use config::{DriverConfig, ErrorPolicy, InputSource};
pub use runner::{RunSummary, open_input, run};
