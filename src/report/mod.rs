pub mod json;

pub use json::{JsonReport, DEFAULT_OUTPUT_PATH};
