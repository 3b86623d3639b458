pub mod pipeline;

pub use pipeline::{ConversionPipeline, ConversionResult};
