pub mod budget;
pub mod decode;

pub use budget::{char_cost, fit_dimensions};
pub use decode::DecodedImage;
