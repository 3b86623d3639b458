use braille_core::{BrailleError, ParseMethodError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid character limit: {0} (must be greater than 0)")]
    InvalidLimit(u64),

    #[error("Empty image: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error(transparent)]
    Method(#[from] ParseMethodError),

    #[error(transparent)]
    Braille(#[from] BrailleError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_error_invalid_limit() {
        let error = ConvertError::InvalidLimit(0);
        assert_eq!(
            error.to_string(),
            "Invalid character limit: 0 (must be greater than 0)"
        );
    }

    #[test]
    fn test_convert_error_config() {
        let error = ConvertError::Config("bad yaml".to_string());
        assert_eq!(error.to_string(), "Config error: bad yaml");
    }

    #[test]
    fn test_convert_error_empty_image() {
        let error = ConvertError::EmptyImage {
            width: 0,
            height: 12,
        };
        assert_eq!(error.to_string(), "Empty image: 0x12");
    }

    #[test]
    fn test_convert_error_from_braille_error() {
        let error: ConvertError = BrailleError::InvalidTolerance { tolerance: 2.0 }.into();
        assert!(matches!(error, ConvertError::Braille(_)));
        assert_eq!(
            error.to_string(),
            "tolerance 2 outside of range [0.0, 1.0]"
        );
    }

    #[test]
    fn test_convert_error_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.png");
        let error: ConvertError = io.into();
        match error {
            ConvertError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_convert_error_from_parse_error() {
        let error: ConvertError = "sepia".parse::<braille_core::ColorMethod>().unwrap_err().into();
        assert!(error.to_string().starts_with("unknown color method \"sepia\""));
    }
}
