use crate::point::Point;

/// Rejection of hand-edited or corrupted coordinate text. The offending text is carried along.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum FormatError {
    #[error("Coordinate {0:?} is missing its opening '('")]
    MissingOpenBracket(String),
    #[error("Coordinate {0:?} is missing its closing ')'")]
    MissingCloseBracket(String),
    #[error("Coordinate {0:?} is missing the \", \" separator")]
    MissingSeparator(String),
    #[error("{0:?} is not a canonical integer")]
    InvalidInteger(String),
    #[error("Pattern index {0:?} appears more than once")]
    DuplicateKey(String),
    #[error("Pattern index {key} is outside the {num_patterns} patterns of this table")]
    KeyOutOfRange { key: usize, num_patterns: usize },
}

#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An [IO](std::io) Error
    #[error("Could not access file: {0}")]
    Io(#[from] std::io::Error),
    /// The blob is not a JSON object of strings.
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("Could not write image: {0}")]
    Image(#[from] ::image::ImageError),
    #[error("Invalid grid layout: spacing {spacing} must be positive and columns {columns} nonzero")]
    InvalidLayout { spacing: i32, columns: usize },
    #[error("Grid layout with origin {origin} places markers outside the i32 range")]
    LayoutOverflow { origin: Point },
    #[error("Image of {width}x{height} pixels is empty or larger than {max}x{max}")]
    InvalidImageSize { width: u64, height: u64, max: u32 },
}
