/// Error types for the path geometry module.
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    /// Error reading or writing a point file
    #[error("error reading or writing file")]
    IoError(#[from] std::io::Error),

    /// The point series text could not be parsed
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// A zero magnitude vector was normalized
    #[error("Cannot normalize a zero magnitude vector")]
    DegenerateVector,

    /// The path is too short for the requested estimate
    #[error("At least {required} points are required, got {actual}")]
    InsufficientPoints {
        /// minimum number of points for the operation
        required: usize,
        /// number of points supplied
        actual: usize,
    },
}
