use flypath_geom::PathError;

/// Error types for the trajectory module.
#[derive(Debug, thiserror::Error)]
pub enum TrajectoryError {
    /// The path geometry could not be computed
    #[error("Path geometry error. {0}")]
    Path(#[from] PathError),

    /// The external engine failed to create, render, convert or save
    #[error("External engine failure. {0}")]
    ExternalEngine(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A trajectory needs at least one frame
    #[error("Invalid number of frames: {0}")]
    InvalidFrameCount(usize),

    /// Camera centers and look points are not aligned
    #[error("Got {centers} camera centers but {look_points} look points")]
    LengthMismatch {
        /// number of camera centers
        centers: usize,
        /// number of look points
        look_points: usize,
    },
}

impl TrajectoryError {
    /// Wrap an error raised by the external engine.
    pub fn engine(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::ExternalEngine(Box::new(err))
    }
}
