use thiserror::Error;

pub type SolverResult<T> = Result<T, SolverError>;

#[derive(Error, Debug)]
pub enum SolverError {
    /// A configured quantity is out of range, or would divide by zero while
    /// building the initial state.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// A caller-supplied time step exceeds the stability bound derived from
    /// the grid and the physical constants.
    #[error("time step {dt} exceeds the stability bound {max_dt}")]
    Unstable { dt: f64, max_dt: f64 },

    /// The recorded buffer is constant, so it cannot be stretched to [-1, 1].
    #[error("recording is constant and cannot be normalized")]
    DegenerateRecording,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SolverError {
    pub fn config(message: impl Into<String>) -> Self {
        SolverError::InvalidConfig {
            message: message.into(),
        }
    }
}
