use thiserror::Error;

/// errors from the shell collaborators (persistence, export)
///
/// the schedule computation itself is infallible: every numeric input is
/// accepted and degenerate values flow through arithmetically
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("form state serialization failed: {0}")]
    State(#[from] serde_json::Error),

    #[error("csv export failed: {0}")]
    Export(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
