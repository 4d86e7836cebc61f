use thiserror::Error;

/// Everything that can go wrong while handing an inquiry to the collector.
///
/// The UI collapses all variants into a single "submission failed" notice; the
/// variants exist for logging.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("form collector answered with status {status}")]
    Rejected { status: u16 },

    #[error("request could not be completed: {0}")]
    Network(String),

    #[error("inquiry could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}

impl SubmitError {
    pub fn status(&self) -> Option<u16> {
        match self {
            SubmitError::Rejected { status } => Some(*status),
            _ => None,
        }
    }
}
