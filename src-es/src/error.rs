use thiserror::Error;

/// Errors surfaced by the evolution strategy optimizers.
///
/// Configuration variants are raised eagerly, before the first iteration.
/// `Evaluation` propagates unchanged from the objective and aborts the run;
/// there is no partial-result recovery.
#[derive(Debug, Error)]
pub enum EsError {
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("unknown test function: {0}")]
    UnknownFunction(String),

    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("objective evaluation failed: {0}")]
    Evaluation(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl EsError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        EsError::InvalidParameter { name, reason: reason.into() }
    }
}
