use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    /// A constraint named by the scheduling engine rejected an operation
    /// (swap/reassign validation). The constraint name is one of the
    /// identifiers used throughout the eligibility filter, e.g.
    /// "rest-rule", "cooldown", "unavailability", "office-day",
    /// "same-day-distinctness", "weekly-distinctness".
    #[error("Constraint violated ({constraint}): {detail}")]
    ConstraintViolation { constraint: String, detail: String },

    /// Another generation already holds the advisory lock for this
    /// team/window; the caller may retry.
    #[error("Conflict: {0}")]
    Conflict(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
