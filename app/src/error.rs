use std::fmt;

#[derive(Debug)]
pub enum PlannerError {
    #[cfg(feature = "ssr")]
    Http(reqwest::Error),
    Config(String),
    ServiceUnavailable,
    InvalidResponse(String),
    /// The planner backend answered with a non-success status.
    Rejected {
        status: u16,
        message: Option<String>,
    },
}

impl PlannerError {
    /// The human-readable message carried by a rejection payload, if any.
    pub fn rejection_message(&self) -> Option<&str> {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "ssr")]
            Self::Http(e) => write!(f, "HTTP error: {e}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::ServiceUnavailable => write!(f, "Service temporarily unavailable (503)"),
            Self::InvalidResponse(msg) => write!(f, "Invalid response: {msg}"),
            Self::Rejected {
                status,
                message: Some(message),
            } => write!(f, "Request rejected (HTTP {status}): {message}"),
            Self::Rejected {
                status,
                message: None,
            } => write!(f, "Request rejected (HTTP {status})"),
        }
    }
}

impl std::error::Error for PlannerError {}

#[cfg(feature = "ssr")]
impl From<reqwest::Error> for PlannerError {
    fn from(e: reqwest::Error) -> Self {
        if e.status() == Some(reqwest::StatusCode::SERVICE_UNAVAILABLE) {
            Self::ServiceUnavailable
        } else {
            Self::Http(e)
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
