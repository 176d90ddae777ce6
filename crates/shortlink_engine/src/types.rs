use std::fmt;

/// Settled result of one submission, ready to hand to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenOutcome {
    pub short_url: String,
    pub short_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// Every submission settles with exactly one of these.
    SubmitCompleted {
        result: Result<ShortenOutcome, SubmitError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitError {
    pub kind: FailureKind,
    /// Display text; all failure kinds converge on this one message.
    pub message: String,
}

impl SubmitError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SubmitError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// No response received: connect, DNS, or aborted transfer.
    Network,
    /// A response arrived with a non-2xx status.
    HttpStatus(u16),
    /// A 2xx response whose body did not parse as the expected JSON.
    MalformedBody,
    /// A 2xx response in which the service reported failure.
    Rejected,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Network => write!(f, "network error"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::MalformedBody => write!(f, "malformed response body"),
            FailureKind::Rejected => write!(f, "rejected by service"),
        }
    }
}
