use std::fmt;

/// Errors that can occur in the param-guard crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A request failed a parameter requirement
    Violation(Violation),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Violation(v) => write!(f, "Requirement violation: {}", v),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Violation(v) => Some(v),
        }
    }
}

impl From<Violation> for Error {
    fn from(v: Violation) -> Self {
        Error::Violation(v)
    }
}

/// A failed parameter requirement, with details about what failed.
///
/// The `message` is what the client sees in the body of the default
/// error response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The kind of violation that occurred
    pub kind: ViolationKind,
    /// Human-readable message naming the failing parameters
    pub message: String,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns the message sent back to the client.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for Violation {}

/// The kind of requirement violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// Required parameters are absent from the query
    MissingParams {
        /// The names that were not present
        names: Vec<String>,
    },
    /// None of a set of alternative parameters is present
    NoneOfParams {
        /// Every candidate name
        names: Vec<String>,
    },
    /// Parameters are present (or absent) with a value their check rejects
    InvalidValue {
        /// The names whose check failed
        names: Vec<String>,
    },
    /// Raised by a user-supplied validator
    Custom,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::MissingParams { names } => {
                write!(f, "Missing params [{}]", names.join(","))
            }
            ViolationKind::NoneOfParams { names } => {
                write!(f, "None of params [{}]", names.join(","))
            }
            ViolationKind::InvalidValue { names } => {
                write!(f, "Invalid value for [{}]", names.join(","))
            }
            ViolationKind::Custom => write!(f, "Custom"),
        }
    }
}
