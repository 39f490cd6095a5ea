use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a gate event.
///
/// Records written by other tools may carry anything in the `status`
/// column; those are kept verbatim as `Unknown` so they survive a
/// round trip and are simply ignored by the pairer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    In,
    Out,
    Unknown(String),
}

impl Status {
    /// Strict parse used for operator input (`IN` / `OUT`, any case).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "IN" => Some(Self::In),
            "OUT" => Some(Self::Out),
            _ => None,
        }
    }

    /// Convert DB string → enum. Never fails.
    pub fn from_db_str(s: &str) -> Self {
        match s {
            "IN" => Self::In,
            "OUT" => Self::Out,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Convert enum → DB string
    pub fn as_str(&self) -> &str {
        match self {
            Status::In => "IN",
            Status::Out => "OUT",
            Status::Unknown(raw) => raw,
        }
    }

    /// Human label used in the activity feed.
    pub fn label(&self) -> &str {
        match self {
            Status::In => "Entry",
            Status::Out => "Exit",
            Status::Unknown(raw) => raw,
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, Status::In)
    }

    pub fn is_out(&self) -> bool {
        matches!(self, Status::Out)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Status {
    fn from(s: String) -> Self {
        Status::from_db_str(&s)
    }
}

impl From<Status> for String {
    fn from(s: Status) -> Self {
        s.as_str().to_string()
    }
}
