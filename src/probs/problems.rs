use serde::{Deserialize, Serialize};
use std::fmt;

/// Problem type of a validation failure, from the ACME error namespace.
/// The tag is what clients match on; the detail text is for humans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProblemType {
    #[serde(rename = "urn:acme:error:connection")]
    Connection,
}

impl ProblemType {
    /// Convert a [`ProblemType`] to its URN.
    pub fn to_str(&self) -> &'static str {
        match self {
            ProblemType::Connection => "urn:acme:error:connection",
        }
    }
}

impl fmt::Display for ProblemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

/// A validation failure ready to be handed to the problem reporting
/// layer. Built by plain field assignment, no validation happens here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub problem_type: ProblemType,
    pub detail: String,
}

impl ProblemDetails {
    pub fn new(problem_type: ProblemType, detail: impl Into<String>) -> Self {
        ProblemDetails { problem_type, detail: detail.into() }
    }

    pub fn connection(detail: impl Into<String>) -> Self {
        ProblemDetails::new(ProblemType::Connection, detail)
    }
}

impl fmt::Display for ProblemDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} :: {}", self.problem_type, self.detail)
    }
}
