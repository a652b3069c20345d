//! Request entity - An approval item owned by the request store

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{DomainError, RequestId};

/// Lifecycle status of a request as recorded by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Awaiting an operator decision
    #[default]
    Pending,
    Accepted,
    Denied,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Denied => "denied",
        }
    }

    /// The decision this status records, if any
    pub fn decision(&self) -> Option<Decision> {
        match self {
            Self::Pending => None,
            Self::Accepted => Some(Decision::Accepted),
            Self::Denied => Some(Decision::Denied),
        }
    }

    pub fn is_decided(&self) -> bool {
        self.decision().is_some()
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "denied" => Ok(Self::Denied),
            other => Err(DomainError::parse(format!("Unknown request status: {}", other))),
        }
    }
}

/// Operator verdict on a pending request.
///
/// Serialized as the status it produces (`"accepted"` / `"denied"`), which is
/// both the update body value and the cached value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Accepted,
    Denied,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        self.status().as_str()
    }

    pub fn status(&self) -> RequestStatus {
        match self {
            Self::Accepted => RequestStatus::Accepted,
            Self::Denied => RequestStatus::Denied,
        }
    }

    /// Human-readable badge text
    pub fn label(&self) -> &'static str {
        match self {
            Self::Accepted => "Accepted",
            Self::Denied => "Denied",
        }
    }
}

impl From<Decision> for RequestStatus {
    fn from(value: Decision) -> Self {
        value.status()
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Decision {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<RequestStatus>()?.decision().ok_or_else(|| {
            DomainError::parse(format!("Not a decision: {}", s.trim()))
        })
    }
}

/// An approval request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub id: RequestId,
    pub name: String,
    /// Date as submitted; the store does not interpret it
    pub date: String,
    pub reason: String,
    pub status: RequestStatus,
}

impl Request {
    /// Create a new pending request with a freshly issued id
    pub fn new(
        name: impl Into<String>,
        date: impl Into<String>,
        reason: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Self::with_id(RequestId::generate(), name, date, reason)
    }

    pub fn with_id(
        id: RequestId,
        name: impl Into<String>,
        date: impl Into<String>,
        reason: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let date = date.into();
        let reason = reason.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("Request name cannot be empty"));
        }
        if date.trim().is_empty() {
            return Err(DomainError::validation("Request date cannot be empty"));
        }
        if reason.trim().is_empty() {
            return Err(DomainError::validation("Request reason cannot be empty"));
        }

        Ok(Self {
            id,
            name,
            date,
            reason,
            status: RequestStatus::Pending,
        })
    }

    /// Apply an operator decision.
    ///
    /// Re-applying the decision already recorded succeeds without change so
    /// that retries are safe. Returns whether the status changed.
    pub fn decide(&mut self, decision: Decision) -> Result<bool, DomainError> {
        match self.status {
            RequestStatus::Pending => {
                self.status = decision.status();
                Ok(true)
            }
            current if current == decision.status() => Ok(false),
            current => Err(DomainError::invalid_state_transition(format!(
                "request {} is already {}, cannot become {}",
                self.id, current, decision
            ))),
        }
    }
}
