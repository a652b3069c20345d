use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::DomainError;

/// Stable, opaque request identifier issued by the request store.
///
/// The client never derives an id from list position; it only echoes back
/// what the store handed out. Older stores emit integer ids, which are kept
/// as their decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawRequestId", into = "String")]
pub struct RequestId(String);

impl RequestId {
    /// Issue a fresh identifier (store side).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_id("request id cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RequestId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<RequestId> for String {
    fn from(value: RequestId) -> Self {
        value.0
    }
}

impl From<u64> for RequestId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRequestId {
    Text(String),
    Number(i64),
}

impl TryFrom<RawRequestId> for RequestId {
    type Error = DomainError;

    fn try_from(raw: RawRequestId) -> Result<Self, Self::Error> {
        match raw {
            RawRequestId::Text(text) => Self::new(text),
            RawRequestId::Number(number) => Ok(Self(number.to_string())),
        }
    }
}
